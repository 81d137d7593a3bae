use super::Notification;
use crate::classifier::{classify_event, BarcodeEvent, ClassifyMode};
use crate::error::{Result, ZapError};
use crate::model::{ScanData, ScanRecord};
use crate::result::NavigationRequest;
use log::debug;
use std::fmt;
use std::str::FromStr;

/// What the user wants done with a fresh scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanChoice {
    SaveOnly,
    ViewOnly,
    SaveAndView,
}

impl ScanChoice {
    pub const ALL: [ScanChoice; 3] = [
        ScanChoice::SaveOnly,
        ScanChoice::ViewOnly,
        ScanChoice::SaveAndView,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScanChoice::SaveOnly => "Save Only",
            ScanChoice::ViewOnly => "View Only",
            ScanChoice::SaveAndView => "Save & View",
        }
    }

    /// The letter that picks this choice at a prompt.
    pub fn shortcut(&self) -> char {
        match self {
            ScanChoice::SaveOnly => 's',
            ScanChoice::ViewOnly => 'v',
            ScanChoice::SaveAndView => 'b',
        }
    }

    pub fn saves(&self) -> bool {
        matches!(self, ScanChoice::SaveOnly | ScanChoice::SaveAndView)
    }

    pub fn views(&self) -> bool {
        matches!(self, ScanChoice::ViewOnly | ScanChoice::SaveAndView)
    }
}

impl fmt::Display for ScanChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScanChoice {
    type Err = ZapError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "save" => Ok(ScanChoice::SaveOnly),
            "v" | "view" => Ok(ScanChoice::ViewOnly),
            "b" | "both" => Ok(ScanChoice::SaveAndView),
            other => Err(ZapError::Api(format!("Unknown choice: {}", other))),
        }
    }
}

/// The work a choice turns into.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanPlan {
    pub save: Option<ScanData>,
    pub navigate: Option<NavigationRequest>,
}

/// Scanner screen state between camera events.
#[derive(Debug, Default)]
pub struct ScannerSession {
    mode: ClassifyMode,
    processing: bool,
    torch: bool,
    pending: Option<ScanData>,
}

impl ScannerSession {
    pub fn new(mode: ClassifyMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn torch(&self) -> bool {
        self.torch
    }

    pub fn pending(&self) -> Option<&ScanData> {
        self.pending.as_ref()
    }

    pub fn toggle_torch(&mut self) -> bool {
        self.torch = !self.torch;
        self.torch
    }

    /// Handle a detection. Returns `None` while a previous scan is in flight.
    pub fn on_barcode(&mut self, event: &BarcodeEvent) -> Option<ScanData> {
        if self.processing {
            debug!("ignoring detection while a scan is being handled");
            return None;
        }
        self.processing = true;
        let scan = classify_event(self.mode, event);
        debug!("scanned {} payload ({} bytes)", scan.kind, scan.data.len());
        self.pending = Some(scan.clone());
        Some(scan)
    }

    /// Resolve the prompt for the pending scan.
    pub fn choose(&mut self, choice: ScanChoice) -> ScanPlan {
        let Some(scan) = self.pending.take() else {
            return ScanPlan::default();
        };
        ScanPlan {
            save: choice.saves().then(|| scan.clone()),
            navigate: choice.views().then_some(scan),
        }
    }

    /// Report how a requested save went. Success re-opens the scanner.
    pub fn save_finished(&mut self, outcome: &Result<ScanRecord>) -> Option<Notification> {
        match outcome {
            Ok(_) => {
                self.processing = false;
                None
            }
            Err(e) => Some(Notification::from_error("Failed to Save", e)),
        }
    }

    /// Screen regained focus or the prompt was dismissed.
    pub fn reset(&mut self) {
        self.processing = false;
        self.torch = false;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScanKind;

    fn url_event() -> BarcodeEvent {
        BarcodeEvent::new("https://example.com", Some("url"))
    }

    #[test]
    fn gates_duplicate_detections() {
        let mut session = ScannerSession::default();
        assert!(session.on_barcode(&url_event()).is_some());
        assert!(session.is_processing());
        assert!(session.on_barcode(&url_event()).is_none());

        session.reset();
        assert!(session.on_barcode(&url_event()).is_some());
    }

    #[test]
    fn classifies_with_configured_mode() {
        let mut strict = ScannerSession::new(ClassifyMode::Strict);
        let scan = strict
            .on_barcode(&BarcodeEvent::new("nope", Some("url")))
            .unwrap();
        assert_eq!(scan.kind, ScanKind::Text);
    }

    #[test]
    fn choices_map_to_plans() {
        let mut session = ScannerSession::default();
        session.on_barcode(&url_event());
        let plan = session.choose(ScanChoice::SaveAndView);
        assert_eq!(plan.save, Some(ScanData::url("https://example.com")));
        assert_eq!(plan.navigate, Some(ScanData::url("https://example.com")));

        session.reset();
        session.on_barcode(&url_event());
        let plan = session.choose(ScanChoice::ViewOnly);
        assert_eq!(plan.save, None);
        assert!(plan.navigate.is_some());

        session.reset();
        session.on_barcode(&url_event());
        let plan = session.choose(ScanChoice::SaveOnly);
        assert!(plan.save.is_some());
        assert_eq!(plan.navigate, None);
    }

    #[test]
    fn choosing_twice_yields_nothing() {
        let mut session = ScannerSession::default();
        session.on_barcode(&url_event());
        session.choose(ScanChoice::SaveOnly);
        assert_eq!(session.choose(ScanChoice::SaveOnly), ScanPlan::default());
    }

    #[test]
    fn failed_save_notifies_and_keeps_gate_closed() {
        let mut session = ScannerSession::default();
        session.on_barcode(&url_event());
        session.choose(ScanChoice::SaveOnly);

        let failed: Result<ScanRecord> = Err(ZapError::StorageWrite("disk full".into()));
        let note = session.save_finished(&failed).unwrap();
        assert_eq!(note.title, "Failed to Save");
        assert!(note.message.contains("disk full"));
        assert!(session.is_processing());

        let ok: Result<ScanRecord> = Ok(ScanRecord::stamp(ScanData::text("x"), 1));
        assert_eq!(session.save_finished(&ok), None);
        assert!(!session.is_processing());
    }

    #[test]
    fn reset_turns_torch_off() {
        let mut session = ScannerSession::default();
        assert!(session.toggle_torch());
        session.reset();
        assert!(!session.torch());
    }

    #[test]
    fn parses_choices() {
        assert_eq!("s".parse::<ScanChoice>().unwrap(), ScanChoice::SaveOnly);
        assert_eq!("View".parse::<ScanChoice>().unwrap(), ScanChoice::ViewOnly);
        assert_eq!("b".parse::<ScanChoice>().unwrap(), ScanChoice::SaveAndView);
        assert!("x".parse::<ScanChoice>().is_err());
        for choice in ScanChoice::ALL {
            assert_eq!(choice.shortcut().to_string().parse::<ScanChoice>().unwrap(), choice);
        }
    }
}
