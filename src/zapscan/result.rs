use crate::model::{ScanData, ScanKind};
use serde::Serialize;

/// Shown when the result screen is opened without a scan.
pub const PLACEHOLDER_DATA: &str = "---";

/// Request to open the result screen for a scan.
pub type NavigationRequest = ScanData;

/// How a scan result is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ResultView {
    /// Load the payload in an embedded web view.
    Web { uri: String },
    /// Show the payload as selectable text.
    Text { content: String },
}

impl ResultView {
    pub fn for_scan(scan: Option<&ScanData>) -> Self {
        match scan {
            Some(scan) => Self::from(scan.clone()),
            None => ResultView::Text {
                content: PLACEHOLDER_DATA.to_string(),
            },
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ResultView::Web { .. } => "Scan Result",
            ResultView::Text { .. } => "Found Text",
        }
    }
}

impl From<ScanData> for ResultView {
    fn from(scan: ScanData) -> Self {
        match scan.kind {
            ScanKind::Url => ResultView::Web { uri: scan.data },
            ScanKind::Text => ResultView::Text { content: scan.data },
        }
    }
}

/// Payload for the platform share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<&ScanData> for ShareRequest {
    fn from(scan: &ScanData) -> Self {
        Self {
            message: scan.data.clone(),
            url: (scan.kind == ScanKind::Url).then(|| scan.data.clone()),
        }
    }
}
