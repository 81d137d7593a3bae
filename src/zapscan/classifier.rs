//! Turns scanner output into a typed scan.
//!
//! By default the scanner's own metadata hint decides: a payload is a URL only
//! when the scanner says so. [`ClassifyMode::Strict`] additionally requires
//! the payload to be an absolute http(s) URL.

use crate::error::ZapError;
use crate::model::{ScanData, ScanKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

pub const URL_HINT: &str = "url";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifyMode {
    #[default]
    Hint,
    Strict,
}

impl fmt::Display for ClassifyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyMode::Hint => f.write_str("hint"),
            ClassifyMode::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for ClassifyMode {
    type Err = ZapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hint" => Ok(ClassifyMode::Hint),
            "strict" => Ok(ClassifyMode::Strict),
            other => Err(ZapError::Config(format!(
                "Invalid classify mode: {} (expected hint or strict)",
                other
            ))),
        }
    }
}

/// Extra metadata a scanner may attach to a detection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeExtra {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// One detection event as delivered by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeEvent {
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<BarcodeExtra>,
}

impl BarcodeEvent {
    pub fn new(data: impl Into<String>, hint: Option<&str>) -> Self {
        Self {
            data: data.into(),
            extra: hint.map(|h| BarcodeExtra {
                kind: Some(h.to_string()),
            }),
        }
    }

    pub fn hint(&self) -> Option<&str> {
        self.extra.as_ref().and_then(|e| e.kind.as_deref())
    }
}

pub fn classify(payload: &str, hint: Option<&str>) -> ScanData {
    classify_with(ClassifyMode::Hint, payload, hint)
}

pub fn classify_with(mode: ClassifyMode, payload: &str, hint: Option<&str>) -> ScanData {
    let hinted_url = hint == Some(URL_HINT);
    let is_url = match mode {
        ClassifyMode::Hint => hinted_url,
        ClassifyMode::Strict => hinted_url && is_web_url(payload),
    };
    let kind = if is_url { ScanKind::Url } else { ScanKind::Text };
    ScanData::new(kind, payload)
}

pub fn classify_event(mode: ClassifyMode, event: &BarcodeEvent) -> ScanData {
    classify_with(mode, &event.data, event.hint())
}

fn is_web_url(payload: &str) -> bool {
    Url::parse(payload.trim())
        .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
        .unwrap_or(false)
}
