use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a decoded payload was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanKind {
    Url,
    Text,
}

impl ScanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanKind::Url => "url",
            ScanKind::Text => "text",
        }
    }
}

impl fmt::Display for ScanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified scan that has not been saved yet.
///
/// This is also the payload handed to the result screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanData {
    #[serde(rename = "type")]
    pub kind: ScanKind,
    pub data: String,
}

impl ScanData {
    pub fn new(kind: ScanKind, data: impl Into<String>) -> Self {
        Self {
            kind,
            data: data.into(),
        }
    }

    pub fn url(data: impl Into<String>) -> Self {
        Self::new(ScanKind::Url, data)
    }

    pub fn text(data: impl Into<String>) -> Self {
        Self::new(ScanKind::Text, data)
    }
}

/// A saved scan. The timestamp (ms since epoch) doubles as its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    #[serde(rename = "type")]
    pub kind: ScanKind,
    pub data: String,
    pub timestamp: i64,
}

impl ScanRecord {
    pub fn stamp(scan: ScanData, timestamp: i64) -> Self {
        Self {
            kind: scan.kind,
            data: scan.data,
            timestamp,
        }
    }

    pub fn scan(&self) -> ScanData {
        ScanData::new(self.kind, self.data.clone())
    }

    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp).single()
    }
}

pub type HistoryList = Vec<ScanRecord>;

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
