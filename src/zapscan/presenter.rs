//! Derives what the history screen shows from what is stored.
//!
//! Presentation order is always recomputed from timestamps; the on-disk
//! order is never relied upon.

use crate::error::ZapError;
use crate::model::{HistoryList, ScanKind, ScanRecord};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum HistoryFilter {
    #[default]
    All,
    Url,
    Text,
}

impl HistoryFilter {
    pub const ALL: [HistoryFilter; 3] = [HistoryFilter::All, HistoryFilter::Url, HistoryFilter::Text];

    pub fn matches(&self, kind: ScanKind) -> bool {
        match self {
            HistoryFilter::All => true,
            HistoryFilter::Url => kind == ScanKind::Url,
            HistoryFilter::Text => kind == ScanKind::Text,
        }
    }
}

impl fmt::Display for HistoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HistoryFilter::All => "All",
            HistoryFilter::Url => "URL",
            HistoryFilter::Text => "Text",
        };
        f.write_str(label)
    }
}

impl FromStr for HistoryFilter {
    type Err = ZapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(HistoryFilter::All),
            "url" => Ok(HistoryFilter::Url),
            "text" => Ok(HistoryFilter::Text),
            other => Err(ZapError::Api(format!(
                "Unknown filter: {} (expected all, url or text)",
                other
            ))),
        }
    }
}

/// Records matching `filter`, most recent first.
pub fn present(list: &[ScanRecord], filter: HistoryFilter) -> HistoryList {
    let mut shown: HistoryList = list
        .iter()
        .filter(|r| filter.matches(r.kind))
        .cloned()
        .collect();
    shown.sort_unstable_by(|a, b| b.timestamp.cmp(&a.timestamp));
    shown
}

/// A presented record with its 1-based position on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub index: usize,
    pub record: ScanRecord,
}

pub fn index_records(list: HistoryList) -> Vec<DisplayRecord> {
    list.into_iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord {
            index: i + 1,
            record,
        })
        .collect()
}
