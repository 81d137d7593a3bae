//! # Screen State
//!
//! UI-agnostic state for the two interactive screens. They hold what a view
//! layer needs to render and react, and delegate persistence to
//! [`crate::history::HistoryRepository`].
//!
//! - [`scanner::ScannerSession`]: duplicate-detection gate, torch, and the
//!   save/view choice after a scan.
//! - [`history::HistoryScreen`]: filter, focus reload, per-row swipe
//!   controllers, and re-rendering from the list the repository wrote.

pub mod history;
pub mod scanner;

use crate::error::ZapError;

/// A blocking notice for the user, e.g. a failed write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn from_error(title: impl Into<String>, err: &ZapError) -> Self {
        Self::new(title, err.to_string())
    }
}
