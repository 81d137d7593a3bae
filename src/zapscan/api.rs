//! # API Facade
//!
//! The single entry point for zapscan operations, whatever the UI. It
//! dispatches to `commands/*.rs`, carries the configuration resolved at
//! startup, and returns structured [`CmdResult`] values. No business logic,
//! no I/O, no presentation lives here.
//!
//! `ZapScanApi<S: KeyValueStore>` is generic over storage:
//! - Production: `ZapScanApi<FileStore>`
//! - Testing: `ZapScanApi<InMemoryStore>`

use crate::classifier::{classify_event, BarcodeEvent};
use crate::commands;
use crate::config::ZapConfig;
use crate::error::Result;
use crate::model::{ScanData, ScanRecord};
use crate::presenter::HistoryFilter;
use crate::screen::scanner::ScanChoice;
use crate::store::KeyValueStore;

/// Row width used for the delete animation when no screen size is known.
pub const DEFAULT_ROW_WIDTH: f32 = 400.0;

pub struct ZapScanApi<S: KeyValueStore> {
    store: S,
    paths: commands::ZapPaths,
    config: ZapConfig,
}

impl<S: KeyValueStore> ZapScanApi<S> {
    pub fn new(store: S, paths: commands::ZapPaths, config: ZapConfig) -> Self {
        Self {
            store,
            paths,
            config,
        }
    }

    /// How the scanner would classify `event` under the current config.
    pub fn classify(&self, event: &BarcodeEvent) -> ScanData {
        classify_event(self.config.classify, event)
    }

    pub fn scan(&self, event: &BarcodeEvent, choice: Option<ScanChoice>) -> Result<CmdResult> {
        commands::scan::run(&self.store, self.config.classify, event, choice)
    }

    pub fn history(&self, filter: HistoryFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn view(&self, index: usize) -> Result<CmdResult> {
        commands::view::run(&self.store, index)
    }

    pub fn share(&self, index: usize) -> Result<CmdResult> {
        commands::share::run(&self.store, index)
    }

    /// Swipe a row by `dx` pixels; `confirm` answers the delete prompt.
    pub fn delete<F>(&self, index: usize, dx: Option<f32>, confirm: F) -> Result<CmdResult>
    where
        F: FnOnce(&ScanRecord) -> bool,
    {
        let dx = dx.unwrap_or(-DEFAULT_ROW_WIDTH);
        commands::delete::run(&self.store, index, dx, DEFAULT_ROW_WIDTH, confirm)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn settings(&self) -> &ZapConfig {
        &self.config
    }

    pub fn paths(&self) -> &commands::ZapPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, ZapPaths};
