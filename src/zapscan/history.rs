//! # History Repository
//!
//! Typed access to the scan history persisted under [`HISTORY_KEY`].
//!
//! The whole history is one JSON array, newest first. Every mutation is a
//! full read-modify-write of that key, and every mutation returns the list
//! it wrote so callers render from the stored state instead of patching
//! their own copy.
//!
//! ## Failure policy
//!
//! - [`HistoryRepository::load`] reports unreadable and malformed data as
//!   errors.
//! - [`HistoryRepository::load_or_empty`] is what screens use: those errors
//!   are logged and the history reads as empty.
//! - Mutations replace a malformed blob (with a warning) but abort on a
//!   read failure, so a transient I/O error never wipes the history.

use crate::error::{Result, ZapError};
use crate::model::{now_millis, HistoryList, ScanData, ScanRecord};
use crate::store::KeyValueStore;
use log::{debug, error, warn};

pub const HISTORY_KEY: &str = "QRScanHistory";

pub struct HistoryRepository<S: KeyValueStore> {
    store: S,
    clock: fn() -> i64,
}

impl<S: KeyValueStore> HistoryRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            clock: now_millis,
        }
    }

    /// Replace the wall clock used to stamp new records.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load(&self) -> Result<HistoryList> {
        match self.store.get_item(HISTORY_KEY)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(ZapError::CorruptData),
        }
    }

    pub fn load_or_empty(&self) -> HistoryList {
        match self.load() {
            Ok(list) => list,
            Err(e) if e.is_degradable() => {
                warn!("treating scan history as empty: {}", e);
                Vec::new()
            }
            Err(e) => {
                error!("could not load scan history: {}", e);
                Vec::new()
            }
        }
    }

    /// Prepend `record` and persist. Returns the list as written.
    pub fn save(&self, record: ScanRecord) -> Result<HistoryList> {
        let mut list = self.load_for_update()?;
        debug!("saving {} scan at {}", record.kind, record.timestamp);
        list.insert(0, record);
        self.write(&list)?;
        Ok(list)
    }

    /// Stamp `scan` with the current time and save it.
    ///
    /// The timestamp is bumped past the newest stored one when the clock has
    /// not moved on, so it stays unique within the list.
    pub fn save_scan(&self, scan: ScanData) -> Result<ScanRecord> {
        let mut list = self.load_for_update()?;
        let newest = list.iter().map(|r| r.timestamp).max();
        let now = (self.clock)();
        let timestamp = match newest {
            Some(ts) if ts >= now => ts.checked_add(1).ok_or_else(|| {
                ZapError::Api(format!("No timestamp left after {} in scan history", ts))
            })?,
            _ => now,
        };
        let record = ScanRecord::stamp(scan, timestamp);
        debug!("saving {} scan at {}", record.kind, timestamp);
        list.insert(0, record.clone());
        self.write(&list)?;
        Ok(record)
    }

    /// Remove every record saved at `timestamp`. Unknown timestamps are a no-op.
    pub fn delete(&self, timestamp: i64) -> Result<HistoryList> {
        let mut list = self.load_for_update()?;
        let before = list.len();
        list.retain(|r| r.timestamp != timestamp);
        debug!(
            "deleting scan {}: {} record(s) removed",
            timestamp,
            before - list.len()
        );
        self.write(&list)?;
        Ok(list)
    }

    fn load_for_update(&self) -> Result<HistoryList> {
        match self.load() {
            Err(ZapError::CorruptData(e)) => {
                warn!("replacing corrupt scan history: {}", e);
                Ok(Vec::new())
            }
            other => other,
        }
    }

    fn write(&self, list: &HistoryList) -> Result<()> {
        let json = serde_json::to_string(list)?;
        self.store.set_item(HISTORY_KEY, &json)
    }
}
