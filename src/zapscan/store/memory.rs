use super::KeyValueStore;
use crate::error::{Result, ZapError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Uses `RefCell` for interior mutability since zapscan is single-threaded.
#[derive(Default)]
pub struct InMemoryStore {
    items: RefCell<HashMap<String, String>>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent read fail, for testing the degraded-load path.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Make every subsequent write fail, for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Raw value under `key`, bypassing failure simulation.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        if self.simulate_read_error.get() {
            return Err(ZapError::StorageRead("Simulated read error".to_string()));
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ZapError::StorageWrite("Simulated write error".to_string()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ZapError::StorageWrite("Simulated write error".to_string()));
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::history::HISTORY_KEY;
    use crate::model::{HistoryList, ScanData, ScanRecord};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        records: HistoryList,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                records: Vec::new(),
            }
        }

        /// Append a record as if it had been saved at `timestamp`.
        /// Records are persisted newest-first, like the repository writes them.
        pub fn with_record(mut self, scan: ScanData, timestamp: i64) -> Self {
            self.records.insert(0, ScanRecord::stamp(scan, timestamp));
            self.flush();
            self
        }

        pub fn with_url(self, url: &str, timestamp: i64) -> Self {
            self.with_record(ScanData::url(url), timestamp)
        }

        pub fn with_text(self, text: &str, timestamp: i64) -> Self {
            self.with_record(ScanData::text(text), timestamp)
        }

        /// Store arbitrary bytes under the history key.
        pub fn with_raw_history(self, raw: &str) -> Self {
            self.store.set_item(HISTORY_KEY, raw).unwrap();
            self
        }

        fn flush(&self) {
            let json = serde_json::to_string(&self.records).unwrap();
            self.store.set_item(HISTORY_KEY, &json).unwrap();
        }
    }
}
