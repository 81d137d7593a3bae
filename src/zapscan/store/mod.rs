//! # Storage Layer
//!
//! ZapScan persists state through a minimal key-value interface, the same
//! shape a mobile async-storage API offers: string values under string keys.
//! The [`KeyValueStore`] trait keeps the history logic independent of where
//! those strings end up.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `<key>.json` file per key
//!   inside the data directory. Writes are atomic (temp file + rename).
//! - [`memory::InMemoryStore`]: non-persistent storage for tests, with
//!   switches that simulate read and write failures.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── QRScanHistory.json   # JSON array of scan records, newest first
//! └── config.json          # ZapConfig (see config.rs)
//! ```
//!
//! Only [`crate::history::HistoryRepository`] touches the history key.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for key-value persistence.
///
/// All methods take `&self`; implementations needing mutation use interior
/// mutability since ZapScan is single-threaded.
pub trait KeyValueStore {
    /// Read the value stored under `key`. `Ok(None)` when absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}
