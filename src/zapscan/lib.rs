//! # ZapScan Architecture
//!
//! ZapScan is a **UI-agnostic QR scan library**: it classifies what a barcode
//! scanner hands it, keeps a local history of saved scans, and models the
//! history screen's filter and swipe-to-delete behaviour. The camera, the web
//! view and the share sheet belong to whatever UI embeds it; this crate only
//! consumes their events and produces requests for them. The `zapscan`
//! binary is one such UI, a terminal client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints, sets up logging       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, holds resolved config         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (screen/, swipe, presenter, classifier, history)    │
//! │  - Screen state machines and pure derivations               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust values, returns regular Rust
//! types, never writes to stdout/stderr and never reads a clock it was not
//! given (swipe animations advance by explicit durations). Diagnostics go
//! through the `log` facade; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`history`]: The history repository, sole owner of the history key
//! - [`presenter`]: Filtering and ordering for display
//! - [`swipe`]: Per-row swipe-to-delete state machine
//! - [`classifier`]: Scanner event → typed scan
//! - [`screen`]: Scanner and history screen state
//! - [`result`]: Result view and share payloads
//! - [`theme`]: Palettes and the startup accent
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`ScanKind`, `ScanData`, `ScanRecord`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod classifier;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod model;
pub mod presenter;
pub mod result;
pub mod screen;
pub mod store;
pub mod swipe;
pub mod theme;
