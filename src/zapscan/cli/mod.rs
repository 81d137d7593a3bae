//! # CLI Layer
//!
//! One possible UI client for zapscan. This is the only place that knows
//! about stdout, stderr, prompts and log output.
//!
//! - `setup.rs`: clap argument definitions
//! - `commands.rs`: context wiring and per-command handlers
//! - `print.rs`: terminal formatting of `CmdResult` values

mod commands;
mod print;
mod setup;

pub use commands::run;
