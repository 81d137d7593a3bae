//! # ZapScan CLI
//!
//! The binary is intentionally thin: the terminal client lives in `src/cli/`
//! and this file only invokes `cli::run()` and turns an error into an exit
//! code. Everything the client does goes through [`zapscan::api::ZapScanApi`];
//! see the library docs for the layering below it.
//!
//! ```text
//! zapscan scan <payload> [--hint url] [--save] [--view]
//! zapscan history [--filter all|url|text]
//! zapscan view <index> | share <index>
//! zapscan delete <index> [--swipe -180] [--yes]
//! zapscan config [key] [value]
//! ```
//!
//! Without a terminal on stdin the scan and delete prompts read as dismissed,
//! so scripted use passes `--save`/`--view` and `--yes`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
