use clap::{Parser, Subcommand};
use std::path::PathBuf;
use zapscan::presenter::HistoryFilter;

#[derive(Parser, Debug)]
#[command(name = "zapscan", bin_name = "zapscan", version)]
#[command(about = "Classify QR scans and keep a local scan history", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Where history and config live (default: $ZAPSCAN_DATA or the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a scanned payload, then save and/or view it
    Scan {
        /// Decoded QR payload
        #[arg(required_unless_present = "event")]
        payload: Option<String>,

        /// Type hint reported by the scanner (e.g. url)
        #[arg(long, conflicts_with = "event")]
        hint: Option<String>,

        /// Raw scanner event as JSON: {"data": "...", "extra": {"type": "url"}}
        #[arg(long, value_name = "JSON")]
        event: Option<String>,

        /// Save to history without asking
        #[arg(long)]
        save: bool,

        /// Show the result without asking
        #[arg(long)]
        view: bool,
    },

    /// List scan history, newest first
    #[command(alias = "ls")]
    History {
        /// Which scans to show: all, url or text
        #[arg(short, long, default_value = "all")]
        filter: HistoryFilter,
    },

    /// Show a saved scan the way the result screen would
    #[command(alias = "v")]
    View {
        /// Index in the history list (1 = newest)
        index: usize,
    },

    /// Print the share payload for a saved scan
    Share {
        /// Index in the history list (1 = newest)
        index: usize,
    },

    /// Swipe a history row to delete it
    #[command(alias = "rm")]
    Delete {
        /// Index in the history list (1 = newest)
        index: usize,

        /// Horizontal drag in pixels, negative is leftward (default: a full swipe)
        #[arg(long, value_name = "PX", allow_hyphen_values = true)]
        swipe: Option<f32>,

        /// Confirm without prompting
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (accent, color-scheme, classify)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
