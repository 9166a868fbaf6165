use std::path::PathBuf;

use clap::Parser;

/// Command-line options for the pocketdex TUI.
#[derive(Debug, Parser)]
#[command(name = "pocketdex", version, about = "Terminal pokédex with a persisted trainer profile")]
pub struct Cli {
    /// Path to the key/value store file. Defaults to the platform config dir.
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Write logs to this file. The terminal UI owns stdout, so logging is
    /// disabled unless a file is given.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Tick rate in milliseconds, drives the loading spinner.
    #[arg(long, default_value_t = 250)]
    pub tick_ms: u64,
}
