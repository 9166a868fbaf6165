use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with file output.
///
/// The TUI owns stdout, so log output goes to a file or nowhere. With no
/// file configured this is a no-op and all events are dropped.
pub fn init(log_file: Option<&Path>) {
    let Some(path) = log_file else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(path) else {
        eprintln!("Warning: Failed to create log file: {}", path.display());
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
