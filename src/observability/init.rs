//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFileWriter;
use crate::Config;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "daybook.log";

/// Initializes the global subscriber, logging to the plugin's data directory.
///
/// Observability is optional: if the data directory cannot be created the plugin
/// runs without logging. Only the first call takes effect.
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    init_tracing_at(&data_dir.join(LOG_FILE_NAME), &config.trace_level);
}

/// Initializes the global subscriber writing to `log_file` at `level`.
///
/// `level` accepts any `EnvFilter` directive (`"debug"`, `"daybook=trace"`, ...).
/// An unparsable directive falls back to `"info"`. Returns `false` if a global
/// subscriber was already installed.
pub fn init_tracing_at(log_file: &Path, level: &str) -> bool {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(RotatingFileWriter::new(log_file.to_path_buf()))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_ok()
}
