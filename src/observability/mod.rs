//! File-based structured logging.
//!
//! The plugin runs inside Zellij's WASM sandbox, where stdout belongs to the
//! rendered UI. Log lines therefore go to a rotating file instead:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer (plain text) → RotatingFileWriter → daybook.log
//! ```
//!
//! # Features
//!
//! - **File Output**: `~/.local/share/zellij/daybook/daybook.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Level Filtering**: `trace_level` config option, default `"info"`
//!
//! # Usage
//!
//! ```rust,no_run
//! use daybook::observability::init_tracing;
//! use daybook::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::RotatingFileWriter;
pub use init::{init_tracing, init_tracing_at, LOG_FILE_NAME};
