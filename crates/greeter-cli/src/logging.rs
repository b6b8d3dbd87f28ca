//! Tracing subscriber initialisation.
//!
//! Only the CLI crate is allowed to call [`init_logging`]; `greeter-core`
//! and `greeter-adapters` only *emit* spans and events.
//!
//! Logs never go to stdout: stdout carries the greeting record and nothing
//! else.
//!
//! `RUST_LOG` overrides the configured level if set.

use std::io::IsTerminal as _;
use std::path::Path;

use anyhow::Context as _;
use tracing::level_filters::LevelFilter;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter, Layer, fmt::writer::BoxMakeWriter, layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingConfig};

/// Crates whose events are shown at the configured level.
const TARGETS: [&str; 3] = ["hello", "greeter_core", "greeter_adapters"];

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire. When logging
/// to a file, the returned guard must be kept alive until exit so buffered
/// lines are flushed.
pub fn init_logging(cfg: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(default_directives(cfg)?),
    };

    let (writer, guard, use_ansi) = match &cfg.file {
        Some(path) => {
            let (dir, name) = split_log_path(path)?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(name.to_string_lossy())
                .build(dir)
                .with_context(|| format!("cannot open log file '{}'", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(writer), Some(guard), false)
        }
        None => (
            BoxMakeWriter::new(std::io::stderr),
            None,
            std::io::stderr().is_terminal(),
        ),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(writer);

    let fmt_layer = match cfg.format {
        LogFormat::Text => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer.json().boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(guard)
}

/// `true` when the installed subscriber lets debug events through. Error
/// reports then include their cause chain.
///
/// Reads the active filter, so a `RUST_LOG` override counts as well as the
/// configured level.
pub fn debug_enabled() -> bool {
    LevelFilter::current() >= LevelFilter::DEBUG
}

/// Filter string giving every crate of ours the configured level.
fn default_directives(cfg: &LoggingConfig) -> anyhow::Result<String> {
    let level = cfg
        .level_filter()
        .context("invalid logging.level")?
        .to_string()
        .to_ascii_lowercase();
    Ok(TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(","))
}

/// Split a log file path into the directory and file name the appender wants.
fn split_log_path(path: &Path) -> anyhow::Result<(&Path, &std::ffi::OsStr)> {
    let name = path
        .file_name()
        .with_context(|| format!("log file '{}' has no file name", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok((dir, name))
}
