//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so it can only log to a file. Line mode logs to stderr.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Disabled,
}

impl<'a> LogTarget<'a> {
    /// Pick a target for a host: a log file wins; otherwise stderr unless the
    /// host draws on the whole terminal
    #[must_use]
    pub fn for_host(log_file: Option<&'a Path>, owns_terminal: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if owns_terminal => Self::Disabled,
            None => Self::Stderr,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(target: LogTarget<'_>) -> Result<()> {
    match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .init();
        }
        LogTarget::Disabled => {}
    }
    Ok(())
}
