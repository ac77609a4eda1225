//! Logger setup for the fsstatus binary.
//!
//! Diagnostics go to stderr so stdout carries only query results.

use anyhow::{Context, Result};
use flexi_logger::{DeferredNow, Logger, LoggerHandle};
use std::sync::{Mutex, OnceLock};

// Dropping the handle shuts the logger down.
static LOGGER_HANDLE: OnceLock<Mutex<LoggerHandle>> = OnceLock::new();

/// Initialise logging with a flexi_logger spec such as `warn` or `fsstatus=debug`.
pub fn init_logging(level: &str) -> Result<()> {
    let handle = Logger::try_with_str(level)
        .with_context(|| format!("Invalid log level '{}'", level))?
        .format(compact_format)
        .log_to_stderr()
        .start()
        .context("Failed to start logger")?;
    let _ = LOGGER_HANDLE.set(Mutex::new(handle));
    Ok(())
}

fn compact_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    let level = match record.level() {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    };
    write!(w, "{} [{}] {}", level, record.target(), record.args())
}
