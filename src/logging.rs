//! Logging configuration for media-type-sync
//!
//! Provides dual-output logging:
//! - Console: respects RUST_LOG env var
//! - File: writes to ~/.local/state/media-type-sync/logs/
//!
//! Library code logs through the `log` facade; the subscriber picks those
//! events up as well. Log files are rotated daily.

use crate::constants::{APP_NAME, LOG_DIR_NAME};
use std::fs;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Layer,
};

/// Returns the log directory path: $XDG_STATE_HOME/media-type-sync/logs/
/// Falls back to ~/.local/state/media-type-sync/logs/
pub fn get_log_dir() -> PathBuf {
    let state_home = std::env::var("XDG_STATE_HOME")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            format!("{}/.local/state", home)
        });

    PathBuf::from(state_home).join(APP_NAME).join(LOG_DIR_NAME)
}

fn console_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging with dual output:
/// - Console (stderr): INFO level by default, respects RUST_LOG
/// - File `<log_file_name>`: DEBUG level, rotates daily
///
/// Returns a guard that must be kept alive for the file appender to work.
/// When the guard is dropped, pending logs are flushed.
pub fn init_logging(log_file_name: &str) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = get_log_dir();

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_filter(console_filter());

    if fs::create_dir_all(&log_dir).is_err() {
        // Console only when the state directory is not writable
        let _ = tracing_subscriber::registry().with(console_layer).try_init();
        return None;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(EnvFilter::new("debug"));

    // A subscriber may already be installed (tests)
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();

    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_ends_with_app_name() {
        let dir = get_log_dir();
        assert!(dir.ends_with(format!("{}/{}", APP_NAME, LOG_DIR_NAME)));
    }
}
