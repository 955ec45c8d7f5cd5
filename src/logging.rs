//! Logging initialization for the demo host.
//!
//! TUI mode writes to a timestamped file under the configured log directory
//! (stdout belongs to the terminal UI); otherwise logs go to stderr.

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Result of logging initialization.
pub struct LoggingHandle {
    /// Must be kept alive for the duration of the program; dropping it
    /// flushes buffered log lines.
    pub _guard: Option<WorkerGuard>,
    /// Path to the log file when file logging is active.
    pub log_file_path: Option<PathBuf>,
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` overrides the configured level; `debug_override` (the
/// `--debug` flag) overrides both.
pub fn init_logging(config: &Config, is_tui_mode: bool, debug_override: bool) -> Result<LoggingHandle> {
    let level = if debug_override {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    let filter =
        tracing_subscriber::EnvFilter::new(std::env::var("RUST_LOG").unwrap_or(level));

    if is_tui_mode && config.logging.to_file {
        let logs_dir = config.logs_path();
        std::fs::create_dir_all(&logs_dir)?;

        let timestamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
        let log_filename = format!("stepline-{timestamp}.log");
        let log_file_path = logs_dir.join(&log_filename);

        let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();

        Ok(LoggingHandle {
            _guard: Some(guard),
            log_file_path: Some(log_file_path),
        })
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();

        Ok(LoggingHandle {
            _guard: None,
            log_file_path: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.logging.dir = temp_dir
            .path()
            .join("logs")
            .to_string_lossy()
            .to_string();
        config
    }

    #[test]
    fn test_logs_path_follows_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        let logs_dir = config.logs_path();
        assert!(logs_dir.ends_with("logs"));
        assert!(logs_dir.starts_with(temp_dir.path()));
    }

    #[test]
    fn test_log_file_name_format() {
        let timestamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
        let log_filename = format!("stepline-{timestamp}.log");
        assert!(log_filename.starts_with("stepline-"));
        assert!(log_filename.ends_with(".log"));
    }

    #[test]
    fn test_stderr_mode_has_no_log_file() {
        // The global subscriber can only be installed once per process, so
        // verify the branch condition rather than calling init_logging.
        let temp_dir = TempDir::new().unwrap();
        let mut config = test_config(&temp_dir);
        config.logging.to_file = false;

        let is_tui_mode = true;
        assert!(!(is_tui_mode && config.logging.to_file));
    }
}
