//! Logging system initialization
//!
//! Sets up the tracing subscriber from [`LoggingConfig`].

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::{LogFormat, LoggingConfig};
use crate::errors::{Result, TrustMeBroError};

/// Where log lines end up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Configured file, rotating daily when enabled
    File,
    /// stderr; stdout is reserved for command output
    Console,
    /// Discarded; used while the TUI owns the terminal
    Sink,
}

/// Decide the target for this run.
///
/// `quiet_console` is set when the terminal is taken over by the TUI: a
/// log file still works, console output does not.
pub fn log_target(config: &LoggingConfig, quiet_console: bool) -> LogTarget {
    match config.file.as_deref() {
        Some(file) if !file.is_empty() => LogTarget::File,
        _ if quiet_console => LogTarget::Sink,
        _ => LogTarget::Console,
    }
}

fn file_writer(config: &LoggingConfig, log_file: &str) -> Result<Box<dyn std::io::Write + Send>> {
    if config.enable_rotation {
        let path = Path::new(log_file);
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("trustmebro.log");

        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(config.max_backups.max(1) as usize)
            .build(dir)
            .map_err(|e| {
                TrustMeBroError::file_operation(format!(
                    "Failed to create rolling log appender: {}",
                    e
                ))
            })?;
        Ok(Box::new(appender))
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .map_err(|e| {
                TrustMeBroError::file_operation(format!(
                    "Failed to open log file {}: {}",
                    log_file, e
                ))
            })?;
        Ok(Box::new(file))
    }
}

/// Initialize logging system based on configuration
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging(config: &LoggingConfig, quiet_console: bool) -> Result<WorkerGuard> {
    let target = log_target(config, quiet_console);
    let writer: Box<dyn std::io::Write + Send> = match (target, config.file.as_deref()) {
        (LogTarget::File, Some(file)) => file_writer(config, file)?,
        (LogTarget::Sink, _) => Box::new(std::io::sink()),
        _ => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| TrustMeBroError::config(format!("Invalid log level '{}': {}", config.level, e)))?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(target == LogTarget::Console);

    let installed = if config.format == LogFormat::Json {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| TrustMeBroError::config(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_target() {
        let mut config = LoggingConfig::default();
        assert_eq!(log_target(&config, false), LogTarget::Console);
        assert_eq!(log_target(&config, true), LogTarget::Sink);

        config.file = Some(String::new());
        assert_eq!(log_target(&config, true), LogTarget::Sink);

        config.file = Some("logs/trustmebro.log".into());
        assert_eq!(log_target(&config, true), LogTarget::File);
        assert_eq!(log_target(&config, false), LogTarget::File);
    }
}
