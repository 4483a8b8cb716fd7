use crate::error::ClusterFindError;
use std::path::Path;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Initialize logging to both console and file
///
/// # Arguments
/// * `log_dir` - Directory where log files will be stored
/// * `log_level` - Log level (trace, debug, info, warn, error)
pub fn setup_logging(log_dir: &Path, log_level: &str) -> Result<(), ClusterFindError> {
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir).map_err(|e| {
            ClusterFindError::config(format!(
                "Failed to create log directory {}: {}",
                log_dir.display(),
                e
            ))
        })?;
    }

    let log_file_path = log_dir.join("clusterfind.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .map_err(|e| {
            ClusterFindError::config(format!(
                "Failed to open log file {}: {}",
                log_file_path.display(),
                e
            ))
        })?;

    // RUST_LOG env var takes precedence over the configured level
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(env_filter);

    let file_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));
    let file_layer = fmt::layer()
        .with_writer(log_file)
        .with_target(true)
        .with_ansi(false)
        .with_filter(file_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!(
        "Logging initialized: level={}, log_file={}",
        log_level,
        log_file_path.display()
    );

    Ok(())
}

/// Console-only logging setup, for development and tests
pub fn setup_console_logging(log_level: &str) -> Result<(), ClusterFindError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(env_filter)
        .init();

    Ok(())
}
