//! Tracing subscriber setup

use std::path::Path;

use thiserror::Error;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILE_NAME: &str = "wal2json-updater.log";

pub type BoxedSubscriber = Box<dyn Subscriber + Send + Sync>;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file: {0}")]
    Appender(#[from] InitError),

    #[error("Failed to install logger: {0}")]
    Install(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Split a log file path into the directory and file name handed to the appender
fn log_file_location(log_file: &Path) -> (&Path, String) {
    let directory = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = log_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string());

    (directory, file_name)
}

/// Build the subscriber without installing it
///
/// Logs go to stderr unless `log_file` is given, in which case they are
/// written to that file as JSON lines through a non-blocking writer whose
/// guard is returned alongside.
pub fn build_subscriber(
    log_file: Option<&Path>,
    env_filter: EnvFilter,
) -> Result<(BoxedSubscriber, Option<WorkerGuard>), LoggingError> {
    let Some(log_file) = log_file else {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .finish();
        return Ok((Box::new(subscriber), None));
    };

    let (directory, file_name) = log_file_location(log_file);
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .json()
        .finish();

    Ok((Box::new(subscriber), Some(guard)))
}

/// Initialize logging
///
/// The returned guard must be held until exit so buffered lines are flushed.
pub fn init(log_file: Option<&Path>) -> Result<Option<WorkerGuard>, LoggingError> {
    // Default to info level if RUST_LOG not set
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (subscriber, guard) = build_subscriber(log_file, env_filter)?;
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(guard)
}
