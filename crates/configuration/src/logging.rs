use crate::error::ConfigError;
use crate::settings::Logging;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. When a log directory is
/// configured, events are written to a daily-rolling file through a non-blocking
/// writer; the returned guard must be held until shutdown so buffered lines are
/// flushed.
pub fn init_tracing(logging: &Logging) -> Result<Option<WorkerGuard>, ConfigError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.level)
            .map_err(|e| ConfigError::ValidationError(format!("logging.level: {}", e)))?,
    };

    match &logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, &logging.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| ConfigError::LoggingError(e.to_string()))?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| ConfigError::LoggingError(e.to_string()))?;
            Ok(None)
        }
    }
}
