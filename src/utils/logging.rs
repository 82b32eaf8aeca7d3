//! Logging setup
//!
//! Wraps flexi_logger initialization and shutdown so the async writer is
//! flushed before the process exits.

use std::sync::Mutex;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

use crate::config::Config;
use crate::core::error::{GraphError, GraphResult};

/// Global logger handle, kept so `shutdown` can flush on exit.
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// Initializes file logging from the configured level, directory and
/// rotation settings.
pub fn init(config: &Config) -> GraphResult<()> {
    let handle = Logger::try_with_str(&config.log.level)
        .map_err(|e| GraphError::InvalidArgument(format!("log level: {}", e)))?
        .log_to_file(
            FileSpec::default()
                .basename(&config.log.file)
                .directory(&config.log.dir),
        )
        .rotate(
            Criterion::Size(config.log.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.log.max_files),
        )
        .write_mode(WriteMode::Async)
        .append()
        .start()
        .map_err(|e| GraphError::Internal(format!("logger start: {}", e)))?;

    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        *guard = Some(handle);
    }

    log::info!("logging initialized: {}/{}", config.log.dir, config.log.file);
    Ok(())
}

/// Flushes and shuts down the logger. Blocking; call once before exit.
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
        }
    }
}

pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}
