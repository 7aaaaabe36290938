use anyhow::Result;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use std::path::Path;

const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

/// Starts the global logger. `RUST_LOG` overrides the default level.
///
/// The TUI owns the terminal, so without a log file nothing is installed for
/// interactive runs. Printing commands log to stderr.
pub fn init(log_file: Option<&Path>, interactive: bool) -> Result<Option<LoggerHandle>> {
    let logger = match log_file {
        Some(path) => Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?
            .log_to_file(FileSpec::try_from(path)?),
        None if interactive => return Ok(None),
        None => Logger::try_with_env_or_str("warn")?,
    };
    Ok(Some(logger.start()?))
}
