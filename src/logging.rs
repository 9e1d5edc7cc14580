// src/logging.rs
use flexi_logger::{DeferredNow, FlexiLoggerError, Logger, LoggerHandle, Record};

/// Log level spec for a `-v` count; `RUST_LOG` still takes precedence.
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn log_format(w: &mut dyn std::io::Write, _now: &mut DeferredNow, record: &Record) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] {} [{}:{}] {}",
        record.level(),
        record.target(),
        record.file().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        &record.args()
    )
}

/// Start logging to stderr. Keep the handle alive for the life of the program.
///
/// # Errors
///
/// Returns an error when the level spec is invalid or the logger cannot start.
pub fn init(verbosity: u8) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level_for(verbosity))?.format(log_format).start()
}
