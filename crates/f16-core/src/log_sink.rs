/// Severity of a sink message. Failures inside the core are always logged
/// at `Error`; the enum carries the other common levels so a host can
/// route through its own logger without a lossy mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

/// Explicit logging sink, supplied when a `FlightModel` is constructed and
/// held for its whole lifetime.
///
/// There is no default-global instance anywhere in this crate: a host that
/// wants output must supply one.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

/// Forwards to the `log` crate's facade. Libraries in this workspace never
/// pick a concrete backend themselves — wiring `env_logger`/
/// `pretty_env_logger` (or anything else) is left to the binary that calls
/// `install`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FacadeLogSink;

impl LogSink for FacadeLogSink {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Error => log::error!("{message}"),
            LogLevel::Warn => log::warn!("{message}"),
            LogLevel::Info => log::info!("{message}"),
            LogLevel::Debug => log::debug!("{message}"),
        }
    }
}

/// Discards everything. Useful for tests that want silence rather than a
/// captured log.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogSink;

impl LogSink for NullLogSink {
    fn log(&self, _level: LogLevel, _message: &str) {}
}
