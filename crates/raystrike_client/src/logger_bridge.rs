use bevy::log::{debug, error, info, warn};
use raystrike_simulation::logger::{LogLevel, LogPrinter};

/// Sink симуляции → bevy `LogPlugin` (tracing)
///
/// Фильтрацию по уровню уже сделал `log_with_level`.
pub struct BevyLogger;

impl LogPrinter for BevyLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => debug!("{}", message),
            LogLevel::Info => info!("{}", message),
            LogLevel::Warning => warn!("{}", message),
            LogLevel::Error => error!("{}", message),
        }
    }
}
