use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Routes domain log calls through `tracing` so the host process decides
/// subscribers and levels.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "mealtrack", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "mealtrack", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "mealtrack", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "mealtrack", "{}", message);
    }
}
