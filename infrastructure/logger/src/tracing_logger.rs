use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Wishlist -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Wishlist -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Wishlist -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Wishlist -- ", "{}", message);
    }
}
