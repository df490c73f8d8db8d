use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "ShoppingList -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "ShoppingList -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "ShoppingList -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "ShoppingList -- ", "{}", message);
    }
}
