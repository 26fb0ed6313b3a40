use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

pub type SharedLogger = Arc<Logger>;

/// Console logger shared by handing out clones of one [`SharedLogger`] instead of a global.
#[derive(Debug, Default)]
pub struct Logger {
    logged: AtomicUsize,
}

impl Logger {
    pub fn shared() -> SharedLogger {
        Arc::new(Logger::default())
    }

    pub fn format(message: &str) -> String {
        format!("Log message: {}", message)
    }

    pub fn log(&self, message: &str) {
        let count = self.logged.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(count, "📝 Logging message");
        println!("{}", Logger::format(message));
    }

    pub fn logged(&self) -> usize {
        self.logged.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn format_prefixes_the_message() {
        assert_eq!(Logger::format("Singleton pattern applied"), "Log message: Singleton pattern applied");
    }

    #[test]
    fn clones_of_a_shared_logger_are_the_same_instance() {
        let logger1 = Logger::shared();
        let logger2 = logger1.clone();

        logger1.log("one");
        logger2.log("two");

        assert!(Arc::ptr_eq(&logger1, &logger2));
        assert_eq!(logger1.logged(), 2);
    }

    #[test]
    fn separately_created_loggers_are_independent() {
        let logger1 = Logger::shared();
        let logger2 = Logger::shared();

        logger1.log("one");

        assert!(!Arc::ptr_eq(&logger1, &logger2));
        assert_eq!(logger2.logged(), 0);
    }
}
