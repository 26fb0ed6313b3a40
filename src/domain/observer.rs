use std::fmt::Debug;
use std::sync::Mutex;
use thiserror::Error;
use tracing::info;

/// Receives the status string of a device after the hub changed it.
pub trait Observer: Debug {
    fn update(&self, message: &str) -> Result<(), ObserverError>;
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ObserverError {
    #[error("observer '{observer}' failed: {reason}")]
    Failed { observer: String, reason: String },
}

#[derive(Debug, Default)]
pub struct LoggingObserver;

impl Observer for LoggingObserver {
    fn update(&self, message: &str) -> Result<(), ObserverError> {
        info!("📣 {}", message);
        Ok(())
    }
}

/// Remembers every message it receives, in order.
#[derive(Debug, Default)]
pub struct HistoryObserver {
    messages: Mutex<Vec<String>>,
}

impl HistoryObserver {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|messages| messages.clone()).unwrap_or_default()
    }
}

impl Observer for HistoryObserver {
    fn update(&self, message: &str) -> Result<(), ObserverError> {
        let mut messages = self.messages.lock().map_err(|_| ObserverError::Failed {
            observer: "history".to_string(),
            reason: "message history is poisoned".to_string(),
        })?;

        messages.push(message.to_string());
        Ok(())
    }
}
