//! Submission sinks
//!
//! A sink is the single hand-off point for validated records. Nothing is
//! persisted by the crate itself; the default sink emits a structured
//! tracing event.

use std::sync::Mutex;
use thiserror::Error;

use super::records::Record;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Sink unavailable: {0}")]
    Unavailable(String),

    #[error("Record rejected: {0}")]
    Rejected(String),
}

/// Receives every successfully validated record
pub trait SubmissionSink: Send + Sync {
    fn accept(&self, record: &Record) -> Result<(), SinkError>;
}

/// Logs each record as a structured event
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn accept(&self, record: &Record) -> Result<(), SinkError> {
        let payload =
            serde_json::to_string(record).map_err(|e| SinkError::Rejected(e.to_string()))?;
        tracing::info!(form = %record.kind(), record = %payload, "Form submitted");
        Ok(())
    }
}

/// Keeps every accepted record in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    records: Mutex<Vec<Record>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of accepted records, oldest first
    pub fn records(&self) -> Vec<Record> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SubmissionSink for CollectingSink {
    fn accept(&self, record: &Record) -> Result<(), SinkError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| SinkError::Unavailable("collector lock poisoned".to_string()))?;
        records.push(record.clone());
        Ok(())
    }
}
