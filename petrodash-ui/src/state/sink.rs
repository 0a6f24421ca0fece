//! Browser submission sink

use petrodash::forms::{Record, SinkError, SubmissionSink};

/// Writes each validated record to the browser console
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl SubmissionSink for ConsoleSink {
    fn accept(&self, record: &Record) -> Result<(), SinkError> {
        let payload =
            serde_json::to_string(record).map_err(|e| SinkError::Rejected(e.to_string()))?;
        web_sys::console::log_2(&format!("{} submitted:", record.kind()).into(), &payload.into());
        Ok(())
    }
}
