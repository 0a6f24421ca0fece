//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::forms::{LogSink, SubmissionSink};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<Config>,
    /// Where validated form records go
    pub sink: Arc<dyn SubmissionSink>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Accepted submissions since start
    submissions: Arc<AtomicU64>,
}

impl AppState {
    /// Create a new AppState that logs submissions
    pub fn new(config: Config) -> Self {
        Self::with_sink(config, Arc::new(LogSink))
    }

    /// Create AppState with a custom submission sink
    pub fn with_sink(config: Config, sink: Arc<dyn SubmissionSink>) -> Self {
        Self {
            config: Arc::new(config),
            sink,
            start_time: Instant::now(),
            submissions: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn record_submission(&self) {
        self.submissions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn submission_count(&self) -> u64 {
        self.submissions.load(Ordering::Relaxed)
    }

    /// Seed for one history request: the configured one, or fresh
    pub fn history_seed(&self) -> u64 {
        self.config
            .dashboard
            .history_seed
            .unwrap_or_else(rand::random)
    }
}
