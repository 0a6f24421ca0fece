//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::forms::{Notification, Record, ValidationErrors};

// ============================================
// FORM DTOs
// ============================================

/// Accepted submission
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    /// Status: "ok"
    pub status: String,
    /// The validated record as handed to the sink
    pub record: Record,
    /// Notification to show the user
    pub notification: Notification,
}

/// Submission rejected by validation
#[derive(Debug, Serialize)]
pub struct InvalidResponse {
    /// Status: "invalid"
    pub status: String,
    /// Message per offending field
    pub errors: ValidationErrors,
}

/// Historical bulk-upload request
#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    /// Name of the selected file
    pub file_name: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Status: "ok"
    pub status: String,
    pub notification: Notification,
    /// Columns the sheet is expected to carry
    pub expected_columns: Vec<String>,
}

// ============================================
// DASHBOARD DTOs
// ============================================

/// Overview query parameters
#[derive(Debug, Default, Deserialize)]
pub struct OverviewQuery {
    /// Selected date, defaults to today
    pub date: Option<NaiveDate>,
}

/// Field/station view query parameters
#[derive(Debug, Default, Deserialize)]
pub struct SitesQuery {
    /// Field name or "todos"
    pub field: Option<String>,
    /// Shift name in either vocabulary, or "todos"
    pub shift: Option<String>,
}

/// History query parameters
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// End of the preset range, defaults to today
    pub date: Option<NaiveDate>,
    /// Preset length: 7, 30, 90 or 365
    pub days: Option<u32>,
    /// Explicit range start (requires `to`)
    pub from: Option<NaiveDate>,
    /// Explicit range end (requires `from`)
    pub to: Option<NaiveDate>,
    /// Comma-separated series to chart, e.g. `crude,diluent`
    pub series: Option<String>,
    /// Pin the synthetic series
    pub seed: Option<u64>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy
    pub status: String,
    /// Number of registered forms
    pub forms: usize,
    /// Submissions accepted since start
    pub submissions: u64,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
