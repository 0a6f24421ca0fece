//! # Petrodash
//!
//! Oil Production Dashboard - data-entry forms and read-only production views
//! for an oil field monitoring system.
//!
//! ## Features
//!
//! - **Schema-driven forms**: Five data-entry forms with inline, per-field validation
//! - **Submission sinks**: Validated records are handed to a pluggable sink
//! - **Dashboard projections**: Overview, field, station, history and well views
//! - **Synthetic history**: Seeded daily series for any date range
//! - **Navigation shell**: Dashboard and admin pages with tab state
//!
//! ## Modules
//!
//! - [`forms`]: Form catalog, validation and submission
//! - [`dashboard`]: Projections over the demonstration dataset
//! - [`shell`]: Routes, tabs and per-page state
//! - [`api`]: REST API server with Axum (feature `server`)
//! - [`config`]: TOML and environment configuration (feature `server`)
//!
//! ## Quick Start
//!
//! ```rust
//! use petrodash::forms::{CollectingSink, FormKind, FormState, Notification};
//! use serde_json::json;
//!
//! let sink = CollectingSink::new();
//! let mut notifications: Vec<Notification> = Vec::new();
//!
//! let mut form = FormState::new(FormKind::Historical);
//! form.set("start_date", json!("2024-01-01"));
//! form.set("end_date", json!("2024-01-31"));
//!
//! let submitted = form.submit(&sink, &mut notifications).unwrap();
//! assert_eq!(submitted.record.kind(), FormKind::Historical);
//! assert_eq!(sink.len(), 1);
//! ```

pub mod dashboard;
pub mod forms;
pub mod shell;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;

// Re-export top-level types for convenience
pub use forms::{
    FormError, FormKind, FormState, FormValues, Notification, Record, Schema, SubmissionSink,
    ValidationErrors,
};

pub use dashboard::{
    DashboardError, HistoryRange, HistoryView, Overview, Preset, SiteProjection, View, WellsView,
};

pub use shell::{App, Page, Route};

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError, AppState};

#[cfg(feature = "server")]
pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};
