//! Data-entry forms
//!
//! Each form is declared as a [`Schema`]. Raw [`FormValues`] are validated
//! against it into a typed [`Record`], handed to a [`SubmissionSink`], and
//! acknowledged with a [`Notification`].

pub mod catalog;
pub mod error;
pub mod notify;
pub mod records;
pub mod schema;
pub mod sink;
pub mod state;
pub mod upload;
pub mod validate;
pub mod values;

pub use catalog::{schema, schemas, success_notification};
pub use error::{FormError, UploadError};
pub use notify::{Notification, Notifier, Variant};
pub use records::{
    FieldRecord, FormKind, HistoricalRecord, ProductionRecord, Record, StationRecord, WellRecord,
};
pub use schema::{Bound, FieldDefault, FieldKind, FieldSpec, Refinement, Schema};
pub use sink::{CollectingSink, LogSink, SinkError, SubmissionSink};
pub use state::{FormState, Submitted};
pub use upload::{acknowledge_upload, EXPECTED_COLUMNS};
pub use validate::{validate, FieldError, ValidationErrors};
pub use values::FormValues;

/// Result alias for form operations
pub type FormResult<T> = Result<T, FormError>;
