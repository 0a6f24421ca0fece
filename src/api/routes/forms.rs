//! Form Routes
//!
//! Schema discovery and submission of the data-entry forms.
//!
//! - GET /api/v1/forms - All form schemas
//! - GET /api/v1/forms/:form - One schema
//! - POST /api/v1/forms/:form - Validate and submit
//! - POST /api/v1/forms/historical/upload - Acknowledge a bulk-upload file

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{SubmitResponse, UploadRequest, UploadResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::forms::{self, FormKind, FormState, FormValues, Notification, Schema};

/// GET /api/v1/forms
pub async fn list_forms() -> Json<Vec<Schema>> {
    Json(forms::schemas())
}

/// GET /api/v1/forms/:form
pub async fn get_form(Path(form): Path<String>) -> ApiResult<Json<Schema>> {
    let kind: FormKind = form.parse()?;
    Ok(Json(forms::schema(kind)))
}

/// POST /api/v1/forms/:form
///
/// Body: raw field values keyed by field name.
/// 201 with the record and notification, 422 with inline errors.
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    Path(form): Path<String>,
    Json(values): Json<FormValues>,
) -> ApiResult<(StatusCode, Json<SubmitResponse>)> {
    let kind: FormKind = form.parse()?;
    let mut form_state = FormState::with_values(kind, values);
    let mut notifications: Vec<Notification> = Vec::new();

    let submitted = form_state.submit(state.sink.as_ref(), &mut notifications)?;
    state.record_submission();

    tracing::debug!(form = %kind, "Submission accepted");

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            status: "ok".to_string(),
            record: submitted.record,
            notification: submitted.notification,
        }),
    ))
}

/// POST /api/v1/forms/historical/upload
///
/// Only the file name is inspected; the content is never read.
pub async fn upload_historical(
    Json(request): Json<UploadRequest>,
) -> ApiResult<Json<UploadResponse>> {
    let notification = forms::acknowledge_upload(&request.file_name)?;

    Ok(Json(UploadResponse {
        status: "ok".to_string(),
        notification,
        expected_columns: forms::EXPECTED_COLUMNS.iter().map(|c| c.to_string()).collect(),
    }))
}
