//! Dataset file upload endpoint.

use axum::{
    Json,
    extract::{Multipart, State},
};

use znajda_core::{content_checksum, parse_upload};

use crate::dto::{RowErrorDto, UploadResponse};
use crate::error::ApiError;
use crate::handlers::read_upload_field;
use crate::state::AppState;

/// Parse and validate an uploaded dataset file.
///
/// Accepts CSV, JSON, and JSONL/NDJSON under a `file` multipart field.
/// Valid rows become the new upload working set for the edit screen;
/// parse and validation problems come back per row. A file full of bad
/// rows is still a 200: the errors are the payload.
#[utoipa::path(
    post,
    path = "/urzad/upload_csv",
    request_body(content = String, content_type = "multipart/form-data",
        description = "Multipart form with a `file` field (CSV, JSON, or JSONL)"),
    responses(
        (status = 200, description = "Parse result with per-row errors", body = UploadResponse),
        (status = 400, description = "Missing file part or empty filename"),
    ),
    tag = "datasets"
)]
pub async fn upload_dataset_file(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let upload = read_upload_field(multipart, "file").await?;
    let checksum = content_checksum(&upload.bytes);

    let outcome = parse_upload(&upload.bytes, &upload.filename);

    state
        .catalog
        .write()
        .await
        .set_working_set(outcome.items.clone());

    let count = outcome.items.len();
    Ok(Json(UploadResponse {
        success: true,
        items: outcome.items,
        errors: outcome.errors.into_iter().map(RowErrorDto::from).collect(),
        count,
        checksum,
    }))
}
