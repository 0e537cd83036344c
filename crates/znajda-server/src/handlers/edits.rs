//! Upload working-set endpoints, backing the spreadsheet-style editor.

use axum::{Json, extract::State};

use znajda_core::{ValidationError, sanitize_record, validate_record};

use crate::dto::{RowErrorDto, SaveEditsRequest, SaveEditsResponse, WorkingSetResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Return the rows currently staged between upload and publish.
#[utoipa::path(
    get,
    path = "/urzad/get_uploaded_items",
    responses(
        (status = 200, description = "The staged rows", body = WorkingSetResponse),
    ),
    tag = "datasets"
)]
pub async fn get_uploaded_items(
    State(state): State<AppState>,
) -> Result<Json<WorkingSetResponse>, ApiError> {
    let items = state.catalog.read().await.working_set().to_vec();
    let count = items.len();
    Ok(Json(WorkingSetResponse { items, count }))
}

/// Replace the working set with edited rows.
///
/// Every row is sanitized and re-validated, and every sanitized row
/// stays staged - including invalid ones, so half-finished edits are
/// never thrown away. The errors in the response are advisory for the
/// edit screen.
#[utoipa::path(
    post,
    path = "/urzad/save_csv_edits",
    request_body = SaveEditsRequest,
    responses(
        (status = 200, description = "Rows staged, with remaining problems", body = SaveEditsResponse),
    ),
    tag = "datasets"
)]
pub async fn save_edits(
    State(state): State<AppState>,
    Json(body): Json<SaveEditsRequest>,
) -> Result<Json<SaveEditsResponse>, ApiError> {
    let mut cleaned = Vec::with_capacity(body.items.len());
    let mut errors = Vec::new();

    for (index, raw) in body.items.iter().enumerate() {
        let row = sanitize_record(raw);
        let row_errors = validate_record(&row);
        if !row_errors.is_empty() {
            errors.push(ValidationError {
                row: index + 1,
                errors: row_errors,
            });
        }
        cleaned.push(row);
    }

    state.catalog.write().await.set_working_set(cleaned.clone());

    let count = cleaned.len();
    Ok(Json(SaveEditsResponse {
        success: true,
        items: cleaned,
        errors: errors.into_iter().map(RowErrorDto::from).collect(),
        count,
    }))
}
