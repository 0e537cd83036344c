//! Open-data download endpoints.

use std::collections::BTreeMap;

use axum::{
    Json,
    body::Body,
    extract::{Path, State},
    http::{Response, StatusCode, header},
};

use znajda_core::RawRecord;

use crate::error::ApiError;
use crate::state::AppState;

/// Download one dataset as a JSON attachment.
///
/// The path segment is the dataset file name, `<slug>.json`; the bare
/// slug is accepted too. The backing file is re-read on every request,
/// so edits made directly on disk are served without a restart, and the
/// in-memory rows from publish time cover a missing file.
#[utoipa::path(
    get,
    path = "/urzad/download/dataset/{file}",
    params(
        ("file" = String, Path, description = "Dataset file name, `<slug>.json`"),
    ),
    responses(
        (status = 200, description = "Dataset rows as an attachment"),
        (status = 404, description = "Unknown dataset"),
    ),
    tag = "downloads"
)]
pub async fn download_dataset(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<Response<Body>, ApiError> {
    let id = file.strip_suffix(".json").unwrap_or(&file);

    let items = state
        .catalog
        .read()
        .await
        .load_dataset_items(id)
        .map_err(ApiError::from)?;

    attachment_response(&format!("{}.json", id), &items)
}

/// Download every dataset's rows, grouped by dataset id.
#[utoipa::path(
    get,
    path = "/urzad/download/by_city.json",
    responses(
        (status = 200, description = "Rows grouped by dataset id"),
    ),
    tag = "downloads"
)]
pub async fn download_grouped(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, Vec<RawRecord>>>, ApiError> {
    Ok(Json(state.catalog.read().await.all_items_grouped()))
}

/// Download every dataset's rows as one flat array.
#[utoipa::path(
    get,
    path = "/urzad/download/all.json",
    responses(
        (status = 200, description = "All rows, concatenated in registry order"),
    ),
    tag = "downloads"
)]
pub async fn download_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<RawRecord>>, ApiError> {
    Ok(Json(state.catalog.read().await.all_items_flat()))
}

fn attachment_response(filename: &str, items: &[RawRecord]) -> Result<Response<Body>, ApiError> {
    let json = serde_json::to_string_pretty(items)
        .map_err(|e| ApiError::Internal(format!("Failed to serialize dataset: {}", e)))?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from(json))
        .map_err(|e| ApiError::Internal(format!("Failed to build response: {}", e)))
}
