//! Record schema endpoint.

use axum::Json;
use serde_json::Value;

use znajda_core::json_schema;

use crate::error::ApiError;

/// JSON Schema for the canonical found-item record.
///
/// Generated from the same field constants the validator uses, so the
/// published schema cannot drift from what uploads actually accept.
#[utoipa::path(
    get,
    path = "/schema.json",
    responses(
        (status = 200, description = "JSON Schema document for one record"),
    ),
    tag = "system"
)]
pub async fn get_schema() -> Result<Json<Value>, ApiError> {
    Ok(Json(json_schema()))
}
