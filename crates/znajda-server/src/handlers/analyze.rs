//! Image analysis endpoint for the report form.

use axum::{
    Json,
    extract::{Multipart, State},
};

use znajda_core::content_checksum;
use znajda_core::traits::ImageAnalyzer;

use crate::dto::{AnalyzeResponse, SuggestionDto};
use crate::error::ApiError;
use crate::handlers::read_upload_field;
use crate::state::AppState;

/// Suggest report fields from an uploaded photo.
///
/// Expects a multipart body with an `image` file field. The analysis
/// runs outside the catalog lock; the response carries a checksum of the
/// received bytes so the client can verify the upload.
#[utoipa::path(
    post,
    path = "/analyze",
    request_body(content = String, content_type = "multipart/form-data",
        description = "Multipart form with an `image` file field"),
    responses(
        (status = 200, description = "Suggested report fields", body = AnalyzeResponse),
        (status = 400, description = "Missing image part or empty filename"),
    ),
    tag = "reports"
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let upload = read_upload_field(multipart, "image").await?;
    let checksum = content_checksum(&upload.bytes);

    let suggestion = state
        .vision
        .analyze(&upload.filename, &upload.bytes)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(AnalyzeResponse {
        success: true,
        data: SuggestionDto::from(suggestion),
        checksum,
    }))
}
