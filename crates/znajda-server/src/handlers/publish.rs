//! Dataset publishing endpoints.

use axum::{Json, extract::State};

use znajda_core::traits::PortalPublisher;

use crate::dto::{DatasetDto, PublishRequest, PublishResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Publish rows as a named open-data dataset.
///
/// Writes the backing file, registers the dataset first in the registry,
/// extends the official search index, and announces the dataset to the
/// open-data portal. The portal push runs after the catalog lock is
/// released.
#[utoipa::path(
    post,
    path = "/urzad/publish",
    request_body = PublishRequest,
    responses(
        (status = 200, description = "Dataset published", body = PublishResponse),
    ),
    tag = "datasets"
)]
pub async fn publish_dataset(
    State(state): State<AppState>,
    Json(body): Json<PublishRequest>,
) -> Result<Json<PublishResponse>, ApiError> {
    let title = body.title.unwrap_or_default();

    let dataset = state.catalog.write().await.publish(&title, body.items);

    let message = state
        .portal
        .publish_dataset(&dataset)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(PublishResponse {
        success: true,
        message,
    }))
}

/// List dataset summaries, most recently published first.
#[utoipa::path(
    get,
    path = "/urzad/datasets",
    responses(
        (status = 200, description = "Registered datasets", body = Vec<DatasetDto>),
    ),
    tag = "datasets"
)]
pub async fn list_datasets(
    State(state): State<AppState>,
) -> Result<Json<Vec<DatasetDto>>, ApiError> {
    let datasets = state.catalog.read().await.datasets().to_vec();
    Ok(Json(datasets.into_iter().map(DatasetDto::from).collect()))
}
