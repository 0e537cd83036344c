//! Catalog search endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use znajda_core::{CATEGORIES, Circle, SearchFilters, search};

use crate::dto::{ItemDto, MapPointDto, SearchQuery, SearchResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Search the combined catalog of citizen reports and official items.
///
/// All filters combine conjunctively; blank parameters are inactive. The
/// geospatial circle requires all three of `circle_lat`, `circle_lng`,
/// and `circle_radius`. Map markers are taken before the circle
/// narrowing, so the map shows the wider candidate distribution.
#[utoipa::path(
    get,
    path = "/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching items with map markers", body = SearchResponse),
    ),
    tag = "search"
)]
pub async fn search_catalog(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let circle = match (params.circle_lat, params.circle_lng, params.circle_radius) {
        (Some(lat), Some(lng), Some(radius_m)) => Some(Circle { lat, lng, radius_m }),
        _ => None,
    };

    let filters = SearchFilters {
        query: params.q,
        category: params.category,
        location: params.location,
        date: params.date,
        circle,
    };

    let items = state.catalog.read().await.searchable_items();
    let outcome = search(&items, &filters);

    Ok(Json(SearchResponse {
        items: outcome.items.into_iter().map(ItemDto::from).collect(),
        map_points: outcome.map_points.into_iter().map(MapPointDto::from).collect(),
        categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
    }))
}
