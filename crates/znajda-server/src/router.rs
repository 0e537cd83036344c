//! Router configuration and route composition.

use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServerConfig;
use crate::handlers::{
    analyze, download, edits, health, publish, report, schema, search, upload,
};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Largest accepted request body (file uploads included): 16 MiB.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Creates the main application router with all routes and middleware.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    // Citizen-facing routes
    let citizen_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/search", get(search::search_catalog))
        .route("/analyze", post(analyze::analyze_image))
        .route("/report", post(report::submit_report))
        .route("/claim", post(report::claim_item))
        .route("/schema.json", get(schema::get_schema));

    // Office routes: upload, editing, publishing, open-data downloads
    let office_routes = Router::new()
        .route("/urzad/upload_csv", post(upload::upload_dataset_file))
        .route("/urzad/get_uploaded_items", get(edits::get_uploaded_items))
        .route("/urzad/save_csv_edits", post(edits::save_edits))
        .route("/urzad/publish", post(publish::publish_dataset))
        .route("/urzad/datasets", get(publish::list_datasets))
        .route(
            "/urzad/download/dataset/:file",
            get(download::download_dataset),
        )
        .route("/urzad/download/by_city.json", get(download::download_grouped))
        .route("/urzad/download/all.json", get(download::download_all));

    // Configure CORS based on environment
    let cors_layer = build_cors_layer(&config.cors_origins);

    citizen_routes
        .merge(office_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware layers (order matters: bottom layers run first)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configuration.
///
/// If `origins` is "*", allows any origin (for development).
/// Otherwise, parses comma-separated origins.
fn build_cors_layer(origins: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    if origins == "*" {
        cors.allow_origin(tower_http::cors::Any)
    } else {
        let allowed: Vec<HeaderValue> = origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(allowed)
    }
}
