//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::dto::{
    AnalyzeResponse, ClaimRequest, ClaimResponse, DatasetDto, HealthResponse, ItemDto,
    MapPointDto, PublishRequest, PublishResponse, ReportRequest, ReportResponse, RowErrorDto,
    SaveEditsRequest, SaveEditsResponse, SearchQuery, SearchResponse, SuggestionDto,
    UploadResponse, WorkingSetResponse,
};
use crate::error::ErrorResponse;
use crate::handlers::{analyze, download, edits, health, publish, report, schema, search, upload};

/// OpenAPI documentation for the Znajda API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Znajda API",
        version = "1.0.0",
        description = "Lost-and-found reporting and municipal open-data publishing.

Citizens report lost items and search the combined catalog of reports and
official found-item records; municipal staff upload, validate, edit, and
publish datasets consumed by the open-data portal.

## Quick Start

1. Check server health: `GET /health`
2. Search the catalog: `GET /search?q=portfel`
3. Fetch the record schema: `GET /schema.json`
",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        health::health_check,
        search::search_catalog,
        analyze::analyze_image,
        report::submit_report,
        report::claim_item,
        schema::get_schema,
        upload::upload_dataset_file,
        edits::get_uploaded_items,
        edits::save_edits,
        publish::publish_dataset,
        publish::list_datasets,
        download::download_dataset,
        download::download_grouped,
        download::download_all,
    ),
    components(
        schemas(
            // Request types
            SearchQuery,
            ReportRequest,
            ClaimRequest,
            PublishRequest,
            SaveEditsRequest,
            // Response types
            HealthResponse,
            SearchResponse,
            ItemDto,
            MapPointDto,
            ReportResponse,
            ClaimResponse,
            AnalyzeResponse,
            SuggestionDto,
            UploadResponse,
            RowErrorDto,
            WorkingSetResponse,
            SaveEditsResponse,
            DatasetDto,
            PublishResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "Health and schema discovery"),
        (name = "search", description = "Catalog search"),
        (name = "reports", description = "Citizen reports, claims, and image analysis"),
        (name = "datasets", description = "Dataset upload, editing, and publishing"),
        (name = "downloads", description = "Open-data downloads"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_builds() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_string(&doc).expect("serialize OpenAPI document");
        assert!(json.contains("/search"));
        assert!(json.contains("/urzad/publish"));
        assert!(json.contains("Znajda API"));
    }
}
