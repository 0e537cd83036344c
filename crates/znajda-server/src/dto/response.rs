//! Response DTOs for API endpoints.

use serde::Serialize;
use utoipa::ToSchema;

use znajda_core::{
    AnalysisSuggestion, Dataset, FoundItemRecord, MapPoint, RawRecord, ValidationError,
};

// ============================================================================
// Health
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    #[schema(example = "healthy")]
    pub status: String,

    /// Server version
    #[schema(example = "0.1.0")]
    pub version: String,
}

// ============================================================================
// Search
// ============================================================================

/// Catalog search response.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    /// Items matching every active filter
    pub items: Vec<ItemDto>,

    /// Map markers for the pre-circle candidate set
    pub map_points: Vec<MapPointDto>,

    /// Category choices for the search form
    pub categories: Vec<String>,
}

/// A single catalog item.
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemDto {
    pub id: u64,
    pub name: String,
    pub category: String,
    /// Finding (or loss) date, YYYY-MM-DD
    pub date: String,
    /// Combined display label for the location
    pub location: String,
    pub location_city: String,
    pub location_street: String,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub location_radius: Option<f64>,
    pub description: String,
    pub contact: String,
    /// `znaleziony`, `nieznaleziony`, `oddane`, or `lost`
    pub status: String,
    /// Present only on citizen reports carrying a claim question
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_question: Option<String>,
}

impl From<FoundItemRecord> for ItemDto {
    fn from(item: FoundItemRecord) -> Self {
        Self {
            id: item.id,
            name: item.name,
            category: item.category,
            date: item.date,
            location: item.location,
            location_city: item.location_city,
            location_street: item.location_street,
            location_lat: item.location_lat,
            location_lng: item.location_lng,
            location_radius: item.location_radius,
            description: item.description,
            contact: item.contact,
            status: item.status,
            security_question: item.security_question,
        }
    }
}

/// Map marker with the subset of fields the results map needs.
#[derive(Debug, Serialize, ToSchema)]
pub struct MapPointDto {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub lat: f64,
    pub lng: f64,
}

impl From<MapPoint> for MapPointDto {
    fn from(point: MapPoint) -> Self {
        Self {
            id: point.id,
            name: point.name,
            category: point.category,
            lat: point.lat,
            lng: point.lng,
        }
    }
}

// ============================================================================
// Reports & claims
// ============================================================================

/// Acknowledgement for a submitted report.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReportResponse {
    pub success: bool,

    /// Confirmation message for the reporter
    pub message: String,

    /// Identifier assigned to the new report
    pub id: u64,
}

/// Acknowledgement for an ownership claim.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClaimResponse {
    pub success: bool,

    /// Confirmation message for the claimant
    pub message: String,
}

// ============================================================================
// Image analysis
// ============================================================================

/// Image analysis response with suggested report fields.
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    pub success: bool,

    /// Suggested report-form fields
    pub data: SuggestionDto,

    /// Hex SHA-256 checksum of the uploaded image bytes
    pub checksum: String,
}

/// Suggested report-form fields.
#[derive(Debug, Serialize, ToSchema)]
pub struct SuggestionDto {
    pub name: String,
    pub category: String,
    pub description: String,
    pub location: String,
    /// Suggested finding date, YYYY-MM-DD
    pub date: String,
}

impl From<AnalysisSuggestion> for SuggestionDto {
    fn from(suggestion: AnalysisSuggestion) -> Self {
        Self {
            name: suggestion.name,
            category: suggestion.category,
            description: suggestion.description,
            location: suggestion.location,
            date: suggestion.date,
        }
    }
}

// ============================================================================
// Uploads & edits
// ============================================================================

/// Parse result for an uploaded dataset file.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,

    /// Sanitized rows that passed validation
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<RawRecord>,

    /// Parse and validation errors, indexed by row
    pub errors: Vec<RowErrorDto>,

    /// Number of valid rows
    pub count: usize,

    /// Hex SHA-256 checksum of the uploaded file bytes
    pub checksum: String,
}

/// Validation problems for one uploaded row.
#[derive(Debug, Serialize, ToSchema)]
pub struct RowErrorDto {
    /// 1-based row index; 0 marks a whole-file failure
    pub row: usize,

    /// One message per violation
    pub errors: Vec<String>,
}

impl From<ValidationError> for RowErrorDto {
    fn from(error: ValidationError) -> Self {
        Self {
            row: error.row,
            errors: error.errors,
        }
    }
}

/// The rows currently staged between upload and publish.
#[derive(Debug, Serialize, ToSchema)]
pub struct WorkingSetResponse {
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<RawRecord>,

    pub count: usize,
}

/// Result of replacing the working set with edited rows.
#[derive(Debug, Serialize, ToSchema)]
pub struct SaveEditsResponse {
    pub success: bool,

    /// The sanitized rows now staged
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<RawRecord>,

    /// Remaining validation problems, advisory only
    pub errors: Vec<RowErrorDto>,

    pub count: usize,
}

// ============================================================================
// Datasets & publishing
// ============================================================================

/// Published dataset summary.
#[derive(Debug, Serialize, ToSchema)]
pub struct DatasetDto {
    /// Slug identifier; doubles as the download file stem
    #[schema(example = "rzeczy-znalezione-2024")]
    pub id: String,

    pub title: String,

    /// Publish date, YYYY-MM-DD
    pub date: String,

    /// Number of records at publish time
    pub count: usize,

    #[schema(example = "Opublikowany")]
    pub status: String,
}

impl From<Dataset> for DatasetDto {
    fn from(dataset: Dataset) -> Self {
        Self {
            id: dataset.id,
            title: dataset.title,
            date: dataset.date,
            count: dataset.count,
            status: dataset.status,
        }
    }
}

/// Acknowledgement for a dataset publication.
#[derive(Debug, Serialize, ToSchema)]
pub struct PublishResponse {
    pub success: bool,

    /// Confirmation message from the open-data portal
    pub message: String,
}
