//! Request DTOs for API endpoints.

use serde::Deserialize;
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use znajda_core::RawRecord;

/// Query parameters for catalog search.
///
/// Every filter is optional; blank values count as absent, so HTML forms
/// can submit all their fields unconditionally.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct SearchQuery {
    /// Free-text query matched against item names and descriptions
    #[param(example = "portfel")]
    pub q: Option<String>,

    /// Exact category filter
    #[param(example = "Portfel")]
    pub category: Option<String>,

    /// Substring filter on the location label
    #[param(example = "Warszawa")]
    pub location: Option<String>,

    /// Exact finding date filter (YYYY-MM-DD)
    #[param(example = "2023-10-05")]
    pub date: Option<String>,

    /// Search circle center latitude, degrees
    pub circle_lat: Option<f64>,

    /// Search circle center longitude, degrees
    pub circle_lng: Option<f64>,

    /// Search circle radius in meters; 0 disables the circle
    pub circle_radius: Option<f64>,
}

/// Request body for a citizen lost-item report.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ReportRequest {
    /// Item name (required)
    #[schema(example = "Czarny portfel")]
    pub name: Option<String>,

    /// Item category
    #[schema(example = "Portfel")]
    pub category: Option<String>,

    /// Date the item was lost (YYYY-MM-DD)
    pub date: Option<String>,

    /// Where the item was lost, free text
    pub location: Option<String>,

    /// Free-text description
    pub description: Option<String>,

    /// Contact address for the reporter (required)
    pub contact: Option<String>,

    /// Question a claimant must answer to prove ownership
    pub security_question: Option<String>,
}

/// Request body for an ownership claim on a reported item.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ClaimRequest {
    /// Identifier of the claimed item; forms post it as a string
    #[schema(value_type = Option<String>)]
    pub item_id: Option<Value>,

    /// Claimant's answer to the item's security question
    pub answer: Option<String>,
}

/// Request body publishing rows as a named dataset.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PublishRequest {
    /// Human-readable dataset title; the slug is derived from it
    #[schema(example = "Rzeczy znalezione - grudzień 2023")]
    pub title: Option<String>,

    /// Raw records to publish, typically the edited working set
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<RawRecord>,
}

/// Request body replacing the upload working set with edited rows.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SaveEditsRequest {
    /// Edited rows, replacing the staged set wholesale
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<RawRecord>,
}
