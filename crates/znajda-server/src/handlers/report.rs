//! Citizen report and ownership claim endpoints.

use axum::{Json, extract::State};
use serde_json::Value;
use tracing::info;

use znajda_core::NewReport;

use crate::dto::{ClaimRequest, ClaimResponse, ReportRequest, ReportResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Register a citizen lost-item report.
///
/// Name and contact are required; everything else is optional. The
/// report joins the searchable catalog immediately under the `lost`
/// status.
#[utoipa::path(
    post,
    path = "/report",
    request_body = ReportRequest,
    responses(
        (status = 200, description = "Report registered", body = ReportResponse),
        (status = 400, description = "Missing name or contact"),
    ),
    tag = "reports"
)]
pub async fn submit_report(
    State(state): State<AppState>,
    Json(body): Json<ReportRequest>,
) -> Result<Json<ReportResponse>, ApiError> {
    let name = body.name.as_deref().map(str::trim).unwrap_or_default();
    let contact = body.contact.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() || contact.is_empty() {
        return Err(ApiError::BadRequest("Missing required fields".to_string()));
    }

    let report = NewReport {
        name: name.to_string(),
        category: body.category.unwrap_or_default(),
        date: body.date.unwrap_or_default(),
        location: body.location.unwrap_or_default(),
        description: body.description.unwrap_or_default(),
        contact: contact.to_string(),
        security_question: body.security_question.filter(|q| !q.trim().is_empty()),
    };

    let id = state.catalog.write().await.add_report(report);

    Ok(Json(ReportResponse {
        success: true,
        message: "Item reported successfully!".to_string(),
        id,
    }))
}

/// Submit an ownership claim for a reported item.
///
/// The claimant answers the report's security question; the answer is
/// recorded for manual verification by the office, so any non-blank
/// answer is accepted here.
#[utoipa::path(
    post,
    path = "/claim",
    request_body = ClaimRequest,
    responses(
        (status = 200, description = "Claim recorded", body = ClaimResponse),
        (status = 400, description = "Missing item id or answer"),
        (status = 404, description = "No report with that id"),
    ),
    tag = "reports"
)]
pub async fn claim_item(
    State(state): State<AppState>,
    Json(body): Json<ClaimRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let item_id = parse_item_id(body.item_id.as_ref())
        .ok_or_else(|| ApiError::BadRequest("Missing or invalid item_id".to_string()))?;

    let answer = body.answer.as_deref().map(str::trim).unwrap_or_default();
    if answer.is_empty() {
        return Err(ApiError::BadRequest("Missing required field: answer".to_string()));
    }

    let known = state.catalog.read().await.find_report(item_id).is_some();
    if !known {
        return Err(ApiError::NotFound(format!("Item not found: {}", item_id)));
    }

    info!(item_id, "ownership claim submitted");

    Ok(Json(ClaimResponse {
        success: true,
        message: "Dziękujemy! Twoje zgłoszenie zostało przekazane do weryfikacji.".to_string(),
    }))
}

/// Claim forms post the id as a string; accept both shapes.
fn parse_item_id(value: Option<&Value>) -> Option<u64> {
    match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}
