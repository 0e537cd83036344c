//! Conjunctive filtering over the combined item catalog.

use serde::{Deserialize, Serialize};

use crate::geo::{Circle, within_circle};
use crate::models::FoundItemRecord;

/// Filter set applied conjunctively.
///
/// `None` and blank strings both mean "filter not active", so HTTP query
/// params can be passed through without cleanup.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    /// Case-insensitive substring matched against name or description.
    pub query: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Case-insensitive substring matched against the location label.
    pub location: Option<String>,
    /// Exact `YYYY-MM-DD` date match.
    pub date: Option<String>,
    /// Geospatial narrowing; ignored unless the radius is positive.
    pub circle: Option<Circle>,
}

/// Map marker for one located item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub lat: f64,
    pub lng: f64,
}

/// Search results: the narrowed list plus the wider map distribution.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub items: Vec<FoundItemRecord>,
    pub map_points: Vec<MapPoint>,
}

/// Applies the filters over the given items, preserving input order.
///
/// Map points are extracted after the text, category, location, and date
/// filters but before the circle narrowing, so the map shows the wider
/// candidate distribution while the list shows the final set. Only items
/// with both coordinates produce a marker.
pub fn search(items: &[FoundItemRecord], filters: &SearchFilters) -> SearchOutcome {
    let query = lowered(filters.query.as_deref());
    let location = lowered(filters.location.as_deref());
    let category = active(filters.category.as_deref());
    let date = active(filters.date.as_deref());

    let mut matched: Vec<&FoundItemRecord> = items
        .iter()
        .filter(|item| match &query {
            Some(q) => {
                item.name.to_lowercase().contains(q.as_str())
                    || item.description.to_lowercase().contains(q.as_str())
            }
            None => true,
        })
        .filter(|item| category.map_or(true, |c| item.category == c))
        .filter(|item| match &location {
            Some(l) => item.location.to_lowercase().contains(l.as_str()),
            None => true,
        })
        .filter(|item| date.map_or(true, |d| item.date == d))
        .collect();

    let map_points = matched
        .iter()
        .filter_map(|item| match (item.location_lat, item.location_lng) {
            (Some(lat), Some(lng)) => Some(MapPoint {
                id: item.id,
                name: item.name.clone(),
                category: item.category.clone(),
                lat,
                lng,
            }),
            _ => None,
        })
        .collect();

    if let Some(circle) = &filters.circle {
        if circle.radius_m > 0.0 {
            matched.retain(|item| within_circle(item.location_lat, item.location_lng, circle));
        }
    }

    SearchOutcome {
        items: matched.into_iter().cloned().collect(),
        map_points,
    }
}

fn active(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn lowered(value: Option<&str>) -> Option<String> {
    active(value).map(str::to_lowercase)
}
