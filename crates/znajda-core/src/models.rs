//! Domain models for the found-item catalog.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Raw field mapping for one row, as parsed from an uploaded file or a
/// request body. Keys follow either the Polish canonical field names or
/// the generic alias set; [`crate::normalize`] resolves both.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Official status: the item is in storage, waiting for its owner.
pub const STATUS_FOUND: &str = "znaleziony";
/// Official status: reported to the office but never recovered.
pub const STATUS_NOT_FOUND: &str = "nieznaleziony";
/// Official status: returned to its owner.
pub const STATUS_RETURNED: &str = "oddane";
/// Citizen-report status. Kept outside the official set so the two
/// populations stay distinguishable after merging.
pub const STATUS_LOST: &str = "lost";

/// Closed status vocabulary for official dataset records.
pub const OFFICIAL_STATUSES: [&str; 3] = [STATUS_FOUND, STATUS_NOT_FOUND, STATUS_RETURNED];

/// Status carried by every dataset registered in the catalog.
pub const DATASET_STATUS_PUBLISHED: &str = "Opublikowany";

/// Category choices offered on both the citizen and official forms,
/// code-point sorted with the catch-all entry last.
pub const CATEGORIES: [&str; 43] = [
    "Aparat fotograficzny",
    "Bagaż",
    "Biżuteria",
    "Buty",
    "Czapka",
    "Dokumenty",
    "Dowód osobisty",
    "Hulajnoga",
    "Instrument muzyczny",
    "Jedzenie",
    "Kabel",
    "Karta płatnicza",
    "Kask",
    "Klucze",
    "Kosmetyczka",
    "Książka",
    "Kurtka",
    "Laptop",
    "Leki",
    "Napój",
    "Okulary",
    "Parasol",
    "Paszport",
    "Plecak",
    "Portfel",
    "Powerbank",
    "Prawo jazdy",
    "Rower",
    "Rękawiczki",
    "Sprzęt sportowy",
    "Szalik",
    "Słuchawki",
    "Tablet",
    "Telefon",
    "Torba sportowa",
    "Torebka",
    "Ubranie",
    "Walizka",
    "Wózek dziecięcy",
    "Zabawka",
    "Zegarek",
    "Ładowarka",
    "Inne",
];

/// Canonical, search-ready found-item record.
///
/// Produced by [`crate::normalize::normalize_record`] from a [`RawRecord`]
/// or built directly from a citizen report. String fields hold the empty
/// string rather than `None` when a source value is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundItemRecord {
    /// Unique within the catalog; assigned once, never reused.
    pub id: u64,
    pub name: String,
    pub category: String,
    /// Finding (or loss) date, `YYYY-MM-DD`.
    pub date: String,
    /// Display label: city and street joined, or the raw location text.
    pub location: String,
    pub location_city: String,
    pub location_street: String,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    /// Uncertainty radius around the coordinates, in meters.
    pub location_radius: Option<f64>,
    pub description: String,
    pub contact: String,
    pub status: String,
    /// Ownership-proof question; only citizen reports carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_question: Option<String>,
}

/// Citizen lost-item report, pre-insertion shape.
///
/// The catalog assigns the id and the `lost` status when the report is
/// recorded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewReport {
    pub name: String,
    pub category: String,
    pub date: String,
    pub location: String,
    pub description: String,
    pub contact: String,
    pub security_question: Option<String>,
}

/// Summary of one published (or pre-loaded) dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Slug derived from the title; doubles as the backing file stem.
    pub id: String,
    pub title: String,
    /// Publish date, `YYYY-MM-DD`.
    pub date: String,
    /// Number of records the dataset held at registration time.
    pub count: usize,
    pub status: String,
}

/// Validation problems for one row of an uploaded batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// 1-based row index within the batch; 0 marks a whole-file failure.
    pub row: usize,
    pub errors: Vec<String>,
}

/// Report-form suggestion produced by an image analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSuggestion {
    pub name: String,
    pub category: String,
    pub description: String,
    pub location: String,
    /// Suggested finding date, `YYYY-MM-DD`.
    pub date: String,
}

/// Hex-encoded SHA-256 checksum of uploaded content.
///
/// Attached to upload responses so clients can verify what the server
/// actually received.
pub fn content_checksum(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
