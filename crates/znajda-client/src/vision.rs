//! Mock image analysis client.
//!
//! A production deployment would call a vision API here. The stub
//! derives a deterministic suggestion from the filename, so the report
//! form can be exercised end to end without credentials or network
//! access, and repeated uploads of the same file suggest the same
//! fields.

use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use znajda_core::error::AppError;
use znajda_core::models::AnalysisSuggestion;
use znajda_core::traits::ImageAnalyzer;

const DETECTED_CATEGORIES: [&str; 5] =
    ["Electronics", "Clothing", "Accessories", "Documents", "Keys"];
/// Colors in Polish, matching the report-form vocabulary.
const DETECTED_COLORS: [&str; 6] =
    ["Czarny", "Niebieski", "Czerwony", "Biały", "Srebrny", "Brązowy"];
const DETECTED_CONDITIONS: [&str; 4] = ["Nowy", "Używany", "Uszkodzony", "Dobry"];

/// Pick-up location suggested for every image.
const DEFAULT_LOCATION: &str = "Główny Hol";
/// Finding date suggested for every image.
const DEFAULT_DATE: &str = "2023-10-27";

/// Simulated processing delay of the analysis backend.
const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

/// Deterministic stand-in for the image analysis service.
///
/// The filename length seeds the category, color, and condition picks,
/// so the same file always yields the same suggestion while different
/// files vary.
#[derive(Debug, Clone)]
pub struct StubVisionClient {
    latency: Duration,
}

impl StubVisionClient {
    /// Creates a client with the default simulated delay.
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
        }
    }

    /// Creates a client with a custom delay. Tests pass
    /// [`Duration::ZERO`] to skip the simulated latency.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for StubVisionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageAnalyzer for StubVisionClient {
    async fn analyze(&self, filename: &str, bytes: &[u8]) -> Result<AnalysisSuggestion, AppError> {
        sleep(self.latency).await;

        let seed = filename.chars().count();
        let category = DETECTED_CATEGORIES[seed % DETECTED_CATEGORIES.len()];
        let color = DETECTED_COLORS[seed * 7 % DETECTED_COLORS.len()];
        let condition = DETECTED_CONDITIONS[seed * 13 % DETECTED_CONDITIONS.len()];

        debug!(filename, size = bytes.len(), category, "image analyzed");

        Ok(AnalysisSuggestion {
            name: format!("{} {}", color, category),
            category: category.to_string(),
            description: format!(
                "Znaleziono: {} {}. Stan: {}.",
                color.to_lowercase(),
                category.to_lowercase(),
                condition.to_lowercase()
            ),
            location: DEFAULT_LOCATION.to_string(),
            date: DEFAULT_DATE.to_string(),
        })
    }
}
