//! Mock push client for the dane.gov.pl open-data portal.

use tracing::info;

use znajda_core::error::AppError;
use znajda_core::models::Dataset;
use znajda_core::traits::PortalPublisher;

/// Confirmation message the portal mock returns for every push.
const PUBLISH_CONFIRMATION: &str = "Zbiór danych został opublikowany w portalu dane.gov.pl";

/// Stand-in for the dane.gov.pl publishing API.
///
/// Logs the outgoing dataset instead of performing an HTTP call. The
/// `/urzad/publish` flow is identical either way: the catalog is updated
/// first and the portal push happens after, so a future real client
/// slots in without handler changes.
#[derive(Debug, Clone)]
pub struct DaneGovClient {
    portal_url: String,
}

impl DaneGovClient {
    pub fn new() -> Self {
        Self {
            portal_url: "https://api.dane.gov.pl".to_string(),
        }
    }

    /// Base URL of the portal this client would push to.
    pub fn base_url(&self) -> &str {
        &self.portal_url
    }
}

impl Default for DaneGovClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PortalPublisher for DaneGovClient {
    async fn publish_dataset(&self, dataset: &Dataset) -> Result<String, AppError> {
        info!(
            portal = %self.portal_url,
            dataset = %dataset.id,
            title = %dataset.title,
            count = dataset.count,
            "pushing dataset to the open-data portal"
        );
        Ok(PUBLISH_CONFIRMATION.to_string())
    }
}
