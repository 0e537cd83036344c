//! Trait seams for external collaborators.
//!
//! The image analyzer and the open-data portal push are injected into
//! the server, so handlers can run against test doubles and a real
//! integration can be swapped in without touching the HTTP layer.

use std::future::Future;

use crate::error::AppError;
use crate::models::{AnalysisSuggestion, Dataset};

/// Image analysis service suggesting report-form fields from a photo.
pub trait ImageAnalyzer: Send + Sync + Clone {
    /// Produces a field suggestion for the uploaded image.
    fn analyze(
        &self,
        filename: &str,
        bytes: &[u8],
    ) -> impl Future<Output = Result<AnalysisSuggestion, AppError>> + Send;
}

/// Push channel to the external open-data portal.
pub trait PortalPublisher: Send + Sync + Clone {
    /// Announces a freshly published dataset to the portal and returns
    /// its confirmation message.
    fn publish_dataset(
        &self,
        dataset: &Dataset,
    ) -> impl Future<Output = Result<String, AppError>> + Send;
}
