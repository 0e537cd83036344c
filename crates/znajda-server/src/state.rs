use std::sync::Arc;

use tokio::sync::RwLock;

use znajda_client::{DaneGovClient, StubVisionClient};
use znajda_core::Catalog;

/// Shared application state for all handlers.
///
/// Axum clones this per request via `with_state()`, so every field must
/// be cheap to clone. The catalog sits behind one coarse `RwLock`:
/// uploads, edits, and publishes all race on the same in-memory stores,
/// and none of the guarded sections awaits, so the single lock stays
/// uncontended in practice.
#[derive(Clone)]
pub struct AppState {
    /// Item stores and dataset directory, behind a single writer lock
    pub catalog: Arc<RwLock<Catalog>>,

    /// Image analysis client backing `/analyze`
    pub vision: StubVisionClient,

    /// Open-data portal push client used after a publish
    pub portal: DaneGovClient,
}

impl AppState {
    /// Creates application state around an already-loaded catalog.
    pub fn new(catalog: Catalog, vision: StubVisionClient, portal: DaneGovClient) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            vision,
            portal,
        }
    }
}
