//! Znajda Core - Domain types, upload pipeline, and catalog store.
//!
//! This crate provides the core functionality for Znajda, including:
//!
//! - **Domain models**: [`FoundItemRecord`], [`Dataset`], [`ValidationError`], etc.
//! - **Upload pipeline**: format parsers, sanitizer, schema validator, normalizer
//! - **Catalog**: [`Catalog`] owning the item stores and the dataset directory
//! - **Search**: conjunctive filters with geospatial narrowing
//! - **Traits**: [`ImageAnalyzer`], [`PortalPublisher`] for dependency injection
//!
//! # Architecture
//!
//! Every uploaded row moves through the same pipeline regardless of its
//! source format:
//!
//! ```text
//! bytes -> parse -> sanitize -> validate -> (publish) -> normalize -> search
//! ```
//!
//! [`parse_upload`] dispatches on the file extension and reports per-row
//! problems without aborting the batch. The [`Catalog`] merges two item
//! populations - citizen reports and official dataset rows - into one
//! searchable index, while keeping published raw rows byte-faithful for
//! the open-data downloads.
//!
//! # Example
//!
//! ```ignore
//! use znajda_core::{Catalog, SearchFilters, search};
//!
//! let mut catalog = Catalog::new("datasets");
//! let report = catalog.reload()?;
//! println!("{} datasets, {} items", report.datasets_loaded, report.items_indexed);
//!
//! let filters = SearchFilters {
//!     query: Some("portfel".to_string()),
//!     ..Default::default()
//! };
//! let outcome = search(&catalog.searchable_items(), &filters);
//! ```

pub mod error;
pub mod geo;
pub mod models;
pub mod normalize;
pub mod parse;
pub mod sanitize;
pub mod schema;
pub mod search;
pub mod store;
pub mod traits;

// Error handling
pub use error::AppError;

// Geospatial helpers
pub use geo::{Circle, EARTH_RADIUS_M, haversine_distance_m, within_circle};

// Domain models
pub use models::{
    AnalysisSuggestion, CATEGORIES, DATASET_STATUS_PUBLISHED, Dataset, FoundItemRecord, NewReport,
    OFFICIAL_STATUSES, RawRecord, STATUS_FOUND, STATUS_LOST, STATUS_NOT_FOUND, STATUS_RETURNED,
    ValidationError, content_checksum,
};

// Upload pipeline
pub use normalize::normalize_record;
pub use parse::{ParseOutcome, parse_upload};
pub use sanitize::sanitize_record;
pub use schema::{
    DATE_FORMAT, NUMERIC_FIELDS, OPTIONAL_FIELDS, REQUIRED_FIELDS, json_schema, validate_record,
};

// Search
pub use search::{MapPoint, SearchFilters, SearchOutcome, search};

// Catalog store
pub use store::{Catalog, ReloadFailure, ReloadReport, slugify};

// Traits for dependency injection
pub use traits::{ImageAnalyzer, PortalPublisher};
