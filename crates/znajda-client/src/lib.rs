//! Znajda Client - clients for external services.
//!
//! This crate provides implementations of the `znajda-core` collaborator
//! traits:
//!
//! - [`vision`] - image analysis producing report-form suggestions
//! - [`portal`] - dataset push to the dane.gov.pl open-data portal
//!
//! Both are deterministic mocks today; real integrations replace them
//! behind the same traits without touching the server.

pub mod portal;
pub mod vision;

pub use portal::DaneGovClient;
pub use vision::StubVisionClient;
