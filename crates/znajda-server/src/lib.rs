//! Znajda Server - REST API for the lost-and-found catalog.
//!
//! This crate provides the HTTP surface over `znajda-core`:
//!
//! - **Search**: combined catalog of citizen reports and official items
//! - **Reports**: citizen lost-item reports, claims, and image analysis
//! - **Datasets**: official upload, validation, editing, and publishing
//! - **Downloads**: open-data exports, per dataset and combined
//!
//! # API Documentation
//!
//! When running the server, interactive API documentation is available
//! at `/swagger-ui`.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
