//! Data Transfer Objects for the REST API.
//!
//! Request and response types are kept separate from the domain models
//! in `znajda-core`, so the wire format can evolve without touching the
//! catalog.

pub mod request;
pub mod response;

pub use request::{ClaimRequest, PublishRequest, ReportRequest, SaveEditsRequest, SearchQuery};
pub use response::{
    AnalyzeResponse, ClaimResponse, DatasetDto, HealthResponse, ItemDto, MapPointDto,
    PublishResponse, ReportResponse, RowErrorDto, SaveEditsResponse, SearchResponse,
    SuggestionDto, UploadResponse, WorkingSetResponse,
};
