//! HTTP request handlers for API endpoints.

pub mod analyze;
pub mod download;
pub mod edits;
pub mod health;
pub mod publish;
pub mod report;
pub mod schema;
pub mod search;
pub mod upload;

use axum::extract::Multipart;

use crate::error::ApiError;

/// An uploaded multipart file, fully buffered.
pub(crate) struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Pulls the named file field out of a multipart body.
///
/// Follows the classic form-upload contract: a missing field and an
/// empty filename are distinct client errors, reported as `No <name>
/// part` and `No selected file` respectively.
pub(crate) async fn read_upload_field(
    mut multipart: Multipart,
    field_name: &str,
) -> Result<UploadedFile, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some(field_name) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(ApiError::BadRequest("No selected file".to_string()));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?;

        return Ok(UploadedFile {
            filename,
            bytes: bytes.to_vec(),
        });
    }

    Err(ApiError::BadRequest(format!("No {} part", field_name)))
}
