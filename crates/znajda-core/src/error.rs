use thiserror::Error;

/// Application-wide error types for Znajda operations.
///
/// Row-level validation problems are not errors: they travel as
/// [`ValidationError`](crate::models::ValidationError) values next to
/// the rows that did parse, so one bad row never aborts a batch. This
/// enum covers the failures that do abort an operation.
#[derive(Error, Debug)]
pub enum AppError {
    /// Filesystem operation failed (dataset directory scan, file read/write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Requested dataset is neither on disk nor in the in-memory index.
    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic error with a message.
    #[error("Error: {0}")]
    Generic(String),
}

impl AppError {
    /// Creates a generic error with a custom message.
    pub fn generic(msg: impl Into<String>) -> Self {
        Self::Generic(msg.into())
    }

    /// Creates a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_not_found_display() {
        let err = AppError::DatasetNotFound("rzeczy-znalezione-2024".to_string());
        assert_eq!(err.to_string(), "Dataset not found: rzeczy-znalezione-2024");
    }

    #[test]
    fn test_generic_error_helper() {
        let err = AppError::generic("something went wrong");
        assert_eq!(err.to_string(), "Error: something went wrong");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: AppError = json_err.into();
        assert!(matches!(err, AppError::SerializationError(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AppError = io_err.into();
        assert!(err.to_string().starts_with("I/O error:"));
    }
}
