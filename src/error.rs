//! Error types for corkboard.

use thiserror::Error;

/// Common error type for corkboard.
#[derive(Error, Debug)]
pub enum CorkboardError {
    /// Database error.
    ///
    /// This is a generic database error that wraps errors from the storage
    /// backend. Database errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// Board document encode/decode error.
    #[error("document error: {0}")]
    Document(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Password hashing or hash decoding error.
    #[error("password hash error: {0}")]
    Password(String),

    /// Validation error for caller input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for CorkboardError {
    fn from(e: sqlx::Error) -> Self {
        CorkboardError::Database(e.to_string())
    }
}

// Conversion from document codec errors
impl From<serde_json::Error> for CorkboardError {
    fn from(e: serde_json::Error) -> Self {
        CorkboardError::Document(e.to_string())
    }
}

/// Result type alias for corkboard operations.
pub type Result<T> = std::result::Result<T, CorkboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_display() {
        let err = CorkboardError::Database("connection closed".to_string());
        assert_eq!(err.to_string(), "database error: connection closed");
    }

    #[test]
    fn test_document_error_display() {
        let err = CorkboardError::Document("expected value at line 1".to_string());
        assert_eq!(
            err.to_string(),
            "document error: expected value at line 1"
        );
    }

    #[test]
    fn test_validation_error_display() {
        let err = CorkboardError::Validation("text is required".to_string());
        assert_eq!(err.to_string(), "validation error: text is required");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = CorkboardError::NotFound("thread".to_string());
        assert_eq!(err.to_string(), "thread not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CorkboardError = io_err.into();
        assert!(matches!(err, CorkboardError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_document_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: CorkboardError = json_err.into();
        assert!(matches!(err, CorkboardError::Document(_)));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(CorkboardError::NotFound("board".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
