//! Unified error type for the item catalog.
//!
//! All crates funnel their failures into [`Error`], which carries enough context
//! for API handlers to derive an HTTP status code via [`Error::http_status`].

use std::fmt;

/// Unified error type covering all failure modes of the catalog.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An uploaded or requested filename cannot be used for storage.
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    /// Request data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A request body exceeded the configured upload limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// The requested entity could not be found.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity (e.g. "item", "category").
        entity: String,
        /// The identifier that was looked up.
        id: String,
    },

    /// A lookup that must match at most one row matched several.
    #[error("{count} {entity} rows match {id}")]
    MultipleResults {
        /// The kind of entity that was looked up.
        entity: String,
        /// The identifier that was looked up.
        id: String,
        /// How many rows matched.
        count: usize,
    },

    /// A database operation failed.
    #[error("Database error: {source}")]
    Database {
        /// The underlying database error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Catch-all for unexpected internal errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Map this error to an appropriate HTTP status code.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::InvalidFilename(_) => 400,
            Error::Validation(_) => 400,
            Error::PayloadTooLarge(_) => 413,
            Error::NotFound { .. } => 404,
            Error::MultipleResults { .. } => 500,
            Error::Database { .. } => 500,
            Error::Io { .. } => 500,
            Error::Internal(_) => 500,
        }
    }

    /// Whether the backing store (database or image directory) failed.
    ///
    /// These failures are fatal for the request and are never retried.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Error::Database { .. } | Error::Io { .. })
    }

    /// Convenience constructor for [`Error::NotFound`].
    pub fn not_found(entity: impl Into<String>, id: impl fmt::Display) -> Self {
        Error::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Convenience constructor for [`Error::MultipleResults`].
    pub fn multiple_results(entity: impl Into<String>, id: impl fmt::Display, count: usize) -> Self {
        Error::MultipleResults {
            entity: entity.into(),
            id: id.to_string(),
            count,
        }
    }

    /// Convenience constructor for [`Error::Database`].
    pub fn database(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Database {
            source: source.into(),
        }
    }

    /// Convenience constructor for [`Error::InvalidFilename`].
    pub fn invalid_filename(filename: impl Into<String>) -> Self {
        Error::InvalidFilename(filename.into())
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = Error::not_found("item", 42);
        assert_eq!(err.to_string(), "item not found: 42");
        assert_eq!(err.http_status(), 404);
    }

    #[test]
    fn invalid_filename_display() {
        let err = Error::invalid_filename("photo");
        assert_eq!(err.to_string(), "Invalid filename: photo");
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn validation_display() {
        let err = Error::Validation("name is required".into());
        assert_eq!(err.to_string(), "Validation error: name is required");
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn payload_too_large_is_413() {
        let err = Error::PayloadTooLarge("length limit exceeded".into());
        assert_eq!(err.http_status(), 413);
        assert!(!err.is_store_unavailable());
    }

    #[test]
    fn multiple_results_display() {
        let err = Error::multiple_results("item", 7, 2);
        assert_eq!(err.to_string(), "2 item rows match 7");
        assert_eq!(err.http_status(), 500);
    }

    #[test]
    fn database_is_store_unavailable() {
        let err = Error::database("unable to open database file");
        assert!(err.to_string().contains("unable to open"));
        assert!(err.is_store_unavailable());
        assert_eq!(err.http_status(), 500);
    }

    #[test]
    fn io_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.is_store_unavailable());
    }

    #[test]
    fn lookup_errors_are_not_store_failures() {
        assert!(!Error::not_found("item", 1).is_store_unavailable());
        assert!(!Error::invalid_filename("x").is_store_unavailable());
    }

    #[test]
    fn internal_display() {
        let err = Error::Internal("unexpected state".into());
        assert_eq!(err.to_string(), "Internal error: unexpected state");
        assert_eq!(err.http_status(), 500);
    }
}
