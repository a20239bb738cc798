//! Error handling utilities for the youmatter engine.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the engine, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents rejected input that was refused before any persistence attempt.
///
/// Validation failures are always surfaced to the caller so the user can be
/// re-prompted; nothing is written to the backing store when validation fails.
///
/// # Examples
///
/// ```
/// use youmatter::errors::ValidationError;
///
/// let error = ValidationError::UnknownMood("grumpy".to_string());
/// assert!(format!("{}", error).contains("grumpy"));
///
/// let error = ValidationError::EmptyContent;
/// assert!(format!("{}", error).contains("empty"));
/// ```
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The supplied mood category is not one of the recognized categories.
    #[error("Unrecognized mood category '{0}'. Expected one of: happy, sad, anxious, angry, calm, excited, tired, stressed.")]
    UnknownMood(String),

    /// Journal content was empty after trimming surrounding whitespace.
    #[error("Journal content cannot be empty. Write something before saving.")]
    EmptyContent,
}

/// Represents failures of the backing key-value store.
///
/// These errors are surfaced to the caller without retry; local-only storage
/// failures are rare and typically indicate quota exhaustion or permission
/// problems requiring user action.
///
/// Note: a *missing* or *malformed* blob is not a `StorageError` — load
/// operations recover to an empty collection in those cases (see
/// [`crate::store::LoadOutcome`]).
///
/// # Examples
///
/// ```
/// use youmatter::errors::StorageError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::PermissionDenied, "permission denied");
/// let error = StorageError::WriteFailed {
///     key: "youmatter_moods".to_string(),
///     source: io_error,
/// };
/// assert!(format!("{}", error).contains("youmatter_moods"));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading the blob for a key failed (distinct from the key being absent).
    #[error("Failed to read stored data for key '{key}': {source}. Please check file permissions and that the storage directory is accessible.")]
    ReadFailed {
        /// The storage key that could not be read
        key: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing the blob for a key failed.
    #[error("Failed to write data for key '{key}': {source}. Please check available disk space and file permissions.")]
    WriteFailed {
        /// The storage key that could not be written
        key: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Deleting the blob for a key failed.
    #[error("Failed to delete data for key '{key}': {source}")]
    DeleteFailed {
        /// The storage key that could not be deleted
        key: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The storage directory could not be created or opened.
    #[error("Storage directory '{path}' is not usable: {source}. Please check that the location exists and is writable.")]
    Unavailable {
        /// The storage directory path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Serializing an entry list before persisting it failed.
    #[error("Failed to serialize data for key '{key}': {source}")]
    Serialize {
        /// The storage key the data was destined for
        key: String,
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },
}

/// Represents all possible errors that can occur in the youmatter engine.
///
/// This enum is the central error type used across the crate, with variants
/// for different error categories. It uses `thiserror` for deriving the
/// `Error` trait implementation and formatted error messages. No error is
/// fatal to the process; all failures are scoped to the single invoking call.
///
/// # Examples
///
/// Converting from a validation error:
/// ```
/// use youmatter::errors::{AppError, ValidationError};
///
/// let app_error: AppError = ValidationError::EmptyContent.into();
/// match app_error {
///     AppError::Validation(_) => {}
///     _ => panic!("Expected Validation variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Input rejected before any persistence attempt.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Backing store read/write/delete failure.
    ///
    /// This variant uses a dedicated StorageError type to provide detailed
    /// information about what went wrong with the key-value store.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Serializing the export bundle failed.
    #[error("Export error: {0}")]
    Export(#[from] serde_json::Error),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// This type alias is used throughout the engine to represent operations
/// that may fail with an `AppError`.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::UnknownMood("grumpy".to_string());
        let message = format!("{}", error);
        assert!(message.contains("grumpy"));
        assert!(message.contains("happy"));

        let error = ValidationError::EmptyContent;
        assert!(format!("{}", error).contains("empty"));
    }

    #[test]
    fn test_storage_error_display() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let error = StorageError::ReadFailed {
            key: "youmatter_moods".to_string(),
            source: io_error,
        };
        let message = format!("{}", error);
        assert!(message.contains("youmatter_moods"));
        assert!(message.contains("permission denied"));
    }

    #[test]
    fn test_app_error_from_validation_error() {
        let app_error: AppError = ValidationError::EmptyContent.into();
        match app_error {
            AppError::Validation(ValidationError::EmptyContent) => {}
            _ => panic!("Expected AppError::Validation variant"),
        }
    }

    #[test]
    fn test_app_error_from_storage_error() {
        let io_error = io::Error::other("disk full");
        let storage_error = StorageError::WriteFailed {
            key: "youmatter_journals".to_string(),
            source: io_error,
        };
        let app_error: AppError = storage_error.into();
        match app_error {
            AppError::Storage(StorageError::WriteFailed { key, .. }) => {
                assert_eq!(key, "youmatter_journals");
            }
            _ => panic!("Expected AppError::Storage variant"),
        }
    }

    #[test]
    fn test_storage_error_source_chaining() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "directory not found");
        let error = StorageError::Unavailable {
            path: std::path::PathBuf::from("/data/youmatter"),
            source: io_error,
        };

        let source = error
            .source()
            .expect("StorageError::Unavailable should have a source");
        let io_source = source
            .downcast_ref::<io::Error>()
            .expect("Source should be an io::Error");
        assert_eq!(io_source.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_app_error_source_chaining() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let storage_error = StorageError::WriteFailed {
            key: "youmatter_settings".to_string(),
            source: io_error,
        };
        let app_error = AppError::Storage(storage_error);

        // AppError -> StorageError -> io::Error
        let first = app_error
            .source()
            .expect("AppError::Storage should have a source");
        let storage_source = first
            .downcast_ref::<StorageError>()
            .expect("First source should be StorageError");
        let second = storage_source
            .source()
            .expect("StorageError should have a source");
        let io_source = second
            .downcast_ref::<io::Error>()
            .expect("Second source should be io::Error");
        assert_eq!(io_source.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_app_error_display_prefixes() {
        let validation: AppError = ValidationError::EmptyContent.into();
        assert!(format!("{}", validation).starts_with("Validation error: "));

        let storage: AppError = StorageError::DeleteFailed {
            key: "youmatter_moods".to_string(),
            source: io::Error::other("busy"),
        }
        .into();
        assert!(format!("{}", storage).starts_with("Storage error: "));
    }
}
