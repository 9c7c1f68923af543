//! Error types for the upload pipeline.
//!
//! - [`ValidationError`] - A file rejected before any session starts
//! - [`TransportError`] - A session that ended without a successful response
//! - [`ConfigError`] - An unusable upload configuration
//! - [`SessionError`] - Top-level controller errors
//!
//! Conversion into [`SessionError`] is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Validation Errors
// =============================================================================

/// Why a file was rejected.
///
/// The display text is the user-visible message (without status emoji).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The file's declared type is not in the allow-list.
    #[error("File \"{0}\" type is not allowed")]
    UnsupportedType(String),

    /// The file's size exceeds the configured ceiling.
    #[error("File \"{0}\" is too large")]
    TooLarge(String),
}

impl ValidationError {
    /// Name of the offending file.
    pub fn file_name(&self) -> &str {
        match self {
            ValidationError::UnsupportedType(name) | ValidationError::TooLarge(name) => name,
        }
    }
}

/// `Ok(())` is `Valid`; `Err` carries the first violation found.
pub type ValidationOutcome = Result<(), ValidationError>;

// =============================================================================
// Transport Errors
// =============================================================================

/// Terminal failure of an upload.
///
/// Status `0` means the transport itself never produced a response. It is
/// reported the same way as any other non-200 status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Upload failed with status {0}")]
    NonSuccessStatus(u16),
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while loading or checking an [`crate::UploadConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON.
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Endpoint is empty or not an http(s) URL.
    #[error("Invalid upload endpoint: {0:?}")]
    InvalidEndpoint(String),

    /// Multipart field name is empty.
    #[error("Multipart field name must not be empty")]
    EmptyFieldName,

    /// Allow-list accepts nothing.
    #[error("Allow-list must contain at least one entry")]
    EmptyAllowList,

    /// Size limit of zero rejects every non-empty file.
    #[error("Maximum file size must be greater than zero")]
    ZeroSizeLimit,
}

// =============================================================================
// Session Errors (top-level)
// =============================================================================

/// Errors returned by [`crate::UploadController`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A session is already pending; the new submission was not started.
    #[error("An upload is already in progress")]
    Busy,

    /// A transport event arrived with no pending session.
    #[error("No upload is in progress")]
    NotPending,

    /// Validation rejected the file set.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The upload finished unsuccessfully.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for transport outcomes.
pub type TransportResult<T> = Result<T, TransportError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for controller operations.
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_name_the_file() {
        let err = ValidationError::UnsupportedType("doc.pdf".into());
        assert_eq!(err.to_string(), "File \"doc.pdf\" type is not allowed");
        assert_eq!(err.file_name(), "doc.pdf");

        let err = ValidationError::TooLarge("big.jpg".into());
        assert_eq!(err.to_string(), "File \"big.jpg\" is too large");
        assert_eq!(err.file_name(), "big.jpg");
    }

    #[test]
    fn test_error_conversion_chain() {
        let session_err: SessionError = ValidationError::TooLarge("a.png".into()).into();
        assert!(session_err.to_string().contains("a.png"));

        let session_err: SessionError = TransportError::NonSuccessStatus(500).into();
        assert!(session_err.to_string().contains("500"));
    }
}
