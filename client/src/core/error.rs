//! # Client Error Types
//!
//! Errors below the repository layer. Repositories convert every [`TransportError`]
//! into [`lib_core::DomainError::ConnectionFailed`], so neither type reaches a state
//! holder.

use thiserror::Error;

/// Failure to obtain a usable HTTP response.
///
/// Callers do not branch on the variant; it exists for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection refused, DNS failure, TLS failure, reset.
    #[error("network error: {0}")]
    Network(String),

    /// Connect, read or overall request bound exceeded.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// A 2xx response whose body is not a response envelope.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The request could not be built (unserializable body or query, bad URL).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_builder() {
            TransportError::InvalidRequest(err.to_string())
        } else if err.is_decode() {
            TransportError::MalformedResponse(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

/// Failure to persist or load the local session.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("credential file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("credential file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for `Result<T, TransportError>`.
pub type TransportResult<T> = std::result::Result<T, TransportError>;
