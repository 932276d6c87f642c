//! # Domain Errors
//!
//! Every repository operation resolves to `Result<T, DomainError>`. Transport and
//! parsing failures never escape in any other form.
//!
//! ## Error Categories
//!
//! 1. [`ConnectionFailed`](DomainError::ConnectionFailed): the request never produced a
//!    usable response (network down, timeout, body that is not an envelope)
//! 2. [`RequestFailed`](DomainError::RequestFailed): the server answered but refused
//!    (`success == false` or a non-2xx status). Carries the server message verbatim,
//!    or a localized fallback when the server sent none
//! 3. [`InvalidPayload`](DomainError::InvalidPayload): the server claimed success but
//!    the payload was missing or did not match the expected shape
//!
//! ## Display
//!
//! `Display` produces the text shown in the error banner:
//!
//! ```rust
//! use lib_core::error::DomainError;
//!
//! let err = DomainError::RequestFailed("Kategori sudah ada".to_string());
//! assert_eq!(err.to_string(), "Kategori sudah ada");
//!
//! let err = DomainError::ConnectionFailed("timed out".to_string());
//! assert_eq!(err.to_string(), "Tidak dapat terhubung ke server: timed out");
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, DomainError>`.
pub type Result<T> = std::result::Result<T, DomainError>;

/// Failure outcome of a repository operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Transport-level failure, with the underlying detail.
    #[error("Tidak dapat terhubung ke server: {0}")]
    ConnectionFailed(String),

    /// Server-side refusal, with the message to display.
    #[error("{0}")]
    RequestFailed(String),

    /// Success envelope without a usable payload.
    #[error("{0}")]
    InvalidPayload(String),
}

impl DomainError {
    /// True when the failure came from the network rather than the server.
    pub fn is_connection(&self) -> bool {
        matches!(self, DomainError::ConnectionFailed(_))
    }
}
