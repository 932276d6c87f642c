//! # Core Infrastructure
//!
//! Error types and dependency-injection traits shared by every layer of the client.
//!
//! - **[`error`]**: [`TransportError`] for the HTTP layer, [`CredentialError`] for
//!   session persistence
//! - **[`service`]**: [`HttpTransport`] and [`CredentialStore`], the two seams tests
//!   substitute

pub mod error;
pub mod service;

pub use error::{CredentialError, TransportError};
pub use service::{CredentialStore, HttpTransport};
