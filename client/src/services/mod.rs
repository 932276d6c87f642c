//! # Services
//!
//! Everything that talks to the outside world: the backend over HTTP and the local
//! credential file.

pub mod api;
pub mod credentials;

pub use api::ApiClient;
pub use credentials::{FileCredentialStore, MemoryCredentialStore, Session};
