//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! Both are object safe and used as `Arc<dyn ...>`: the [`ApiClient`](crate::services::api::ApiClient)
//! holds one of each, and tests swap in a scripted transport and an in-memory store.

use async_trait::async_trait;

use super::error::{CredentialError, TransportError};
use crate::services::api::transport::{HttpRequest, HttpResponse};
use crate::services::credentials::Session;

/// Sends one fully built HTTP request.
///
/// Implementations must not retry and must map every timeout to
/// [`TransportError::Timeout`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Holder of the current session.
///
/// Reads are synchronous so the API client can sign a request at send time.
pub trait CredentialStore: Send + Sync {
    /// Current session, if logged in.
    fn session(&self) -> Option<Session>;

    /// Replace the stored session.
    fn save_session(&self, session: Session) -> Result<(), CredentialError>;

    /// Forget the session. After this returns, [`session`](Self::session) is `None`
    /// even if removing persisted state failed.
    fn clear(&self) -> Result<(), CredentialError>;

    fn access_token(&self) -> Option<String> {
        self.session().map(|session| session.access_token)
    }

    fn refresh_token(&self) -> Option<String> {
        self.session().map(|session| session.refresh_token)
    }

    fn is_authenticated(&self) -> bool {
        self.access_token().is_some_and(|token| !token.is_empty())
    }
}
