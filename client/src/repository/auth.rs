//! # Auth Repository
//!
//! Owns the session lifecycle: login stores it, refresh overwrites it, local logout
//! clears it. Remote logout lives in [`UserRepository`](super::UserRepository).

use lib_core::{DomainError, Result};
use shared::dto::{AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest};

use super::messages::auth as msg;
use super::{resolve, resolve_message};
use crate::services::api::ApiClient;
use crate::services::credentials::Session;

#[derive(Clone)]
pub struct AuthRepository {
    api: ApiClient,
}

impl AuthRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Log in and store the returned session. Returns the server message.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let outcome = self.api.login(&request).await;

        let message = outcome
            .as_ref()
            .ok()
            .and_then(|response| response.envelope.as_ref())
            .and_then(|envelope| envelope.message.clone())
            .filter(|text| !text.trim().is_empty());
        let auth: AuthResponse = resolve(outcome, msg::LOGIN_FAILED, msg::INVALID_PAYLOAD)?;

        self.store(Session::from(auth))?;
        tracing::info!("Login successful");
        Ok(message.unwrap_or_else(|| msg::LOGIN_SUCCESS.to_string()))
    }

    /// Create an account. Does not log in.
    #[tracing::instrument(skip(self, password))]
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<String> {
        let request = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let outcome = self.api.register(&request).await;
        resolve_message(outcome, msg::REGISTER_FAILED, msg::REGISTER_SUCCESS)
    }

    /// Exchange the stored refresh token for a new session.
    ///
    /// Never called automatically; a 401 elsewhere does not trigger it.
    #[tracing::instrument(skip(self))]
    pub async fn refresh_session(&self) -> Result<String> {
        let Some(refresh_token) = self.api.credentials().refresh_token().filter(|t| !t.is_empty()) else {
            return Err(DomainError::RequestFailed(msg::NOT_LOGGED_IN.to_string()));
        };

        let outcome = self.api.refresh_token(&RefreshTokenRequest { refresh_token }).await;
        let auth: AuthResponse = resolve(outcome, msg::REFRESH_FAILED, msg::INVALID_PAYLOAD)?;

        self.store(Session::from(auth))?;
        tracing::info!("Session refreshed");
        Ok(msg::REFRESH_SUCCESS.to_string())
    }

    /// Forget the local session without contacting the server.
    pub fn logout_local(&self) {
        if let Err(e) = self.api.credentials().clear() {
            tracing::warn!(error = %e, "Failed to remove persisted session");
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.api.credentials().is_authenticated()
    }

    pub fn current_session(&self) -> Option<Session> {
        self.api.credentials().session()
    }

    fn store(&self, session: Session) -> Result<()> {
        self.api.credentials().save_session(session).map_err(|e| {
            tracing::error!(error = %e, "Failed to persist session");
            DomainError::RequestFailed(format!("Gagal menyimpan sesi: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::TransportError;
    use crate::core::service::CredentialStore;
    use crate::services::credentials::MemoryCredentialStore;
    use crate::test_support::MockTransport;
    use serde_json::json;
    use std::sync::Arc;

    fn repo(transport: &Arc<MockTransport>) -> (AuthRepository, Arc<MemoryCredentialStore>) {
        let store = Arc::new(MemoryCredentialStore::new());
        let credentials: Arc<dyn CredentialStore> = store.clone();
        let api = ApiClient::new("http://api.test/api", transport.clone(), credentials);
        (AuthRepository::new(api), store)
    }

    #[tokio::test]
    async fn test_login_stores_session() {
        // Arrange
        let transport = MockTransport::new();
        transport.push_json(200, json!({
            "success": true,
            "data": {
                "accessToken": "A",
                "refreshToken": "B",
                "user": {"id": "1", "username": "bob", "email": "b@x.com"}
            }
        }));
        let (repo, store) = repo(&transport);

        // Act
        let message = repo.login("bob", "secret").await.unwrap();

        // Assert
        assert_eq!(message, "Login berhasil");
        let session = store.session().unwrap();
        assert_eq!(session.access_token, "A");
        assert_eq!(session.refresh_token, "B");
        assert_eq!(session.user_id, "1");
        assert_eq!(session.username, "bob");
        assert!(repo.is_logged_in());
    }

    #[tokio::test]
    async fn test_login_rejected_keeps_store_empty() {
        let transport = MockTransport::new();
        transport.push_json(401, json!({"success": false, "message": "Username atau password salah"}));
        let (repo, store) = repo(&transport);

        let err = repo.login("bob", "wrong").await.unwrap_err();

        assert_eq!(err, DomainError::RequestFailed("Username atau password salah".to_string()));
        assert!(store.session().is_none());
    }

    #[tokio::test]
    async fn test_login_without_payload_is_invalid() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"success": true, "data": null}));
        let (repo, store) = repo(&transport);

        let err = repo.login("bob", "secret").await.unwrap_err();

        assert_eq!(err, DomainError::InvalidPayload("Data tidak valid".to_string()));
        assert!(store.session().is_none());
    }

    #[tokio::test]
    async fn test_register_uses_server_message() {
        let transport = MockTransport::new();
        transport.push_json(201, json!({"success": true, "message": "Akun dibuat", "data": {"id": "9"}}));
        let (repo, store) = repo(&transport);

        assert_eq!(repo.register("bob", "b@x.com", "secret1").await.unwrap(), "Akun dibuat");
        assert!(store.session().is_none());
    }

    #[tokio::test]
    async fn test_refresh_overwrites_session() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({
            "success": true,
            "data": {
                "accessToken": "A2",
                "refreshToken": "B2",
                "user": {"id": "1", "username": "bob", "email": "b@x.com"}
            }
        }));
        let (repo, store) = repo(&transport);
        store.save_session(crate::test_support::session()).unwrap();

        repo.refresh_session().await.unwrap();

        assert_eq!(store.access_token().as_deref(), Some("A2"));
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.body, Some(json!({"refreshToken": "B"})));
        assert!(sent.header("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_refresh_without_session_does_not_call_server() {
        let transport = MockTransport::new();
        let (repo, _store) = repo(&transport);

        assert!(repo.refresh_session().await.is_err());
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_network_failure_is_connection_error() {
        let transport = MockTransport::new();
        transport.push_error(TransportError::Network("connection refused".to_string()));
        let (repo, _store) = repo(&transport);

        let err = repo.register("bob", "b@x.com", "secret1").await.unwrap_err();

        assert!(err.is_connection());
    }
}
