//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! Every call goes through [`ApiClient::request`], which:
//! 1. joins the path onto the configured base URL
//! 2. attaches `Authorization: Bearer <token>` unless the path is under `/auth/`
//!    (the token is read from the credential store at send time; no token, no header)
//! 3. tags the request with a fresh `X-Request-Id`
//! 4. decodes the body as a response envelope
//!
//! There is no retry and no automatic token refresh.

use std::sync::Arc;
use std::time::Instant;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use shared::dto::Envelope;

use super::transport::HttpRequest;
use crate::core::error::TransportError;
use crate::core::service::{CredentialStore, HttpTransport};

const AUTH_PREFIX: &str = "/auth/";
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Decoded response: the HTTP status and, when the body parsed, its envelope.
///
/// An empty body leaves `envelope` empty whatever the status. A non-empty 2xx body
/// must be an envelope (otherwise the call fails with
/// [`TransportError::MalformedResponse`]); a non-2xx body that does not parse
/// leaves `envelope` empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub envelope: Option<Envelope<Value>>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client for communicating with the backend API server.
///
/// Cheap to clone: the transport and credential store are shared.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<dyn CredentialStore>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The store requests are signed from. Repositories that own the session
    /// (auth, user) write through this same handle.
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    /// Send one request and decode its envelope.
    #[tracing::instrument(
        name = "api_request",
        skip(self, body, query),
        fields(request_id = tracing::field::Empty, status = tracing::field::Empty)
    )]
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        query: Vec<(String, String)>,
    ) -> Result<ApiResponse, TransportError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let mut headers = vec![
            (REQUEST_ID_HEADER.to_string(), request_id),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        if requires_auth(path) {
            match self.credentials.access_token().filter(|token| !token.is_empty()) {
                Some(token) => headers.push(("Authorization".to_string(), format!("Bearer {token}"))),
                None => tracing::debug!("No access token stored, sending unauthenticated"),
            }
        }

        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers,
            query,
            body,
        };

        let start = Instant::now();
        let response = self.transport.execute(request).await.map_err(|e| {
            tracing::error!(error = %e, duration_ms = start.elapsed().as_millis(), "Request failed");
            e
        })?;
        let duration_ms = start.elapsed().as_millis();
        tracing::Span::current().record("status", response.status);

        let is_success = (200..300).contains(&response.status);
        let envelope = match serde_json::from_str::<Envelope<Value>>(&response.body) {
            Ok(envelope) => Some(envelope),
            Err(_) if response.body.trim().is_empty() => {
                tracing::debug!(duration_ms, "Response has no body");
                None
            }
            Err(e) if is_success => {
                tracing::error!(error = %e, duration_ms, "Success response is not an envelope");
                return Err(TransportError::MalformedResponse(e.to_string()));
            }
            Err(e) => {
                tracing::debug!(error = %e, "Error response body is not an envelope");
                None
            }
        };

        if is_success {
            tracing::info!(duration_ms, "Request completed");
        } else {
            tracing::warn!(
                duration_ms,
                server_message = envelope.as_ref().and_then(|env| env.message.as_deref()).unwrap_or(""),
                "Request rejected"
            );
        }

        Ok(ApiResponse {
            status: response.status,
            envelope,
        })
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse, TransportError> {
        self.request(Method::GET, path, None, Vec::new()).await
    }

    pub async fn get_with<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<ApiResponse, TransportError> {
        let query = query_pairs(query)?;
        self.request(Method::GET, path, None, query).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse, TransportError> {
        let body = json_body(body)?;
        self.request(Method::POST, path, Some(body), Vec::new()).await
    }

    /// `POST` without a body (logout).
    pub async fn post_empty(&self, path: &str) -> Result<ApiResponse, TransportError> {
        self.request(Method::POST, path, None, Vec::new()).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse, TransportError> {
        let body = json_body(body)?;
        self.request(Method::PUT, path, Some(body), Vec::new()).await
    }

    pub async fn patch(&self, path: &str) -> Result<ApiResponse, TransportError> {
        self.request(Method::PATCH, path, None, Vec::new()).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse, TransportError> {
        self.request(Method::DELETE, path, None, Vec::new()).await
    }
}

fn requires_auth(path: &str) -> bool {
    !path.starts_with(AUTH_PREFIX)
}

fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<Value, TransportError> {
    serde_json::to_value(body).map_err(|e| TransportError::InvalidRequest(format!("body: {e}")))
}

/// Flatten a query struct into `key=value` pairs. `None` fields are skipped,
/// strings are sent raw and everything else in its JSON form.
fn query_pairs<Q: Serialize + ?Sized>(query: &Q) -> Result<Vec<(String, String)>, TransportError> {
    let value = serde_json::to_value(query).map_err(|e| TransportError::InvalidRequest(format!("query: {e}")))?;
    let Value::Object(map) = value else {
        return Err(TransportError::InvalidRequest("query must serialize to an object".to_string()));
    };

    Ok(map
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(text) => Some((key, text)),
            other => Some((key, other.to_string())),
        })
        .collect())
}

/// Percent-encode one path segment (resource ids are opaque strings).
pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}
