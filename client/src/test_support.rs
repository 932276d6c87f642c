//! Scripted collaborators for unit tests.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::core::error::TransportError;
use crate::core::service::{CredentialStore, HttpTransport};
use crate::services::api::{ApiClient, HttpRequest, HttpResponse};
use crate::services::credentials::{MemoryCredentialStore, Session};

pub fn session() -> Session {
    Session {
        access_token: "A".to_string(),
        refresh_token: "B".to_string(),
        user_id: "1".to_string(),
        username: "bob".to_string(),
        email: "b@x.com".to_string(),
    }
}

struct Scripted {
    delay: Option<Duration>,
    outcome: Result<HttpResponse, TransportError>,
}

/// Transport that replays queued responses in order and records every request.
///
/// Running out of scripted responses yields a `Network` error.
#[derive(Default)]
pub struct MockTransport {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_raw(&self, status: u16, body: &str) {
        self.push(None, Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push_raw(status, &body.to_string());
    }

    /// Respond only after `delay`, to keep a request in flight.
    pub fn push_json_delayed(&self, delay: Duration, status: u16, body: Value) {
        self.push(Some(delay), Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn push_error(&self, error: TransportError) {
        self.push(None, Err(error));
    }

    fn push(&self, delay: Option<Duration>, outcome: Result<HttpResponse, TransportError>) {
        self.script.lock().push_back(Scripted { delay, outcome });
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().push(request);
        let next = self.script.lock().pop_front();
        match next {
            Some(Scripted { delay, outcome }) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                outcome
            }
            None => Err(TransportError::Network("no scripted response".to_string())),
        }
    }
}

/// Client over `transport` with a logged-in in-memory store.
pub fn logged_in_client(transport: &Arc<MockTransport>) -> (ApiClient, Arc<MemoryCredentialStore>) {
    let store = Arc::new(MemoryCredentialStore::with_session(session()));
    let credentials: Arc<dyn CredentialStore> = store.clone();
    let client = ApiClient::new("http://api.test/api", transport.clone(), credentials);
    (client, store)
}
