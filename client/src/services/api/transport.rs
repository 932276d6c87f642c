//! # HTTP Transport
//!
//! The wire-level request/response pair and the production [`HttpTransport`] built
//! on `reqwest`.

use async_trait::async_trait;
use lib_core::Config;
use reqwest::{Client, Method};
use serde_json::Value;

use crate::core::error::TransportError;
use crate::core::service::HttpTransport;

/// A fully resolved request: absolute URL, headers already signed.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    /// First header value with this name, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Status plus raw body text. Decoding happens in [`ApiClient`](super::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// [`HttpTransport`] over a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a client with the configured connect and read bounds.
    ///
    /// reqwest has no separate write bound, so the overall request timeout is the sum
    /// of all three.
    pub fn new(config: &Config) -> Result<Self, TransportError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .timeout(config.request_timeout())
            .user_agent(concat!("accounting-grow/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::InvalidRequest(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.request(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::net::TcpListener;

    fn request(url: String) -> HttpRequest {
        HttpRequest {
            method: Method::GET,
            url,
            headers: vec![("Accept".to_string(), "application/json".to_string())],
            query: Vec::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        // Arrange: accept connections but never answer
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let mut open = Vec::new();
            loop {
                let (socket, _) = listener.accept().await.unwrap();
                open.push(socket);
            }
        });
        let config = Config {
            connect_timeout: Duration::from_secs(1),
            read_timeout: Duration::from_secs(1),
            write_timeout: Duration::from_secs(1),
            ..Config::default()
        };
        let transport = ReqwestTransport::new(&config).unwrap();

        // Act
        let err = transport
            .execute(request(format!("http://{addr}/api/categories")))
            .await
            .unwrap_err();

        // Assert
        assert!(matches!(err, TransportError::Timeout(_)), "got {err:?}");
        server.abort();
    }

    #[tokio::test]
    async fn test_refused_connection_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let transport = ReqwestTransport::new(&Config::default()).unwrap();

        let err = transport
            .execute(request(format!("http://{addr}/api/categories")))
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Network(_)), "got {err:?}");
    }
}
