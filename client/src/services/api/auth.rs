//! # Authentication Endpoints
//!
//! `/auth/*` is the only unsigned prefix.

use shared::dto::{LoginRequest, RefreshTokenRequest, RegisterRequest};

use super::client::{ApiClient, ApiResponse};
use crate::core::error::TransportError;

impl ApiClient {
    /// `POST /auth/login`
    #[tracing::instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: &LoginRequest) -> Result<ApiResponse, TransportError> {
        tracing::info!("Attempting login");
        self.post("/auth/login", request).await
    }

    /// `POST /auth/register`
    #[tracing::instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<ApiResponse, TransportError> {
        self.post("/auth/register", request).await
    }

    /// `POST /auth/refresh-token`
    pub async fn refresh_token(&self, request: &RefreshTokenRequest) -> Result<ApiResponse, TransportError> {
        self.post("/auth/refresh-token", request).await
    }
}
