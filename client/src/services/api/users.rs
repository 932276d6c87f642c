//! # User Endpoints

use shared::dto::{ChangePasswordRequest, UpdateProfileRequest};

use super::client::{ApiClient, ApiResponse};
use crate::core::error::TransportError;

impl ApiClient {
    pub async fn get_profile(&self) -> Result<ApiResponse, TransportError> {
        self.get("/users/profile").await
    }

    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<ApiResponse, TransportError> {
        self.put("/users/profile", request).await
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<ApiResponse, TransportError> {
        self.put("/users/password", request).await
    }

    /// `POST /users/logout`
    pub async fn logout(&self) -> Result<ApiResponse, TransportError> {
        self.post_empty("/users/logout").await
    }

    /// `DELETE /users/account`
    pub async fn delete_account(&self) -> Result<ApiResponse, TransportError> {
        self.delete("/users/account").await
    }
}
