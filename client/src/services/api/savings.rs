//! # Savings Endpoints

use shared::dto::{AddToSavingRequest, SavingRequest};

use super::client::{segment, ApiClient, ApiResponse};
use crate::core::error::TransportError;

impl ApiClient {
    pub async fn list_savings(&self) -> Result<ApiResponse, TransportError> {
        self.get("/savings").await
    }

    pub async fn get_saving(&self, id: &str) -> Result<ApiResponse, TransportError> {
        self.get(&format!("/savings/{}", segment(id))).await
    }

    pub async fn create_saving(&self, request: &SavingRequest) -> Result<ApiResponse, TransportError> {
        self.post("/savings", request).await
    }

    pub async fn update_saving(&self, id: &str, request: &SavingRequest) -> Result<ApiResponse, TransportError> {
        self.put(&format!("/savings/{}", segment(id)), request).await
    }

    /// `POST /savings/{id}/add`
    pub async fn add_to_saving(&self, id: &str, request: &AddToSavingRequest) -> Result<ApiResponse, TransportError> {
        self.post(&format!("/savings/{}/add", segment(id)), request).await
    }

    pub async fn delete_saving(&self, id: &str) -> Result<ApiResponse, TransportError> {
        self.delete(&format!("/savings/{}", segment(id))).await
    }
}
