//! # Category Endpoints

use shared::dto::{CategoryQuery, CategoryRequest};

use super::client::{segment, ApiClient, ApiResponse};
use crate::core::error::TransportError;

impl ApiClient {
    /// `GET /categories?type`
    pub async fn list_categories(&self, query: &CategoryQuery) -> Result<ApiResponse, TransportError> {
        self.get_with("/categories", query).await
    }

    pub async fn get_category(&self, id: &str) -> Result<ApiResponse, TransportError> {
        self.get(&format!("/categories/{}", segment(id))).await
    }

    pub async fn create_category(&self, request: &CategoryRequest) -> Result<ApiResponse, TransportError> {
        self.post("/categories", request).await
    }

    pub async fn update_category(&self, id: &str, request: &CategoryRequest) -> Result<ApiResponse, TransportError> {
        self.put(&format!("/categories/{}", segment(id)), request).await
    }

    pub async fn delete_category(&self, id: &str) -> Result<ApiResponse, TransportError> {
        self.delete(&format!("/categories/{}", segment(id))).await
    }
}
