//! # Transaction Endpoints

use shared::dto::{DateRangeQuery, TransactionQuery, TransactionRequest};

use super::client::{segment, ApiClient, ApiResponse};
use crate::core::error::TransportError;

impl ApiClient {
    /// `GET /transactions?page&limit&type&categoryId&startDate&endDate`
    pub async fn list_transactions(&self, query: &TransactionQuery) -> Result<ApiResponse, TransportError> {
        self.get_with("/transactions", query).await
    }

    /// `GET /transactions/summary?startDate&endDate`
    pub async fn transaction_summary(&self, query: &DateRangeQuery) -> Result<ApiResponse, TransportError> {
        self.get_with("/transactions/summary", query).await
    }

    pub async fn get_transaction(&self, id: &str) -> Result<ApiResponse, TransportError> {
        self.get(&format!("/transactions/{}", segment(id))).await
    }

    pub async fn create_transaction(&self, request: &TransactionRequest) -> Result<ApiResponse, TransportError> {
        self.post("/transactions", request).await
    }

    pub async fn update_transaction(&self, id: &str, request: &TransactionRequest) -> Result<ApiResponse, TransportError> {
        self.put(&format!("/transactions/{}", segment(id)), request).await
    }

    pub async fn delete_transaction(&self, id: &str) -> Result<ApiResponse, TransportError> {
        self.delete(&format!("/transactions/{}", segment(id))).await
    }
}
