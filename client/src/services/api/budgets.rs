//! # Budget Endpoints

use shared::dto::{BudgetQuery, BudgetRequest};

use super::client::{segment, ApiClient, ApiResponse};
use crate::core::error::TransportError;

impl ApiClient {
    /// `GET /budgets?month&year&categoryId`
    pub async fn list_budgets(&self, query: &BudgetQuery) -> Result<ApiResponse, TransportError> {
        self.get_with("/budgets", query).await
    }

    pub async fn get_budget(&self, id: &str) -> Result<ApiResponse, TransportError> {
        self.get(&format!("/budgets/{}", segment(id))).await
    }

    pub async fn create_budget(&self, request: &BudgetRequest) -> Result<ApiResponse, TransportError> {
        self.post("/budgets", request).await
    }

    pub async fn update_budget(&self, id: &str, request: &BudgetRequest) -> Result<ApiResponse, TransportError> {
        self.put(&format!("/budgets/{}", segment(id)), request).await
    }

    pub async fn delete_budget(&self, id: &str) -> Result<ApiResponse, TransportError> {
        self.delete(&format!("/budgets/{}", segment(id))).await
    }
}
