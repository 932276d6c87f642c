use serde::{Deserialize, Serialize};

use super::category::CategoryDto;

/// Transaction as returned by `/transactions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub nominal: f64,
    pub description: Option<String>,
    pub date: String,
    pub created_at: String,
    pub updated_at: String,
    pub category: Option<CategoryDto>,
}

/// Body of `GET /transactions/summary`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummaryDto {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub transaction_count: u32,
}

/// Body of `POST /transactions` and `PUT /transactions/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub category_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub nominal: f64,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Query of `GET /transactions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            kind: None,
            category_id: None,
            start_date: None,
            end_date: None,
        }
    }
}

/// Query of `GET /transactions/summary`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}
