use serde::{Deserialize, Serialize};

use super::category::CategoryDto;

/// Budget with server-computed spending figures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetDto {
    pub id: String,
    pub amount: f64,
    pub budget_type: String,
    pub month: u32,
    pub year: i32,
    pub notes: Option<String>,
    pub category_id: String,
    pub user_id: String,
    pub category: Option<CategoryDto>,
    pub spent: f64,
    pub remaining: f64,
    pub percentage: f64,
    pub created_at: String,
    pub updated_at: String,
}

/// Body of `POST /budgets` and `PUT /budgets/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRequest {
    pub amount: f64,
    pub budget_type: String,
    pub month: u32,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub category_id: String,
}

/// Query of `GET /budgets`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}
