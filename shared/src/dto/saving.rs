use serde::{Deserialize, Serialize};

/// Savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingDto {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub filling_plan: String,
    pub progress: f64,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Body of `POST /savings` and `PUT /savings/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingRequest {
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub filling_plan: String,
}

/// Body of `POST /savings/{id}/add`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AddToSavingRequest {
    pub amount: f64,
}
