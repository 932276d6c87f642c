use serde::{Deserialize, Serialize};

/// Payment reminder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDto {
    pub id: String,
    pub name: String,
    pub due_date: String,
    pub amount: f64,
    pub recurrence: String,
    pub notes: Option<String>,
    pub is_paid: bool,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Body of `POST /reminders` and `PUT /reminders/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRequest {
    pub name: String,
    pub due_date: String,
    pub amount: f64,
    pub recurrence: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Query of `GET /reminders`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_paid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}
