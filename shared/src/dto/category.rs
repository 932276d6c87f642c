use serde::{Deserialize, Serialize};

/// Category as returned by `/categories` and embedded in transactions and budgets.
///
/// System categories have no owner, so `userId` and the timestamps are optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: String,
    pub user_id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Body of `POST /categories` and `PUT /categories/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Query of `GET /categories`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryQuery {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
