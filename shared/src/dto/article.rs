use serde::{Deserialize, Serialize};

/// Financial literacy article
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub published_date: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Query of `GET /articles/search`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleSearchQuery {
    pub q: String,
    pub page: u32,
    pub limit: u32,
}
