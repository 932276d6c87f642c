//! # Article Endpoints

use shared::dto::{ArticleSearchQuery, PageQuery};

use super::client::{segment, ApiClient, ApiResponse};
use crate::core::error::TransportError;

impl ApiClient {
    /// `GET /articles?page&limit`
    pub async fn list_articles(&self, query: &PageQuery) -> Result<ApiResponse, TransportError> {
        self.get_with("/articles", query).await
    }

    /// `GET /articles/search?q&page&limit`
    pub async fn search_articles(&self, query: &ArticleSearchQuery) -> Result<ApiResponse, TransportError> {
        self.get_with("/articles/search", query).await
    }

    pub async fn get_article(&self, id: &str) -> Result<ApiResponse, TransportError> {
        self.get(&format!("/articles/{}", segment(id))).await
    }
}
