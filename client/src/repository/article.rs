use lib_core::model::{Article, Page};
use lib_core::Result;
use shared::dto::{ArticleDto, ArticleSearchQuery, PageQuery};

use super::messages::article as msg;
use super::{resolve, resolve_list};
use crate::services::api::ApiClient;

#[derive(Clone)]
pub struct ArticleRepository {
    api: ApiClient,
}

impl ArticleRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, page: u32, limit: u32) -> Result<Page<Article>> {
        let outcome = self.api.list_articles(&PageQuery { page, limit }).await;
        let list = resolve_list::<ArticleDto>(outcome, msg::FETCH_FAILED, msg::INVALID_PAYLOAD)?;
        Ok(Page::from_wire(list))
    }

    pub async fn search(&self, query: &str, page: u32, limit: u32) -> Result<Page<Article>> {
        let query = ArticleSearchQuery {
            q: query.trim().to_string(),
            page,
            limit,
        };
        let outcome = self.api.search_articles(&query).await;
        let list = resolve_list::<ArticleDto>(outcome, msg::FETCH_FAILED, msg::INVALID_PAYLOAD)?;
        Ok(Page::from_wire(list))
    }

    pub async fn get(&self, id: &str) -> Result<Article> {
        let outcome = self.api.get_article(id).await;
        resolve::<ArticleDto>(outcome, msg::FETCH_FAILED, msg::INVALID_PAYLOAD).map(Article::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{logged_in_client, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_search_sends_query_and_reads_articles_key() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"success": true, "data": {
            "articles": [{
                "id": "a-1",
                "title": "Dana darurat",
                "content": "Simpan enam bulan pengeluaran",
                "publishedDate": "2026-09-01",
                "createdAt": "2026-09-01",
                "updatedAt": "2026-09-01"
            }],
            "total": 1,
            "page": 1,
            "totalPages": 1
        }}));
        let (api, _) = logged_in_client(&transport);

        let page = ArticleRepository::new(api).search("  darurat ", 1, 10).await.unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "Dana darurat");
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.url, "http://api.test/api/articles/search");
        assert_eq!(sent.query_param("q"), Some("darurat"));
    }
}
