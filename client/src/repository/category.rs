use lib_core::model::{Category, CodeEnum, NewCategory, TransactionType};
use lib_core::Result;
use shared::dto::{CategoryDto, CategoryQuery, CategoryRequest};

use super::messages::category as msg;
use super::{resolve, resolve_list, resolve_message};
use crate::services::api::ApiClient;

#[derive(Clone)]
pub struct CategoryRepository {
    api: ApiClient,
}

impl CategoryRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// All categories, optionally only one type, in server order.
    pub async fn list(&self, kind: Option<TransactionType>) -> Result<Vec<Category>> {
        let query = CategoryQuery {
            kind: kind.map(|kind| kind.code().to_string()),
        };
        let outcome = self.api.list_categories(&query).await;
        let list = resolve_list::<CategoryDto>(outcome, msg::FETCH_FAILED, msg::INVALID_PAYLOAD)?;
        Ok(list.items.into_iter().map(Category::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<Category> {
        let outcome = self.api.get_category(id).await;
        resolve::<CategoryDto>(outcome, msg::FETCH_FAILED, msg::INVALID_PAYLOAD).map(Category::from)
    }

    pub async fn create(&self, draft: &NewCategory) -> Result<Category> {
        let outcome = self.api.create_category(&CategoryRequest::from(draft)).await;
        resolve::<CategoryDto>(outcome, msg::CREATE_FAILED, msg::INVALID_PAYLOAD).map(Category::from)
    }

    pub async fn update(&self, id: &str, draft: &NewCategory) -> Result<Category> {
        let outcome = self.api.update_category(id, &CategoryRequest::from(draft)).await;
        resolve::<CategoryDto>(outcome, msg::UPDATE_FAILED, msg::INVALID_PAYLOAD).map(Category::from)
    }

    pub async fn delete(&self, id: &str) -> Result<String> {
        let outcome = self.api.delete_category(id).await;
        resolve_message(outcome, msg::DELETE_FAILED, msg::DELETED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{logged_in_client, MockTransport};
    use lib_core::DomainError;
    use serde_json::json;

    #[tokio::test]
    async fn test_duplicate_category_message_is_unaltered() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"success": false, "message": "Kategori sudah ada"}));
        let (api, _) = logged_in_client(&transport);

        let draft = NewCategory {
            name: "Makanan".to_string(),
            kind: TransactionType::Expense,
        };
        let err = CategoryRepository::new(api).create(&draft).await.unwrap_err();

        assert_eq!(err, DomainError::RequestFailed("Kategori sudah ada".to_string()));
        assert_eq!(transport.last_request().unwrap().body, Some(json!({"name": "Makanan", "type": "EXPENSE"})));
    }

    #[tokio::test]
    async fn test_list_preserves_order_and_falls_back() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"success": true, "data": [
            {"id": "c-3", "name": "Gaji", "type": "INCOME"},
            {"id": "c-1", "name": "Makanan", "type": "EXPENSE"},
            {"id": "c-2", "name": "Lain", "type": "OTHER"}
        ]}));
        let (api, _) = logged_in_client(&transport);

        let categories = CategoryRepository::new(api).list(Some(TransactionType::Income)).await.unwrap();

        let ids: Vec<_> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c-3", "c-1", "c-2"]);
        assert_eq!(categories[2].kind, TransactionType::Expense);
        assert_eq!(transport.last_request().unwrap().query_param("type"), Some("INCOME"));
    }

    #[tokio::test]
    async fn test_update_puts_encoded_id_and_falls_back() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"success": true, "data": {"id": "c 1", "name": "Transport", "type": "SAVINGS"}}));
        let (api, _) = logged_in_client(&transport);

        let draft = NewCategory {
            name: "Transport".to_string(),
            kind: TransactionType::Income,
        };
        let category = CategoryRepository::new(api).update("c 1", &draft).await.unwrap();

        assert_eq!(category.name, "Transport");
        assert_eq!(category.kind, TransactionType::Expense);
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, reqwest::Method::PUT);
        assert_eq!(sent.url, "http://api.test/api/categories/c%201");
        assert_eq!(sent.body, Some(json!({"name": "Transport", "type": "INCOME"})));
    }

    #[tokio::test]
    async fn test_get_requests_single_category() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"success": true, "data": {"id": "c-3", "name": "Gaji", "type": "INCOME"}}));
        let (api, _) = logged_in_client(&transport);

        let category = CategoryRepository::new(api).get("c-3").await.unwrap();

        assert_eq!(category.kind, TransactionType::Income);
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, reqwest::Method::GET);
        assert_eq!(sent.url, "http://api.test/api/categories/c-3");
    }
}
