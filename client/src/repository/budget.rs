use lib_core::model::{Budget, BudgetFilter, NewBudget};
use lib_core::Result;
use shared::dto::{BudgetDto, BudgetQuery, BudgetRequest};

use super::messages::budget as msg;
use super::{resolve, resolve_list, resolve_message};
use crate::services::api::ApiClient;

#[derive(Clone)]
pub struct BudgetRepository {
    api: ApiClient,
}

impl BudgetRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Budgets for a period. Spent, remaining and percentage come from the server.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, filter: &BudgetFilter) -> Result<Vec<Budget>> {
        let outcome = self.api.list_budgets(&BudgetQuery::from(filter)).await;
        let list = resolve_list::<BudgetDto>(outcome, msg::FETCH_FAILED, msg::INVALID_PAYLOAD)?;
        Ok(list.items.into_iter().map(Budget::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<Budget> {
        let outcome = self.api.get_budget(id).await;
        resolve::<BudgetDto>(outcome, msg::FETCH_FAILED, msg::INVALID_PAYLOAD).map(Budget::from)
    }

    pub async fn create(&self, draft: &NewBudget) -> Result<Budget> {
        let outcome = self.api.create_budget(&BudgetRequest::from(draft)).await;
        resolve::<BudgetDto>(outcome, msg::CREATE_FAILED, msg::INVALID_PAYLOAD).map(Budget::from)
    }

    pub async fn update(&self, id: &str, draft: &NewBudget) -> Result<Budget> {
        let outcome = self.api.update_budget(id, &BudgetRequest::from(draft)).await;
        resolve::<BudgetDto>(outcome, msg::UPDATE_FAILED, msg::INVALID_PAYLOAD).map(Budget::from)
    }

    pub async fn delete(&self, id: &str) -> Result<String> {
        let outcome = self.api.delete_budget(id).await;
        resolve_message(outcome, msg::DELETE_FAILED, msg::DELETED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{logged_in_client, MockTransport};
    use lib_core::model::{BudgetSeverity, BudgetType};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_keeps_percentage_exact() {
        // Arrange
        let transport = MockTransport::new();
        transport.push_json(200, json!({"success": true, "data": [{
            "id": "b-1",
            "amount": 1000000.0,
            "budgetType": "QUARTERLY",
            "month": 10,
            "year": 2026,
            "notes": null,
            "categoryId": "c-1",
            "userId": "1",
            "category": null,
            "spent": 950000.0,
            "remaining": 50000.0,
            "percentage": 95.0,
            "createdAt": "2026-10-01T00:00:00Z",
            "updatedAt": "2026-10-19T00:00:00Z"
        }]}));
        let (api, _) = logged_in_client(&transport);

        // Act
        let budgets = BudgetRepository::new(api).list(&BudgetFilter::period(10, 2026)).await.unwrap();

        // Assert
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].percentage, 95.0);
        assert_eq!(budgets[0].severity(), BudgetSeverity::Danger);
        assert_eq!(budgets[0].budget_type, BudgetType::Monthly);
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.query_param("month"), Some("10"));
        assert_eq!(sent.query_param("year"), Some("2026"));
        assert!(sent.query_param("categoryId").is_none());
    }

    #[tokio::test]
    async fn test_update_puts_encoded_id_and_falls_back() {
        // Arrange
        let transport = MockTransport::new();
        transport.push_json(200, json!({"success": true, "data": {
            "id": "b 1",
            "amount": 5.0,
            "budgetType": "YEARLY",
            "month": 1,
            "year": 2026,
            "notes": null,
            "categoryId": "c",
            "userId": "1",
            "category": null,
            "spent": 0.0,
            "remaining": 5.0,
            "percentage": 0.0,
            "createdAt": "2026-01-01T00:00:00Z",
            "updatedAt": "2026-10-19T00:00:00Z"
        }}));
        let (api, _) = logged_in_client(&transport);
        let draft = NewBudget {
            amount: 5.0,
            budget_type: BudgetType::Daily,
            month: 1,
            year: 2026,
            notes: Some("  ".to_string()),
            category_id: "c".to_string(),
        };

        // Act
        let budget = BudgetRepository::new(api).update("b 1", &draft).await.unwrap();

        // Assert
        assert_eq!(budget.id, "b 1");
        assert_eq!(budget.budget_type, BudgetType::Monthly);
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, reqwest::Method::PUT);
        assert_eq!(sent.url, "http://api.test/api/budgets/b%201");
        assert_eq!(
            sent.body,
            Some(json!({"amount": 5.0, "budgetType": "DAILY", "categoryId": "c", "month": 1, "year": 2026}))
        );
    }
}
