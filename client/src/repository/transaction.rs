use lib_core::model::{NewTransaction, Page, Transaction, TransactionFilter, TransactionSummary};
use lib_core::Result;
use shared::dto::{DateRangeQuery, TransactionDto, TransactionQuery, TransactionRequest, TransactionSummaryDto};

use super::messages::transaction as msg;
use super::{resolve, resolve_list, resolve_message};
use crate::services::api::ApiClient;

#[derive(Clone)]
pub struct TransactionRepository {
    api: ApiClient,
}

impl TransactionRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// One page of transactions matching `filter`, in server order.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, filter: &TransactionFilter) -> Result<Page<Transaction>> {
        let outcome = self.api.list_transactions(&TransactionQuery::from(filter)).await;
        let list = resolve_list::<TransactionDto>(outcome, msg::FETCH_FAILED, msg::INVALID_PAYLOAD)?;
        tracing::debug!(count = list.items.len(), total = list.total, "Transactions fetched");
        Ok(Page::from_wire(list))
    }

    /// Income, expense and balance totals over an optional date range.
    pub async fn summary(&self, start_date: Option<&str>, end_date: Option<&str>) -> Result<TransactionSummary> {
        let query = DateRangeQuery {
            start_date: start_date.map(str::to_string),
            end_date: end_date.map(str::to_string),
        };
        let outcome = self.api.transaction_summary(&query).await;
        resolve::<TransactionSummaryDto>(outcome, msg::SUMMARY_FAILED, msg::SUMMARY_MISSING).map(TransactionSummary::from)
    }

    pub async fn get(&self, id: &str) -> Result<Transaction> {
        let outcome = self.api.get_transaction(id).await;
        resolve::<TransactionDto>(outcome, msg::FETCH_FAILED, msg::INVALID_PAYLOAD).map(Transaction::from)
    }

    pub async fn create(&self, draft: &NewTransaction) -> Result<Transaction> {
        let outcome = self.api.create_transaction(&TransactionRequest::from(draft)).await;
        resolve::<TransactionDto>(outcome, msg::CREATE_FAILED, msg::INVALID_PAYLOAD).map(Transaction::from)
    }

    pub async fn update(&self, id: &str, draft: &NewTransaction) -> Result<Transaction> {
        let outcome = self.api.update_transaction(id, &TransactionRequest::from(draft)).await;
        resolve::<TransactionDto>(outcome, msg::UPDATE_FAILED, msg::INVALID_PAYLOAD).map(Transaction::from)
    }

    pub async fn delete(&self, id: &str) -> Result<String> {
        let outcome = self.api.delete_transaction(id).await;
        resolve_message(outcome, msg::DELETE_FAILED, msg::DELETED)
    }
}
