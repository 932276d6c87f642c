//! # Home Repository
//!
//! Read-only aggregate for the dashboard, composed from the entity repositories.

use lib_core::model::{Category, Transaction, TransactionFilter, TransactionSummary};
use lib_core::Result;
use shared::dto::UserDto;

use super::messages::user as user_msg;
use super::{resolve, CategoryRepository, TransactionRepository};
use crate::services::api::ApiClient;

pub const RECENT_TRANSACTIONS: u32 = 5;

#[derive(Clone)]
pub struct HomeRepository {
    api: ApiClient,
    transactions: TransactionRepository,
    categories: CategoryRepository,
}

impl HomeRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            transactions: TransactionRepository::new(api.clone()),
            categories: CategoryRepository::new(api.clone()),
            api,
        }
    }

    /// Username from the server profile.
    pub async fn username(&self) -> Result<String> {
        let outcome = self.api.get_profile().await;
        resolve::<UserDto>(outcome, user_msg::FETCH_FAILED, user_msg::USER_MISSING).map(|user| user.username)
    }

    /// All-time totals.
    pub async fn summary(&self) -> Result<TransactionSummary> {
        self.transactions.summary(None, None).await
    }

    /// First page of transactions, newest first as the server orders them.
    pub async fn recent_transactions(&self, limit: u32) -> Result<Vec<Transaction>> {
        let page = self.transactions.list(&TransactionFilter::first_page(limit)).await?;
        Ok(page.items)
    }

    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.categories.list(None).await
    }
}
