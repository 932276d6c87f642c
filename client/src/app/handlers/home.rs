//! # Home Handler
//!
//! Dashboard: greeting, totals and the five most recent transactions.

use tokio::task::JoinHandle;
use tokio_util::sync::DropGuard;

use super::{scoped, Screen};
use crate::app::holder::StateHolder;
use crate::app::state::HomeState;
use crate::repository::home::RECENT_TRANSACTIONS;
use crate::repository::HomeRepository;
use crate::services::api::ApiClient;

pub struct HomeHandler {
    holder: StateHolder<HomeState>,
    repo: HomeRepository,
    _guard: DropGuard,
}

impl Screen for HomeHandler {
    type State = HomeState;

    fn holder(&self) -> &StateHolder<HomeState> {
        &self.holder
    }
}

impl HomeHandler {
    pub fn new(api: &ApiClient) -> Self {
        let (holder, guard) = scoped::<HomeState>();
        Self {
            holder,
            repo: HomeRepository::new(api.clone()),
            _guard: guard,
        }
    }

    /// Fetch username, summary and recent transactions in that order.
    ///
    /// A missing username is not an error; the greeting just stays empty.
    pub fn load(&self) -> JoinHandle<()> {
        let repo = self.repo.clone();
        self.holder.update(|state| state.status.begin());

        self.holder.launch_exclusive("home", move |task| async move {
            match repo.username().await {
                Ok(username) => {
                    task.update(|state| state.username = username);
                }
                Err(e) => tracing::debug!(error = %e, "Username unavailable"),
            }

            match repo.summary().await {
                Ok(summary) => task.update(|state| state.summary = Some(summary)),
                Err(e) => task.update(|state| state.status.error_message = Some(e.to_string())),
            };

            match repo.recent_transactions(RECENT_TRANSACTIONS).await {
                Ok(recent) => task.update(|state| {
                    state.recent_transactions = recent;
                    state.status.is_loading = false;
                }),
                Err(e) => task.update(|state| state.status.fail(&e)),
            };
        })
    }

    pub fn clear_error(&self) {
        self.holder.update(|state| state.status.error_message = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{logged_in_client, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_load_fills_dashboard() {
        // Arrange
        let transport = MockTransport::new();
        transport.push_json(200, json!({"success": true, "data": {"id": "1", "username": "bob", "email": "b@x.com"}}));
        transport.push_json(200, json!({"success": true, "data": {
            "totalIncome": 5000000.0, "totalExpense": 1250000.0, "balance": 3750000.0, "transactionCount": 12
        }}));
        transport.push_json(200, json!({"success": true, "data": {"transactions": [], "total": 0}}));
        let (api, _) = logged_in_client(&transport);
        let handler = HomeHandler::new(&api);

        // Act
        handler.load().await.unwrap();

        // Assert
        let state = handler.state();
        assert_eq!(state.username, "bob");
        assert_eq!(state.summary.map(|s| s.balance), Some(3_750_000.0));
        assert!(state.status.is_idle());
        let paths: Vec<_> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(paths, vec![
            "http://api.test/api/users/profile",
            "http://api.test/api/transactions/summary",
            "http://api.test/api/transactions",
        ]);
    }

    #[tokio::test]
    async fn test_summary_failure_is_reported() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"success": true, "data": {"id": "1", "username": "bob", "email": "b@x.com"}}));
        transport.push_json(500, json!({"success": false}));
        transport.push_json(200, json!({"success": true, "data": []}));
        let (api, _) = logged_in_client(&transport);
        let handler = HomeHandler::new(&api);

        handler.load().await.unwrap();

        let state = handler.state();
        assert_eq!(state.status.error_message.as_deref(), Some("Gagal mengambil summary"));
        assert!(!state.status.is_loading);

        handler.clear_error();
        assert!(handler.state().status.error_message.is_none());
    }
}
