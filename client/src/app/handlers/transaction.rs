//! # Transaction Handler
//!
//! Transaction list with a type filter, the category picker, and create/delete.

use lib_core::model::{NewCategory, NewTransaction, TransactionFilter, TransactionType};
use lib_utils::validation::{validate_not_empty, validate_positive_amount};
use tokio::task::JoinHandle;
use tokio_util::sync::DropGuard;

use super::{apply_refresh, scoped, Screen};
use crate::app::holder::StateHolder;
use crate::app::state::TransactionState;
use crate::repository::{CategoryRepository, TransactionRepository};
use crate::services::api::ApiClient;

/// Page size of the transaction screen.
pub const LIST_LIMIT: u32 = 50;

pub struct TransactionHandler {
    holder: StateHolder<TransactionState>,
    transactions: TransactionRepository,
    categories: CategoryRepository,
    _guard: DropGuard,
}

impl Screen for TransactionHandler {
    type State = TransactionState;

    fn holder(&self) -> &StateHolder<TransactionState> {
        &self.holder
    }
}

impl TransactionHandler {
    pub fn new(api: &ApiClient) -> Self {
        let (holder, guard) = scoped::<TransactionState>();
        Self {
            holder,
            transactions: TransactionRepository::new(api.clone()),
            categories: CategoryRepository::new(api.clone()),
            _guard: guard,
        }
    }

    /// First page of transactions, optionally one type only. Supersedes an earlier load.
    pub fn load_transactions(&self, kind: Option<TransactionType>) -> JoinHandle<()> {
        let repo = self.transactions.clone();
        self.holder.update(|state| {
            state.status.begin();
            state.filter_type = kind;
        });

        self.holder.launch_exclusive("transactions", move |task| async move {
            let filter = TransactionFilter::first_page(LIST_LIMIT).with_kind(kind);
            match repo.list(&filter).await {
                Ok(page) => task.update(|state| {
                    state.transactions = page.items;
                    state.status.succeed(None);
                }),
                Err(e) => task.update(|state| state.status.fail(&e)),
            };
        })
    }

    /// Category picker contents. Failures keep the old list silently.
    pub fn load_categories(&self) -> JoinHandle<()> {
        let repo = self.categories.clone();
        self.holder.launch_exclusive("categories", move |task| async move {
            match repo.list(None).await {
                Ok(categories) => {
                    task.update(|state| state.categories = categories);
                }
                Err(e) => tracing::warn!(error = %e, "Failed to load categories"),
            }
        })
    }

    pub fn create_transaction(&self, draft: NewTransaction) -> JoinHandle<()> {
        let repo = self.transactions.clone();
        self.holder.update(|state| {
            state.status.begin();
            state.is_transaction_created = false;
        });

        self.holder.launch(move |task| async move {
            let validated = validate_not_empty(&draft.category_id, "Kategori")
                .and_then(|_| validate_positive_amount(draft.nominal, "Nominal"))
                .and_then(|_| {
                    lib_utils::parse_date(&draft.date)
                        .map(|_| ())
                        .map_err(|_| "Format tanggal harus YYYY-MM-DD".to_string())
                });
            if let Err(message) = validated {
                task.update(|state| state.status.fail_with(message));
                return;
            }

            match repo.create(&draft).await {
                Ok(created) => {
                    tracing::info!(id = %created.id, "Transaction created");
                    task.update(|state| {
                        state.status.succeed(None);
                        state.is_transaction_created = true;
                    });
                }
                Err(e) => {
                    task.update(|state| state.status.fail(&e));
                }
            }
        })
    }

    /// Create a category, then reload the picker.
    pub fn create_category(&self, draft: NewCategory) -> JoinHandle<()> {
        let repo = self.categories.clone();
        self.holder.update(|state| state.status.begin());

        self.holder.launch(move |task| async move {
            if let Err(message) = validate_not_empty(&draft.name, "Nama kategori") {
                task.update(|state| state.status.fail_with(message));
                return;
            }

            match repo.create(&draft).await {
                Ok(_) => {
                    let refreshed = repo.list(None).await;
                    task.update(|state| {
                        state.status.succeed(None);
                        apply_refresh(&mut state.categories, &mut state.status, refreshed);
                    });
                }
                Err(e) => {
                    task.update(|state| state.status.fail(&e));
                }
            }
        })
    }

    /// Delete, then reload with the filter currently shown.
    pub fn delete_transaction(&self, id: &str) -> JoinHandle<()> {
        let id = id.to_string();
        let repo = self.transactions.clone();
        self.holder.update(|state| state.status.begin());

        self.holder.launch(move |task| async move {
            match repo.delete(&id).await {
                Ok(message) => {
                    let kind = task.snapshot().filter_type;
                    let filter = TransactionFilter::first_page(LIST_LIMIT).with_kind(kind);
                    let refreshed = repo.list(&filter).await.map(|page| page.items);
                    task.update(|state| {
                        state.status.succeed(Some(message));
                        apply_refresh(&mut state.transactions, &mut state.status, refreshed);
                    });
                }
                Err(e) => {
                    task.update(|state| state.status.fail(&e));
                }
            }
        })
    }

    pub fn clear_error(&self) {
        self.holder.update(|state| state.status.error_message = None);
    }

    pub fn reset_transaction_created(&self) {
        self.holder.update(|state| state.is_transaction_created = false);
    }
}
