//! # Budget Handler
//!
//! Budgets of one month/year with server-computed usage.

use lib_core::model::{BudgetFilter, NewBudget};
use lib_utils::validation::{validate_not_empty, validate_positive_amount};
use tokio::task::JoinHandle;
use tokio_util::sync::DropGuard;

use super::{apply_refresh, scoped, Screen};
use crate::app::holder::StateHolder;
use crate::app::state::BudgetState;
use crate::repository::messages::budget as msg;
use crate::repository::{BudgetRepository, CategoryRepository};
use crate::services::api::ApiClient;

pub struct BudgetHandler {
    holder: StateHolder<BudgetState>,
    budgets: BudgetRepository,
    categories: CategoryRepository,
    _guard: DropGuard,
}

impl Screen for BudgetHandler {
    type State = BudgetState;

    fn holder(&self) -> &StateHolder<BudgetState> {
        &self.holder
    }
}

impl BudgetHandler {
    pub fn new(api: &ApiClient) -> Self {
        let (holder, guard) = scoped::<BudgetState>();
        Self {
            holder,
            budgets: BudgetRepository::new(api.clone()),
            categories: CategoryRepository::new(api.clone()),
            _guard: guard,
        }
    }

    /// Create the handler and start loading the current month and the categories.
    pub fn open(api: &ApiClient) -> Self {
        let handler = Self::new(api);
        let (month, year) = lib_utils::current_month_year();
        handler.load_budgets(Some(month), Some(year));
        handler.load_categories();
        handler
    }

    pub fn load_budgets(&self, month: Option<u32>, year: Option<i32>) -> JoinHandle<()> {
        let repo = self.budgets.clone();
        self.holder.update(|state| state.status.begin());

        self.holder.launch_exclusive("budgets", move |task| async move {
            let filter = BudgetFilter {
                month,
                year,
                category_id: None,
            };
            match repo.list(&filter).await {
                Ok(budgets) => task.update(|state| {
                    state.budgets = budgets;
                    state.status.succeed(None);
                }),
                Err(e) => task.update(|state| state.status.fail(&e)),
            };
        })
    }

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

    /// Create, then reload the budgets of the draft's month and year.
    pub fn create_budget(&self, draft: NewBudget) -> JoinHandle<()> {
        let repo = self.budgets.clone();
        self.holder.update(|state| {
            state.status.begin();
            state.is_budget_created = false;
        });

        self.holder.launch(move |task| async move {
            let validated = validate_positive_amount(draft.amount, "Jumlah anggaran")
                .and_then(|_| validate_not_empty(&draft.category_id, "Kategori"));
            if let Err(message) = validated {
                task.update(|state| state.status.fail_with(message));
                return;
            }

            match repo.create(&draft).await {
                Ok(_) => {
                    let refreshed = repo.list(&BudgetFilter::period(draft.month, draft.year)).await;
                    task.update(|state| {
                        state.status.succeed(Some(msg::CREATED.to_string()));
                        state.is_budget_created = true;
                        apply_refresh(&mut state.budgets, &mut state.status, refreshed);
                    });
                }
                Err(e) => {
                    task.update(|state| state.status.fail(&e));
                }
            }
        })
    }

    pub fn delete_budget(&self, id: &str, month: u32, year: i32) -> JoinHandle<()> {
        let id = id.to_string();
        let repo = self.budgets.clone();
        self.holder.update(|state| state.status.begin());

        self.holder.launch(move |task| async move {
            match repo.delete(&id).await {
                Ok(_) => {
                    let refreshed = repo.list(&BudgetFilter::period(month, year)).await;
                    task.update(|state| {
                        state.status.succeed(Some(msg::DELETED.to_string()));
                        apply_refresh(&mut state.budgets, &mut state.status, refreshed);
                    });
                }
                Err(e) => {
                    task.update(|state| state.status.fail(&e));
                }
            }
        })
    }

    pub fn reset_budget_created(&self) {
        self.holder.update(|state| state.is_budget_created = false);
    }
}
