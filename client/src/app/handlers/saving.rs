//! # Saving Handler

use lib_core::model::NewSaving;
use lib_utils::validation::{validate_not_empty, validate_positive_amount};
use tokio::task::JoinHandle;
use tokio_util::sync::DropGuard;

use super::{apply_refresh, scoped, Screen};
use crate::app::holder::StateHolder;
use crate::app::state::SavingState;
use crate::repository::messages::saving as msg;
use crate::repository::SavingRepository;
use crate::services::api::ApiClient;

pub struct SavingHandler {
    holder: StateHolder<SavingState>,
    repo: SavingRepository,
    _guard: DropGuard,
}

impl Screen for SavingHandler {
    type State = SavingState;

    fn holder(&self) -> &StateHolder<SavingState> {
        &self.holder
    }
}

impl SavingHandler {
    pub fn new(api: &ApiClient) -> Self {
        let (holder, guard) = scoped::<SavingState>();
        Self {
            holder,
            repo: SavingRepository::new(api.clone()),
            _guard: guard,
        }
    }

    pub fn load_savings(&self) -> JoinHandle<()> {
        let repo = self.repo.clone();
        self.holder.update(|state| state.status.begin());

        self.holder.launch_exclusive("savings", move |task| async move {
            match repo.list().await {
                Ok(savings) => task.update(|state| {
                    state.savings = savings;
                    state.status.succeed(None);
                }),
                Err(e) => task.update(|state| state.status.fail(&e)),
            };
        })
    }

    pub fn create_saving(&self, draft: NewSaving) -> JoinHandle<()> {
        let repo = self.repo.clone();
        self.holder.update(|state| {
            state.status.begin();
            state.is_saving_created = false;
        });

        self.holder.launch(move |task| async move {
            let validated = validate_not_empty(&draft.name, "Nama tabungan")
                .and_then(|_| validate_positive_amount(draft.target_amount, "Target"));
            if let Err(message) = validated {
                task.update(|state| state.status.fail_with(message));
                return;
            }

            match repo.create(&draft).await {
                Ok(_) => {
                    let refreshed = repo.list().await;
                    task.update(|state| {
                        state.status.succeed(Some(msg::CREATED.to_string()));
                        state.is_saving_created = true;
                        apply_refresh(&mut state.savings, &mut state.status, refreshed);
                    });
                }
                Err(e) => {
                    task.update(|state| state.status.fail(&e));
                }
            }
        })
    }

    pub fn add_funds(&self, id: &str, amount: f64) -> JoinHandle<()> {
        let id = id.to_string();
        let repo = self.repo.clone();
        self.holder.update(|state| state.status.begin());

        self.holder.launch(move |task| async move {
            if let Err(message) = validate_positive_amount(amount, "Jumlah") {
                task.update(|state| state.status.fail_with(message));
                return;
            }

            match repo.add_funds(&id, amount).await {
                Ok(_) => {
                    let refreshed = repo.list().await;
                    task.update(|state| {
                        state.status.succeed(Some(msg::ADDED.to_string()));
                        apply_refresh(&mut state.savings, &mut state.status, refreshed);
                    });
                }
                Err(e) => {
                    task.update(|state| state.status.fail(&e));
                }
            }
        })
    }

    pub fn delete_saving(&self, id: &str) -> JoinHandle<()> {
        let id = id.to_string();
        let repo = self.repo.clone();
        self.holder.update(|state| state.status.begin());

        self.holder.launch(move |task| async move {
            match repo.delete(&id).await {
                Ok(_) => {
                    let refreshed = repo.list().await;
                    task.update(|state| {
                        state.status.succeed(Some(msg::DELETED.to_string()));
                        apply_refresh(&mut state.savings, &mut state.status, refreshed);
                    });
                }
                Err(e) => {
                    task.update(|state| state.status.fail(&e));
                }
            }
        })
    }

    pub fn reset_saving_created(&self) {
        self.holder.update(|state| state.is_saving_created = false);
    }
}
