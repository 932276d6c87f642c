//! # Reminder Handler
//!
//! Bill reminders. The screen shows two lists (all reminders and the upcoming ones),
//! and every mutation reloads both.

use lib_core::model::{NewReminder, Reminder, ReminderFilter};
use lib_core::Result;
use lib_utils::validation::{validate_not_empty, validate_positive_amount};
use tokio::task::JoinHandle;
use tokio_util::sync::DropGuard;

use super::{apply_refresh, scoped, Screen};
use crate::app::holder::StateHolder;
use crate::app::state::ReminderState;
use crate::repository::messages::reminder as msg;
use crate::repository::ReminderRepository;
use crate::services::api::ApiClient;

pub struct ReminderHandler {
    holder: StateHolder<ReminderState>,
    repo: ReminderRepository,
    _guard: DropGuard,
}

impl Screen for ReminderHandler {
    type State = ReminderState;

    fn holder(&self) -> &StateHolder<ReminderState> {
        &self.holder
    }
}

/// Results of reloading both lists after a mutation.
struct Refreshed {
    reminders: Result<Vec<Reminder>>,
    upcoming: Result<Vec<Reminder>>,
}

impl Refreshed {
    async fn fetch(repo: &ReminderRepository) -> Self {
        let filter = ReminderFilter::default();
        let (reminders, upcoming) = tokio::join!(repo.list(&filter), repo.upcoming());
        Self { reminders, upcoming }
    }

    fn apply(self, state: &mut ReminderState) {
        apply_refresh(&mut state.reminders, &mut state.status, self.reminders);
        apply_refresh(&mut state.upcoming_reminders, &mut state.status, self.upcoming);
    }
}

impl ReminderHandler {
    pub fn new(api: &ApiClient) -> Self {
        let (holder, guard) = scoped::<ReminderState>();
        Self {
            holder,
            repo: ReminderRepository::new(api.clone()),
            _guard: guard,
        }
    }

    /// Load reminders, optionally only paid (`Some(true)`) or unpaid (`Some(false)`) ones.
    pub fn load_reminders(&self, is_paid: Option<bool>) -> JoinHandle<()> {
        let repo = self.repo.clone();
        self.holder.update(|state| state.status.begin());

        self.holder.launch_exclusive("reminders", move |task| async move {
            let filter = ReminderFilter {
                is_paid,
                ..ReminderFilter::default()
            };
            match repo.list(&filter).await {
                Ok(reminders) => task.update(|state| {
                    state.reminders = reminders;
                    state.status.succeed(None);
                }),
                Err(e) => task.update(|state| state.status.fail(&e)),
            };
        })
    }

    pub fn load_upcoming(&self) -> JoinHandle<()> {
        let repo = self.repo.clone();
        self.holder.update(|state| state.status.begin());

        self.holder.launch_exclusive("upcoming", move |task| async move {
            match repo.upcoming().await {
                Ok(upcoming) => task.update(|state| {
                    state.upcoming_reminders = upcoming;
                    state.status.succeed(None);
                }),
                Err(e) => task.update(|state| state.status.fail(&e)),
            };
        })
    }

    pub fn create_reminder(&self, draft: NewReminder) -> JoinHandle<()> {
        let repo = self.repo.clone();
        self.holder.update(|state| {
            state.status.begin();
            state.is_reminder_created = false;
        });

        self.holder.launch(move |task| async move {
            let validated = validate_not_empty(&draft.name, "Nama pengingat")
                .and_then(|_| validate_positive_amount(draft.amount, "Jumlah"))
                .and_then(|_| {
                    lib_utils::parse_date(&draft.due_date)
                        .map(|_| ())
                        .map_err(|_| "Format tanggal harus YYYY-MM-DD".to_string())
                });
            if let Err(message) = validated {
                task.update(|state| state.status.fail_with(message));
                return;
            }

            match repo.create(&draft).await {
                Ok(_) => {
                    let refreshed = Refreshed::fetch(&repo).await;
                    task.update(|state| {
                        state.status.succeed(Some(msg::CREATED.to_string()));
                        state.is_reminder_created = true;
                        refreshed.apply(state);
                    });
                }
                Err(e) => {
                    task.update(|state| state.status.fail(&e));
                }
            }
        })
    }

    pub fn mark_paid(&self, id: &str) -> JoinHandle<()> {
        let id = id.to_string();
        let repo = self.repo.clone();
        self.holder.update(|state| state.status.begin());

        self.holder.launch(move |task| async move {
            match repo.mark_paid(&id).await {
                Ok(_) => {
                    let refreshed = Refreshed::fetch(&repo).await;
                    task.update(|state| {
                        state.status.succeed(Some(msg::MARKED_PAID.to_string()));
                        refreshed.apply(state);
                    });
                }
                Err(e) => {
                    task.update(|state| state.status.fail(&e));
                }
            }
        })
    }

    pub fn delete_reminder(&self, id: &str) -> JoinHandle<()> {
        let id = id.to_string();
        let repo = self.repo.clone();
        self.holder.update(|state| state.status.begin());

        self.holder.launch(move |task| async move {
            match repo.delete(&id).await {
                Ok(_) => {
                    let refreshed = Refreshed::fetch(&repo).await;
                    task.update(|state| {
                        state.status.succeed(Some(msg::DELETED.to_string()));
                        refreshed.apply(state);
                    });
                }
                Err(e) => {
                    task.update(|state| state.status.fail(&e));
                }
            }
        })
    }

    pub fn reset_reminder_created(&self) {
        self.holder.update(|state| state.is_reminder_created = false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{logged_in_client, MockTransport};
    use serde_json::{json, Value};

    fn reminder(id: &str, is_paid: bool) -> Value {
        json!({
            "id": id, "name": "Listrik", "dueDate": "2026-10-25", "amount": 350000.0,
            "recurrence": "MONTHLY", "isPaid": is_paid, "userId": "1",
            "createdAt": "2026-10-01", "updatedAt": "2026-10-01"
        })
    }

    #[tokio::test]
    async fn test_unpaid_filter_is_sent() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"success": true, "data": [reminder("r-1", false)]}));
        let (api, _) = logged_in_client(&transport);
        let handler = ReminderHandler::new(&api);

        handler.load_reminders(Some(false)).await.unwrap();

        assert_eq!(handler.state().reminders.len(), 1);
        assert_eq!(transport.last_request().unwrap().query_param("isPaid"), Some("false"));
    }

    #[tokio::test]
    async fn test_mark_paid_refreshes_both_lists() {
        // Arrange
        let transport = MockTransport::new();
        transport.push_json(200, json!({"success": true, "data": reminder("r-1", true)}));
        transport.push_json(200, json!({"success": true, "data": [reminder("r-1", true), reminder("r-2", false)]}));
        transport.push_json(200, json!({"success": true, "data": [reminder("r-2", false)]}));
        let (api, _) = logged_in_client(&transport);
        let handler = ReminderHandler::new(&api);

        // Act
        handler.mark_paid("r-1").await.unwrap();

        // Assert
        let state = handler.state();
        assert_eq!(state.status.success_message.as_deref(), Some("Ditandai sebagai lunas"));
        assert_eq!(state.reminders.len() + state.upcoming_reminders.len(), 3);
        assert_eq!(transport.request_count(), 3);
        assert!(transport.requests().iter().any(|r| r.url.ends_with("/reminders/upcoming")));
    }

    #[tokio::test]
    async fn test_invalid_due_date_is_rejected_locally() {
        let transport = MockTransport::new();
        let (api, _) = logged_in_client(&transport);
        let handler = ReminderHandler::new(&api);

        let draft = NewReminder {
            name: "Internet".to_string(),
            due_date: "25-10-2026".to_string(),
            amount: 400_000.0,
            recurrence: lib_core::model::Recurrence::Monthly,
            notes: None,
        };
        handler.create_reminder(draft).await.unwrap();

        let state = handler.state();
        assert_eq!(state.status.error_message.as_deref(), Some("Format tanggal harus YYYY-MM-DD"));
        assert!(!state.is_reminder_created);
        assert_eq!(transport.request_count(), 0);
    }
}
