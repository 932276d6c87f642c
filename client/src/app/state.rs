//! # Screen State
//!
//! Immutable UI snapshots, one per screen. Each embeds a [`Status`] carrying the
//! loading flag and the two dismissible messages.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle ──intent──> Loading ──Ok──> Success (success_message, lists refreshed)
//!                     │
//!                     └──Err──> Failure (error_message, previous lists kept)
//! ```
//!
//! Entering `Loading` clears both messages, so a message never outlives the
//! operation that produced it.

use lib_core::model::{
    Article, Budget, Category, Reminder, Saving, Transaction, TransactionSummary, TransactionType, UserProfile,
};
use lib_core::DomainError;

/// Loading flag plus banner messages, shared by every screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Status {
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl Status {
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error_message = None;
        self.success_message = None;
    }

    pub fn succeed(&mut self, message: Option<String>) {
        self.is_loading = false;
        if message.is_some() {
            self.success_message = message;
        }
    }

    pub fn fail(&mut self, error: &DomainError) {
        self.is_loading = false;
        self.error_message = Some(error.to_string());
    }

    /// Failure raised before any request was sent (input validation).
    pub fn fail_with(&mut self, message: impl Into<String>) {
        self.is_loading = false;
        self.error_message = Some(message.into());
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    pub fn is_idle(&self) -> bool {
        !self.is_loading && self.error_message.is_none() && self.success_message.is_none()
    }
}

/// Access to the embedded [`Status`] of a screen state.
pub trait ScreenState: Clone + Default + Send + Sync + 'static {
    fn status(&self) -> &Status;
    fn status_mut(&mut self) -> &mut Status;
}

macro_rules! screen_state {
    ($($name:ident),+ $(,)?) => {
        $(
            impl ScreenState for $name {
                fn status(&self) -> &Status {
                    &self.status
                }

                fn status_mut(&mut self) -> &mut Status {
                    &mut self.status
                }
            }
        )+
    };
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub status: Status,
    pub is_authenticated: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeState {
    pub status: Status,
    pub username: String,
    pub summary: Option<TransactionSummary>,
    pub recent_transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionState {
    pub status: Status,
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub is_transaction_created: bool,
    /// Type filter of the last list load; reused when refreshing after a delete
    pub filter_type: Option<TransactionType>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetState {
    pub status: Status,
    pub budgets: Vec<Budget>,
    pub categories: Vec<Category>,
    pub is_budget_created: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavingState {
    pub status: Status,
    pub savings: Vec<Saving>,
    pub is_saving_created: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderState {
    pub status: Status,
    pub reminders: Vec<Reminder>,
    pub upcoming_reminders: Vec<Reminder>,
    pub is_reminder_created: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    pub status: Status,
    pub profile: Option<UserProfile>,
    pub is_logged_out: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleState {
    pub status: Status,
    pub articles: Vec<Article>,
    pub page: u32,
    pub total_pages: u32,
    /// Search text of the current list, `None` for the plain listing
    pub query: Option<String>,
    pub selected: Option<Article>,
}

impl Default for ArticleState {
    fn default() -> Self {
        Self {
            status: Status::default(),
            articles: Vec::new(),
            page: 1,
            total_pages: 1,
            query: None,
            selected: None,
        }
    }
}

screen_state!(
    AuthState,
    HomeState,
    TransactionState,
    BudgetState,
    SavingState,
    ReminderState,
    ProfileState,
    ArticleState,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_clears_messages() {
        let mut status = Status {
            is_loading: false,
            error_message: Some("lama".to_string()),
            success_message: Some("lama".to_string()),
        };
        status.begin();
        assert!(status.is_loading);
        assert!(status.error_message.is_none());
        assert!(status.success_message.is_none());
    }

    #[test]
    fn test_fail_uses_display_text() {
        let mut status = Status::default();
        status.begin();
        status.fail(&DomainError::ConnectionFailed("refused".to_string()));
        assert!(!status.is_loading);
        assert_eq!(
            status.error_message.as_deref(),
            Some("Tidak dapat terhubung ke server: refused")
        );
    }
}
