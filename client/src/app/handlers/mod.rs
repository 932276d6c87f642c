//! # Screen Handlers
//!
//! One handler per screen. A handler owns a [`StateHolder`] and the repositories its
//! intents call. Every intent:
//!
//! 1. publishes `Loading` immediately (messages cleared)
//! 2. launches one task that calls the repository
//! 3. publishes `Success` or `Failure` from that task, refreshing dependent lists
//!    inside the same task after a successful mutation
//!
//! and returns the task's `JoinHandle` so callers (the CLI, tests) can await the
//! settled state. Dropping a handler cancels its scope: in-flight tasks stop and
//! publish nothing more.

use tokio::sync::watch;
use tokio_util::sync::DropGuard;

use super::holder::StateHolder;
use super::state::{ScreenState, Status};
use lib_core::Result;

pub mod article;
pub mod auth;
pub mod budget;
pub mod home;
pub mod profile;
pub mod reminder;
pub mod saving;
pub mod transaction;

pub use article::ArticleHandler;
pub use auth::AuthHandler;
pub use budget::BudgetHandler;
pub use home::HomeHandler;
pub use profile::ProfileHandler;
pub use reminder::ReminderHandler;
pub use saving::SavingHandler;
pub use transaction::TransactionHandler;

/// Read access shared by every handler.
pub trait Screen {
    type State: ScreenState;

    fn holder(&self) -> &StateHolder<Self::State>;

    /// Current snapshot.
    fn state(&self) -> Self::State {
        self.holder().snapshot()
    }

    fn subscribe(&self) -> watch::Receiver<Self::State> {
        self.holder().subscribe()
    }

    /// Dismiss both banner messages.
    fn clear_messages(&self) {
        self.holder().update(|state| state.status_mut().clear_messages());
    }

    /// Tear the screen down: cancel running tasks and stop publishing.
    fn close(&self) {
        self.holder().close();
    }
}

/// New holder plus the guard that closes it when the handler is dropped.
pub(crate) fn scoped<S: ScreenState>() -> (StateHolder<S>, DropGuard) {
    let holder = StateHolder::new(S::default());
    let guard = holder.scope().clone().drop_guard();
    (holder, guard)
}

/// Apply the result of a follow-up list refresh.
///
/// A failed refresh keeps the previous list and surfaces the error next to the
/// mutation's success message.
pub(crate) fn apply_refresh<T>(list: &mut Vec<T>, status: &mut Status, refreshed: Result<Vec<T>>) {
    match refreshed {
        Ok(items) => *list = items,
        Err(e) => {
            tracing::warn!(error = %e, "Refresh after mutation failed");
            status.error_message = Some(e.to_string());
        }
    }
}
