//! # State Holder
//!
//! Generic owner of one screen's UI state.
//!
//! - The current snapshot lives behind a `parking_lot::RwLock` and is replaced
//!   wholesale on every change, never patched in place by observers
//! - Every replacement is also published on a `tokio::sync::watch` channel so a
//!   front end can re-render on change
//! - Work runs as tokio tasks under the holder's [`CancellationToken`]. Once the
//!   scope is cancelled a task stops at its next await and its [`Task::update`]
//!   calls become no-ops
//!
//! Two launch modes:
//! - [`StateHolder::launch`] for mutations. They never cancel each other, so a
//!   double submit runs twice and the last publish wins
//! - [`StateHolder::launch_exclusive`] for list loads. A newer load of the same kind
//!   cancels the one in flight

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Shared handle to a screen's state. Clones observe and update the same snapshot.
pub struct StateHolder<S> {
    state: Arc<RwLock<S>>,
    publisher: Arc<watch::Sender<S>>,
    scope: CancellationToken,
    slots: Arc<Mutex<HashMap<&'static str, CancellationToken>>>,
}

impl<S> Clone for StateHolder<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            publisher: Arc::clone(&self.publisher),
            scope: self.scope.clone(),
            slots: Arc::clone(&self.slots),
        }
    }
}

impl<S> StateHolder<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new(initial: S) -> Self {
        let (publisher, _) = watch::channel(initial.clone());
        Self {
            state: Arc::new(RwLock::new(initial)),
            publisher: Arc::new(publisher),
            scope: CancellationToken::new(),
            slots: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Copy of the current snapshot.
    pub fn snapshot(&self) -> S {
        self.state.read().clone()
    }

    /// Receiver that sees every published snapshot (the latest one on lag).
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.publisher.subscribe()
    }

    /// Replace the snapshot with an edited copy of it. Ignored after [`close`](Self::close).
    pub fn update(&self, edit: impl FnOnce(&mut S)) -> bool {
        self.update_if(&self.scope, edit)
    }

    /// Cancel every task and stop publishing.
    pub fn close(&self) {
        self.scope.cancel();
    }

    /// Token whose cancellation closes this holder.
    pub fn scope(&self) -> &CancellationToken {
        &self.scope
    }

    /// Run `work` as an independent task in the holder's scope.
    pub fn launch<F, Fut>(&self, work: F) -> JoinHandle<()>
    where
        F: FnOnce(Task<S>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.spawn(self.scope.child_token(), work)
    }

    /// Run `work`, cancelling any earlier task launched under the same `slot`.
    pub fn launch_exclusive<F, Fut>(&self, slot: &'static str, work: F) -> JoinHandle<()>
    where
        F: FnOnce(Task<S>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = self.scope.child_token();
        if let Some(previous) = self.slots.lock().insert(slot, token.clone()) {
            if !previous.is_cancelled() {
                tracing::debug!(slot, "Superseding in-flight load");
                previous.cancel();
            }
        }
        self.spawn(token, work)
    }

    fn spawn<F, Fut>(&self, token: CancellationToken, work: F) -> JoinHandle<()>
    where
        F: FnOnce(Task<S>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let task = Task {
            holder: self.clone(),
            token: token.clone(),
        };
        let future = work(task);

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => tracing::debug!("Screen task cancelled"),
                _ = future => {}
            }
        })
    }

    fn update_if(&self, token: &CancellationToken, edit: impl FnOnce(&mut S)) -> bool {
        let mut guard = self.state.write();
        if token.is_cancelled() {
            return false;
        }
        let mut next = guard.clone();
        edit(&mut next);
        *guard = next.clone();
        self.publisher.send_replace(next);
        true
    }
}

/// A running unit of screen work. Publishes only while its token is live.
pub struct Task<S> {
    holder: StateHolder<S>,
    token: CancellationToken,
}

impl<S> Task<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn update(&self, edit: impl FnOnce(&mut S)) -> bool {
        self.holder.update_if(&self.token, edit)
    }

    pub fn snapshot(&self) -> S {
        self.holder.snapshot()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_update_publishes_snapshot() {
        let holder = StateHolder::new(0u32);
        let mut rx = holder.subscribe();

        holder.update(|n| *n = 7);

        assert_eq!(holder.snapshot(), 7);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 7);
    }

    #[tokio::test]
    async fn test_closed_holder_ignores_updates() {
        let holder = StateHolder::new(1u32);
        holder.close();

        assert!(!holder.update(|n| *n = 2));
        assert_eq!(holder.snapshot(), 1);
    }

    #[tokio::test]
    async fn test_exclusive_launch_supersedes_previous() {
        let holder = StateHolder::new(Vec::<&'static str>::new());

        let slow = holder.launch_exclusive("list", |task| async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            task.update(|v| v.push("slow"));
        });
        let fast = holder.launch_exclusive("list", |task| async move {
            task.update(|v| v.push("fast"));
        });

        fast.await.unwrap();
        slow.await.unwrap();
        assert_eq!(holder.snapshot(), vec!["fast"]);
    }

    #[tokio::test]
    async fn test_plain_launches_do_not_cancel_each_other() {
        let holder = StateHolder::new(0u32);

        let first = holder.launch(|task| async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            task.update(|n| *n += 1);
        });
        let second = holder.launch(|task| async move {
            task.update(|n| *n += 10);
        });

        first.await.unwrap();
        second.await.unwrap();
        assert_eq!(holder.snapshot(), 11);
    }

    #[tokio::test]
    async fn test_close_stops_running_task() {
        let holder = StateHolder::new(0u32);
        let handle = holder.launch(|task| async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            task.update(|n| *n = 99);
        });

        holder.close();
        handle.await.unwrap();

        assert_eq!(holder.snapshot(), 0);
    }
}
