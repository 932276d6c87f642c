//! # Authentication Handlers
//!
//! Login and registration. Inputs are validated before any request is sent.

use lib_utils::validation::{validate_email, validate_min_length, validate_not_empty};
use tokio::task::JoinHandle;
use tokio_util::sync::DropGuard;

use super::{scoped, Screen};
use crate::app::holder::StateHolder;
use crate::app::state::AuthState;
use crate::repository::AuthRepository;
use crate::services::api::ApiClient;

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub struct AuthHandler {
    holder: StateHolder<AuthState>,
    repo: AuthRepository,
    _guard: DropGuard,
}

impl Screen for AuthHandler {
    type State = AuthState;

    fn holder(&self) -> &StateHolder<AuthState> {
        &self.holder
    }
}

impl AuthHandler {
    pub fn new(api: &ApiClient) -> Self {
        let (holder, guard) = scoped::<AuthState>();
        let repo = AuthRepository::new(api.clone());
        let logged_in = repo.is_logged_in();
        holder.update(|state| state.is_authenticated = logged_in);
        Self {
            holder,
            repo,
            _guard: guard,
        }
    }

    pub fn login(&self, username: &str, password: &str) -> JoinHandle<()> {
        let username = username.trim().to_string();
        let password = password.to_string();
        let repo = self.repo.clone();
        self.holder.update(|state| state.status.begin());

        self.holder.launch(move |task| async move {
            let validated = validate_not_empty(&username, "Username").and_then(|_| validate_not_empty(&password, "Password"));
            if let Err(message) = validated {
                task.update(|state| state.status.fail_with(message));
                return;
            }

            match repo.login(&username, &password).await {
                Ok(message) => task.update(|state| {
                    state.status.succeed(Some(message));
                    state.is_authenticated = true;
                }),
                Err(e) => task.update(|state| state.status.fail(&e)),
            };
        })
    }

    pub fn register(&self, username: &str, email: &str, password: &str) -> JoinHandle<()> {
        let username = username.trim().to_string();
        let email = email.trim().to_string();
        let password = password.to_string();
        let repo = self.repo.clone();
        self.holder.update(|state| state.status.begin());

        self.holder.launch(move |task| async move {
            let validated = validate_not_empty(&username, "Username")
                .and_then(|_| validate_email(&email))
                .and_then(|_| validate_min_length(&password, MIN_PASSWORD_LENGTH, "Password"));
            if let Err(message) = validated {
                task.update(|state| state.status.fail_with(message));
                return;
            }

            match repo.register(&username, &email, &password).await {
                Ok(message) => task.update(|state| state.status.succeed(Some(message))),
                Err(e) => task.update(|state| state.status.fail(&e)),
            };
        })
    }

    /// Re-read the credential store.
    pub fn check_auth_status(&self) -> bool {
        let logged_in = self.repo.is_logged_in();
        self.holder.update(|state| state.is_authenticated = logged_in);
        logged_in
    }
}
