//! # Profile Handler
//!
//! Profile editing plus the two ways out of a session: logout and account deletion.

use lib_core::model::ProfileUpdate;
use lib_utils::validation::{validate_min_length, validate_not_empty};
use tokio::task::JoinHandle;
use tokio_util::sync::DropGuard;

use super::auth::MIN_PASSWORD_LENGTH;
use super::{scoped, Screen};
use crate::app::holder::StateHolder;
use crate::app::state::ProfileState;
use crate::repository::messages::user as msg;
use crate::repository::UserRepository;
use crate::services::api::ApiClient;

pub struct ProfileHandler {
    holder: StateHolder<ProfileState>,
    repo: UserRepository,
    _guard: DropGuard,
}

impl Screen for ProfileHandler {
    type State = ProfileState;

    fn holder(&self) -> &StateHolder<ProfileState> {
        &self.holder
    }
}

impl ProfileHandler {
    pub fn new(api: &ApiClient) -> Self {
        let (holder, guard) = scoped::<ProfileState>();
        Self {
            holder,
            repo: UserRepository::new(api.clone()),
            _guard: guard,
        }
    }

    pub fn load_profile(&self) -> JoinHandle<()> {
        let repo = self.repo.clone();
        self.holder.update(|state| state.status.begin());

        self.holder.launch_exclusive("profile", move |task| async move {
            match repo.profile().await {
                Ok(profile) => task.update(|state| {
                    state.profile = Some(profile);
                    state.status.succeed(None);
                }),
                Err(e) => task.update(|state| state.status.fail(&e)),
            };
        })
    }

    /// Send the changed fields. The snapshot takes the profile the server returns.
    pub fn update_profile(&self, update: ProfileUpdate) -> JoinHandle<()> {
        let repo = self.repo.clone();
        self.holder.update(|state| state.status.begin());

        self.holder.launch(move |task| async move {
            if update.is_empty() {
                task.update(|state| state.status.fail_with("Tidak ada perubahan profil"));
                return;
            }

            match repo.update_profile(&update).await {
                Ok(profile) => task.update(|state| {
                    state.profile = Some(profile);
                    state.status.succeed(Some(msg::UPDATED.to_string()));
                }),
                Err(e) => task.update(|state| state.status.fail(&e)),
            };
        })
    }

    pub fn change_password(&self, current_password: &str, new_password: &str) -> JoinHandle<()> {
        let current_password = current_password.to_string();
        let new_password = new_password.to_string();
        let repo = self.repo.clone();
        self.holder.update(|state| state.status.begin());

        self.holder.launch(move |task| async move {
            let validated = validate_not_empty(&current_password, "Password lama")
                .and_then(|_| validate_min_length(&new_password, MIN_PASSWORD_LENGTH, "Password baru"));
            if let Err(message) = validated {
                task.update(|state| state.status.fail_with(message));
                return;
            }

            match repo.change_password(&current_password, &new_password).await {
                Ok(message) => task.update(|state| state.status.succeed(Some(message))),
                Err(e) => task.update(|state| state.status.fail(&e)),
            };
        })
    }

    /// Ends logged out whatever the server answers.
    pub fn logout(&self) -> JoinHandle<()> {
        let repo = self.repo.clone();
        self.holder.update(|state| state.status.begin());

        self.holder.launch(move |task| async move {
            let result = repo.logout().await;
            task.update(|state| {
                match result {
                    Ok(message) => state.status.succeed(Some(message)),
                    Err(e) => state.status.fail(&e),
                }
                state.profile = None;
                state.is_logged_out = true;
            });
        })
    }

    pub fn delete_account(&self) -> JoinHandle<()> {
        let repo = self.repo.clone();
        self.holder.update(|state| state.status.begin());

        self.holder.launch(move |task| async move {
            match repo.delete_account().await {
                Ok(message) => task.update(|state| {
                    state.status.succeed(Some(message));
                    state.profile = None;
                    state.is_logged_out = true;
                }),
                Err(e) => task.update(|state| state.status.fail(&e)),
            };
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::TransportError;
    use crate::core::service::CredentialStore;
    use crate::test_support::{logged_in_client, MockTransport};
    use serde_json::json;

    fn user(first_name: &str) -> serde_json::Value {
        json!({
            "id": "1", "username": "bob", "email": "b@x.com",
            "firstName": first_name, "lastName": null, "phoneNumber": null, "bio": null
        })
    }

    #[tokio::test]
    async fn test_update_profile_replaces_snapshot() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"success": true, "data": user("Bobby")}));
        let (api, _) = logged_in_client(&transport);
        let handler = ProfileHandler::new(&api);

        let update = ProfileUpdate {
            first_name: Some("Bobby".to_string()),
            ..ProfileUpdate::default()
        };
        handler.update_profile(update).await.unwrap();

        let state = handler.state();
        assert_eq!(state.profile.unwrap().first_name.as_deref(), Some("Bobby"));
        assert_eq!(state.status.success_message.as_deref(), Some("Profil berhasil diperbarui"));
    }

    #[tokio::test]
    async fn test_logout_on_transport_error_still_logs_out() {
        // Arrange
        let transport = MockTransport::new();
        transport.push_error(TransportError::Timeout("read".to_string()));
        let (api, store) = logged_in_client(&transport);
        let handler = ProfileHandler::new(&api);

        // Act
        handler.logout().await.unwrap();

        // Assert
        let state = handler.state();
        assert!(state.is_logged_out);
        assert_eq!(state.status.success_message.as_deref(), Some("Logout berhasil"));
        assert!(store.session().is_none());
    }

    #[tokio::test]
    async fn test_delete_account_failure_keeps_session() {
        let transport = MockTransport::new();
        transport.push_json(403, json!({"success": false}));
        let (api, store) = logged_in_client(&transport);
        let handler = ProfileHandler::new(&api);

        handler.delete_account().await.unwrap();

        let state = handler.state();
        assert!(!state.is_logged_out);
        assert_eq!(state.status.error_message.as_deref(), Some("Gagal menghapus akun"));
        assert!(store.session().is_some());
    }

    #[tokio::test]
    async fn test_short_new_password_is_rejected_locally() {
        let transport = MockTransport::new();
        let (api, _) = logged_in_client(&transport);
        let handler = ProfileHandler::new(&api);

        handler.change_password("old-secret", "abc").await.unwrap();

        assert_eq!(
            handler.state().status.error_message.as_deref(),
            Some("Password baru minimal 6 karakter")
        );
        assert_eq!(transport.request_count(), 0);
    }
}
