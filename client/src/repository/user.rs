//! # User Repository
//!
//! Profile management plus the two operations that end a session on the server.

use lib_core::model::{ProfileUpdate, UserProfile};
use lib_core::Result;
use shared::dto::{ChangePasswordRequest, UpdateProfileRequest, UserDto};

use super::messages::user as msg;
use super::{resolve, resolve_message};
use crate::services::api::ApiClient;

#[derive(Clone)]
pub struct UserRepository {
    api: ApiClient,
}

impl UserRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn profile(&self) -> Result<UserProfile> {
        let outcome = self.api.get_profile().await;
        resolve::<UserDto>(outcome, msg::FETCH_FAILED, msg::INVALID_PAYLOAD).map(UserProfile::from)
    }

    /// Send only the fields that are set. Returns the profile as the server saved it.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        let outcome = self.api.update_profile(&UpdateProfileRequest::from(update)).await;
        resolve::<UserDto>(outcome, msg::UPDATE_FAILED, msg::INVALID_PAYLOAD).map(UserProfile::from)
    }

    pub async fn change_password(&self, current_password: &str, new_password: &str) -> Result<String> {
        let request = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        let outcome = self.api.change_password(&request).await;
        resolve_message(outcome, msg::PASSWORD_FAILED, msg::PASSWORD_CHANGED)
    }

    /// Tell the server, then clear the local session no matter what it said.
    ///
    /// Always `Ok`: signing out locally never depends on the backend.
    #[tracing::instrument(skip(self))]
    pub async fn logout(&self) -> Result<String> {
        let outcome = self.api.logout().await;
        if let Err(e) = resolve_message(outcome, msg::LOGOUT_SUCCESS, msg::LOGOUT_SUCCESS) {
            tracing::warn!(error = %e, "Remote logout failed, clearing local session anyway");
        }
        self.clear_local();
        Ok(msg::LOGOUT_SUCCESS.to_string())
    }

    /// Delete the account. The local session is cleared only once the server confirms.
    #[tracing::instrument(skip(self))]
    pub async fn delete_account(&self) -> Result<String> {
        let outcome = self.api.delete_account().await;
        let message = resolve_message(outcome, msg::DELETE_ACCOUNT_FAILED, msg::ACCOUNT_DELETED)?;
        self.clear_local();
        Ok(message)
    }

    fn clear_local(&self) {
        if let Err(e) = self.api.credentials().clear() {
            tracing::warn!(error = %e, "Failed to remove persisted session");
        }
    }
}
