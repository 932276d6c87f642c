use lib_core::model::{NewSaving, Saving};
use lib_core::Result;
use shared::dto::{AddToSavingRequest, SavingDto, SavingRequest};

use super::messages::saving as msg;
use super::{resolve, resolve_list, resolve_message};
use crate::services::api::ApiClient;

#[derive(Clone)]
pub struct SavingRepository {
    api: ApiClient,
}

impl SavingRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Saving>> {
        let outcome = self.api.list_savings().await;
        let list = resolve_list::<SavingDto>(outcome, msg::FETCH_FAILED, msg::INVALID_PAYLOAD)?;
        Ok(list.items.into_iter().map(Saving::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<Saving> {
        let outcome = self.api.get_saving(id).await;
        resolve::<SavingDto>(outcome, msg::FETCH_FAILED, msg::INVALID_PAYLOAD).map(Saving::from)
    }

    pub async fn create(&self, draft: &NewSaving) -> Result<Saving> {
        let outcome = self.api.create_saving(&SavingRequest::from(draft)).await;
        resolve::<SavingDto>(outcome, msg::CREATE_FAILED, msg::INVALID_PAYLOAD).map(Saving::from)
    }

    pub async fn update(&self, id: &str, draft: &NewSaving) -> Result<Saving> {
        let outcome = self.api.update_saving(id, &SavingRequest::from(draft)).await;
        resolve::<SavingDto>(outcome, msg::UPDATE_FAILED, msg::INVALID_PAYLOAD).map(Saving::from)
    }

    /// Deposit `amount` into a goal. Returns the goal with the server's new totals.
    pub async fn add_funds(&self, id: &str, amount: f64) -> Result<Saving> {
        let outcome = self.api.add_to_saving(id, &AddToSavingRequest { amount }).await;
        resolve::<SavingDto>(outcome, msg::ADD_FAILED, msg::INVALID_PAYLOAD).map(Saving::from)
    }

    pub async fn delete(&self, id: &str) -> Result<String> {
        let outcome = self.api.delete_saving(id).await;
        resolve_message(outcome, msg::DELETE_FAILED, msg::DELETED)
    }
}
