use lib_core::model::{NewReminder, Reminder, ReminderFilter};
use lib_core::Result;
use shared::dto::{ReminderDto, ReminderQuery, ReminderRequest};

use super::messages::reminder as msg;
use super::{resolve, resolve_list, resolve_message, Outcome};
use crate::services::api::ApiClient;

#[derive(Clone)]
pub struct ReminderRepository {
    api: ApiClient,
}

impl ReminderRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, filter: &ReminderFilter) -> Result<Vec<Reminder>> {
        let outcome = self.api.list_reminders(&ReminderQuery::from(filter)).await;
        self.map_list(outcome)
    }

    /// Unpaid reminders the server considers due soon.
    pub async fn upcoming(&self) -> Result<Vec<Reminder>> {
        let outcome = self.api.upcoming_reminders().await;
        self.map_list(outcome)
    }

    pub async fn get(&self, id: &str) -> Result<Reminder> {
        let outcome = self.api.get_reminder(id).await;
        resolve::<ReminderDto>(outcome, msg::FETCH_FAILED, msg::INVALID_PAYLOAD).map(Reminder::from)
    }

    pub async fn create(&self, draft: &NewReminder) -> Result<Reminder> {
        let outcome = self.api.create_reminder(&ReminderRequest::from(draft)).await;
        resolve::<ReminderDto>(outcome, msg::CREATE_FAILED, msg::INVALID_PAYLOAD).map(Reminder::from)
    }

    pub async fn update(&self, id: &str, draft: &NewReminder) -> Result<Reminder> {
        let outcome = self.api.update_reminder(id, &ReminderRequest::from(draft)).await;
        resolve::<ReminderDto>(outcome, msg::UPDATE_FAILED, msg::INVALID_PAYLOAD).map(Reminder::from)
    }

    pub async fn mark_paid(&self, id: &str) -> Result<Reminder> {
        let outcome = self.api.mark_reminder_paid(id).await;
        resolve::<ReminderDto>(outcome, msg::MARK_PAID_FAILED, msg::INVALID_PAYLOAD).map(Reminder::from)
    }

    pub async fn delete(&self, id: &str) -> Result<String> {
        let outcome = self.api.delete_reminder(id).await;
        resolve_message(outcome, msg::DELETE_FAILED, msg::DELETED)
    }

    fn map_list(&self, outcome: Outcome) -> Result<Vec<Reminder>> {
        let list = resolve_list::<ReminderDto>(outcome, msg::FETCH_FAILED, msg::INVALID_PAYLOAD)?;
        Ok(list.items.into_iter().map(Reminder::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{logged_in_client, MockTransport};
    use lib_core::model::Recurrence;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_mark_paid_uses_patch() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"success": true, "data": {
            "id": "r-1",
            "name": "Internet",
            "dueDate": "2026-10-25",
            "amount": 300000.0,
            "recurrence": "MONTHLY",
            "notes": null,
            "isPaid": true,
            "userId": "1",
            "createdAt": "2026-10-01",
            "updatedAt": "2026-10-19"
        }}));
        let (api, _) = logged_in_client(&transport);

        let reminder = ReminderRepository::new(api).mark_paid("r-1").await.unwrap();

        assert!(reminder.is_paid);
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::PATCH);
        assert_eq!(sent.url, "http://api.test/api/reminders/r-1/mark-paid");
    }

    #[tokio::test]
    async fn test_list_filters_by_paid_flag() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"success": true, "data": []}));
        let (api, _) = logged_in_client(&transport);

        let filter = ReminderFilter {
            is_paid: Some(false),
            ..ReminderFilter::default()
        };
        let reminders = ReminderRepository::new(api).list(&filter).await.unwrap();

        assert!(reminders.is_empty());
        assert_eq!(transport.last_request().unwrap().query_param("isPaid"), Some("false"));
    }

    fn reminder_json(id: &str, recurrence: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": "Listrik",
            "dueDate": "2026-11-05",
            "amount": 450000.0,
            "recurrence": recurrence,
            "notes": null,
            "isPaid": false,
            "userId": "1",
            "createdAt": "2026-10-01",
            "updatedAt": "2026-10-19"
        })
    }

    #[tokio::test]
    async fn test_update_puts_encoded_id_and_falls_back() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"success": true, "data": reminder_json("r 1", "YEARLY")}));
        let (api, _) = logged_in_client(&transport);

        let draft = NewReminder {
            name: "Listrik".to_string(),
            due_date: "2026-11-05".to_string(),
            amount: 450000.0,
            recurrence: Recurrence::Monthly,
            notes: Some("Token PLN".to_string()),
        };
        let reminder = ReminderRepository::new(api).update("r 1", &draft).await.unwrap();

        assert_eq!(reminder.recurrence, Recurrence::None);
        assert!(!reminder.is_paid);
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::PUT);
        assert_eq!(sent.url, "http://api.test/api/reminders/r%201");
        assert_eq!(
            sent.body,
            Some(json!({
                "name": "Listrik",
                "dueDate": "2026-11-05",
                "amount": 450000.0,
                "recurrence": "MONTHLY",
                "notes": "Token PLN"
            }))
        );
    }

    #[tokio::test]
    async fn test_get_maps_reminder() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"success": true, "data": reminder_json("r-2", "WEEKLY")}));
        let (api, _) = logged_in_client(&transport);

        let reminder = ReminderRepository::new(api).get("r-2").await.unwrap();

        assert_eq!(reminder.recurrence, Recurrence::Weekly);
        assert_eq!(reminder.due_date, "2026-11-05");
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::GET);
        assert_eq!(sent.url, "http://api.test/api/reminders/r-2");
    }
}
