//! # Reminder Endpoints

use shared::dto::{ReminderQuery, ReminderRequest};

use super::client::{segment, ApiClient, ApiResponse};
use crate::core::error::TransportError;

impl ApiClient {
    /// `GET /reminders?isPaid&startDate&endDate`
    pub async fn list_reminders(&self, query: &ReminderQuery) -> Result<ApiResponse, TransportError> {
        self.get_with("/reminders", query).await
    }

    pub async fn upcoming_reminders(&self) -> Result<ApiResponse, TransportError> {
        self.get("/reminders/upcoming").await
    }

    pub async fn get_reminder(&self, id: &str) -> Result<ApiResponse, TransportError> {
        self.get(&format!("/reminders/{}", segment(id))).await
    }

    pub async fn create_reminder(&self, request: &ReminderRequest) -> Result<ApiResponse, TransportError> {
        self.post("/reminders", request).await
    }

    pub async fn update_reminder(&self, id: &str, request: &ReminderRequest) -> Result<ApiResponse, TransportError> {
        self.put(&format!("/reminders/{}", segment(id)), request).await
    }

    /// `PATCH /reminders/{id}/mark-paid`
    pub async fn mark_reminder_paid(&self, id: &str) -> Result<ApiResponse, TransportError> {
        self.patch(&format!("/reminders/{}/mark-paid", segment(id))).await
    }

    pub async fn delete_reminder(&self, id: &str) -> Result<ApiResponse, TransportError> {
        self.delete(&format!("/reminders/{}", segment(id))).await
    }
}
