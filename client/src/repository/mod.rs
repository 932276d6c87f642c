//! # Repositories
//!
//! One repository per entity. Each operation calls one endpoint and resolves the
//! response the same way:
//!
//! 1. transport failure → [`DomainError::ConnectionFailed`]
//! 2. non-2xx status or `success != true` → [`DomainError::RequestFailed`] with the
//!    server message verbatim, or the operation's localized default
//! 3. payload missing or not decodable → [`DomainError::InvalidPayload`]
//! 4. otherwise map DTO → domain and return `Ok`
//!
//! The helpers below implement those steps once; repositories only name the
//! endpoint, the DTO type and the messages.

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::dto::{Envelope, ListPayload, PagedList};

use lib_core::DomainError;

use crate::core::error::TransportError;
use crate::services::api::ApiResponse;

pub mod article;
pub mod auth;
pub mod budget;
pub mod category;
pub mod home;
pub mod messages;
pub mod reminder;
pub mod saving;
pub mod transaction;
pub mod user;

pub use article::ArticleRepository;
pub use auth::AuthRepository;
pub use budget::BudgetRepository;
pub use category::CategoryRepository;
pub use home::HomeRepository;
pub use reminder::ReminderRepository;
pub use saving::SavingRepository;
pub use transaction::TransactionRepository;
pub use user::UserRepository;

pub(crate) type Outcome = Result<ApiResponse, TransportError>;

/// Steps 1 and 2: the envelope of an accepted response.
pub(crate) fn accepted(outcome: Outcome, failure_default: &str) -> Result<Envelope<Value>, DomainError> {
    let response = outcome.map_err(|e| DomainError::ConnectionFailed(e.to_string()))?;
    let status = response.status;

    match response.envelope {
        Some(envelope) if envelope.success && (200..300).contains(&status) => Ok(envelope),
        Some(envelope) => {
            let message = server_message(envelope.message).unwrap_or_else(|| failure_default.to_string());
            tracing::debug!(status, %message, "Request refused");
            Err(DomainError::RequestFailed(message))
        }
        None => {
            tracing::debug!(status, "Request refused without envelope");
            Err(DomainError::RequestFailed(failure_default.to_string()))
        }
    }
}

/// Full resolution of a payload-bearing response into `T`.
pub(crate) fn resolve<T: DeserializeOwned>(
    outcome: Outcome,
    failure_default: &str,
    invalid_payload: &str,
) -> Result<T, DomainError> {
    let envelope = accepted(outcome, failure_default)?;
    match envelope.decode_data::<T>() {
        Ok(Some(data)) => Ok(data),
        Ok(None) => Err(DomainError::InvalidPayload(invalid_payload.to_string())),
        Err(e) => {
            tracing::warn!(error = %e, "Payload does not match the expected shape");
            Err(DomainError::InvalidPayload(invalid_payload.to_string()))
        }
    }
}

/// Resolution of a list response. Either list shape is accepted; an empty list
/// must still be sent as `[]`.
pub(crate) fn resolve_list<T: DeserializeOwned>(
    outcome: Outcome,
    failure_default: &str,
    invalid_payload: &str,
) -> Result<PagedList<T>, DomainError> {
    let envelope = accepted(outcome, failure_default)?;
    match envelope.decode_data::<ListPayload<T>>() {
        Ok(Some(payload)) => Ok(payload.into_paged()),
        Ok(None) => Err(DomainError::InvalidPayload(invalid_payload.to_string())),
        Err(e) => {
            tracing::warn!(error = %e, "List payload does not match the expected shape");
            Err(DomainError::InvalidPayload(invalid_payload.to_string()))
        }
    }
}

/// Resolution of an operation without a payload: the server message, or
/// `success_default`.
pub(crate) fn resolve_message(
    outcome: Outcome,
    failure_default: &str,
    success_default: &str,
) -> Result<String, DomainError> {
    let envelope = accepted(outcome, failure_default)?;
    Ok(server_message(envelope.message).unwrap_or_else(|| success_default.to_string()))
}

fn server_message(message: Option<String>) -> Option<String> {
    message.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(status: u16, body: Value) -> Outcome {
        Ok(ApiResponse {
            status,
            envelope: serde_json::from_value(body).ok(),
        })
    }

    #[test]
    fn test_server_message_passes_through_unaltered() {
        let outcome = response(200, json!({"success": false, "message": "Kategori sudah ada"}));
        let err = resolve::<Value>(outcome, "Gagal membuat kategori", "Data kategori tidak valid").unwrap_err();
        assert_eq!(err, DomainError::RequestFailed("Kategori sudah ada".to_string()));
    }

    #[test]
    fn test_non_2xx_without_message_uses_default() {
        let outcome = Ok(ApiResponse {
            status: 500,
            envelope: None,
        });
        let err = resolve_message(outcome, "Gagal menghapus anggaran", "Anggaran berhasil dihapus").unwrap_err();
        assert_eq!(err.to_string(), "Gagal menghapus anggaran");
    }

    #[test]
    fn test_non_2xx_with_success_flag_is_still_a_failure() {
        let outcome = response(409, json!({"success": true, "message": "Konflik"}));
        let err = resolve_message(outcome, "x", "y").unwrap_err();
        assert_eq!(err, DomainError::RequestFailed("Konflik".to_string()));
    }

    #[test]
    fn test_missing_payload_is_invalid() {
        let outcome = response(200, json!({"success": true, "message": "ok"}));
        let err = resolve::<Value>(outcome, "x", "Data tidak valid").unwrap_err();
        assert_eq!(err, DomainError::InvalidPayload("Data tidak valid".to_string()));
    }

    #[test]
    fn test_transport_error_is_connection_failure() {
        let outcome = Err(TransportError::Timeout("read".to_string()));
        let err = resolve_message(outcome, "x", "y").unwrap_err();
        assert!(err.is_connection());
        assert_eq!(err.to_string(), "Tidak dapat terhubung ke server: request timed out: read");
    }

    #[test]
    fn test_blank_server_message_falls_back() {
        let outcome = response(200, json!({"success": true, "message": "  "}));
        assert_eq!(resolve_message(outcome, "x", "Berhasil").unwrap(), "Berhasil");
    }

    #[test]
    fn test_null_list_is_invalid() {
        let outcome = response(200, json!({"success": true, "data": null}));
        let err = resolve_list::<Value>(outcome, "x", "Data tidak valid").unwrap_err();
        assert_eq!(err, DomainError::InvalidPayload("Data tidak valid".to_string()));
    }

    #[test]
    fn test_empty_list_is_ok() {
        let outcome = response(200, json!({"success": true, "data": []}));
        let list = resolve_list::<Value>(outcome, "x", "y").unwrap();
        assert!(list.items.is_empty());
        assert_eq!(list.total_pages, 1);
    }
}
