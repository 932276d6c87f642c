use shared::dto::{ReminderDto, ReminderQuery, ReminderRequest};

use super::codes::{CodeEnum, Recurrence};
use super::transaction::non_blank;

/// A bill reminder.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: String,
    pub name: String,
    pub due_date: String,
    pub amount: f64,
    pub recurrence: Recurrence,
    pub notes: Option<String>,
    pub is_paid: bool,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ReminderDto> for Reminder {
    fn from(dto: ReminderDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            due_date: dto.due_date,
            amount: dto.amount,
            recurrence: Recurrence::from_code(&dto.recurrence),
            notes: dto.notes,
            is_paid: dto.is_paid,
            user_id: dto.user_id,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

/// Draft for creating or editing a reminder.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReminder {
    pub name: String,
    /// `YYYY-MM-DD`
    pub due_date: String,
    pub amount: f64,
    pub recurrence: Recurrence,
    pub notes: Option<String>,
}

impl From<&NewReminder> for ReminderRequest {
    fn from(draft: &NewReminder) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            due_date: draft.due_date.clone(),
            amount: draft.amount,
            recurrence: draft.recurrence.code().to_string(),
            notes: non_blank(draft.notes.as_deref()),
        }
    }
}

/// Filters for `GET /reminders`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderFilter {
    pub is_paid: Option<bool>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl From<&ReminderFilter> for ReminderQuery {
    fn from(filter: &ReminderFilter) -> Self {
        Self {
            is_paid: filter.is_paid,
            start_date: filter.start_date.clone(),
            end_date: filter.end_date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_recurrence_falls_back_to_none() {
        let reminder = Reminder::from(ReminderDto {
            id: "r-1".to_string(),
            name: "Listrik".to_string(),
            due_date: "2026-10-25".to_string(),
            amount: 350_000.0,
            recurrence: "YEARLY".to_string(),
            notes: None,
            is_paid: false,
            user_id: "u-1".to_string(),
            created_at: "2026-10-01".to_string(),
            updated_at: "2026-10-01".to_string(),
        });
        assert_eq!(reminder.recurrence, Recurrence::None);
        assert!(!reminder.is_paid);
        assert_eq!(reminder.amount, 350_000.0);
    }
}
