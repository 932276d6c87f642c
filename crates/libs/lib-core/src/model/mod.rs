//! # Domain Model
//!
//! Immutable value objects used by repositories and UI state. Entities are only ever
//! produced by mapping a server DTO (`From<Dto>`); user input travels the other way as a
//! typed draft (`NewBudget`, `NewTransaction`, ...) that converts into a request DTO.
//! The backend stays the source of truth: nothing here is mutated locally.

pub mod article;
pub mod budget;
pub mod category;
pub mod codes;
pub mod page;
pub mod reminder;
pub mod saving;
pub mod transaction;
pub mod user;

pub use article::Article;
pub use budget::{Budget, BudgetFilter, BudgetSeverity, NewBudget};
pub use category::{Category, NewCategory};
pub use codes::{BudgetType, CodeEnum, FillingPlan, Recurrence, TransactionType};
pub use page::Page;
pub use reminder::{NewReminder, Reminder, ReminderFilter};
pub use saving::{NewSaving, Saving};
pub use transaction::{NewTransaction, Transaction, TransactionFilter, TransactionSummary};
pub use user::{ProfileUpdate, UserProfile};
