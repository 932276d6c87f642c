//! # Data Transfer Objects (DTOs)
//!
//! Wire shapes for every endpoint the client consumes.
//!
//! ## Module Organization
//!
//! - [`envelope`] - Response wrapper and list payload shapes
//! - [`auth`] - `/auth/*` requests and the token response
//! - [`transaction`] - Transactions, summaries and list filters
//! - [`category`] - Income/expense categories
//! - [`budget`] - Monthly/weekly/daily budgets
//! - [`saving`] - Savings goals and deposits
//! - [`reminder`] - Payment reminders
//! - [`article`] - Financial literacy articles
//! - [`user`] - Profile and password management
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /budgets
//! Authorization: Bearer eyJhbGciOi...
//!
//! {
//!   "amount": 1500000.0,
//!   "budgetType": "MONTHLY",
//!   "month": 10,
//!   "year": 2026,
//!   "categoryId": "cat-food"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 201 Created
//!
//! {
//!   "success": true,
//!   "message": "Budget created",
//!   "data": { "id": "b-1", "amount": 1500000.0, "percentage": 0.0, ... }
//! }
//! ```

pub mod article;
pub mod auth;
pub mod budget;
pub mod category;
pub mod envelope;
pub mod reminder;
pub mod saving;
pub mod transaction;
pub mod user;

pub use article::*;
pub use auth::*;
pub use budget::*;
pub use category::*;
pub use envelope::*;
pub use reminder::*;
pub use saving::*;
pub use transaction::*;
pub use user::*;
