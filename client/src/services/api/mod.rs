//! # Backend API Client Module
//!
//! HTTP client for the AccountingGrow REST backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs           - Module exports and documentation
//! ├── client.rs        - ApiClient: signing, request ids, envelope decoding
//! ├── transport.rs     - HttpRequest/HttpResponse and the reqwest transport
//! ├── auth.rs          - /auth/* (login, register, refresh-token)
//! ├── transactions.rs  - /transactions
//! ├── categories.rs    - /categories
//! ├── budgets.rs       - /budgets
//! ├── savings.rs       - /savings
//! ├── reminders.rs     - /reminders
//! ├── articles.rs      - /articles
//! └── users.rs         - /users
//! ```
//!
//! Endpoint methods return the raw [`ApiResponse`]; interpreting it is the
//! repository layer's job.

pub mod articles;
pub mod auth;
pub mod budgets;
pub mod categories;
pub mod client;
pub mod reminders;
pub mod savings;
pub mod transactions;
pub mod transport;
pub mod users;

pub use client::{ApiClient, ApiResponse};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport};
