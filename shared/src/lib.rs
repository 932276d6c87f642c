//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the AccountingGrow client and the
//! backend REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: The `{success, message, data}` wrapper and list payloads
//!   - **[`dto::auth`]**: Login, registration and token refresh
//!   - **[`dto::transaction`]**, **[`dto::category`]**, **[`dto::budget`]**,
//!     **[`dto::saving`]**, **[`dto::reminder`]**, **[`dto::article`]**, **[`dto::user`]**
//! - **[`utils`]**: Display helpers shared by front ends
//!
//! ## Wire Format
//!
//! - Field names are **camelCase** on the wire (`#[serde(rename_all = "camelCase")]`)
//! - Optional request fields are omitted when `None`
//! - Enum-coded fields (`type`, `budgetType`, `fillingPlan`, `recurrence`) stay plain
//!   strings here; decoding them into closed enums happens in `lib-core`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::{Envelope, auth::AuthResponse};
//!
//! let body = r#"{
//!     "success": true,
//!     "message": "Login berhasil",
//!     "data": {
//!         "accessToken": "A",
//!         "refreshToken": "B",
//!         "user": { "id": "1", "username": "bob", "email": "b@x.com" }
//!     }
//! }"#;
//!
//! let envelope: Envelope<AuthResponse> = serde_json::from_str(body).unwrap();
//! assert!(envelope.success);
//! assert_eq!(envelope.data.unwrap().user.username, "bob");
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
pub use utils::*;
