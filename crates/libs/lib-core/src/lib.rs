//! # Core Library
//!
//! Domain model, DTO mapping, domain errors and configuration for the AccountingGrow client.
//!
//! - **[`model`]**: Immutable domain entities built only from server DTOs, typed drafts
//!   for create/update requests, and the code enums with their fallback policy
//! - **[`error`]**: [`DomainError`], the single failure type repositories return
//! - **[`config`]**: [`Config`] loaded from the environment

pub mod config;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use config::Config;
pub use error::{DomainError, Result};
