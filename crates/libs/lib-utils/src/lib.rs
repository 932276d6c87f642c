//! # Utilities Library
//!
//! Shared utility functions for environment variables, calendar dates and input validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse, get_env_parse_or};
pub use time::{current_month_year, format_date, parse_date, today};
pub use validation::{validate_email, validate_min_length, validate_not_empty, validate_positive_amount};
