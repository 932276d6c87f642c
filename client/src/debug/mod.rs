//! # Logging
//!
//! File-based structured logging for the `grow` binary and anything else that embeds
//! the client.
//!
//! - Daily-rotated log files under `GROW_LOG_DIR` (default `logs/`, file `grow.log`)
//! - `RUST_LOG` filter, falling back to `client=info,grow=info,warn`
//! - Optional human-readable copy on stderr (`GROW_LOG_STDERR=1`)
//! - Panics are logged with their location before the default hook runs
//!
//! ```rust,no_run
//! use client::debug::{self, LogConfig};
//!
//! let _guard = debug::init_logger(&LogConfig::from_env()).expect("logging");
//! tracing::info!("ready");
//! ```

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::{init as init_logger, LoggerError};
