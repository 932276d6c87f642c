//! # AccountingGrow Client - Library Root
//!
//! Client for the AccountingGrow personal-finance backend: record income and
//! expenses, plan monthly budgets, track savings goals, get bill reminders and read
//! financial articles.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │  app        - App orchestrator, StateHolder, handlers  │
//! ├────────────────────────────────────────────────────────┤
//! │  repository - envelope → DomainError / domain model    │
//! ├────────────────────────────────────────────────────────┤
//! │  services   - ApiClient (reqwest), credential stores   │
//! ├────────────────────────────────────────────────────────┤
//! │  core       - TransportError, HttpTransport,           │
//! │               CredentialStore                          │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (JSON envelopes, bearer token)
//!          ▼
//! ┌─────────────────┐
//! │  REST backend   │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: screen handlers; each owns a snapshot, a watch channel and a
//!   cancellation scope, and exposes intents that return `JoinHandle`s
//! - **repository**: one repository per entity; every operation returns
//!   `lib_core::Result<T>`
//! - **services**: `api` (endpoint methods over an injected transport) and
//!   `credentials` (in-memory and file-backed session stores)
//! - **core**: error types and the two injection seams
//! - **debug**: logging initialization for binaries
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use client::app::handlers::Screen;
//! use client::app::App;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = lib_core::config::init_config().map_err(anyhow::Error::msg)?;
//! let app = App::from_config(config)?;
//!
//! let home = app.home();
//! home.load().await?;
//! println!("Halo, {}", home.state().username);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod repository;
pub mod services;

#[cfg(test)]
mod test_support;
