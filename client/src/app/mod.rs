//! # Application Orchestrator
//!
//! [`App`] wires the layers together once per process and hands out screen handlers:
//!
//! ```text
//! Config ──► ReqwestTransport ─┐
//!                              ├─► ApiClient ──► repositories ──► handlers
//! FileCredentialStore ─────────┘
//! ```
//!
//! ## Key Components
//!
//! - **[`App`]**: builds the shared [`ApiClient`] and constructs handlers on demand
//! - **[`holder`]**: [`StateHolder`](holder::StateHolder), the snapshot/watch/cancel scope
//!   every handler owns
//! - **[`state`]**: per-screen snapshot types
//! - **[`handlers`]**: one handler per screen, each exposing intents that return
//!   `JoinHandle`s
//!
//! Handlers are independent: each has its own scope, so closing one screen never
//! affects requests started by another.

use std::sync::Arc;

use lib_core::config::Config;

use crate::core::error::TransportError;
use crate::core::service::{CredentialStore, HttpTransport};
use crate::services::api::{ApiClient, ReqwestTransport};
use crate::services::credentials::FileCredentialStore;

pub mod handlers;
pub mod holder;
pub mod state;

use handlers::{
    ArticleHandler, AuthHandler, BudgetHandler, HomeHandler, ProfileHandler, ReminderHandler,
    SavingHandler, TransactionHandler,
};

/// Application orchestrator.
#[derive(Clone)]
pub struct App {
    api: ApiClient,
}

impl App {
    /// Production wiring: reqwest transport plus the credential file from `config`.
    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new(config)?);
        let credentials: Arc<dyn CredentialStore> =
            Arc::new(FileCredentialStore::open(config.credentials_path.clone()));

        tracing::info!(
            base_url = %config.api_base_url,
            credentials = %config.credentials_path.display(),
            "Client initialized"
        );
        Ok(Self::with_parts(&config.api_base_url, transport, credentials))
    }

    /// Wire explicit parts (tests, embedders with their own transport or store).
    pub fn with_parts(
        base_url: &str,
        transport: Arc<dyn HttpTransport>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            api: ApiClient::new(base_url, transport, credentials),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn is_logged_in(&self) -> bool {
        self.api.credentials().is_authenticated()
    }

    pub fn auth(&self) -> AuthHandler {
        AuthHandler::new(&self.api)
    }

    pub fn home(&self) -> HomeHandler {
        HomeHandler::new(&self.api)
    }

    pub fn transactions(&self) -> TransactionHandler {
        TransactionHandler::new(&self.api)
    }

    /// Budget handler, already loading the current month.
    pub fn budgets(&self) -> BudgetHandler {
        BudgetHandler::open(&self.api)
    }

    pub fn savings(&self) -> SavingHandler {
        SavingHandler::new(&self.api)
    }

    pub fn reminders(&self) -> ReminderHandler {
        ReminderHandler::new(&self.api)
    }

    pub fn profile(&self) -> ProfileHandler {
        ProfileHandler::new(&self.api)
    }

    pub fn articles(&self) -> ArticleHandler {
        ArticleHandler::new(&self.api)
    }
}
