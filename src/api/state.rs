//! Application state - Dependency injection container.
//!
//! The controller's single collaborator — the identity provider client —
//! is injected here explicitly; no ambient singletons.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::IdentityApi;
use crate::services::IdentityProvider;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Identity provider client
    pub provider: Arc<dyn IdentityProvider>,
}

impl AppState {
    /// Create application state with an explicitly injected provider client.
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Create application state from configuration, wiring the HTTP-backed
    /// provider client.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let provider = IdentityApi::from_config(config)?;
        Ok(Self::new(Arc::new(provider)))
    }
}
