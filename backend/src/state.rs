//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::auth::{AuthError, CredentialStore, TokenService};
use crate::config::AppConfig;
use crate::services::ActivityRegistry;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub credentials: Arc<CredentialStore>,
    pub tokens: Arc<TokenService>,
    pub registry: Arc<ActivityRegistry>,
}

impl AppState {
    pub fn new(config: AppConfig, credentials: CredentialStore, registry: ActivityRegistry) -> Self {
        let tokens = TokenService::new(&config.jwt_secret, config.token_ttl());
        Self {
            config: Arc::new(config),
            credentials: Arc::new(credentials),
            tokens: Arc::new(tokens),
            registry: Arc::new(registry),
        }
    }

    /// Load teacher credentials from `config.teachers_file` and seed the registry.
    pub fn from_config(config: AppConfig) -> Result<Self, AuthError> {
        let credentials = CredentialStore::load(&config.teachers_file)?;
        Ok(Self::new(config, credentials, ActivityRegistry::seeded()))
    }
}
