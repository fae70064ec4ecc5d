//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_PROVIDER_BASE_URL, DEFAULT_PROVIDER_CLIENT_ID, DEFAULT_PROVIDER_TIMEOUT_SECS,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub provider_base_url: String,
    pub provider_client_id: String,
    provider_service_token: String,
    pub provider_timeout_secs: u64,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("provider_base_url", &self.provider_base_url)
            .field("provider_client_id", &self.provider_client_id)
            .field("provider_service_token", &"[REDACTED]")
            .field("provider_timeout_secs", &self.provider_timeout_secs)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics in release builds if PROVIDER_SERVICE_TOKEN is not set; the
    /// portal cannot authenticate to the identity provider without it.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let provider_service_token = env::var("PROVIDER_SERVICE_TOKEN").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                // Development mode: use default but warn
                tracing::warn!(
                    "PROVIDER_SERVICE_TOKEN not set, using insecure default for development"
                );
                "dev-service-token".to_string()
            } else {
                // Production mode: panic
                panic!("PROVIDER_SERVICE_TOKEN environment variable must be set in production");
            }
        });

        Self {
            provider_base_url: env::var("PROVIDER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_PROVIDER_BASE_URL.to_string()),
            provider_client_id: env::var("PROVIDER_CLIENT_ID")
                .unwrap_or_else(|_| DEFAULT_PROVIDER_CLIENT_ID.to_string()),
            provider_service_token,
            provider_timeout_secs: env::var("PROVIDER_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PROVIDER_TIMEOUT_SECS),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Get the service credential presented to the identity provider.
    pub fn provider_service_token(&self) -> &str {
        &self.provider_service_token
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_service_token() {
        let config = Config {
            provider_base_url: DEFAULT_PROVIDER_BASE_URL.to_string(),
            provider_client_id: DEFAULT_PROVIDER_CLIENT_ID.to_string(),
            provider_service_token: "super-secret".to_string(),
            provider_timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        };

        let rendered = format!("{config:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn server_addr_joins_host_and_port() {
        let config = Config {
            provider_base_url: DEFAULT_PROVIDER_BASE_URL.to_string(),
            provider_client_id: DEFAULT_PROVIDER_CLIENT_ID.to_string(),
            provider_service_token: "t".to_string(),
            provider_timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
        };

        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }
}
