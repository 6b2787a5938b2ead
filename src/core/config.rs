//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External API client settings.
    pub api: ApiConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Settings for the shared HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Global request timeout applied to every call.
    pub timeout_secs: u64,

    /// User agent sent with every request.
    pub user_agent: String,
}

/// Credentials attached to every API request.
///
/// Token acquisition and refresh happen outside this server; the access token
/// is taken as given.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Bearer access token.
    pub access_token: Option<String>,

    /// Application key sent alongside the token.
    pub app_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("app_key", &self.app_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl CredentialsConfig {
    /// Whether both the access token and the app key are set.
    pub fn is_complete(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|v| !v.is_empty());
        present(&self.access_token) && present(&self.app_key)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "servicetitan-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            api: ApiConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_API_ACCESS_TOKEN`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.to_lowercase() != "false" && timestamps != "0";
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(timeout) = std::env::var("MCP_API_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.api.timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring invalid MCP_API_TIMEOUT_SECS={:?}, keeping {}s",
                    timeout, config.api.timeout_secs
                ),
            }
        }

        if let Ok(user_agent) = std::env::var("MCP_API_USER_AGENT") {
            config.api.user_agent = user_agent;
        }

        if let Ok(token) = std::env::var("MCP_API_ACCESS_TOKEN") {
            config.credentials.access_token = Some(token);
            info!("API access token loaded from environment");
        } else {
            warn!("MCP_API_ACCESS_TOKEN not set - API calls will most likely be rejected");
        }

        if let Ok(app_key) = std::env::var("MCP_API_APP_KEY") {
            config.credentials.app_key = Some(app_key);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_API_ACCESS_TOKEN", "test_token_12345");
            std::env::set_var("MCP_API_APP_KEY", "ak1.test");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.access_token.as_deref(),
            Some("test_token_12345")
        );
        assert_eq!(config.credentials.app_key.as_deref(), Some("ak1.test"));
        unsafe {
            std::env::remove_var("MCP_API_ACCESS_TOKEN");
            std::env::remove_var("MCP_API_APP_KEY");
        }
    }

    #[test]
    fn test_credentials_completeness() {
        let mut credentials = CredentialsConfig::default();
        assert!(!credentials.is_complete());

        credentials.access_token = Some("token".to_string());
        credentials.app_key = Some(String::new());
        assert!(!credentials.is_complete());

        credentials.app_key = Some("ak1.key".to_string());
        assert!(credentials.is_complete());
    }

    #[test]
    fn test_timeout_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_API_TIMEOUT_SECS", "5");
        }
        assert_eq!(Config::from_env().api.timeout_secs, 5);

        unsafe {
            std::env::set_var("MCP_API_TIMEOUT_SECS", "soon");
        }
        assert_eq!(Config::from_env().api.timeout_secs, 30);

        unsafe {
            std::env::remove_var("MCP_API_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            access_token: Some("super_secret_token".to_string()),
            app_key: Some("super_secret_key".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_config_default_has_no_credentials() {
        let config = Config::default();
        assert!(config.credentials.access_token.is_none());
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.api.user_agent.starts_with("servicetitan_mcp_server/"));
    }
}
