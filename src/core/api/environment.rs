//! Environment resolution.
//!
//! Maps the logical environment token a tool receives to the base URL of the
//! matching API deployment.

use std::fmt;
use std::str::FromStr;

use super::error::ApiError;

/// Token used when a tool call does not name an environment.
pub const DEFAULT_ENVIRONMENT: &str = "production";

const PRODUCTION_BASE_URL: &str = "https://api.servicetitan.io";
const INTEGRATION_BASE_URL: &str = "https://api-integration.servicetitan.io";

/// A target API deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Live tenant data.
    Production,
    /// Sandbox deployment used for integration work.
    Integration,
}

impl Environment {
    /// Every recognised environment, in the order shown to callers.
    pub const ALL: [Environment; 2] = [Environment::Production, Environment::Integration];

    /// Base URL for this environment, without a trailing slash.
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_BASE_URL,
            Self::Integration => INTEGRATION_BASE_URL,
        }
    }

    /// Canonical token for this environment.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Integration => "integration",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ApiError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "integration" | "sandbox" => Ok(Self::Integration),
            _ => Err(ApiError::unknown_environment(token)),
        }
    }
}

/// Resolve an environment token straight to its base URL.
pub fn resolve_base_url(token: &str) -> Result<&'static str, ApiError> {
    token.parse::<Environment>().map(Environment::base_url)
}
