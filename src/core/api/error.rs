//! API client error types.
//!
//! Every variant is a "no usable result" signal for the calling tool. The
//! detail is kept for logging; tools only report their fixed failure message.

use thiserror::Error;

use super::environment::Environment;

/// Result type for API client operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors produced while resolving or performing an API request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The environment token does not name a known deployment.
    #[error("Unknown environment '{0}'. Use one of: {envs}.", envs = known_environments())]
    UnknownEnvironment(String),

    /// The request URL could not be assembled.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// The API answered with a non-success status.
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Create an unknown environment error.
    pub fn unknown_environment(token: impl Into<String>) -> Self {
        Self::UnknownEnvironment(token.into())
    }

    /// Create an invalid URL error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    /// Create a status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Whether this error was raised before any request was sent.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::UnknownEnvironment(_) | Self::InvalidUrl(_))
    }
}

fn known_environments() -> String {
    Environment::ALL
        .iter()
        .map(|env| env.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
