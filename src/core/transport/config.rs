//! Transport selection and listener settings.
//!
//! `MCP_TRANSPORT` names the transport (`stdio`, `tcp` or `http`). The
//! network transports read their listener from `MCP_TCP_HOST`/`MCP_TCP_PORT`
//! and `MCP_HTTP_HOST`/`MCP_HTTP_PORT`; HTTP also takes `MCP_HTTP_PATH` and
//! `MCP_HTTP_CORS`. Only transports compiled in through features can be named.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{TransportError, TransportResult};

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[cfg(feature = "stdio")]
    Stdio,

    /// Line-delimited JSON-RPC over TCP, one MCP session per connection.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// Stateless JSON-RPC over HTTP POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// Host and port a network transport listens on.
#[cfg(any(feature = "tcp", feature = "http"))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

#[cfg(any(feature = "tcp", feature = "http"))]
impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Read `{prefix}_HOST` and `{prefix}_PORT`. A port that does not parse
    /// is logged and replaced by `default_port`.
    fn from_env(prefix: &str, default_port: u16) -> Self {
        let port = match std::env::var(format!("{prefix}_PORT")) {
            Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid {}_PORT={:?}, using {}", prefix, raw, default_port);
                default_port
            }),
            Err(_) => default_port,
        };
        let host = std::env::var(format!("{prefix}_HOST")).unwrap_or_else(|_| default_host());
        Self { host, port }
    }

    /// `host:port`, as passed to the listener.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// TCP transport configuration.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpConfig {
    #[serde(flatten)]
    pub endpoint: Endpoint,
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(flatten)]
    pub endpoint: Endpoint,

    /// Path of the JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Allow cross-origin browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "tcp")]
const DEFAULT_TCP_PORT: u16 = 3000;

#[cfg(feature = "http")]
const DEFAULT_HTTP_PORT: u16 = 8080;

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::new(default_host(), DEFAULT_TCP_PORT),
        }
    }
}

#[cfg(feature = "tcp")]
impl TcpConfig {
    fn from_env() -> Self {
        Self {
            endpoint: Endpoint::from_env("MCP_TCP", DEFAULT_TCP_PORT),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::new(default_host(), DEFAULT_HTTP_PORT),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    fn from_env() -> Self {
        let mut rpc_path = std::env::var("MCP_HTTP_PATH").unwrap_or_else(|_| default_rpc_path());
        if !rpc_path.starts_with('/') {
            rpc_path.insert(0, '/');
        }
        let enable_cors = std::env::var("MCP_HTTP_CORS")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "off"))
            .unwrap_or_else(|_| default_cors());

        Self {
            endpoint: Endpoint::from_env("MCP_HTTP", DEFAULT_HTTP_PORT),
            rpc_path,
            enable_cors,
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        {
            return Self::Tcp(TcpConfig::default());
        }

        #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");
        }
    }
}

/// Parses a transport name, reading the matching listener variables.
impl FromStr for TransportConfig {
    type Err = TransportError;

    fn from_str(name: &str) -> TransportResult<Self> {
        match name.trim().to_lowercase().as_str() {
            #[cfg(feature = "stdio")]
            "stdio" => Ok(Self::Stdio),
            #[cfg(feature = "tcp")]
            "tcp" => Ok(Self::Tcp(TcpConfig::from_env())),
            #[cfg(feature = "http")]
            "http" => Ok(Self::Http(HttpConfig::from_env())),
            _ => Err(TransportError::unknown(name.trim(), Self::available())),
        }
    }
}

impl TransportConfig {
    #[cfg(feature = "stdio")]
    pub fn stdio() -> Self {
        Self::Stdio
    }

    #[cfg(feature = "tcp")]
    pub fn tcp(port: u16, host: impl Into<String>) -> Self {
        Self::Tcp(TcpConfig {
            endpoint: Endpoint::new(host, port),
        })
    }

    #[cfg(feature = "http")]
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self::Http(HttpConfig {
            endpoint: Endpoint::new(host, port),
            ..Default::default()
        })
    }

    /// Transport names this build accepts.
    pub fn available() -> Vec<&'static str> {
        let mut names = Vec::new();
        if cfg!(feature = "stdio") {
            names.push("stdio");
        }
        if cfg!(feature = "tcp") {
            names.push("tcp");
        }
        if cfg!(feature = "http") {
            names.push("http");
        }
        names
    }

    /// Load the transport named by `MCP_TRANSPORT`.
    ///
    /// Unset means the default transport. A name this build does not
    /// support is logged and also falls back to the default.
    pub fn from_env() -> Self {
        match std::env::var("MCP_TRANSPORT") {
            Ok(name) if !name.trim().is_empty() => name.parse().unwrap_or_else(|e| {
                warn!("{}; using the default transport", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    /// Short description for startup logs.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}", cfg.endpoint.address()),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}{}", cfg.endpoint.address(), cfg.rpc_path),
        }
    }

    pub fn is_stdio(&self) -> bool {
        #[cfg(feature = "stdio")]
        {
            matches!(self, Self::Stdio)
        }
        #[cfg(not(feature = "stdio"))]
        {
            false
        }
    }
}
