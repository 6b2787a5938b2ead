//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by exposing the API tools.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/<area>/`. Each tool
//! implements `ApiTool`: parameters, a pure request builder and a fixed
//! failure message. The `ToolRegistry` lists every tool once; the rmcp
//! `ToolRouter` and the HTTP dispatch are both derived from it.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool_handler,
};
use std::sync::Arc;
use tracing::info;

use super::api::{ReqwestApiClient, SharedApiClient};
use super::config::Config;
use super::error::Result as CoreResult;
use crate::domains::tools::{ToolRegistry, build_tool_router};

const INSTRUCTIONS: &str = "Tools for a tenant-scoped field service REST API. \
Every tool takes the numeric `tenant` and an optional `environment` \
(`production` by default, or `integration`). Successful calls return the API's \
JSON response; failures return a short error message.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and holds the
/// one API client shared by every tool.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Client used by every tool call.
    client: SharedApiClient,

    /// Tool catalogue used for HTTP dispatch.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server, building the HTTP client from the configuration.
    pub fn new(config: Config) -> CoreResult<Self> {
        let client = ReqwestApiClient::new(&config.api, &config.credentials)?.shared();
        Ok(Self::with_client(config, client))
    }

    /// Create a server around an existing client handle.
    pub fn with_client(config: Config, client: SharedApiClient) -> Self {
        info!("Building tool router");
        Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            registry: Arc::new(ToolRegistry::new(client.clone())),
            config: Arc::new(config),
            client,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the shared API client.
    pub fn client(&self) -> &SharedApiClient {
        &self.client
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Instructions reported to clients on initialization.
    pub fn instructions() -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        self.registry
            .call_tool(name, arguments)
            .await
            .map_err(|e| e.to_string())
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}
