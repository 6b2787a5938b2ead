//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The catalogue of every tool, aggregated from the API areas
//! - HTTP dispatch for tool calls
//! - Tool metadata for listing

use rmcp::model::Tool;
use serde_json::{Value, json};
use tracing::{debug, warn};

use super::definitions::{forms, marketing_ads, reporting, settings};
use super::error::ToolError;
use super::handlers::ToolEntry;
use crate::core::api::SharedApiClient;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - dispatches calls to the tools of every API area.
///
/// The catalogue is built once on construction and reused for every call.
pub struct ToolRegistry {
    client: SharedApiClient,
    tools: Vec<ToolEntry>,
}

impl ToolRegistry {
    /// Create a registry whose tools call through `client`.
    pub fn new(client: SharedApiClient) -> Self {
        Self {
            client,
            tools: Self::entries(),
        }
    }

    /// The registered tools, in catalogue order.
    pub fn tools(&self) -> &[ToolEntry] {
        &self.tools
    }

    /// Every tool, grouped by area.
    ///
    /// This is the single source of truth for the tool catalogue. Both the
    /// HTTP transport and the STDIO/TCP router are built from it.
    pub fn entries() -> Vec<ToolEntry> {
        let mut entries = forms::entries();
        entries.extend(marketing_ads::entries());
        entries.extend(reporting::entries());
        entries.extend(settings::entries());
        entries
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        Self::entries().iter().map(|entry| entry.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        Self::entries().into_iter().map(|entry| entry.tool).collect()
    }

    /// Dispatch a tool call by name.
    ///
    /// Returns the MCP `tools/call` result body. Tool-level failures are
    /// reported inside it with `isError: true`; only an unknown tool or
    /// undecodable arguments produce `Err`.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        let Some(entry) = self.tools.iter().find(|entry| entry.name == name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        let arguments = match arguments {
            Value::Object(map) => map,
            Value::Null => Default::default(),
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "arguments must be an object, got {other}"
                )));
            }
        };

        debug!("Dispatching tool call: {}", name);
        let result = entry.call(self.client.clone(), arguments).await?;

        Ok(json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false),
        }))
    }
}
