//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Used by the STDIO/TCP transports. Each registry entry knows how to turn
//! itself into a route.

use rmcp::handler::server::tool::ToolRouter;

use super::registry::ToolRegistry;
use crate::core::api::SharedApiClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: SharedApiClient) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRegistry::entries()
        .iter()
        .fold(ToolRouter::new(), |router, entry| {
            router.with_route(entry.route(client.clone()))
        })
}
