//! Tool execution.
//!
//! Every API tool follows one shape: decode arguments, build an
//! [`ApiRequest`], send it through the shared client, and render the outcome.
//! Tools implement [`ApiTool`]; everything else here is shared.

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::error::ToolError;
use crate::core::api::{ApiClient, ApiRequest, SharedApiClient, send};

/// An MCP tool backed by a single API operation.
pub trait ApiTool: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Message returned when the API call produces no usable result.
    const FAILURE: &'static str;

    /// Arguments accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + Send + Sync + 'static;

    /// Validate and normalize the arguments into a request. Must not touch the network.
    fn build(params: &Self::Params) -> Result<ApiRequest, ToolError>;
}

/// Run a tool against the client and return the decoded API response.
#[instrument(skip_all, fields(tool = T::NAME))]
pub async fn invoke<T: ApiTool>(
    client: &dyn ApiClient,
    params: &T::Params,
) -> Result<Value, ToolError> {
    let request = T::build(params).inspect_err(|e| warn!("Rejected arguments: {}", e))?;

    info!(
        tenant = request.tenant,
        environment = %request.environment,
        "Calling API"
    );

    match send(client, &request).await {
        Ok(value) => Ok(value),
        Err(e) if e.is_configuration() => {
            warn!("Request could not be resolved: {}", e);
            Err(ToolError::configuration(e.to_string()))
        }
        Err(e) => {
            warn!("API call failed: {}", e);
            Err(ToolError::RequestFailed(T::FAILURE))
        }
    }
}

/// Pretty-print a JSON value with two-space indentation.
///
/// Falls back to the plain string form if serialization fails.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// The text a caller sees for a tool outcome.
pub fn render(result: &Result<Value, ToolError>) -> String {
    match result {
        Ok(value) => pretty_json(value),
        Err(e) => e.to_string(),
    }
}

/// Wrap a tool outcome into an MCP result. Errors become error results, never protocol errors.
pub fn to_call_result(result: Result<Value, ToolError>) -> CallToolResult {
    let text = render(&result);
    match result {
        Ok(_) => CallToolResult::success(vec![Content::text(text)]),
        Err(_) => CallToolResult::error(vec![Content::text(text)]),
    }
}

/// Decode raw arguments and run the tool.
///
/// Only argument decoding can fail here; every other outcome is rendered into
/// the returned [`CallToolResult`].
pub async fn call<T: ApiTool>(
    client: &dyn ApiClient,
    arguments: JsonObject,
) -> Result<CallToolResult, ToolError> {
    let params: T::Params = serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

    Ok(to_call_result(invoke::<T>(client, &params).await))
}

/// Tool metadata for an [`ApiTool`].
pub fn to_tool<T: ApiTool>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

type DispatchFn =
    fn(SharedApiClient, JsonObject) -> BoxFuture<'static, Result<CallToolResult, ToolError>>;

fn dispatch<T: ApiTool>(
    client: SharedApiClient,
    arguments: JsonObject,
) -> BoxFuture<'static, Result<CallToolResult, ToolError>> {
    async move { call::<T>(client.as_ref(), arguments).await }.boxed()
}

/// A registered tool: its metadata plus a type-erased way to call it.
#[derive(Clone)]
pub struct ToolEntry {
    pub name: &'static str,
    pub tool: Tool,
    dispatch: DispatchFn,
}

impl ToolEntry {
    pub fn of<T: ApiTool>() -> Self {
        Self {
            name: T::NAME,
            tool: to_tool::<T>(),
            dispatch: dispatch::<T>,
        }
    }

    /// Call the tool with raw JSON arguments.
    pub async fn call(
        &self,
        client: SharedApiClient,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        (self.dispatch)(client, arguments).await
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn route<S>(&self, client: SharedApiClient) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        let dispatch = self.dispatch;
        ToolRoute::new_dyn(self.tool.clone(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                dispatch(client, args)
                    .await
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))
            }
            .boxed()
        })
    }
}
