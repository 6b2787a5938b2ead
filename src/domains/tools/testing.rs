//! Helpers shared by tool tests.

use rmcp::model::{CallToolResult, JsonObject, RawContent};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Text of the first content block of a tool result.
pub fn text_of(result: &CallToolResult) -> String {
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        other => panic!("expected text content, got {other:?}"),
    }
}

/// Decode tool parameters the same way a tool call does.
pub fn params<P: DeserializeOwned>(arguments: Value) -> P {
    serde_json::from_value(arguments).expect("test arguments should decode")
}

/// Raw argument object for a tool call.
pub fn object(arguments: Value) -> JsonObject {
    arguments
        .as_object()
        .cloned()
        .expect("test arguments should be an object")
}
