//! Tools domain module.
//!
//! Every tool wraps one ServiceTitan API operation. Tools are grouped by API
//! area under `definitions/` and share one execution path.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations, one module per API area
//! - `handlers.rs` - The [`ApiTool`] trait and the shared call/render path
//! - `registry.rs` - Catalogue of every tool and HTTP dispatch
//! - `router.rs` - Builds the rmcp ToolRouter for STDIO/TCP transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a params struct and a unit struct implementing [`ApiTool`] in the
//!    area's module under `definitions/`
//! 2. Add `ToolEntry::of::<MyTool>()` to that area's `entries()`
//!
//! The registry, the router and both transports pick it up from there.

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;

#[cfg(test)]
pub(crate) mod testing;

pub use error::ToolError;
pub use handlers::{ApiTool, ToolEntry, call, invoke, pretty_json, render, to_call_result, to_tool};
pub use registry::ToolRegistry;
pub use router::build_tool_router;
