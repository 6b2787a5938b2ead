//! ServiceTitan MCP Server Library
//!
//! A Model Context Protocol (MCP) server that exposes a tenant-scoped field
//! service REST API as tools. Every tool validates its arguments, makes one
//! authenticated HTTP call and returns the JSON response as text.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the API client and the main server
//!   - **api**: Environments, request building, query/body encoding, HTTP client
//!   - **transport**: STDIO, TCP and HTTP transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: One module per API area (forms, marketing ads, reporting, settings)
//!
//! # Example
//!
//! ```rust,no_run
//! use servicetitan_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
