//! Client-side plumbing for the external REST API.
//!
//! - `environment`: logical environment token to base URL
//! - `query`: conditional query parameter mapping
//! - `payload`: conditional JSON body assembly
//! - `request`: request descriptors and dispatch to the client helpers
//! - `client`: the injected HTTP client (read / create / update)

mod client;
mod environment;
mod error;
mod payload;
mod query;
mod request;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{APP_KEY_HEADER, ApiClient, ReqwestApiClient, SharedApiClient, parse_body};
pub use environment::{DEFAULT_ENVIRONMENT, Environment, resolve_base_url};
pub use error::{ApiError, ApiResult};
pub use payload::JsonBody;
pub use query::{ChangeWindow, IndexedEntry, QueryParams};
pub use request::{ApiArea, ApiRequest, RequestKind, send};
