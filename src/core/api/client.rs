//! HTTP client for the external API.
//!
//! [`ApiClient`] is the seam every tool talks through. The production
//! implementation wraps a single `reqwest::Client` built at start-up; tests
//! substitute their own implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, Url};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::{ApiError, ApiResult};
use super::query::QueryParams;
use crate::core::config::{ApiConfig, CredentialsConfig};

/// Header carrying the application key next to the bearer token.
pub const APP_KEY_HEADER: &str = "ST-App-Key";

/// Shared handle to the API client, cloned into every tool route.
pub type SharedApiClient = Arc<dyn ApiClient>;

/// Read, create and update primitives over the external API.
///
/// Each helper returns the decoded JSON body on success. Any failure is
/// returned as an [`ApiError`] and is never retried here.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// GET `url` with the given query parameters.
    async fn get(&self, url: &Url, query: &QueryParams) -> ApiResult<Value>;

    /// POST `body` as JSON to `url`.
    async fn post(&self, url: &Url, body: Option<&Value>, query: &QueryParams)
    -> ApiResult<Value>;

    /// PUT `body` as JSON to `url`.
    async fn put(&self, url: &Url, body: Option<&Value>, query: &QueryParams) -> ApiResult<Value>;
}

/// [`ApiClient`] backed by reqwest.
#[derive(Clone)]
pub struct ReqwestApiClient {
    client: reqwest::Client,
    access_token: Option<String>,
    app_key: Option<String>,
}

impl ReqwestApiClient {
    /// Build the client once, applying the global timeout and user agent.
    pub fn new(api: &ApiConfig, credentials: &CredentialsConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .user_agent(api.user_agent.clone())
            .build()?;

        if credentials.access_token.is_none() {
            warn!("No API access token configured; requests will be sent unauthenticated");
        }

        Ok(Self {
            client,
            access_token: credentials.access_token.clone(),
            app_key: credentials.app_key.clone(),
        })
    }

    /// Wrap the client into the shared handle tools expect.
    pub fn shared(self) -> SharedApiClient {
        Arc::new(self)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = match &self.access_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        match &self.app_key {
            Some(key) => builder.header(APP_KEY_HEADER, key),
            None => builder,
        }
    }

    async fn dispatch(
        &self,
        builder: RequestBuilder,
        body: Option<&Value>,
        query: &QueryParams,
    ) -> ApiResult<Value> {
        let mut builder = self.authorize(builder).query(&query.to_pairs());
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!("API request failed before a response arrived: {}", e);
            ApiError::from(e)
        })?;

        decode(response).await
    }
}

#[async_trait]
impl ApiClient for ReqwestApiClient {
    #[instrument(skip(self, url, query), fields(url = %url))]
    async fn get(&self, url: &Url, query: &QueryParams) -> ApiResult<Value> {
        self.dispatch(self.client.get(url.clone()), None, query)
            .await
    }

    #[instrument(skip(self, url, body, query), fields(url = %url))]
    async fn post(
        &self,
        url: &Url,
        body: Option<&Value>,
        query: &QueryParams,
    ) -> ApiResult<Value> {
        self.dispatch(self.client.post(url.clone()), body, query)
            .await
    }

    #[instrument(skip(self, url, body, query), fields(url = %url))]
    async fn put(&self, url: &Url, body: Option<&Value>, query: &QueryParams) -> ApiResult<Value> {
        self.dispatch(self.client.put(url.clone()), body, query)
            .await
    }
}

/// Turn a response into JSON, or into the failure signal for non-2xx statuses.
async fn decode(response: Response) -> ApiResult<Value> {
    let status = response.status();
    let text = response.text().await?;
    debug!("Received HTTP response with status: {}", status);

    if !status.is_success() {
        warn!("API returned non-success status {}", status);
        return Err(ApiError::status(status.as_u16(), text));
    }

    Ok(parse_body(text))
}

/// Decode a success body. Empty bodies become `null`; non-JSON text is kept as a string.
pub fn parse_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}
