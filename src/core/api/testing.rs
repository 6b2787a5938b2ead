//! Recording [`ApiClient`] used by unit tests in place of the network.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

use super::client::ApiClient;
use super::error::{ApiError, ApiResult};
use super::query::QueryParams;
use super::request::RequestKind;

/// One call observed by the mock.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub kind: RequestKind,
    pub url: String,
    pub query: QueryParams,
    pub body: Option<Value>,
}

enum Reply {
    Json(Value),
    Status(u16),
}

/// Records every call and answers with a canned reply.
pub struct MockApiClient {
    reply: Reply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockApiClient {
    /// Answer every call with `value`.
    pub fn responding(value: Value) -> Self {
        Self {
            reply: Reply::Json(value),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fail every call with the given HTTP status.
    pub fn failing(status: u16) -> Self {
        Self {
            reply: Reply::Status(status),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The only call made, panicking if there were zero or several.
    pub fn single_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        calls.into_iter().next().unwrap()
    }

    fn record(
        &self,
        kind: RequestKind,
        url: &Url,
        body: Option<&Value>,
        query: &QueryParams,
    ) -> ApiResult<Value> {
        self.calls.lock().unwrap().push(RecordedCall {
            kind,
            url: url.to_string(),
            query: query.clone(),
            body: body.cloned(),
        });
        match &self.reply {
            Reply::Json(value) => Ok(value.clone()),
            Reply::Status(status) => Err(ApiError::status(*status, "mock failure")),
        }
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn get(&self, url: &Url, query: &QueryParams) -> ApiResult<Value> {
        self.record(RequestKind::Read, url, None, query)
    }

    async fn post(
        &self,
        url: &Url,
        body: Option<&Value>,
        query: &QueryParams,
    ) -> ApiResult<Value> {
        self.record(RequestKind::Create, url, body, query)
    }

    async fn put(&self, url: &Url, body: Option<&Value>, query: &QueryParams) -> ApiResult<Value> {
        self.record(RequestKind::Update, url, body, query)
    }
}
