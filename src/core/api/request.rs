//! Request descriptors.
//!
//! Tools describe the call they want as an [`ApiRequest`]; [`send`] resolves
//! the environment, assembles the versioned per-tenant URL and hands the
//! request to exactly one client helper.

use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use super::client::ApiClient;
use super::environment::{DEFAULT_ENVIRONMENT, Environment};
use super::error::{ApiError, ApiResult};
use super::query::QueryParams;

/// API version segment shared by every area.
const API_VERSION: &str = "v2";

/// Top-level API area a resource lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiArea {
    Forms,
    MarketingAds,
    Reporting,
    Settings,
}

impl ApiArea {
    /// URL segment for this area.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forms => "forms",
            Self::MarketingAds => "marketingads",
            Self::Reporting => "reporting",
            Self::Settings => "settings",
        }
    }
}

/// Which client helper serves a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// GET with query parameters.
    Read,
    /// POST with a JSON body.
    Create,
    /// PUT with a JSON body.
    Update,
}

/// A fully described API call, not yet bound to a base URL.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub kind: RequestKind,
    pub area: ApiArea,
    pub tenant: i64,
    pub segments: Vec<String>,
    pub query: QueryParams,
    pub body: Option<Value>,
    pub environment: String,
}

impl ApiRequest {
    fn new(kind: RequestKind, area: ApiArea, tenant: i64, path: &str) -> Self {
        Self {
            kind,
            area,
            tenant,
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            query: QueryParams::new(),
            body: None,
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }

    /// Describe a GET against `path` (slash-separated, relative to the tenant root).
    pub fn read(area: ApiArea, tenant: i64, path: &str) -> Self {
        Self::new(RequestKind::Read, area, tenant, path)
    }

    /// Describe a POST against `path`.
    pub fn create(area: ApiArea, tenant: i64, path: &str) -> Self {
        Self::new(RequestKind::Create, area, tenant, path)
    }

    /// Describe a PUT against `path`.
    pub fn update(area: ApiArea, tenant: i64, path: &str) -> Self {
        Self::new(RequestKind::Update, area, tenant, path)
    }

    /// Append one path segment. The segment is percent-encoded when the URL is built.
    pub fn segment(mut self, segment: impl ToString) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn environment(mut self, environment: &str) -> Self {
        self.environment = environment.to_string();
        self
    }

    /// Resolve the environment and build `{base}/{area}/v2/tenant/{tenant}/{segments..}`.
    pub fn url(&self) -> ApiResult<Url> {
        let environment: Environment = self.environment.parse()?;
        let mut url = Url::parse(environment.base_url())
            .map_err(|e| ApiError::invalid_url(e.to_string()))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::invalid_url(environment.base_url()))?;
            path.pop_if_empty()
                .push(self.area.as_str())
                .push(API_VERSION)
                .push("tenant")
                .push(&self.tenant.to_string())
                .extend(&self.segments);
        }
        Ok(url)
    }
}

/// Resolve and perform a request through the matching client helper.
pub async fn send(client: &dyn ApiClient, request: &ApiRequest) -> ApiResult<Value> {
    let url = request.url()?;
    debug!(
        kind = ?request.kind,
        url = %url,
        query = %request.query.to_query_string(),
        "Dispatching API request"
    );

    match request.kind {
        RequestKind::Read => client.get(&url, &request.query).await,
        RequestKind::Create => client.post(&url, request.body.as_ref(), &request.query).await,
        RequestKind::Update => client.put(&url, request.body.as_ref(), &request.query).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::testing::MockApiClient;
    use serde_json::json;

    #[test]
    fn test_url_layout() {
        let request = ApiRequest::read(ApiArea::Forms, 100, "forms");
        assert_eq!(
            request.url().unwrap().as_str(),
            "https://api.servicetitan.io/forms/v2/tenant/100/forms"
        );
    }

    #[test]
    fn test_url_uses_requested_environment() {
        let request = ApiRequest::read(ApiArea::Settings, 7, "business-units")
            .segment(42)
            .environment("Integration");
        assert_eq!(
            request.url().unwrap().as_str(),
            "https://api-integration.servicetitan.io/settings/v2/tenant/7/business-units/42"
        );
    }

    #[test]
    fn test_segments_are_percent_encoded() {
        let request = ApiRequest::read(ApiArea::Reporting, 1, "report-category")
            .segment("sales & marketing")
            .segment("reports");
        assert_eq!(
            request.url().unwrap().path(),
            "/reporting/v2/tenant/1/report-category/sales%20&%20marketing/reports"
        );
    }

    #[test]
    fn test_unknown_environment_fails_url() {
        let request = ApiRequest::read(ApiArea::Forms, 1, "forms").environment("moon");
        assert!(matches!(
            request.url(),
            Err(ApiError::UnknownEnvironment(ref t)) if t == "moon"
        ));
    }

    #[tokio::test]
    async fn test_send_routes_by_kind() {
        let client = MockApiClient::responding(json!({"ok": true}));

        let read = ApiRequest::read(ApiArea::Forms, 1, "forms");
        let create = ApiRequest::create(ApiArea::MarketingAds, 1, "job-attributions")
            .body(json!({"jobId": 5}));
        let update = ApiRequest::update(ApiArea::Settings, 1, "business-units/9")
            .body(json!({"name": "HVAC"}));

        for request in [&read, &create, &update] {
            send(&client, request).await.unwrap();
        }

        let kinds: Vec<_> = client.calls().iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![RequestKind::Read, RequestKind::Create, RequestKind::Update]
        );
        assert_eq!(client.calls()[1].body, Some(json!({"jobId": 5})));
    }

    #[tokio::test]
    async fn test_send_with_unknown_environment_makes_no_call() {
        let client = MockApiClient::responding(json!({}));
        let request = ApiRequest::read(ApiArea::Forms, 1, "forms").environment("qa");

        let result = send(&client, &request).await;

        assert!(result.is_err());
        assert_eq!(client.call_count(), 0);
    }
}
