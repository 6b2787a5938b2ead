//! External call attribution tool definition.
//!
//! Records a call tracked by a third-party call tracking system together with
//! the web session that led to it.

use schemars::JsonSchema;
use serde::Deserialize;

use super::web_session::WebSessionArgs;
use crate::core::api::{ApiArea, ApiRequest, JsonBody};
use crate::domains::tools::definitions::common::{default_environment, has_text, require_all};
use crate::domains::tools::{ApiTool, ToolError};

/// Parameters for the external call attribution tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExternalCallAttributionParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,

    #[serde(flatten)]
    pub web_session: WebSessionArgs,

    /// Caller's phone number (required).
    pub customer_phone_number: Option<String>,

    /// When the call started, UTC (required).
    pub call_started_on_utc: Option<String>,

    /// Tracking number the customer dialed.
    pub tracking_phone_number: Option<String>,

    /// Call duration in seconds.
    pub call_duration: Option<i64>,

    /// Call ID in the external tracking system.
    pub external_call_id: Option<String>,
}

/// Create external call attribution tool.
pub struct ExternalCallAttributionsCreateTool;

impl ApiTool for ExternalCallAttributionsCreateTool {
    const NAME: &'static str = "marketingads_external_call_attributions_create";
    const DESCRIPTION: &'static str = "Attribute a call tracked outside the platform to a web session. Requires landing_page_url, referrer_url, customer_phone_number and call_started_on_utc.";
    const FAILURE: &'static str = "Unable to create external call attribution.";
    type Params = ExternalCallAttributionParams;

    fn build(params: &ExternalCallAttributionParams) -> Result<ApiRequest, ToolError> {
        let web_session_data = params.web_session.to_body()?;
        require_all(&[
            ("customer_phone_number", has_text(&params.customer_phone_number)),
            ("call_started_on_utc", has_text(&params.call_started_on_utc)),
        ])?;

        let external_call_data = JsonBody::new()
            .opt("customerPhoneNumber", params.customer_phone_number.as_deref())
            .opt("callStartedOnUtc", params.call_started_on_utc.as_deref())
            .opt("trackingPhoneNumber", params.tracking_phone_number.as_deref())
            .opt("callDuration", params.call_duration)
            .opt("externalCallId", params.external_call_id.as_deref());

        let body = JsonBody::new()
            .nest("webSessionData", web_session_data)
            .nest("externalCallData", external_call_data);

        Ok(
            ApiRequest::create(ApiArea::MarketingAds, params.tenant, "external-call-attributions")
                .environment(&params.environment)
                .body(body.into_value()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::testing::MockApiClient;
    use crate::domains::tools::call;
    use crate::domains::tools::testing::{object, params, text_of};
    use serde_json::{Value, json};

    fn build(arguments: Value) -> Result<ApiRequest, ToolError> {
        ExternalCallAttributionsCreateTool::build(&params(arguments))
    }

    #[test]
    fn test_composite_body() {
        let request = build(json!({
            "tenant": 3,
            "landing_page_url": "https://example.com/lp",
            "referrer_url": "https://google.com",
            "gclid": "g-1",
            "customer_phone_number": "5551234567",
            "call_started_on_utc": "2024-05-01T15:00:00Z",
            "call_duration": 120
        }))
        .unwrap();

        assert_eq!(
            request.body,
            Some(json!({
                "webSessionData": {
                    "landingPageUrl": "https://example.com/lp",
                    "referrerUrl": "https://google.com",
                    "gclid": "g-1"
                },
                "externalCallData": {
                    "customerPhoneNumber": "5551234567",
                    "callStartedOnUtc": "2024-05-01T15:00:00Z",
                    "callDuration": 120
                }
            }))
        );
    }

    #[test]
    fn test_call_data_required() {
        let err = build(json!({
            "tenant": 3,
            "landing_page_url": "https://example.com/lp",
            "referrer_url": "https://google.com",
            "customer_phone_number": "5551234567"
        }))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "'customer_phone_number' and 'call_started_on_utc' are required."
        );
    }

    #[test]
    fn test_web_session_checked_first() {
        let err = build(json!({"tenant": 3})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'landing_page_url' and 'referrer_url' are required."
        );
    }

    #[tokio::test]
    async fn test_failure_message() {
        let client = MockApiClient::failing(502);
        let result = call::<ExternalCallAttributionsCreateTool>(
            &client,
            object(json!({
                "tenant": 3,
                "landing_page_url": "https://example.com/lp",
                "referrer_url": "https://google.com",
                "customer_phone_number": "5551234567",
                "call_started_on_utc": "2024-05-01T15:00:00Z"
            })),
        )
        .await
        .unwrap();
        assert_eq!(text_of(&result), "Unable to create external call attribution.");
    }
}
