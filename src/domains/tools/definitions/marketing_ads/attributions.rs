//! Attribution tools that tie a web session to a job, booking or lead form.
//!
//! All three post the same `webSessionData` object next to the ID of the
//! record being attributed.

use schemars::JsonSchema;
use serde::Deserialize;

use super::web_session::WebSessionArgs;
use crate::core::api::{ApiArea, ApiRequest, JsonBody};
use crate::domains::tools::definitions::common::{default_environment, require_all};
use crate::domains::tools::{ApiTool, ToolError};

/// Build `{"<id_key>": id, "webSessionData": {...}}` after checking the required fields.
fn attribution_request(
    tenant: i64,
    environment: &str,
    path: &str,
    web_session: &WebSessionArgs,
    id: (&'static str, &'static str, Option<i64>),
) -> Result<ApiRequest, ToolError> {
    let web_session_data = web_session.to_body()?;
    let (arg_name, wire_key, value) = id;
    require_all(&[(arg_name, value.is_some())])?;

    let body = JsonBody::new()
        .opt(wire_key, value)
        .nest("webSessionData", web_session_data);

    Ok(ApiRequest::create(ApiArea::MarketingAds, tenant, path)
        .environment(environment)
        .body(body.into_value()))
}

// ============================================================================
// Scheduled job attribution
// ============================================================================

/// Parameters for the scheduled job attribution tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ScheduledJobAttributionParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,

    /// ID of the job that was booked (required).
    pub job_id: Option<i64>,

    #[serde(flatten)]
    pub web_session: WebSessionArgs,
}

/// Create scheduled job attribution tool.
pub struct ScheduledJobAttributionsCreateTool;

impl ApiTool for ScheduledJobAttributionsCreateTool {
    const NAME: &'static str = "marketingads_scheduled_job_attributions_create";
    const DESCRIPTION: &'static str = "Attribute a scheduled job to the web session that produced it. Requires job_id, landing_page_url and referrer_url; click IDs and UTM values are optional.";
    const FAILURE: &'static str = "Unable to create scheduled job attribution.";
    type Params = ScheduledJobAttributionParams;

    fn build(params: &ScheduledJobAttributionParams) -> Result<ApiRequest, ToolError> {
        attribution_request(
            params.tenant,
            &params.environment,
            "job-attributions",
            &params.web_session,
            ("job_id", "jobId", params.job_id),
        )
    }
}

// ============================================================================
// Web booking attribution
// ============================================================================

/// Parameters for the web booking attribution tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WebBookingAttributionParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,

    /// ID of the online booking (required).
    pub booking_id: Option<i64>,

    #[serde(flatten)]
    pub web_session: WebSessionArgs,
}

/// Create web booking attribution tool.
pub struct WebBookingAttributionsCreateTool;

impl ApiTool for WebBookingAttributionsCreateTool {
    const NAME: &'static str = "marketingads_web_booking_attributions_create";
    const DESCRIPTION: &'static str = "Attribute an online booking to the web session that produced it. Requires booking_id, landing_page_url and referrer_url.";
    const FAILURE: &'static str = "Unable to create web booking attribution.";
    type Params = WebBookingAttributionParams;

    fn build(params: &WebBookingAttributionParams) -> Result<ApiRequest, ToolError> {
        attribution_request(
            params.tenant,
            &params.environment,
            "web-booking-attributions",
            &params.web_session,
            ("booking_id", "bookingId", params.booking_id),
        )
    }
}

// ============================================================================
// Web lead form attribution
// ============================================================================

/// Parameters for the web lead form attribution tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WebLeadFormAttributionParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,

    /// ID of the submitted lead (required).
    pub lead_id: Option<i64>,

    #[serde(flatten)]
    pub web_session: WebSessionArgs,
}

/// Create web lead form attribution tool.
pub struct WebLeadFormAttributionsCreateTool;

impl ApiTool for WebLeadFormAttributionsCreateTool {
    const NAME: &'static str = "marketingads_web_lead_form_attributions_create";
    const DESCRIPTION: &'static str = "Attribute a web lead form submission to the web session that produced it. Requires lead_id, landing_page_url and referrer_url.";
    const FAILURE: &'static str = "Unable to create web lead form attribution.";
    type Params = WebLeadFormAttributionParams;

    fn build(params: &WebLeadFormAttributionParams) -> Result<ApiRequest, ToolError> {
        attribution_request(
            params.tenant,
            &params.environment,
            "web-lead-form-attributions",
            &params.web_session,
            ("lead_id", "leadId", params.lead_id),
        )
    }
}
