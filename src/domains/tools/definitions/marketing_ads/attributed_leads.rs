//! Attributed leads tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::{ApiArea, ApiRequest, QueryParams};
use crate::domains::tools::definitions::common::{
    WireEnum, choice, default_environment, has_text, require_all,
};
use crate::domains::tools::{ApiTool, ToolError};

/// How a lead reached the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadType {
    Call,
    WebBooking,
    WebLeadForm,
    ManualJob,
}

impl WireEnum for LeadType {
    const FIELD: &'static str = "lead_type";
    const VARIANTS: &'static [Self] = &[
        Self::Call,
        Self::WebBooking,
        Self::WebLeadForm,
        Self::ManualJob,
    ];

    fn wire(self) -> &'static str {
        match self {
            Self::Call => "Call",
            Self::WebBooking => "WebBooking",
            Self::WebLeadForm => "WebLeadForm",
            Self::ManualJob => "ManualJob",
        }
    }
}

/// Parameters for the attributed leads tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AttributedLeadsParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Start of the reporting window, UTC (required).
    pub from_utc: Option<String>,

    /// End of the reporting window, UTC (required).
    pub to_utc: Option<String>,

    /// Lead type: Call, WebBooking, WebLeadForm or ManualJob.
    pub lead_type: Option<String>,

    /// Page number to return, starting at 1.
    pub page: Option<i32>,

    /// Number of records per page.
    pub page_size: Option<i32>,

    /// Ask the API to include the total record count.
    #[serde(default)]
    pub include_total: bool,
}

/// Attributed leads tool.
pub struct AttributedLeadsGetTool;

impl ApiTool for AttributedLeadsGetTool {
    const NAME: &'static str = "marketingads_attributed_leads_get";
    const DESCRIPTION: &'static str = "List leads (calls, web bookings, web lead forms, manual jobs) attributed to marketing campaigns between from_utc and to_utc.";
    const FAILURE: &'static str = "Unable to fetch attributed leads.";
    type Params = AttributedLeadsParams;

    fn build(params: &AttributedLeadsParams) -> Result<ApiRequest, ToolError> {
        require_all(&[
            ("from_utc", has_text(&params.from_utc)),
            ("to_utc", has_text(&params.to_utc)),
        ])?;
        let lead_type = choice::<LeadType>(params.lead_type.as_deref())?;

        let query = QueryParams::new()
            .opt("fromUtc", params.from_utc.as_deref())
            .opt("toUtc", params.to_utc.as_deref())
            .opt("leadType", lead_type)
            .paging(params.page, params.page_size, params.include_total);

        Ok(
            ApiRequest::read(ApiArea::MarketingAds, params.tenant, "attributed-leads")
                .environment(&params.environment)
                .query(query),
        )
    }
}
