//! Campaign performance tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::{ApiArea, ApiRequest, QueryParams};
use crate::domains::tools::definitions::common::{
    WireEnum, choice, default_environment, has_text, require_all,
};
use crate::domains::tools::{ApiTool, ToolError};

/// Granularity of the performance breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceSegmentation {
    Campaign,
    AdGroup,
    Keyword,
}

impl WireEnum for PerformanceSegmentation {
    const FIELD: &'static str = "performance_segmentation_type";
    const VARIANTS: &'static [Self] = &[Self::Campaign, Self::AdGroup, Self::Keyword];

    fn wire(self) -> &'static str {
        match self {
            Self::Campaign => "Campaign",
            Self::AdGroup => "AdGroup",
            Self::Keyword => "Keyword",
        }
    }
}

/// Parameters for the performance tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PerformanceParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Start of the reporting window, UTC (required).
    pub from_utc: Option<String>,

    /// End of the reporting window, UTC (required).
    pub to_utc: Option<String>,

    /// Breakdown: Campaign, AdGroup or Keyword (required).
    pub performance_segmentation_type: Option<String>,
}

/// Campaign performance tool.
pub struct PerformanceGetTool;

impl ApiTool for PerformanceGetTool {
    const NAME: &'static str = "marketingads_performance_get";
    const DESCRIPTION: &'static str = "Get ad performance (spend, leads, bookings, revenue) between from_utc and to_utc, broken down by Campaign, AdGroup or Keyword.";
    const FAILURE: &'static str = "Unable to fetch performance data.";
    type Params = PerformanceParams;

    fn build(params: &PerformanceParams) -> Result<ApiRequest, ToolError> {
        require_all(&[
            ("from_utc", has_text(&params.from_utc)),
            ("to_utc", has_text(&params.to_utc)),
            (
                "performance_segmentation_type",
                has_text(&params.performance_segmentation_type),
            ),
        ])?;
        let segmentation =
            choice::<PerformanceSegmentation>(params.performance_segmentation_type.as_deref())?;

        let query = QueryParams::new()
            .opt("fromUtc", params.from_utc.as_deref())
            .opt("toUtc", params.to_utc.as_deref())
            .opt("performanceSegmentationType", segmentation);

        Ok(ApiRequest::read(ApiArea::MarketingAds, params.tenant, "performance")
            .environment(&params.environment)
            .query(query))
    }
}
