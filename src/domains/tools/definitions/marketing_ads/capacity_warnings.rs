//! Capacity warnings tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::{ApiArea, ApiRequest};
use crate::domains::tools::definitions::common::default_environment;
use crate::domains::tools::{ApiTool, ToolError};

/// Parameters for the capacity warnings tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CapacityWarningsParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,
}

/// Capacity warnings tool.
pub struct CapacityWarningsGetTool;

impl ApiTool for CapacityWarningsGetTool {
    const NAME: &'static str = "marketingads_capacity_warnings_get";
    const DESCRIPTION: &'static str = "Get the capacity warnings for campaigns whose business units are running low on available capacity.";
    const FAILURE: &'static str = "Unable to fetch capacity warnings.";
    type Params = CapacityWarningsParams;

    fn build(params: &CapacityWarningsParams) -> Result<ApiRequest, ToolError> {
        Ok(
            ApiRequest::read(ApiArea::MarketingAds, params.tenant, "capacity-warnings")
                .environment(&params.environment),
        )
    }
}
