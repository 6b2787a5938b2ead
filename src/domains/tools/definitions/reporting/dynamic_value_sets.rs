//! Dynamic value set tool definition.
//!
//! Dynamic value sets hold the allowed values of report parameters such as
//! business units or job types.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::{ApiArea, ApiRequest, QueryParams};
use crate::domains::tools::definitions::common::{default_environment, required_text};
use crate::domains::tools::{ApiTool, ToolError};

/// Parameters for the dynamic value set tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DynamicValueSetParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Dynamic set ID, as referenced by a report parameter (required).
    pub dynamic_set_id: Option<String>,

    /// Page number to return, starting at 1.
    pub page: Option<i32>,

    /// Number of records per page.
    pub page_size: Option<i32>,

    /// Ask the API to include the total record count.
    #[serde(default)]
    pub include_total: bool,
}

/// Dynamic value set tool.
pub struct GetDynamicValueSetTool;

impl ApiTool for GetDynamicValueSetTool {
    const NAME: &'static str = "reporting_get_dynamic_value_set";
    const DESCRIPTION: &'static str = "Get the values of a dynamic value set used by report parameters.";
    const FAILURE: &'static str = "Unable to fetch dynamic value set.";
    type Params = DynamicValueSetParams;

    fn build(params: &DynamicValueSetParams) -> Result<ApiRequest, ToolError> {
        let set_id = required_text("dynamic_set_id", &params.dynamic_set_id)?;
        let query = QueryParams::new().paging(params.page, params.page_size, params.include_total);

        Ok(ApiRequest::read(ApiArea::Reporting, params.tenant, "dynamic-value-sets")
            .segment(set_id)
            .environment(&params.environment)
            .query(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::params;
    use serde_json::json;

    #[test]
    fn test_path_and_paging() {
        let request = GetDynamicValueSetTool::build(&params(json!({
            "tenant": 8,
            "dynamic_set_id": "business-units",
            "page": 1
        })))
        .unwrap();
        assert_eq!(
            request.url().unwrap().path(),
            "/reporting/v2/tenant/8/dynamic-value-sets/business-units"
        );
        assert_eq!(request.query, QueryParams::new().set("page", 1));
    }

    #[test]
    fn test_set_id_required() {
        let err = GetDynamicValueSetTool::build(&params(json!({"tenant": 8}))).unwrap_err();
        assert_eq!(err.to_string(), "'dynamic_set_id' is required.");
    }
}
