//! Tag types tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::{ApiArea, ApiRequest, ChangeWindow, QueryParams};
use crate::domains::tools::definitions::common::{ActiveFilter, choice, default_environment};
use crate::domains::tools::{ApiTool, ToolError};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TagTypesParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Only these tag type IDs.
    pub ids: Option<Vec<i64>>,

    /// Active filter: True, Any or False.
    pub active: Option<String>,

    #[serde(flatten)]
    pub window: ChangeWindow,

    /// Page number to return, starting at 1.
    pub page: Option<i32>,

    /// Number of records per page.
    pub page_size: Option<i32>,

    /// Ask the API to include the total record count.
    #[serde(default)]
    pub include_total: bool,

    /// Sort expression.
    pub sort: Option<String>,
}

pub struct GetTagTypesTool;

impl ApiTool for GetTagTypesTool {
    const NAME: &'static str = "settings_get_tag_types";
    const DESCRIPTION: &'static str = "List the tag types configured for a tenant.";
    const FAILURE: &'static str = "Unable to fetch tag types.";
    type Params = TagTypesParams;

    fn build(params: &TagTypesParams) -> Result<ApiRequest, ToolError> {
        let active = choice::<ActiveFilter>(params.active.as_deref())?;

        let query = QueryParams::new()
            .ids("ids", params.ids.as_deref())
            .opt("active", active)
            .window(&params.window)
            .paging(params.page, params.page_size, params.include_total)
            .opt("sort", params.sort.as_deref());

        Ok(ApiRequest::read(ApiArea::Settings, params.tenant, "tag-types")
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
    fn test_query() {
        let request = GetTagTypesTool::build(&params(json!({
            "tenant": 3,
            "active": "any",
            "created_before": "2024-06-01T00:00:00Z",
            "page_size": 50
        })))
        .unwrap();

        assert_eq!(
            request.query,
            QueryParams::new()
                .set("active", "Any")
                .set("createdBefore", "2024-06-01T00:00:00Z")
                .set("pageSize", 50)
        );
        assert_eq!(
            request.url().unwrap().as_str(),
            "https://api.servicetitan.io/settings/v2/tenant/3/tag-types"
        );
    }
}
