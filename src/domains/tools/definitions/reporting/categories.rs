//! Report categories tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::{ApiArea, ApiRequest, QueryParams};
use crate::domains::tools::definitions::common::default_environment;
use crate::domains::tools::{ApiTool, ToolError};

/// Parameters for the report categories tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ReportCategoriesParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Page number to return, starting at 1.
    pub page: Option<i32>,

    /// Number of records per page.
    pub page_size: Option<i32>,

    /// Ask the API to include the total record count.
    #[serde(default)]
    pub include_total: bool,
}

/// Report categories tool.
pub struct GetReportCategoriesTool;

impl ApiTool for GetReportCategoriesTool {
    const NAME: &'static str = "reporting_get_report_categories";
    const DESCRIPTION: &'static str = "List the report categories available to a tenant. Category IDs are needed to list and run reports.";
    const FAILURE: &'static str = "Unable to fetch report categories.";
    type Params = ReportCategoriesParams;

    fn build(params: &ReportCategoriesParams) -> Result<ApiRequest, ToolError> {
        let query = QueryParams::new().paging(params.page, params.page_size, params.include_total);

        Ok(ApiRequest::read(ApiArea::Reporting, params.tenant, "report-categories")
            .environment(&params.environment)
            .query(query))
    }
}
