//! Report tools: list a category's reports, describe one, and run it.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::api::{ApiArea, ApiRequest, QueryParams};
use crate::domains::tools::definitions::common::{default_environment, required_text};
use crate::domains::tools::{ApiTool, ToolError};

/// Extend a `report-category` request with `/{category}/reports`.
fn in_category(
    request: ApiRequest,
    report_category: &Option<String>,
) -> Result<ApiRequest, ToolError> {
    let category = required_text("report_category", report_category)?;
    Ok(request.segment(category).segment("reports"))
}

// ============================================================================
// List reports
// ============================================================================

/// Parameters for the list reports tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetReportsParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Report category ID, e.g. "operations" (required).
    pub report_category: Option<String>,

    /// Page number to return, starting at 1.
    pub page: Option<i32>,

    /// Number of records per page.
    pub page_size: Option<i32>,

    /// Ask the API to include the total record count.
    #[serde(default)]
    pub include_total: bool,
}

/// List reports tool.
pub struct GetReportsTool;

impl ApiTool for GetReportsTool {
    const NAME: &'static str = "reporting_get_reports";
    const DESCRIPTION: &'static str = "List the reports in a report category.";
    const FAILURE: &'static str = "Unable to fetch reports.";
    type Params = GetReportsParams;

    fn build(params: &GetReportsParams) -> Result<ApiRequest, ToolError> {
        let query = QueryParams::new().paging(params.page, params.page_size, params.include_total);

        let request = ApiRequest::read(ApiArea::Reporting, params.tenant, "report-category");

        Ok(in_category(request, &params.report_category)?
            .environment(&params.environment)
            .query(query))
    }
}

// ============================================================================
// Describe report
// ============================================================================

/// Parameters for the describe report tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetReportParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Report category ID (required).
    pub report_category: Option<String>,

    /// Report ID.
    pub report_id: i64,
}

/// Describe report tool.
pub struct GetReportTool;

impl ApiTool for GetReportTool {
    const NAME: &'static str = "reporting_get_report";
    const DESCRIPTION: &'static str = "Describe a report: its parameters and the fields it returns.";
    const FAILURE: &'static str = "Unable to fetch report.";
    type Params = GetReportParams;

    fn build(params: &GetReportParams) -> Result<ApiRequest, ToolError> {
        let request = ApiRequest::read(ApiArea::Reporting, params.tenant, "report-category");

        Ok(in_category(request, &params.report_category)?
            .segment(params.report_id)
            .environment(&params.environment))
    }
}

// ============================================================================
// Run report
// ============================================================================

/// One report parameter value.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ReportParameter {
    /// Parameter name as listed by `reporting_get_report`.
    pub name: String,

    /// Parameter value (string, number, boolean or list).
    pub value: Value,
}

/// Parameters for the run report tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetReportDataParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Report category ID (required).
    pub report_category: Option<String>,

    /// Report ID.
    pub report_id: i64,

    /// Report parameters, e.g. [{"name": "From", "value": "2024-01-01"}].
    pub parameters: Option<Vec<ReportParameter>>,

    /// Page number to return, starting at 1.
    pub page: Option<i32>,

    /// Number of records per page.
    pub page_size: Option<i32>,

    /// Ask the API to include the total record count.
    #[serde(default)]
    pub include_total: bool,
}

/// Run report tool.
pub struct GetReportDataTool;

impl ApiTool for GetReportDataTool {
    const NAME: &'static str = "reporting_get_report_data";
    const DESCRIPTION: &'static str = "Run a report with the given parameters and return one page of its rows.";
    const FAILURE: &'static str = "Unable to fetch report data.";
    type Params = GetReportDataParams;

    fn build(params: &GetReportDataParams) -> Result<ApiRequest, ToolError> {
        let request = ApiRequest::create(ApiArea::Reporting, params.tenant, "report-category");
        let request = in_category(request, &params.report_category)?;
        let parameters: Vec<Value> = params
            .parameters
            .iter()
            .flatten()
            .map(|p| json!({"name": p.name, "value": p.value}))
            .collect();
        let query = QueryParams::new().paging(params.page, params.page_size, params.include_total);

        Ok(request
            .segment(params.report_id)
            .segment("data")
            .environment(&params.environment)
            .query(query)
            .body(json!({ "parameters": parameters })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::RequestKind;
    use crate::core::api::testing::MockApiClient;
    use crate::domains::tools::call;
    use crate::domains::tools::testing::{object, params, text_of};

    #[test]
    fn test_reports_path() {
        let request = GetReportsTool::build(&params(json!({
            "tenant": 2,
            "report_category": "operations"
        })))
        .unwrap();
        assert_eq!(
            request.url().unwrap().path(),
            "/reporting/v2/tenant/2/report-category/operations/reports"
        );
    }

    #[test]
    fn test_blank_category_is_missing() {
        let err = GetReportsTool::build(&params(json!({"tenant": 2, "report_category": " "})))
            .unwrap_err();
        assert_eq!(err.to_string(), "'report_category' is required.");
    }

    #[test]
    fn test_report_path() {
        let request = GetReportTool::build(&params(json!({
            "tenant": 2,
            "report_category": "accounting",
            "report_id": 175
        })))
        .unwrap();
        assert_eq!(
            request.url().unwrap().path(),
            "/reporting/v2/tenant/2/report-category/accounting/reports/175"
        );
    }

    #[tokio::test]
    async fn test_report_data_posts_parameters() {
        let client = MockApiClient::responding(json!({"fields": [], "data": []}));
        call::<GetReportDataTool>(
            &client,
            object(json!({
                "tenant": 2,
                "report_category": "marketing",
                "report_id": 9,
                "parameters": [
                    {"name": "From", "value": "2024-01-01"},
                    {"name": "BusinessUnitIds", "value": [1, 2]}
                ],
                "page_size": 100
            })),
        )
        .await
        .unwrap();

        let recorded = client.single_call();
        assert_eq!(recorded.kind, RequestKind::Create);
        assert_eq!(
            recorded.url,
            "https://api.servicetitan.io/reporting/v2/tenant/2/report-category/marketing/reports/9/data"
        );
        assert_eq!(recorded.query, QueryParams::new().set("pageSize", 100));
        assert_eq!(
            recorded.body,
            Some(json!({"parameters": [
                {"name": "From", "value": "2024-01-01"},
                {"name": "BusinessUnitIds", "value": [1, 2]}
            ]}))
        );
    }

    #[test]
    fn test_report_data_without_parameters_sends_empty_list() {
        let request = GetReportDataTool::build(&params(json!({
            "tenant": 2,
            "report_category": "marketing",
            "report_id": 9
        })))
        .unwrap();
        assert_eq!(request.body, Some(json!({"parameters": []})));
    }

    #[tokio::test]
    async fn test_report_data_failure_message() {
        let client = MockApiClient::failing(429);
        let result = call::<GetReportDataTool>(
            &client,
            object(json!({"tenant": 2, "report_category": "marketing", "report_id": 9})),
        )
        .await
        .unwrap();
        assert_eq!(text_of(&result), "Unable to fetch report data.");
    }
}
