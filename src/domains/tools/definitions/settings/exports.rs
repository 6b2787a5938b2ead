//! Export feeds for business units, employees and technicians.
//!
//! An export walks the full record set in change order. The caller passes
//! back the `continueFrom` token of one response as `from` on the next call.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::{ApiArea, ApiRequest, QueryParams};
use crate::domains::tools::definitions::common::default_environment;
use crate::domains::tools::{ApiTool, ToolError};

/// Parameters shared by every export tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExportParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Continuation token from a previous export call. Omit to start from the beginning.
    pub from: Option<String>,

    /// Return the most recent changes quickly, possibly out of order.
    #[serde(default)]
    pub include_recent_changes: bool,
}

fn export(resource: &str, params: &ExportParams) -> ApiRequest {
    let query = QueryParams::new()
        .opt("from", params.from.as_deref())
        .flag("includeRecentChanges", params.include_recent_changes);

    ApiRequest::read(ApiArea::Settings, params.tenant, "export")
        .segment(resource)
        .environment(&params.environment)
        .query(query)
}

pub struct ExportBusinessUnitsTool;

impl ApiTool for ExportBusinessUnitsTool {
    const NAME: &'static str = "settings_export_business_units";
    const DESCRIPTION: &'static str = "Export business units in change order. Pass the returned continueFrom token as 'from' to fetch the next batch.";
    const FAILURE: &'static str = "Unable to export business units.";
    type Params = ExportParams;

    fn build(params: &ExportParams) -> Result<ApiRequest, ToolError> {
        Ok(export("business-units", params))
    }
}

pub struct ExportEmployeesTool;

impl ApiTool for ExportEmployeesTool {
    const NAME: &'static str = "settings_export_employees";
    const DESCRIPTION: &'static str = "Export employees in change order. Pass the returned continueFrom token as 'from' to fetch the next batch.";
    const FAILURE: &'static str = "Unable to export employees.";
    type Params = ExportParams;

    fn build(params: &ExportParams) -> Result<ApiRequest, ToolError> {
        Ok(export("employees", params))
    }
}

pub struct ExportTechniciansTool;

impl ApiTool for ExportTechniciansTool {
    const NAME: &'static str = "settings_export_technicians";
    const DESCRIPTION: &'static str = "Export technicians in change order. Pass the returned continueFrom token as 'from' to fetch the next batch.";
    const FAILURE: &'static str = "Unable to export technicians.";
    type Params = ExportParams;

    fn build(params: &ExportParams) -> Result<ApiRequest, ToolError> {
        Ok(export("technicians", params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::testing::MockApiClient;
    use crate::domains::tools::call;
    use crate::domains::tools::testing::{object, text_of};
    use serde_json::json;

    #[tokio::test]
    async fn test_first_page_sends_no_query() {
        let client = MockApiClient::responding(json!({"data": [], "hasMore": false}));
        call::<ExportEmployeesTool>(&client, object(json!({"tenant": 8})))
            .await
            .unwrap();

        let recorded = client.single_call();
        assert_eq!(
            recorded.url,
            "https://api.servicetitan.io/settings/v2/tenant/8/export/employees"
        );
        assert!(recorded.query.is_empty());
    }

    #[tokio::test]
    async fn test_continuation_and_recent_changes() {
        let client = MockApiClient::responding(json!({"data": []}));
        call::<ExportBusinessUnitsTool>(
            &client,
            object(json!({"tenant": 8, "from": "abc123", "include_recent_changes": true})),
        )
        .await
        .unwrap();

        let recorded = client.single_call();
        assert!(recorded.url.ends_with("/export/business-units"));
        assert_eq!(
            recorded.query,
            QueryParams::new()
                .set("from", "abc123")
                .set("includeRecentChanges", true)
        );
    }

    #[tokio::test]
    async fn test_export_failure() {
        let client = MockApiClient::failing(500);
        let result = call::<ExportTechniciansTool>(&client, object(json!({"tenant": 8})))
            .await
            .unwrap();
        assert_eq!(text_of(&result), "Unable to export technicians.");
    }
}
