//! List forms tool definition.
//!
//! Lists the forms configured for a tenant, with the usual list filters.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::{ApiArea, ApiRequest, ChangeWindow, QueryParams};
use crate::domains::tools::definitions::common::{
    ActiveFilter, WireEnum, choice, default_environment,
};
use crate::domains::tools::{ApiTool, ToolError};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Publication status filter for forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Any,
    Published,
    Unpublished,
}

impl WireEnum for FormStatus {
    const FIELD: &'static str = "status";
    const VARIANTS: &'static [Self] = &[Self::Any, Self::Published, Self::Unpublished];

    fn wire(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Published => "Published",
            Self::Unpublished => "Unpublished",
        }
    }
}

/// Parameters for the list forms tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FormsGetFormsParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Only forms that have (or do not have) conditional logic.
    pub has_conditional_logic: Option<bool>,

    /// Only forms that have (or do not have) triggers.
    pub has_triggers: Option<bool>,

    /// Filter by form name.
    pub name: Option<String>,

    /// Publication status: Any, Published or Unpublished.
    pub status: Option<String>,

    /// Only these form IDs.
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

    /// Sort expression, e.g. "+Name" or "-ModifiedOn".
    pub sort: Option<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List forms tool.
pub struct FormsGetFormsTool;

impl ApiTool for FormsGetFormsTool {
    const NAME: &'static str = "forms_get_forms";
    const DESCRIPTION: &'static str = "List the forms of a tenant. Filter by name, publication status, IDs, active state, conditional logic, triggers and created/modified dates; supports paging and sorting.";
    const FAILURE: &'static str = "Unable to fetch forms.";
    type Params = FormsGetFormsParams;

    fn build(params: &FormsGetFormsParams) -> Result<ApiRequest, ToolError> {
        let status = choice::<FormStatus>(params.status.as_deref())?;
        let active = choice::<ActiveFilter>(params.active.as_deref())?;

        let query = QueryParams::new()
            .opt("hasConditionalLogic", params.has_conditional_logic)
            .opt("hasTriggers", params.has_triggers)
            .opt("name", params.name.as_deref())
            .opt("status", status)
            .ids("ids", params.ids.as_deref())
            .opt("active", active)
            .window(&params.window)
            .paging(params.page, params.page_size, params.include_total)
            .opt("sort", params.sort.as_deref());

        Ok(ApiRequest::read(ApiArea::Forms, params.tenant, "forms")
            .environment(&params.environment)
            .query(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::RequestKind;
    use crate::core::api::testing::MockApiClient;
    use crate::domains::tools::call;
    use crate::domains::tools::testing::{object, params, text_of};
    use serde_json::json;

    fn build(arguments: serde_json::Value) -> Result<ApiRequest, ToolError> {
        FormsGetFormsTool::build(&params(arguments))
    }

    #[tokio::test]
    async fn test_published_forms_end_to_end() {
        let body = json!({"page": 1, "data": [{"id": 11, "name": "Safety checklist"}]});
        let client = MockApiClient::responding(body.clone());

        let result = call::<FormsGetFormsTool>(
            &client,
            object(json!({"tenant": 100, "status": "published"})),
        )
        .await
        .unwrap();

        let recorded = client.single_call();
        assert_eq!(recorded.kind, RequestKind::Read);
        assert_eq!(
            recorded.url,
            "https://api.servicetitan.io/forms/v2/tenant/100/forms"
        );
        assert_eq!(recorded.query, QueryParams::new().set("status", "Published"));
        assert_eq!(text_of(&result), serde_json::to_string_pretty(&body).unwrap());
    }

    #[tokio::test]
    async fn test_bogus_status_makes_no_call() {
        let client = MockApiClient::responding(json!({}));

        let result = call::<FormsGetFormsTool>(
            &client,
            object(json!({"tenant": 100, "status": "bogus"})),
        )
        .await
        .unwrap();

        assert_eq!(
            text_of(&result),
            "Invalid 'status'. Use one of: Any, Published, Unpublished."
        );
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_failure_message() {
        let client = MockApiClient::failing(500);
        let result = call::<FormsGetFormsTool>(&client, object(json!({"tenant": 100})))
            .await
            .unwrap();
        assert_eq!(text_of(&result), "Unable to fetch forms.");
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_status_variants_share_wire_value() {
        for raw in ["UNPUBLISHED", "unpublished", " Unpublished "] {
            let request = build(json!({"tenant": 1, "status": raw})).unwrap();
            assert_eq!(request.query.get("status"), Some(&json!("Unpublished")));
        }
    }

    #[test]
    fn test_no_arguments_no_keys() {
        let request = build(json!({"tenant": 1})).unwrap();
        assert!(request.query.is_empty());
        assert_eq!(request.environment, "production");
    }

    #[test]
    fn test_include_total_only_when_true() {
        let off = build(json!({"tenant": 1, "include_total": false})).unwrap();
        assert!(!off.query.contains("includeTotal"));
        let on = build(json!({"tenant": 1, "include_total": true})).unwrap();
        assert_eq!(on.query.get("includeTotal"), Some(&json!(true)));
    }

    #[test]
    fn test_full_filter_mapping() {
        let request = build(json!({
            "tenant": 1,
            "has_conditional_logic": false,
            "has_triggers": true,
            "name": "Inspection",
            "ids": [3, 5],
            "active": "any",
            "created_on_or_after": "2024-01-01T00:00:00Z",
            "modified_before": "2024-06-01T00:00:00Z",
            "page": 2,
            "page_size": 50,
            "sort": "-ModifiedOn"
        }))
        .unwrap();

        let q = &request.query;
        assert_eq!(q.get("hasConditionalLogic"), Some(&json!(false)));
        assert_eq!(q.get("hasTriggers"), Some(&json!(true)));
        assert_eq!(q.get("name"), Some(&json!("Inspection")));
        assert_eq!(q.get("ids"), Some(&json!("3,5")));
        assert_eq!(q.get("active"), Some(&json!("Any")));
        assert_eq!(q.get("createdOnOrAfter"), Some(&json!("2024-01-01T00:00:00Z")));
        assert_eq!(q.get("modifiedBefore"), Some(&json!("2024-06-01T00:00:00Z")));
        assert_eq!(q.get("page"), Some(&json!(2)));
        assert_eq!(q.get("pageSize"), Some(&json!(50)));
        assert_eq!(q.get("sort"), Some(&json!("-ModifiedOn")));
        assert_eq!(q.len(), 10);
    }

    #[test]
    fn test_invalid_active_is_rejected() {
        let err = build(json!({"tenant": 1, "active": "sometimes"})).unwrap_err();
        assert_eq!(err.to_string(), "Invalid 'active'. Use one of: True, Any, False.");
    }
}
