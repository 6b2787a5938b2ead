//! Business unit tools: list, fetch one, update.

use schemars::JsonSchema;
use serde::Deserialize;

use super::RecordParams;
use crate::core::api::{ApiArea, ApiRequest, ChangeWindow, JsonBody, QueryParams};
use crate::domains::tools::definitions::common::{ActiveFilter, choice, default_environment};
use crate::domains::tools::{ApiTool, ToolError};

// ============================================================================
// List business units
// ============================================================================

/// Parameters for the list business units tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BusinessUnitsParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Only these business unit IDs.
    pub ids: Option<Vec<i64>>,

    /// Filter by name.
    pub name: Option<String>,

    /// Active filter: True, Any or False.
    pub active: Option<String>,

    /// Only return external data for this application GUID.
    pub external_data_application_guid: Option<String>,

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

/// List business units tool.
pub struct GetBusinessUnitsTool;

impl ApiTool for GetBusinessUnitsTool {
    const NAME: &'static str = "settings_get_business_units";
    const DESCRIPTION: &'static str = "List the business units of a tenant. Filter by IDs, name, active state and created/modified dates; supports paging and sorting.";
    const FAILURE: &'static str = "Unable to fetch business units.";
    type Params = BusinessUnitsParams;

    fn build(params: &BusinessUnitsParams) -> Result<ApiRequest, ToolError> {
        let active = choice::<ActiveFilter>(params.active.as_deref())?;

        let query = QueryParams::new()
            .ids("ids", params.ids.as_deref())
            .opt("name", params.name.as_deref())
            .opt("active", active)
            .opt(
                "externalDataApplicationGuid",
                params.external_data_application_guid.as_deref(),
            )
            .window(&params.window)
            .paging(params.page, params.page_size, params.include_total)
            .opt("sort", params.sort.as_deref());

        Ok(ApiRequest::read(ApiArea::Settings, params.tenant, "business-units")
            .environment(&params.environment)
            .query(query))
    }
}

// ============================================================================
// Get business unit
// ============================================================================

/// Get business unit tool.
pub struct GetBusinessUnitTool;

impl ApiTool for GetBusinessUnitTool {
    const NAME: &'static str = "settings_get_business_unit";
    const DESCRIPTION: &'static str = "Get one business unit by ID.";
    const FAILURE: &'static str = "Unable to fetch business unit.";
    type Params = RecordParams;

    fn build(params: &RecordParams) -> Result<ApiRequest, ToolError> {
        Ok(params.request("business-units"))
    }
}

// ============================================================================
// Update business unit
// ============================================================================

/// Parameters for the update business unit tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateBusinessUnitParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Business unit ID.
    pub id: i64,

    /// Display name.
    pub name: Option<String>,

    /// Official (legal) name.
    pub official_name: Option<String>,

    /// Contact email.
    pub email: Option<String>,

    /// Contact phone number.
    pub phone_number: Option<String>,

    /// Header printed on invoices.
    pub invoice_header: Option<String>,

    /// Message printed on invoices.
    pub invoice_message: Option<String>,

    /// Default tax rate, as a fraction (0.0825 for 8.25%).
    pub default_tax_rate: Option<f64>,

    /// Whether the business unit is active.
    pub active: Option<bool>,
}

/// Update business unit tool.
pub struct UpdateBusinessUnitTool;

impl ApiTool for UpdateBusinessUnitTool {
    const NAME: &'static str = "settings_update_business_unit";
    const DESCRIPTION: &'static str = "Update a business unit. Only the supplied fields are sent; at least one is required.";
    const FAILURE: &'static str = "Unable to update business unit.";
    type Params = UpdateBusinessUnitParams;

    fn build(params: &UpdateBusinessUnitParams) -> Result<ApiRequest, ToolError> {
        let body = JsonBody::new()
            .opt("name", params.name.as_deref())
            .opt("officialName", params.official_name.as_deref())
            .opt("email", params.email.as_deref())
            .opt("phoneNumber", params.phone_number.as_deref())
            .opt("invoiceHeader", params.invoice_header.as_deref())
            .opt("invoiceMessage", params.invoice_message.as_deref())
            .opt("defaultTaxRate", params.default_tax_rate)
            .opt("active", params.active);

        if body.is_empty() {
            return Err(ToolError::validation(
                "At least one field to update is required.",
            ));
        }

        Ok(ApiRequest::update(ApiArea::Settings, params.tenant, "business-units")
            .segment(params.id)
            .environment(&params.environment)
            .body(body.into_value()))
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

    #[test]
    fn test_list_filters() {
        let request = GetBusinessUnitsTool::build(&params(json!({
            "tenant": 1,
            "ids": [10, 11],
            "active": "FALSE",
            "external_data_application_guid": "0b5c",
            "modified_on_or_after": "2024-01-01"
        })))
        .unwrap();
        let q = &request.query;
        assert_eq!(q.get("ids"), Some(&json!("10,11")));
        assert_eq!(q.get("active"), Some(&json!("False")));
        assert_eq!(q.get("externalDataApplicationGuid"), Some(&json!("0b5c")));
        assert_eq!(q.get("modifiedOnOrAfter"), Some(&json!("2024-01-01")));
        assert_eq!(q.len(), 4);
    }

    #[tokio::test]
    async fn test_get_one() {
        let client = MockApiClient::responding(json!({"id": 5, "name": "Plumbing"}));
        call::<GetBusinessUnitTool>(&client, object(json!({"tenant": 1, "id": 5})))
            .await
            .unwrap();
        assert_eq!(
            client.single_call().url,
            "https://api.servicetitan.io/settings/v2/tenant/1/business-units/5"
        );
    }

    #[tokio::test]
    async fn test_update_puts_supplied_fields_only() {
        let client = MockApiClient::responding(json!({"id": 5}));
        call::<UpdateBusinessUnitTool>(
            &client,
            object(json!({"tenant": 1, "id": 5, "name": "Plumbing", "active": false})),
        )
        .await
        .unwrap();

        let recorded = client.single_call();
        assert_eq!(recorded.kind, RequestKind::Update);
        assert!(recorded.url.ends_with("/settings/v2/tenant/1/business-units/5"));
        assert_eq!(recorded.body, Some(json!({"name": "Plumbing", "active": false})));
    }

    #[tokio::test]
    async fn test_update_without_fields_makes_no_call() {
        let client = MockApiClient::responding(json!({}));
        let result = call::<UpdateBusinessUnitTool>(&client, object(json!({"tenant": 1, "id": 5})))
            .await
            .unwrap();
        assert_eq!(text_of(&result), "At least one field to update is required.");
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_update_failure_message() {
        let client = MockApiClient::failing(409);
        let result = call::<UpdateBusinessUnitTool>(
            &client,
            object(json!({"tenant": 1, "id": 5, "email": "ops@example.com"})),
        )
        .await
        .unwrap();
        assert_eq!(text_of(&result), "Unable to update business unit.");
    }
}
