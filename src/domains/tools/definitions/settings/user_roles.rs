//! User roles tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::{ApiArea, ApiRequest, QueryParams};
use crate::domains::tools::definitions::common::{
    ActiveFilter, WireEnum, choice, default_environment,
};
use crate::domains::tools::{ApiTool, ToolError};

/// Which kind of staff a role applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeType {
    None,
    Employee,
    Technician,
    All,
}

impl WireEnum for EmployeeType {
    const FIELD: &'static str = "employee_type";
    const VARIANTS: &'static [Self] = &[Self::None, Self::Employee, Self::Technician, Self::All];

    fn wire(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Employee => "Employee",
            Self::Technician => "Technician",
            Self::All => "All",
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UserRolesParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Only these role IDs.
    pub ids: Option<Vec<i64>>,

    /// Filter by role name.
    pub name: Option<String>,

    /// Active filter: True, Any or False.
    pub active: Option<String>,

    /// Return roles created before this UTC timestamp (RFC 3339).
    pub created_before: Option<String>,

    /// Return roles created on or after this UTC timestamp (RFC 3339).
    pub created_on_or_after: Option<String>,

    /// Staff kind: None, Employee, Technician or All.
    pub employee_type: Option<String>,

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

pub struct GetUserRolesTool;

impl ApiTool for GetUserRolesTool {
    const NAME: &'static str = "settings_get_user_roles";
    const DESCRIPTION: &'static str = "List the user roles of a tenant, optionally limited to employee or technician roles.";
    const FAILURE: &'static str = "Unable to fetch user roles.";
    type Params = UserRolesParams;

    fn build(params: &UserRolesParams) -> Result<ApiRequest, ToolError> {
        let active = choice::<ActiveFilter>(params.active.as_deref())?;
        let employee_type = choice::<EmployeeType>(params.employee_type.as_deref())?;

        let query = QueryParams::new()
            .ids("ids", params.ids.as_deref())
            .opt("name", params.name.as_deref())
            .opt("active", active)
            .opt("createdBefore", params.created_before.as_deref())
            .opt("createdOnOrAfter", params.created_on_or_after.as_deref())
            .opt("employeeType", employee_type)
            .paging(params.page, params.page_size, params.include_total)
            .opt("sort", params.sort.as_deref());

        Ok(ApiRequest::read(ApiArea::Settings, params.tenant, "user-roles")
            .environment(&params.environment)
            .query(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::testing::MockApiClient;
    use crate::domains::tools::call;
    use crate::domains::tools::testing::{object, params, text_of};
    use serde_json::json;

    #[test]
    fn test_employee_type_normalized() {
        let request = GetUserRolesTool::build(&params(json!({
            "tenant": 1,
            "employee_type": "technician"
        })))
        .unwrap();
        assert_eq!(request.query.get("employeeType"), Some(&json!("Technician")));
    }

    #[tokio::test]
    async fn test_invalid_employee_type() {
        let client = MockApiClient::responding(json!({}));
        let result = call::<GetUserRolesTool>(
            &client,
            object(json!({"tenant": 1, "employee_type": "contractor"})),
        )
        .await
        .unwrap();

        assert_eq!(
            text_of(&result),
            "Invalid 'employee_type'. Use one of: None, Employee, Technician, All."
        );
        assert_eq!(client.call_count(), 0);
    }
}
