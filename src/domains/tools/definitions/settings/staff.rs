//! Employee and technician tools.
//!
//! Both resources take the same filters, so they share one parameter type.

use schemars::JsonSchema;
use serde::Deserialize;

use super::RecordParams;
use crate::core::api::{ApiArea, ApiRequest, ChangeWindow, QueryParams};
use crate::domains::tools::definitions::common::{ActiveFilter, choice, default_environment};
use crate::domains::tools::{ApiTool, ToolError};

/// Filters for the employee and technician list tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StaffListParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Only these record IDs.
    pub ids: Option<Vec<i64>>,

    /// Only records linked to these user IDs.
    pub user_ids: Option<Vec<i64>>,

    /// Filter by name.
    pub name: Option<String>,

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

fn list(path: &str, params: &StaffListParams) -> Result<ApiRequest, ToolError> {
    let active = choice::<ActiveFilter>(params.active.as_deref())?;

    let query = QueryParams::new()
        .ids("ids", params.ids.as_deref())
        .ids("userIds", params.user_ids.as_deref())
        .opt("name", params.name.as_deref())
        .opt("active", active)
        .window(&params.window)
        .paging(params.page, params.page_size, params.include_total)
        .opt("sort", params.sort.as_deref());

    Ok(ApiRequest::read(ApiArea::Settings, params.tenant, path)
        .environment(&params.environment)
        .query(query))
}

pub struct GetEmployeesTool;

impl ApiTool for GetEmployeesTool {
    const NAME: &'static str = "settings_get_employees";
    const DESCRIPTION: &'static str = "List the employees of a tenant. Filter by IDs, user IDs, name, active state and created/modified dates; supports paging and sorting.";
    const FAILURE: &'static str = "Unable to fetch employees.";
    type Params = StaffListParams;

    fn build(params: &StaffListParams) -> Result<ApiRequest, ToolError> {
        list("employees", params)
    }
}

pub struct GetEmployeeTool;

impl ApiTool for GetEmployeeTool {
    const NAME: &'static str = "settings_get_employee";
    const DESCRIPTION: &'static str = "Get one employee by ID.";
    const FAILURE: &'static str = "Unable to fetch employee.";
    type Params = RecordParams;

    fn build(params: &RecordParams) -> Result<ApiRequest, ToolError> {
        Ok(params.request("employees"))
    }
}

pub struct GetTechniciansTool;

impl ApiTool for GetTechniciansTool {
    const NAME: &'static str = "settings_get_technicians";
    const DESCRIPTION: &'static str = "List the technicians of a tenant. Filter by IDs, user IDs, name, active state and created/modified dates; supports paging and sorting.";
    const FAILURE: &'static str = "Unable to fetch technicians.";
    type Params = StaffListParams;

    fn build(params: &StaffListParams) -> Result<ApiRequest, ToolError> {
        list("technicians", params)
    }
}

pub struct GetTechnicianTool;

impl ApiTool for GetTechnicianTool {
    const NAME: &'static str = "settings_get_technician";
    const DESCRIPTION: &'static str = "Get one technician by ID.";
    const FAILURE: &'static str = "Unable to fetch technician.";
    type Params = RecordParams;

    fn build(params: &RecordParams) -> Result<ApiRequest, ToolError> {
        Ok(params.request("technicians"))
    }
}
