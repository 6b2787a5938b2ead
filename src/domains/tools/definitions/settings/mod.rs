//! Settings tools.
//!
//! - `business_units`: list, fetch and update business units
//! - `staff`: employees and technicians
//! - `exports`: change-ordered export feeds
//! - `tag_types`, `user_roles`: lookup lists

pub mod business_units;
pub mod exports;
pub mod staff;
pub mod tag_types;
pub mod user_roles;

pub use business_units::{
    BusinessUnitsParams, GetBusinessUnitTool, GetBusinessUnitsTool, UpdateBusinessUnitParams,
    UpdateBusinessUnitTool,
};
pub use exports::{ExportBusinessUnitsTool, ExportEmployeesTool, ExportParams, ExportTechniciansTool};
pub use staff::{
    GetEmployeeTool, GetEmployeesTool, GetTechnicianTool, GetTechniciansTool, StaffListParams,
};
pub use tag_types::{GetTagTypesTool, TagTypesParams};
pub use user_roles::{EmployeeType, GetUserRolesTool, UserRolesParams};

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::{ApiArea, ApiRequest};
use crate::domains::tools::ToolEntry;
use crate::domains::tools::definitions::common::default_environment;

/// Parameters for tools that fetch a single settings record by ID.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RecordParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Record ID.
    pub id: i64,
}

impl RecordParams {
    fn request(&self, resource: &str) -> ApiRequest {
        ApiRequest::read(ApiArea::Settings, self.tenant, resource)
            .segment(self.id)
            .environment(&self.environment)
    }
}

/// Every settings tool, in registration order.
pub fn entries() -> Vec<ToolEntry> {
    vec![
        ToolEntry::of::<GetBusinessUnitsTool>(),
        ToolEntry::of::<GetBusinessUnitTool>(),
        ToolEntry::of::<UpdateBusinessUnitTool>(),
        ToolEntry::of::<ExportBusinessUnitsTool>(),
        ToolEntry::of::<GetEmployeesTool>(),
        ToolEntry::of::<GetEmployeeTool>(),
        ToolEntry::of::<ExportEmployeesTool>(),
        ToolEntry::of::<GetTechniciansTool>(),
        ToolEntry::of::<GetTechnicianTool>(),
        ToolEntry::of::<ExportTechniciansTool>(),
        ToolEntry::of::<GetTagTypesTool>(),
        ToolEntry::of::<GetUserRolesTool>(),
    ]
}
