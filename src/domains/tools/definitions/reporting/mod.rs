//! Reporting tools.
//!
//! - `categories`: list report categories
//! - `reports`: list, describe and run reports
//! - `dynamic_value_sets`: values for report parameters

pub mod categories;
pub mod dynamic_value_sets;
pub mod reports;

pub use categories::{GetReportCategoriesTool, ReportCategoriesParams};
pub use dynamic_value_sets::{DynamicValueSetParams, GetDynamicValueSetTool};
pub use reports::{
    GetReportDataParams, GetReportDataTool, GetReportParams, GetReportTool, GetReportsParams,
    GetReportsTool, ReportParameter,
};

use crate::domains::tools::ToolEntry;

/// Every reporting tool, in registration order.
pub fn entries() -> Vec<ToolEntry> {
    vec![
        ToolEntry::of::<GetReportCategoriesTool>(),
        ToolEntry::of::<GetReportsTool>(),
        ToolEntry::of::<GetReportTool>(),
        ToolEntry::of::<GetReportDataTool>(),
        ToolEntry::of::<GetDynamicValueSetTool>(),
    ]
}
