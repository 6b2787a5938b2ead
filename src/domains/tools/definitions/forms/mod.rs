//! Forms tools.
//!
//! - `get_forms`: list form definitions
//! - `get_submissions`: list submitted forms

pub mod get_forms;
pub mod get_submissions;

pub use get_forms::{FormStatus, FormsGetFormsParams, FormsGetFormsTool};
pub use get_submissions::{
    FormOwner, FormsGetSubmissionsParams, FormsGetSubmissionsTool, OwnerType, SubmissionStatus,
};

use crate::domains::tools::ToolEntry;

/// Every forms tool, in registration order.
pub fn entries() -> Vec<ToolEntry> {
    vec![
        ToolEntry::of::<FormsGetFormsTool>(),
        ToolEntry::of::<FormsGetSubmissionsTool>(),
    ]
}
