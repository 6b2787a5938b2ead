//! Marketing ads tools.
//!
//! Read tools for attributed leads, capacity warnings and ad performance, and
//! create tools that attribute calls, jobs, bookings and lead forms to web
//! sessions.

pub mod attributed_leads;
pub mod attributions;
pub mod capacity_warnings;
pub mod external_call;
pub mod performance;
pub mod web_session;

pub use attributed_leads::{AttributedLeadsGetTool, AttributedLeadsParams, LeadType};
pub use attributions::{
    ScheduledJobAttributionParams, ScheduledJobAttributionsCreateTool,
    WebBookingAttributionParams, WebBookingAttributionsCreateTool, WebLeadFormAttributionParams,
    WebLeadFormAttributionsCreateTool,
};
pub use capacity_warnings::{CapacityWarningsGetTool, CapacityWarningsParams};
pub use external_call::{ExternalCallAttributionParams, ExternalCallAttributionsCreateTool};
pub use performance::{PerformanceGetTool, PerformanceParams, PerformanceSegmentation};
pub use web_session::WebSessionArgs;

use crate::domains::tools::ToolEntry;

/// Every marketing ads tool, in registration order.
pub fn entries() -> Vec<ToolEntry> {
    vec![
        ToolEntry::of::<AttributedLeadsGetTool>(),
        ToolEntry::of::<CapacityWarningsGetTool>(),
        ToolEntry::of::<PerformanceGetTool>(),
        ToolEntry::of::<ExternalCallAttributionsCreateTool>(),
        ToolEntry::of::<ScheduledJobAttributionsCreateTool>(),
        ToolEntry::of::<WebBookingAttributionsCreateTool>(),
        ToolEntry::of::<WebLeadFormAttributionsCreateTool>(),
    ]
}
