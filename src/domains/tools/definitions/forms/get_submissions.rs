//! List form submissions tool definition.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::api::{ApiArea, ApiRequest, ChangeWindow, IndexedEntry, QueryParams};
use crate::domains::tools::definitions::common::{
    ActiveFilter, WireEnum, choice, default_environment,
};
use crate::domains::tools::{ApiTool, ToolError};

/// Completion status filter for submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Started,
    Completed,
    Any,
}

impl WireEnum for SubmissionStatus {
    const FIELD: &'static str = "status";
    const VARIANTS: &'static [Self] = &[Self::Started, Self::Completed, Self::Any];

    fn wire(self) -> &'static str {
        match self {
            Self::Started => "Started",
            Self::Completed => "Completed",
            Self::Any => "Any",
        }
    }
}

/// Kind of record a submission is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerType {
    Job,
    Call,
    Customer,
    Location,
    Equipment,
    Technician,
    JobAppointment,
    Membership,
    Truck,
}

impl WireEnum for OwnerType {
    const FIELD: &'static str = "owners.type";
    const VARIANTS: &'static [Self] = &[
        Self::Job,
        Self::Call,
        Self::Customer,
        Self::Location,
        Self::Equipment,
        Self::Technician,
        Self::JobAppointment,
        Self::Membership,
        Self::Truck,
    ];

    fn wire(self) -> &'static str {
        match self {
            Self::Job => "Job",
            Self::Call => "Call",
            Self::Customer => "Customer",
            Self::Location => "Location",
            Self::Equipment => "Equipment",
            Self::Technician => "Technician",
            Self::JobAppointment => "JobAppointment",
            Self::Membership => "Membership",
            Self::Truck => "Truck",
        }
    }
}

/// One `owners` entry as supplied by the caller.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FormOwner {
    /// Owner type: Job, Call, Customer, Location, Equipment, Technician,
    /// JobAppointment, Membership or Truck.
    #[serde(rename = "type")]
    pub owner_type: String,

    /// Owner record ID.
    pub id: i64,
}

struct OwnerRef {
    owner_type: OwnerType,
    id: i64,
}

impl IndexedEntry for OwnerRef {
    fn fields(&self) -> Vec<(&'static str, Value)> {
        vec![("type", json!(self.owner_type.wire())), ("id", json!(self.id))]
    }
}

/// Parameters for the list submissions tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FormsGetSubmissionsParams {
    /// Tenant ID.
    pub tenant: i64,

    /// Target environment: "production" (default) or "integration".
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Only submissions of these forms.
    pub form_ids: Option<Vec<i64>>,

    /// Active filter: True, Any or False.
    pub active: Option<String>,

    /// Only submissions created by these users.
    pub created_by_ids: Option<Vec<i64>>,

    /// Completion status: Started, Completed or Any.
    pub status: Option<String>,

    /// Submitted on or after this UTC timestamp.
    pub submitted_on_or_after: Option<String>,

    /// Submitted before this UTC timestamp.
    pub submitted_before: Option<String>,

    /// Only submissions for this customer.
    pub customer_id: Option<i64>,

    /// Only submissions for this location.
    pub location_id: Option<i64>,

    /// Only submissions attached to these records, as `{type, id}` pairs.
    pub owners: Option<Vec<FormOwner>>,

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

/// List form submissions tool.
pub struct FormsGetSubmissionsTool;

impl ApiTool for FormsGetSubmissionsTool {
    const NAME: &'static str = "forms_get_submissions";
    const DESCRIPTION: &'static str = "List form submissions of a tenant. Filter by form IDs, status, submitter, submission dates, customer, location and owning records (e.g. [{\"type\": \"Job\", \"id\": 123}]); supports paging and sorting.";
    const FAILURE: &'static str = "Unable to fetch form submissions.";
    type Params = FormsGetSubmissionsParams;

    fn build(params: &FormsGetSubmissionsParams) -> Result<ApiRequest, ToolError> {
        let active = choice::<ActiveFilter>(params.active.as_deref())?;
        let status = choice::<SubmissionStatus>(params.status.as_deref())?;
        let owners = params
            .owners
            .as_deref()
            .map(|owners| {
                owners
                    .iter()
                    .map(|o| {
                        Ok(OwnerRef {
                            owner_type: OwnerType::parse(&o.owner_type)?,
                            id: o.id,
                        })
                    })
                    .collect::<Result<Vec<_>, ToolError>>()
            })
            .transpose()?;

        let query = QueryParams::new()
            .ids("formIds", params.form_ids.as_deref())
            .opt("active", active)
            .ids("createdByIds", params.created_by_ids.as_deref())
            .opt("status", status)
            .opt("submittedOnOrAfter", params.submitted_on_or_after.as_deref())
            .opt("submittedBefore", params.submitted_before.as_deref())
            .opt("customerId", params.customer_id)
            .opt("locationId", params.location_id)
            .indexed("owners", owners.as_deref())
            .window(&params.window)
            .paging(params.page, params.page_size, params.include_total)
            .opt("sort", params.sort.as_deref());

        Ok(ApiRequest::read(ApiArea::Forms, params.tenant, "submissions")
            .environment(&params.environment)
            .query(query))
    }
}
