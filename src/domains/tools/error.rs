//! Tool-specific error types.
//!
//! The `Display` text of each variant is exactly what a caller sees, so the
//! messages here are part of the tool contract.

use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The arguments could not be decoded into the tool's parameters.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An enum-like argument held a token outside its closed set.
    #[error("Invalid '{field}'. Use one of: {}.", .options.join(", "))]
    InvalidChoice {
        field: &'static str,
        options: Vec<&'static str>,
    },

    /// One or more required arguments were missing or blank.
    #[error("{}", describe_required(.0))]
    MissingFields(Vec<&'static str>),

    /// Arguments were present but unusable together.
    #[error("{0}")]
    Validation(String),

    /// The environment (or another setting) could not be resolved.
    #[error("{0}")]
    Configuration(String),

    /// The API call produced no usable result.
    #[error("{0}")]
    RequestFailed(&'static str),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

/// `'a' is required.`, `'a' and 'b' are required.`, `'a', 'b' and 'c' are required.`
fn describe_required(fields: &[&str]) -> String {
    let quoted: Vec<String> = fields.iter().map(|f| format!("'{f}'")).collect();
    match quoted.as_slice() {
        [] => "Required fields are missing.".to_string(),
        [only] => format!("{only} is required."),
        [init @ .., last] => format!("{} and {last} are required.", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_choice_message() {
        let err = ToolError::InvalidChoice {
            field: "status",
            options: vec!["Any", "Published", "Unpublished"],
        };
        assert_eq!(
            err.to_string(),
            "Invalid 'status'. Use one of: Any, Published, Unpublished."
        );
    }

    #[test]
    fn test_missing_fields_messages() {
        assert_eq!(
            ToolError::MissingFields(vec!["job_id"]).to_string(),
            "'job_id' is required."
        );
        assert_eq!(
            ToolError::MissingFields(vec!["landing_page_url", "referrer_url"]).to_string(),
            "'landing_page_url' and 'referrer_url' are required."
        );
        assert_eq!(
            ToolError::MissingFields(vec!["from_utc", "to_utc", "performance_segmentation_type"])
                .to_string(),
            "'from_utc', 'to_utc' and 'performance_segmentation_type' are required."
        );
    }

    #[test]
    fn test_request_failed_is_the_bare_message() {
        let err = ToolError::RequestFailed("Unable to fetch forms.");
        assert_eq!(err.to_string(), "Unable to fetch forms.");
    }
}
