//! Common utilities shared across the API tools.
//!
//! Enum normalization, required-field checks and serde defaults.

use crate::core::api::DEFAULT_ENVIRONMENT;
use crate::domains::tools::ToolError;

/// Serde default for every tool's `environment` argument.
pub fn default_environment() -> String {
    DEFAULT_ENVIRONMENT.to_string()
}

/// A closed set of tokens accepted by one argument, each with one wire spelling.
///
/// Parsing ignores case, surrounding whitespace and `_`/`-`/space separators,
/// so `"web_booking"`, `"WebBooking"` and `" webbooking "` are the same token.
pub trait WireEnum: Copy + 'static {
    /// Argument name used in error messages.
    const FIELD: &'static str;

    /// Every variant, in the order they are listed to callers.
    const VARIANTS: &'static [Self];

    /// Canonical wire token.
    fn wire(self) -> &'static str;

    fn parse(raw: &str) -> Result<Self, ToolError> {
        let needle = fold(raw);
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| fold(variant.wire()) == needle)
            .ok_or_else(|| ToolError::InvalidChoice {
                field: Self::FIELD,
                options: Self::VARIANTS.iter().map(|v| v.wire()).collect(),
            })
    }
}

fn fold(token: &str) -> String {
    token
        .trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Parse an optional enum argument into its wire token.
pub fn choice<E: WireEnum>(raw: Option<&str>) -> Result<Option<&'static str>, ToolError> {
    raw.map(|r| E::parse(r).map(E::wire)).transpose()
}

/// `active` filter shared by most list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveFilter {
    True,
    Any,
    False,
}

impl WireEnum for ActiveFilter {
    const FIELD: &'static str = "active";
    const VARIANTS: &'static [Self] = &[Self::True, Self::Any, Self::False];

    fn wire(self) -> &'static str {
        match self {
            Self::True => "True",
            Self::Any => "Any",
            Self::False => "False",
        }
    }
}

/// Whether a string argument was supplied with non-blank content.
pub fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Fail with the whole group's names unless every field in it is present.
pub fn require_all(fields: &[(&'static str, bool)]) -> Result<(), ToolError> {
    if fields.iter().all(|(_, present)| *present) {
        Ok(())
    } else {
        Err(ToolError::MissingFields(
            fields.iter().map(|(name, _)| *name).collect(),
        ))
    }
}

/// Borrow a required string argument, trimmed.
pub fn required_text<'a>(name: &'static str, value: &'a Option<String>) -> Result<&'a str, ToolError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ToolError::MissingFields(vec![name])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_variants_normalize() {
        for raw in ["true", "TRUE", " True ", "tRuE\t"] {
            assert_eq!(ActiveFilter::parse(raw).unwrap().wire(), "True");
        }
        for raw in ["any", "ANY", "  any"] {
            assert_eq!(ActiveFilter::parse(raw).unwrap().wire(), "Any");
        }
        assert_eq!(ActiveFilter::parse("false").unwrap(), ActiveFilter::False);
    }

    #[test]
    fn test_unknown_token_lists_options() {
        let err = ActiveFilter::parse("maybe").unwrap_err();
        assert_eq!(err.to_string(), "Invalid 'active'. Use one of: True, Any, False.");
    }

    #[test]
    fn test_choice_passes_through_absence() {
        assert_eq!(choice::<ActiveFilter>(None).unwrap(), None);
        assert_eq!(choice::<ActiveFilter>(Some("any")).unwrap(), Some("Any"));
        assert!(choice::<ActiveFilter>(Some("")).is_err());
    }

    #[test]
    fn test_require_all_names_the_group() {
        assert!(require_all(&[("a", true), ("b", true)]).is_ok());
        assert_eq!(
            require_all(&[("a", false), ("b", true)]).unwrap_err(),
            ToolError::MissingFields(vec!["a", "b"])
        );
    }

    #[test]
    fn test_blank_strings_are_missing() {
        assert!(!has_text(&Some("   ".to_string())));
        assert!(!has_text(&None));
        assert!(has_text(&Some("x".to_string())));
        assert_eq!(required_text("id", &Some(" 7 ".to_string())).unwrap(), "7");
        assert!(required_text("id", &Some(String::new())).is_err());
    }
}
