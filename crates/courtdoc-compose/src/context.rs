//! Compose context
//!
//! Carries the wall-clock-derived values as explicit, overridable inputs so
//! composition stays pure and deterministic. The CLI shell fills in today's
//! date; tests and library callers pass fixed values.

use serde::{Deserialize, Serialize};

/// Date and place inputs for one composition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeContext {
    /// Date printed under the applicant's signature
    pub filing_date: Option<String>,
    /// Place named in the verification clause
    pub verification_place: Option<String>,
    /// Date named in the verification clause
    pub verification_date: Option<String>,
}

impl ComposeContext {
    /// Context with all three values set.
    pub fn new(
        filing_date: impl Into<String>,
        verification_place: impl Into<String>,
        verification_date: impl Into<String>,
    ) -> Self {
        Self {
            filing_date: Some(filing_date.into()),
            verification_place: Some(verification_place.into()),
            verification_date: Some(verification_date.into()),
        }
    }

    /// Display value for an optional context field: the value, or empty.
    pub fn text(field: &Option<String>) -> &str {
        field.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_renders_empty() {
        let ctx = ComposeContext::default();
        assert_eq!(ComposeContext::text(&ctx.filing_date), "");
    }

    #[test]
    fn test_new_sets_all_fields() {
        let ctx = ComposeContext::new("2024-01-05", "Pune", "2024-01-05");
        assert_eq!(ctx.verification_place.as_deref(), Some("Pune"));
    }
}
