//! Export request loading
//!
//! Parses a caller-supplied JSON request into typed records. The one caller
//! contract checked here: `exhibits`, when present, must be a sequence.
//! Anything else missing or partial deserializes to defaults and renders as
//! empty fields downstream.
//!
//! Exhibit entries carry either inline content or attachment path patterns;
//! resolving patterns into bytes is the hosting shell's job (file intake),
//! not this crate's.

use serde::{Deserialize, Serialize};

use courtdoc_model::{CaseRecord, PaymentRecord};

use crate::context::ComposeContext;
use crate::error::{ComposeError, Result};

/// A full export request as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportRequest {
    pub case: CaseRecord,
    pub payment: PaymentRecord,
    pub exhibits: Vec<ExhibitSpec>,
    pub context: ComposeContext,
}

/// One exhibit entry of a request, before file intake.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExhibitSpec {
    pub label: String,
    pub title: String,
    pub description: String,
    /// Inline markup; takes precedence over `files` when set
    pub content: Option<String>,
    /// File paths or glob patterns, resolved relative to the request file
    pub files: Vec<String>,
}

/// Parse a JSON export request.
///
/// Fails fast with [`ComposeError::InvalidInput`] when `exhibits` is present
/// but not a sequence; this is the only caller contract violation the
/// composer surfaces.
pub fn parse_request(json: &str) -> Result<ExportRequest> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    if let Some(exhibits) = value.get("exhibits") {
        if !exhibits.is_array() {
            return Err(ComposeError::InvalidInput(
                "`exhibits` must be a sequence".to_string(),
            ));
        }
    }

    Ok(serde_json::from_value(value)?)
}
