//! Caller-supplied case and payment records
//!
//! Every field is optional by contract: an absent field renders as an empty
//! cell (case data) or the literal "N/A" (payment data), never an error.

use serde::{Deserialize, Serialize};

/// Applicant identity and financial details for one filing.
///
/// Immutable once handed to the composer; the composer takes it by shared
/// reference and never mutates or caches it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseRecord {
    /// Court the application is addressed to
    pub court_name: Option<String>,
    /// Case / application number, if already assigned
    pub case_number: Option<String>,
    pub applicant_name: Option<String>,
    /// Father's / spouse's name as it appears on the deposit record
    pub guardian_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Government identifier (e.g. Aadhaar)
    pub id_number: Option<String>,
    pub pan_number: Option<String>,
    pub address: Option<String>,
    /// Free-text grounds / remarks included in the recitals
    pub notes: Option<String>,
    pub accused_name: Option<String>,
    pub complainant_name: Option<String>,
    /// Kind of deposit the application concerns (e.g. "Fixed Deposit")
    pub deposit_type: Option<String>,
    pub deposit_amount: Option<String>,
    pub interest_rate: Option<String>,
    pub deposit_duration: Option<String>,
}

impl CaseRecord {
    /// Display value for an optional field: the value, or empty.
    pub fn text(field: &Option<String>) -> &str {
        field.as_deref().unwrap_or("")
    }
}

/// Payment receipt details printed on the final page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentRecord {
    pub receipt_number: Option<String>,
    pub order_id: Option<String>,
    /// Amount in minor currency units (paise)
    pub amount_paise: Option<i64>,
    pub payment_method: Option<String>,
    pub payment_date: Option<String>,
    pub payer_name: Option<String>,
}

impl PaymentRecord {
    /// Display value for an optional receipt field: the value, or "N/A".
    pub fn text_or_na(field: &Option<String>) -> &str {
        field.as_deref().unwrap_or("N/A")
    }

    /// Amount in minor units, defaulting to zero when absent.
    pub fn amount_paise_or_zero(&self) -> i64 {
        self.amount_paise.unwrap_or(0)
    }
}
