//! Fragment sequence assembly
//!
//! Single-pass, deterministic: cover/index first, then the application body,
//! then every exhibit's fragments in input order, then the payment receipt.
//! Every fragment after the first is marked with a preceding page break.

use courtdoc_model::{CaseRecord, ExhibitDescriptor, PageFragment, PaymentRecord};

use crate::application;
use crate::context::ComposeContext;
use crate::cover;
use crate::exhibits;
use crate::receipt;

/// Compose a filing into an ordered page-fragment sequence.
///
/// Pure and infallible: missing optional fields degrade to empty or "N/A"
/// display values, never an error. Exhibit order and per-exhibit attachment
/// order are preserved verbatim; exhibit *i+1* never starts before all of
/// exhibit *i* has been emitted.
pub fn compose(
    case: &CaseRecord,
    payment: &PaymentRecord,
    exhibits: &[ExhibitDescriptor],
    ctx: &ComposeContext,
) -> Vec<PageFragment> {
    let mut fragments = Vec::new();

    fragments.push(cover::cover_index(case, exhibits));
    fragments.push(application::application_body(case, ctx));
    for exhibit in exhibits {
        exhibits::expand_into(&mut fragments, exhibit);
    }
    fragments.push(receipt::payment_receipt(payment));

    mark_breaks(&mut fragments);
    fragments
}

/// Compose a single exhibit section on its own, for per-section exports.
///
/// Same expansion and break-marking rules as the combined filing, without
/// the surrounding cover, application, and receipt pages.
pub fn compose_exhibit(exhibit: &ExhibitDescriptor) -> Vec<PageFragment> {
    let mut fragments = Vec::new();
    exhibits::expand_into(&mut fragments, exhibit);
    mark_breaks(&mut fragments);
    fragments
}

/// The sole layout invariant: a page break before everything but the first.
fn mark_breaks(fragments: &mut [PageFragment]) {
    for (i, fragment) in fragments.iter_mut().enumerate() {
        fragment.break_before = i > 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtdoc_model::FragmentKind;

    #[test]
    fn test_minimal_compose_order() {
        let fragments = compose(
            &CaseRecord::default(),
            &PaymentRecord::default(),
            &[],
            &ComposeContext::default(),
        );
        let kinds: Vec<FragmentKind> = fragments.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FragmentKind::CoverIndex,
                FragmentKind::ApplicationBody,
                FragmentKind::PaymentReceipt,
            ]
        );
    }

    #[test]
    fn test_break_markers() {
        let fragments = compose(
            &CaseRecord::default(),
            &PaymentRecord::default(),
            &[ExhibitDescriptor::inline("A", "Slip", "Deposit slip", "body")],
            &ComposeContext::default(),
        );
        assert!(!fragments[0].break_before);
        assert!(fragments[1..].iter().all(|f| f.break_before));
    }
}
