//! courtdoc-model - Data model for court-filing documents
//!
//! This crate provides the plain data types shared across courtdoc:
//! case and payment records supplied by the caller, exhibit descriptors,
//! and the page-fragment vocabulary the composer emits.

pub mod block;
pub mod exhibit;
pub mod fragment;
pub mod record;

pub use block::{Block, Heading, ImageBlock, Paragraph, Table};
pub use exhibit::{Attachment, AttachmentKind, ExhibitBody, ExhibitDescriptor, ImageSource};
pub use fragment::{FragmentKind, PageFragment};
pub use record::{CaseRecord, PaymentRecord};

/// Crate version, re-exported for CLI banners
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
