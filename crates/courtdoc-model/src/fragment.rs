//! Page fragments
//!
//! A fragment is one renderable unit of output, tagged with whether a page
//! break precedes it. The composer produces an ordered `Vec<PageFragment>`;
//! fragments hold no back-reference to the descriptors they came from.

use serde::{Deserialize, Serialize};

use crate::block::Block;

/// One renderable unit of composed output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageFragment {
    /// A page break is emitted before this fragment when true.
    /// The first fragment of a composed sequence never carries it.
    pub break_before: bool,
    pub kind: FragmentKind,
    pub blocks: Vec<Block>,
}

/// What part of the filing a fragment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FragmentKind {
    /// Cover page with the index table
    CoverIndex,
    /// The application body with recitals, prayer, and verification
    ApplicationBody,
    /// Heading page of one exhibit (label + title)
    ExhibitHeading,
    /// Inline exhibit body rendered verbatim
    ExhibitBody,
    /// One full-page exhibit image
    ExhibitImage,
    /// Placeholder for a non-image attachment
    AttachmentPlaceholder,
    /// Payment receipt table
    PaymentReceipt,
}

impl PageFragment {
    /// Create a fragment with no preceding page break.
    pub fn new(kind: FragmentKind, blocks: Vec<Block>) -> Self {
        Self {
            break_before: false,
            kind,
            blocks,
        }
    }
}
