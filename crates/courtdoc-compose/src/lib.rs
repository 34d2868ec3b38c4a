//! courtdoc-compose - Document composer
//!
//! Assembles a court filing from caller-supplied data into an ordered
//! sequence of page fragments: cover/index, application body, one section
//! per exhibit, payment receipt.
//!
//! Composition is a pure function: no I/O, no shared state, no wall-clock
//! reads (dates enter through [`ComposeContext`]). It never fails on missing
//! optional fields; those degrade to empty or "N/A" display values.
//!
//! # Example
//!
//! ```
//! use courtdoc_compose::{compose, ComposeContext};
//! use courtdoc_model::{CaseRecord, PaymentRecord};
//!
//! let fragments = compose(
//!     &CaseRecord::default(),
//!     &PaymentRecord::default(),
//!     &[],
//!     &ComposeContext::default(),
//! );
//! // Cover, application body, receipt - no exhibits.
//! assert_eq!(fragments.len(), 3);
//! assert!(!fragments[0].break_before);
//! ```

mod application;
mod composer;
mod context;
mod cover;
mod error;
mod exhibits;
mod receipt;
mod request;
pub mod template;

pub use composer::{compose, compose_exhibit};
pub use context::ComposeContext;
pub use error::{ComposeError, Result};
pub use receipt::format_amount_paise;
pub use request::{parse_request, ExhibitSpec, ExportRequest};

/// Crate version, re-exported for CLI banners
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
