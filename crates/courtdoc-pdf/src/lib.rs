//! courtdoc-pdf - PDF export via Typst
//!
//! Turns a composed page-fragment sequence into a paginated PDF. The export
//! pipeline has three stages:
//!
//! 1. **Transpiler** - fragments to Typst markup (page setup from
//!    [`ExportOptions`], a `#pagebreak()` before every marked fragment) plus
//!    the list of image assets the markup references
//! 2. **RenderContext** - a scoped temp directory the assets are materialized
//!    into, released on every exit path
//! 3. **Compiler** - Typst markup to PDF bytes
//!
//! All export variants go through the single [`Exporter`]; there is no
//! per-variant option building.
//!
//! # Example
//!
//! ```ignore
//! use courtdoc_pdf::{Exporter, ExportOptions};
//!
//! let exporter = Exporter::new(ExportOptions::default());
//! let pdf_bytes = exporter.export(&fragments)?;
//! ```

mod compiler;
mod context;
mod error;
mod options;
mod transpiler;

use std::fs;
use std::path::Path;

use courtdoc_model::PageFragment;

pub use compiler::Compiler;
pub use context::RenderContext;
pub use error::{ExportError, Result};
pub use options::{ExportOptions, Margins, Orientation, Paper};
pub use transpiler::{Asset, TranspileOutput, Transpiler};

/// Rendering/export service shared by all presentation variants.
pub struct Exporter {
    options: ExportOptions,
}

impl Exporter {
    /// Create an exporter with the given page options.
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Render a fragment sequence to PDF bytes.
    pub fn export(&self, fragments: &[PageFragment]) -> Result<Vec<u8>> {
        let output = Transpiler::transpile(fragments, &self.options);

        if output.assets.is_empty() {
            return Compiler::compile(&output.markup);
        }

        let ctx = RenderContext::create()?;
        for asset in &output.assets {
            ctx.materialize(asset)?;
        }
        Compiler::compile_with_root(&output.markup, Some(ctx.root()))
        // ctx drops here, releasing the asset directory on success and failure alike
    }

    /// Render a fragment sequence and write it to a file.
    ///
    /// Any caller-supplied path is accepted; the suggested filename is the
    /// caller's contract, not this crate's.
    pub fn export_to_file(&self, fragments: &[PageFragment], path: &Path) -> Result<()> {
        let bytes = self.export(fragments)?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(ExportOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtdoc_compose::{compose, ComposeContext};
    use courtdoc_model::{CaseRecord, PaymentRecord};

    #[test]
    fn test_export_minimal_filing() {
        let fragments = compose(
            &CaseRecord::default(),
            &PaymentRecord::default(),
            &[],
            &ComposeContext::default(),
        );
        let pdf = Exporter::default().export(&fragments).unwrap();
        assert!(pdf.starts_with(b"%PDF"), "output is not a PDF");
    }

    #[test]
    fn test_export_to_file() {
        let fragments = compose(
            &CaseRecord::default(),
            &PaymentRecord::default(),
            &[],
            &ComposeContext::default(),
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("refund-application.pdf");
        Exporter::default().export_to_file(&fragments, &path).unwrap();
        assert!(path.exists());
        assert!(fs::read(&path).unwrap().starts_with(b"%PDF"));
    }
}
