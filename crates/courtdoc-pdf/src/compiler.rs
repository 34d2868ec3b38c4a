//! Typst to PDF compiler
//!
//! Compiles Typst markup to PDF bytes using typst-as-lib.

use std::path::Path;

use typst_as_lib::TypstEngine;

use crate::error::{ExportError, Result};

/// Compiler for converting Typst markup to PDF
pub struct Compiler;

impl Compiler {
    /// Compile markup that references no external assets.
    pub fn compile(markup: &str) -> Result<Vec<u8>> {
        Self::compile_with_root(markup, None)
    }

    /// Compile markup, resolving relative asset paths against `asset_root`.
    pub fn compile_with_root(markup: &str, asset_root: Option<&Path>) -> Result<Vec<u8>> {
        let mut builder = TypstEngine::builder().main_file(markup.to_string());

        if let Some(root) = asset_root {
            builder = builder.with_file_system_resolver(root);
        }

        let engine = builder.build();

        // compiled is Warned<Result<Document, Error>>:
        // - compiled.output is the Result
        // - compiled.warnings contains any warnings
        let compiled = engine.compile();
        let document = compiled
            .output
            .map_err(|e| ExportError::Compilation(format!("{:?}", e)))?;

        let options = typst_pdf::PdfOptions::default();
        let pdf_bytes = typst_pdf::pdf(&document, &options)
            .map_err(|e| ExportError::Compilation(format!("PDF generation failed: {:?}", e)))?;

        Ok(pdf_bytes.into())
    }
}
