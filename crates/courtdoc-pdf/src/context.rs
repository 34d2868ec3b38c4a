//! Scoped render context
//!
//! Image assets referenced by the generated markup are materialized into a
//! temporary directory that lives exactly as long as one export. Dropping
//! the context removes the directory on every exit path, including
//! compilation failure.

use std::fs;
use std::path::Path;

use courtdoc_model::ImageSource;
use tempfile::TempDir;

use crate::error::{ExportError, Result};
use crate::transpiler::Asset;

/// A temporary asset directory for one export.
pub struct RenderContext {
    dir: TempDir,
}

impl RenderContext {
    /// Create a fresh, empty context.
    pub fn create() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Root directory the Typst file resolver is pointed at.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write one asset under its virtual path.
    pub fn materialize(&self, asset: &Asset) -> Result<()> {
        let dest = self.dir.path().join(&asset.path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        match &asset.source {
            ImageSource::Bytes(bytes) => fs::write(&dest, bytes)?,
            ImageSource::Path(path) => {
                fs::copy(path, &dest).map_err(|e| {
                    ExportError::Asset(format!("cannot read {}: {}", path.display(), e))
                })?;
            }
        }
        Ok(())
    }
}
