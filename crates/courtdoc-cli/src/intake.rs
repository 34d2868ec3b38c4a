//! File intake for exhibit attachments
//!
//! Resolves the path patterns of an exhibit spec into in-memory blobs and
//! classifies each file as image or document by extension. The composer
//! trusts this classification; there is no content sniffing. Patterns are
//! resolved relative to the case file's directory, pattern order is kept,
//! and files within one glob come back in the sorted order glob yields.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glob::glob;

use courtdoc_compose::ExhibitSpec;
use courtdoc_model::{Attachment, AttachmentKind, ExhibitDescriptor, ImageSource};

/// Extensions rendered inline as full-page images.
const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "svg"];

/// Resolve all exhibit specs of a request into descriptors.
pub fn resolve_exhibits(specs: &[ExhibitSpec], base_dir: &Path) -> Result<Vec<ExhibitDescriptor>> {
    specs
        .iter()
        .map(|spec| resolve_exhibit(spec, base_dir))
        .collect()
}

/// Resolve one spec: inline content wins; otherwise read every matched file.
pub fn resolve_exhibit(spec: &ExhibitSpec, base_dir: &Path) -> Result<ExhibitDescriptor> {
    if let Some(ref content) = spec.content {
        return Ok(ExhibitDescriptor::inline(
            &spec.label,
            &spec.title,
            &spec.description,
            content,
        ));
    }

    let mut attachments = Vec::new();
    for pattern in &spec.files {
        let full_pattern = base_dir.join(pattern).display().to_string();
        let mut matched = false;

        for entry in
            glob(&full_pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))?
        {
            let path = entry.with_context(|| format!("Unreadable match for: {}", pattern))?;
            matched = true;
            attachments.push(read_attachment(&path)?);
        }

        if !matched {
            eprintln!(
                "Warning: exhibit {}: no files matched {}",
                spec.label, pattern
            );
        }
    }

    Ok(ExhibitDescriptor::with_attachments(
        &spec.label,
        &spec.title,
        &spec.description,
        attachments,
    ))
}

fn read_attachment(path: &Path) -> Result<Attachment> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read attachment: {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Attachment {
        kind: classify(path),
        name,
        source: ImageSource::Bytes(bytes),
    })
}

/// Extension-based classification; everything unrecognized is a document.
pub fn classify(path: &Path) -> AttachmentKind {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        AttachmentKind::Image
    } else {
        AttachmentKind::Document
    }
}
