//! Renderable block vocabulary
//!
//! The composer emits fragments whose content is built from this small set of
//! block-level elements. The PDF transpiler is the only consumer; blocks carry
//! plain strings, no nested inline tree.

use serde::{Deserialize, Serialize};

use crate::exhibit::ImageSource;

/// Block-level content element inside a page fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// A section heading
    Heading(Heading),
    /// A paragraph of text
    Paragraph(Paragraph),
    /// A table of plain-text cells
    Table(Table),
    /// A full-size image
    Image(ImageBlock),
    /// Markup passed through to the renderer verbatim
    Verbatim(String),
}

/// A heading with a level (1 is the highest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
    /// Centered headings are used for document titles and party blocks
    pub centered: bool,
}

/// A paragraph of plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    /// Render the whole paragraph in bold
    pub bold: bool,
}

/// A table of plain-text cells.
///
/// `columns` is the header row; an empty `columns` renders a headerless table
/// sized to the widest body row (the receipt key/value table uses this).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A full-size image placed on an otherwise blank page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    pub source: ImageSource,
    /// Alternative text, shown as a caption when present
    pub alt: Option<String>,
}

impl Block {
    /// Shorthand for a plain paragraph.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(Paragraph {
            text: text.into(),
            bold: false,
        })
    }

    /// Shorthand for a bold paragraph.
    pub fn bold_paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(Paragraph {
            text: text.into(),
            bold: true,
        })
    }

    /// Shorthand for a centered heading.
    pub fn centered_heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading(Heading {
            level,
            text: text.into(),
            centered: true,
        })
    }

    /// Shorthand for a left-aligned heading.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading(Heading {
            level,
            text: text.into(),
            centered: false,
        })
    }
}

impl Table {
    /// Number of columns the rendered table needs.
    pub fn column_count(&self) -> usize {
        self.columns
            .len()
            .max(self.rows.iter().map(|r| r.len()).max().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_shorthand() {
        let block = Block::paragraph("Hello");
        assert!(matches!(block, Block::Paragraph(ref p) if p.text == "Hello" && !p.bold));
    }

    #[test]
    fn test_table_column_count_from_header() {
        let table = Table {
            columns: vec!["SR. NO.".into(), "PARTICULARS".into(), "EXHIBIT No.".into()],
            rows: vec![vec!["1".into(), "Application".into()]],
        };
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn test_table_column_count_headerless() {
        let table = Table {
            columns: vec![],
            rows: vec![vec!["Receipt No.".into(), "N/A".into()]],
        };
        assert_eq!(table.column_count(), 2);
    }
}
