//! Fragment to Typst markup transpiler
//!
//! Converts a composed page-fragment sequence into a single Typst source
//! string. The page preamble comes from [`ExportOptions`]; a `#pagebreak()`
//! is emitted before every fragment marked `break_before`. Image blocks are
//! rewritten to reference virtual asset paths; the caller materializes the
//! returned assets before compiling.

use std::fmt::Write;
use std::path::Path;

use courtdoc_model::{Block, Heading, ImageBlock, ImageSource, PageFragment, Paragraph, Table};

use crate::options::ExportOptions;

/// An image referenced by the generated markup.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    /// Path relative to the render root, as referenced in the markup
    pub path: String,
    pub source: ImageSource,
}

/// Result of transpilation: markup plus the assets it references.
#[derive(Debug, Clone, PartialEq)]
pub struct TranspileOutput {
    pub markup: String,
    pub assets: Vec<Asset>,
}

/// Transpiler for converting fragment sequences to Typst markup
pub struct Transpiler;

impl Transpiler {
    /// Transpile a fragment sequence to Typst markup.
    pub fn transpile(fragments: &[PageFragment], options: &ExportOptions) -> TranspileOutput {
        let mut markup = preamble(options);
        let mut assets = Vec::new();

        for fragment in fragments {
            if fragment.break_before {
                markup.push_str("#pagebreak()\n");
            }
            for block in &fragment.blocks {
                markup.push_str(&Self::transpile_block(block, &mut assets));
                markup.push('\n');
            }
        }

        TranspileOutput { markup, assets }
    }

    /// Transpile a single block
    fn transpile_block(block: &Block, assets: &mut Vec<Asset>) -> String {
        match block {
            Block::Heading(h) => Self::transpile_heading(h),
            Block::Paragraph(p) => Self::transpile_paragraph(p),
            Block::Table(t) => Self::transpile_table(t),
            Block::Image(img) => Self::transpile_image(img, assets),
            Block::Verbatim(content) => {
                let mut out = content.clone();
                if !out.ends_with('\n') {
                    out.push('\n');
                }
                out
            }
        }
    }

    fn transpile_heading(heading: &Heading) -> String {
        let prefix = "=".repeat(heading.level as usize);
        let text = escape_markup(&heading.text);
        if heading.centered {
            format!("#align(center)[\n{} {}\n]\n", prefix, text)
        } else {
            format!("{} {}\n", prefix, text)
        }
    }

    fn transpile_paragraph(paragraph: &Paragraph) -> String {
        let text = escape_markup(&paragraph.text);
        if paragraph.bold {
            format!("*{}*\n", text)
        } else {
            format!("{}\n", text)
        }
    }

    fn transpile_table(table: &Table) -> String {
        let col_count = table.column_count();
        let mut output = String::new();

        writeln!(output, "#table(").unwrap();
        writeln!(output, "  columns: {},", col_count).unwrap();

        if !table.columns.is_empty() {
            let header_cells: Vec<String> = padded(&table.columns, col_count)
                .iter()
                .map(|c| format!("[*{}*]", escape_markup(c)))
                .collect();
            writeln!(output, "  table.header({}),", header_cells.join(", ")).unwrap();
        }

        for row in &table.rows {
            let cells: Vec<String> = padded(row, col_count)
                .iter()
                .map(|c| format!("[{}]", escape_markup(c)))
                .collect();
            writeln!(output, "  {},", cells.join(", ")).unwrap();
        }

        output.push_str(")\n");
        output
    }

    /// One full-size image, registered as an asset under a stable virtual path.
    fn transpile_image(image: &ImageBlock, assets: &mut Vec<Asset>) -> String {
        let path = format!(
            "assets/img-{}.{}",
            assets.len(),
            image_extension(image)
        );
        assets.push(Asset {
            path: path.clone(),
            source: image.source.clone(),
        });
        format!(
            "#align(center + horizon)[#image(\"{}\", width: 100%, fit: \"contain\")]\n",
            path
        )
    }
}

/// Page setup derived from the export options.
fn preamble(options: &ExportOptions) -> String {
    let margins = &options.margins;
    format!(
        "#set page(paper: \"{}\", flipped: {}, margin: (top: {}in, right: {}in, bottom: {}in, left: {}in))\n\
         #set text(size: 11pt)\n\n",
        options.paper.as_typst(),
        options.orientation.flipped(),
        margins.top,
        margins.right,
        margins.bottom,
        margins.left,
    )
}

/// File extension for the virtual asset path, so Typst picks the right decoder.
fn image_extension(image: &ImageBlock) -> String {
    let named = match &image.source {
        ImageSource::Path(path) => path.extension().and_then(|e| e.to_str()).map(str::to_string),
        ImageSource::Bytes(_) => image
            .alt
            .as_deref()
            .map(Path::new)
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str())
            .map(str::to_string),
    };
    named.unwrap_or_else(|| "png".to_string())
}

fn padded(cells: &[String], width: usize) -> Vec<String> {
    let mut out = cells.to_vec();
    out.resize(width, String::new());
    out
}

/// Escape characters Typst would treat as markup or code.
fn escape_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' | '#' | '*' | '_' | '`' | '@' | '<' | '>' | '[' | ']' | '$' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}
