//! Export options
//!
//! The single configuration record enumerating the recognized page-format
//! options: paper size, orientation, margins in inches, raster scale factor,
//! and image quality. The raster settings are accepted for raster-capable
//! backends; the vector PDF path carries them without effect.

/// Page-format options for one export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub paper: Paper,
    pub orientation: Orientation,
    /// Page margins in inches
    pub margins: Margins,
    /// Scale factor for rasterization; unused by the vector PDF backend
    pub raster_scale: f64,
    /// Image encoding quality in 0..=1; unused by the vector PDF backend
    pub image_quality: f64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            paper: Paper::A4,
            orientation: Orientation::Portrait,
            margins: Margins::uniform(0.5),
            raster_scale: 2.0,
            image_quality: 0.95,
        }
    }
}

/// Recognized paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Paper {
    #[default]
    A4,
    Letter,
    Legal,
}

impl Paper {
    /// Typst paper identifier.
    pub fn as_typst(&self) -> &'static str {
        match self {
            Paper::A4 => "a4",
            Paper::Letter => "us-letter",
            Paper::Legal => "us-legal",
        }
    }
}

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Typst flips the page for landscape output.
    pub fn flipped(&self) -> bool {
        matches!(self, Orientation::Landscape)
    }
}

/// Page margins in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    /// The same margin on all four sides.
    pub fn uniform(inches: f64) -> Self {
        Self {
            top: inches,
            right: inches,
            bottom: inches,
            left: inches,
        }
    }
}
