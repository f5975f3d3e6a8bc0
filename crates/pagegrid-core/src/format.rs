//! Effective cell format: alignments, shading, borders, rotation

use crate::border::Borders;
use crate::color::ColorTriple;
use crate::text_format::TextFormat;

/// The resolved format of a grid cell, as the sheet API reports it
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EffectiveFormat {
    /// Vertical alignment within the cell
    pub vertical_alignment: VerticalAlignment,
    /// Horizontal alignment of the cell's paragraph, when reported
    pub horizontal_alignment: Option<HorizontalAlignment>,
    /// Background color; an empty triple means no shading
    pub background: ColorTriple,
    /// Border spec, when any edge is set
    pub borders: Option<Borders>,
    /// Text rotated to run bottom-to-top
    pub vertical_text: bool,
    /// Base character format for the cell's text
    pub text_format: TextFormat,
}

impl EffectiveFormat {
    /// Create a default format
    pub fn new() -> Self {
        Self::default()
    }

    /// Set vertical alignment
    pub fn with_vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.vertical_alignment = align;
        self
    }

    /// Set horizontal alignment
    pub fn with_horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.horizontal_alignment = Some(align);
        self
    }

    /// Set background color
    pub fn with_background(mut self, background: ColorTriple) -> Self {
        self.background = background;
        self
    }

    /// Set the border spec
    pub fn with_borders(mut self, borders: Borders) -> Self {
        self.borders = Some(borders);
        self
    }

    /// Rotate text bottom-to-top
    pub fn with_vertical_text(mut self) -> Self {
        self.vertical_text = true;
        self
    }

    /// Set the base character format
    pub fn with_text_format(mut self, format: TextFormat) -> Self {
        self.text_format = format;
        self
    }
}

/// Vertical alignment options the sheet API reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    /// Top aligned
    #[default]
    Top,
    /// Middle aligned
    Middle,
    /// Bottom aligned
    Bottom,
}

/// Horizontal alignment options the sheet API reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    /// Left aligned
    #[default]
    Left,
    /// Center aligned
    Center,
    /// Right aligned
    Right,
    /// Justified
    Justify,
}
