//! Character formatting and rich-text run spans

use crate::color::Color;

/// Character-level formatting for a run of text
///
/// Every field is optional so that a run's format can be expressed as a
/// delta over the cell's base format: an unset field means "inherit".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextFormat {
    /// Bold
    pub bold: Option<bool>,
    /// Italic
    pub italic: Option<bool>,
    /// Underline
    pub underline: Option<bool>,
    /// Strikethrough
    pub strikethrough: Option<bool>,
    /// Font family name (e.g., "Calibri", "Arial")
    pub font_family: Option<String>,
    /// Font size in points
    pub font_size_pt: Option<f64>,
    /// Text color
    pub foreground: Option<Color>,
}

impl TextFormat {
    /// Create an empty (all-inherit) format
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Set underline
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Set strikethrough
    pub fn with_strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = Some(strikethrough);
        self
    }

    /// Set font family
    pub fn with_font_family<S: Into<String>>(mut self, family: S) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set font size in points
    pub fn with_font_size(mut self, size_pt: f64) -> Self {
        self.font_size_pt = Some(size_pt);
        self
    }

    /// Set text color
    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Apply a delta over this format, field by field
    ///
    /// A field set in `delta` wins; an unset field keeps this format's value.
    pub fn overridden_by(&self, delta: &TextFormat) -> TextFormat {
        TextFormat {
            bold: delta.bold.or(self.bold),
            italic: delta.italic.or(self.italic),
            underline: delta.underline.or(self.underline),
            strikethrough: delta.strikethrough.or(self.strikethrough),
            font_family: delta.font_family.clone().or_else(|| self.font_family.clone()),
            font_size_pt: delta.font_size_pt.or(self.font_size_pt),
            foreground: delta.foreground.or(self.foreground),
        }
    }
}

/// A rich-text run span: from `start_index` (a character offset into the
/// cell text) to the next span's start, or to the end of the text for the
/// last span. Spans are ordered by ascending offset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextFormatRun {
    /// Character offset into the cell text where this span starts
    pub start_index: usize,
    /// Format delta applied over the cell's base format
    pub format: TextFormat,
}

impl TextFormatRun {
    /// Create a run span
    pub fn new(start_index: usize, format: TextFormat) -> Self {
        Self {
            start_index,
            format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_set_fields_win() {
        let base = TextFormat::new()
            .with_bold(false)
            .with_font_family("Calibri")
            .with_font_size(11.0);
        let delta = TextFormat::new().with_bold(true);

        let merged = base.overridden_by(&delta);
        assert_eq!(merged.bold, Some(true));
        assert_eq!(merged.font_family.as_deref(), Some("Calibri"));
        assert_eq!(merged.font_size_pt, Some(11.0));
    }

    #[test]
    fn test_override_empty_delta_is_identity() {
        let base = TextFormat::new().with_italic(true).with_foreground(Color::rgb(10, 20, 30));
        assert_eq!(base.overridden_by(&TextFormat::new()), base);
    }
}
