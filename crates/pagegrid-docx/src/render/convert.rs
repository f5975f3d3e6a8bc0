//! Unit conversion between the grid's layout model and the document's
//!
//! The grid measures columns in pixels; the document measures them in
//! inches. Widths are distributed proportionally over the caller-supplied
//! container width, never converted absolutely. Formatting enums map through
//! exhaustive matches, so an unmapped input cannot exist at runtime.

use ahash::AHashMap;

use pagegrid_core::{
    BorderEdge, BorderLineStyle, Borders, Color, ColorTriple, Error as CoreError, GridDocument,
    HorizontalAlignment, MergeRegion, VerticalAlignment,
};

use crate::error::Result;
use crate::model::{BorderLine, CellBorders, CellVerticalAlignment, LineStyle, ParagraphAlignment};

/// Distribute a container width over columns, proportional to pixel widths
///
/// Each column's share is `pixel / sum(pixels) * container_width`, so the
/// shares always sum to the container width. A zero pixel sum is a producer
/// data-integrity fault and fails fast.
pub fn pixel_widths_to_shares(pixel_widths: &[f64], container_width: f64) -> Result<Vec<f64>> {
    let total: f64 = pixel_widths.iter().sum();
    if total == 0.0 {
        return Err(CoreError::ZeroColumnWidths.into());
    }
    Ok(pixel_widths
        .iter()
        .map(|w| w / total * container_width)
        .collect())
}

/// Merge-anchor index for one rendering pass
///
/// Built once per grid so that per-cell width queries don't rescan the merge
/// list. Must be consulted *before* merges are physically applied: the
/// physical merge collapses the spanned columns' individual widths.
#[derive(Debug)]
pub struct MergeIndex {
    anchors: AHashMap<(u32, u16), MergeRegion>,
    origin_row: u32,
    origin_col: u16,
}

impl MergeIndex {
    /// Index a grid's merge regions by their anchor cell
    pub fn build(grid: &GridDocument) -> Self {
        Self {
            anchors: grid
                .merges
                .iter()
                .map(|m| ((m.start_row, m.start_col), *m))
                .collect(),
            origin_row: grid.start_row,
            origin_col: grid.start_col,
        }
    }

    /// Merge-aware width of a table-space cell
    ///
    /// For the anchor of a merge, the sum of the shares of every column the
    /// merge spans; for any other cell, its own column's share.
    pub fn merged_cell_width(&self, row: u32, col: u16, shares: &[f64]) -> f64 {
        let sheet = (row + self.origin_row, col + self.origin_col);
        if let Some(merge) = self.anchors.get(&sheet) {
            let end = (merge.end_col.saturating_sub(self.origin_col) as usize).min(shares.len());
            let width: f64 = shares[(col as usize).min(end)..end].iter().sum();
            if width > 0.0 {
                return width;
            }
        }
        shares.get(col as usize).copied().unwrap_or(0.0)
    }
}

/// Map a grid vertical alignment onto the document cell's
pub fn cell_vertical_alignment(align: VerticalAlignment) -> CellVerticalAlignment {
    match align {
        VerticalAlignment::Top => CellVerticalAlignment::Top,
        VerticalAlignment::Middle => CellVerticalAlignment::Center,
        VerticalAlignment::Bottom => CellVerticalAlignment::Bottom,
    }
}

/// Map a grid horizontal alignment onto a paragraph alignment
pub fn paragraph_alignment(align: HorizontalAlignment) -> ParagraphAlignment {
    match align {
        HorizontalAlignment::Left => ParagraphAlignment::Left,
        HorizontalAlignment::Center => ParagraphAlignment::Center,
        HorizontalAlignment::Right => ParagraphAlignment::Right,
        HorizontalAlignment::Justify => ParagraphAlignment::Justify,
    }
}

/// Map a grid border line style onto the document's; `None` means no line
pub fn line_style(style: BorderLineStyle) -> Option<LineStyle> {
    match style {
        BorderLineStyle::None => None,
        BorderLineStyle::Solid => Some(LineStyle::Single),
        BorderLineStyle::SolidMedium => Some(LineStyle::Single),
        BorderLineStyle::SolidThick => Some(LineStyle::Thick),
        BorderLineStyle::Dashed => Some(LineStyle::Dashed),
        BorderLineStyle::Dotted => Some(LineStyle::Dotted),
        BorderLineStyle::Double => Some(LineStyle::Double),
    }
}

/// Translate one border edge; an edge styled `None` yields no line
pub fn border_line(edge: &BorderEdge) -> Option<BorderLine> {
    line_style(edge.style).map(|style| BorderLine::new(style, edge.width_pt, edge.color))
}

/// Translate a full border spec, each edge independently
///
/// The grid speaks left/right; the document speaks start/end.
pub fn cell_borders(borders: &Borders) -> CellBorders {
    CellBorders {
        top: borders.top.as_ref().and_then(border_line),
        bottom: borders.bottom.as_ref().and_then(border_line),
        start: borders.left.as_ref().and_then(border_line),
        end: borders.right.as_ref().and_then(border_line),
    }
}

/// Cell shading from a background triple; an empty triple means none
pub fn shading(background: &ColorTriple) -> Option<Color> {
    if background.is_empty() {
        None
    } else {
        Some(background.to_color())
    }
}
