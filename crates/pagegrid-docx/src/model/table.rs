//! The in-memory document table model
//!
//! A [`Table`] is allocated at its full row/column shape up front; the
//! renderer then mutates cells in place and applies merges last. Merge
//! bookkeeping mirrors what a paginated-document format keeps per cell: the
//! anchor records its span, covered cells stay in the grid (their borders
//! are still sampled by layout engines drawing the merged cell's outline).

use std::fmt;

use pagegrid_core::{Color, MergeRegion};

use crate::error::{Error, Result};
use crate::model::paragraph::Paragraph;

/// A rendered table: ordered rows of ordered cells
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: Vec<TableRow>,
    /// Total table width in inches
    width: f64,
    /// Visual style of the table
    look: TableLook,
    /// Merge regions applied so far, in application order
    merges: Vec<TableRegion>,
}

impl Table {
    /// Allocate a table with the full row/column shape, every cell holding
    /// one empty paragraph
    pub fn allocate(rows: u32, cols: u16, width: f64) -> Self {
        let row = TableRow {
            cells: (0..cols).map(|_| TableCell::new()).collect(),
        };
        Self {
            rows: (0..rows).map(|_| row.clone()).collect(),
            width,
            look: TableLook::Normal,
            merges: Vec::new(),
        }
    }

    /// Number of rows
    pub fn row_count(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Number of columns
    pub fn col_count(&self) -> u16 {
        self.rows.first().map(|r| r.cells.len() as u16).unwrap_or(0)
    }

    /// Total table width in inches
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Visual style of the table
    pub fn look(&self) -> TableLook {
        self.look
    }

    /// Set the visual style
    pub fn set_look(&mut self, look: TableLook) {
        self.look = look;
    }

    /// Rows, in order
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Get a cell
    pub fn cell(&self, row: u32, col: u16) -> Option<&TableCell> {
        self.rows
            .get(row as usize)
            .and_then(|r| r.cells.get(col as usize))
    }

    /// Get a cell mutably
    pub fn cell_mut(&mut self, row: u32, col: u16) -> Option<&mut TableCell> {
        self.rows
            .get_mut(row as usize)
            .and_then(|r| r.cells.get_mut(col as usize))
    }

    /// Merge regions applied so far
    pub fn merge_regions(&self) -> &[TableRegion] {
        &self.merges
    }

    /// Collapse a rectangle of cells into one, anchored at its top-left
    ///
    /// Coordinates are inclusive. A single-cell region is accepted and does
    /// nothing. Rejects rectangles outside the table and rectangles touching
    /// an already-merged region; both leave the table unchanged.
    pub fn merge(&mut self, region: TableRegion) -> Result<()> {
        if region.end_row >= self.row_count() || region.end_col >= self.col_count() {
            return Err(Error::RegionOutOfBounds {
                region: region.to_string(),
                rows: self.row_count(),
                cols: self.col_count(),
            });
        }
        if self.merges.iter().any(|m| m.overlaps(&region)) {
            return Err(Error::MergeConflict(region.to_string()));
        }
        if region.is_single_cell() {
            return Ok(());
        }

        // The anchor takes over the full horizontal extent of the region.
        let anchor_width: f64 = (region.start_col..=region.end_col)
            .filter_map(|c| self.cell(region.start_row, c))
            .map(|cell| cell.width)
            .sum();

        for row in region.start_row..=region.end_row {
            for col in region.start_col..=region.end_col {
                if let Some(cell) = self.cell_mut(row, col) {
                    cell.merge = if row == region.start_row && col == region.start_col {
                        MergeState::Anchor {
                            row_span: region.row_count(),
                            col_span: region.col_count(),
                        }
                    } else {
                        MergeState::Covered
                    };
                }
            }
        }
        if let Some(anchor) = self.cell_mut(region.start_row, region.start_col) {
            anchor.width = anchor_width;
        }

        self.merges.push(region);
        Ok(())
    }
}

/// One table row
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    /// Cells, left to right
    pub cells: Vec<TableCell>,
}

/// One table cell
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    /// Cell width in inches
    pub width: f64,
    /// Vertical alignment of content within the cell
    pub vertical_alignment: Option<CellVerticalAlignment>,
    /// Background shading
    pub shading: Option<Color>,
    /// Borders, one optional line per edge
    pub borders: CellBorders,
    /// Rotated text direction
    pub text_direction: Option<TextDirection>,
    /// Paragraphs; never empty
    pub paragraphs: Vec<Paragraph>,
    /// Nested table hosted by this cell
    pub nested: Option<Box<Table>>,
    /// Merge participation
    pub merge: MergeState,
}

impl TableCell {
    /// Create an empty cell with one empty paragraph
    pub fn new() -> Self {
        Self {
            width: 0.0,
            vertical_alignment: None,
            shading: None,
            borders: CellBorders::default(),
            text_direction: None,
            paragraphs: vec![Paragraph::new()],
            nested: None,
            merge: MergeState::None,
        }
    }

    /// The cell's first paragraph
    pub fn first_paragraph(&self) -> &Paragraph {
        &self.paragraphs[0]
    }

    /// The cell's first paragraph, mutably
    pub fn first_paragraph_mut(&mut self) -> &mut Paragraph {
        &mut self.paragraphs[0]
    }

    /// True when the cell is covered by (not the anchor of) a merge
    pub fn is_covered(&self) -> bool {
        matches!(self.merge, MergeState::Covered)
    }
}

impl Default for TableCell {
    fn default() -> Self {
        Self::new()
    }
}

/// How a cell participates in a merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeState {
    /// Not merged
    #[default]
    None,
    /// Top-left cell of a merged region
    Anchor {
        /// Rows the merged cell spans
        row_span: u32,
        /// Columns the merged cell spans
        col_span: u16,
    },
    /// Interior cell of a merged region
    Covered,
}

/// A rectangle of table cells, **inclusive** on both ends
///
/// This is the document-side coordinate space: a sheet [`MergeRegion`]
/// (origin-relative, exclusive ends) translates into it by subtracting the
/// origin and decrementing the end indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableRegion {
    /// First row
    pub start_row: u32,
    /// Last row (inclusive)
    pub end_row: u32,
    /// First column
    pub start_col: u16,
    /// Last column (inclusive)
    pub end_col: u16,
}

impl TableRegion {
    /// Create a region from inclusive indices
    pub fn new(start_row: u32, end_row: u32, start_col: u16, end_col: u16) -> Self {
        Self {
            start_row,
            end_row,
            start_col,
            end_col,
        }
    }

    /// Translate a sheet merge region into table coordinates
    ///
    /// Subtracts the grid origin and converts the exclusive end indices to
    /// inclusive ones.
    pub fn from_merge(merge: &MergeRegion, origin_row: u32, origin_col: u16) -> Self {
        Self {
            start_row: merge.start_row.saturating_sub(origin_row),
            end_row: merge.end_row.saturating_sub(origin_row).saturating_sub(1),
            start_col: merge.start_col.saturating_sub(origin_col),
            end_col: merge.end_col.saturating_sub(origin_col).saturating_sub(1),
        }
    }

    /// True when the region covers exactly one cell
    pub fn is_single_cell(&self) -> bool {
        self.start_row == self.end_row && self.start_col == self.end_col
    }

    /// Number of rows spanned
    pub fn row_count(&self) -> u32 {
        self.end_row - self.start_row + 1
    }

    /// Number of columns spanned
    pub fn col_count(&self) -> u16 {
        self.end_col - self.start_col + 1
    }

    /// True when two regions share any cell
    pub fn overlaps(&self, other: &TableRegion) -> bool {
        self.start_row <= other.end_row
            && self.end_row >= other.start_row
            && self.start_col <= other.end_col
            && self.end_col >= other.start_col
    }
}

impl fmt::Display for TableRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[rows {}..={}, cols {}..={}]",
            self.start_row, self.end_row, self.start_col, self.end_col
        )
    }
}

/// Borders of a table cell, one optional line per edge
///
/// Edge names follow the document convention: `start`/`end` rather than
/// left/right.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellBorders {
    /// Top edge
    pub top: Option<BorderLine>,
    /// Bottom edge
    pub bottom: Option<BorderLine>,
    /// Leading edge
    pub start: Option<BorderLine>,
    /// Trailing edge
    pub end: Option<BorderLine>,
}

impl CellBorders {
    /// True when no edge has a line
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.start.is_none() && self.end.is_none()
    }
}

/// A single border line
#[derive(Debug, Clone, PartialEq)]
pub struct BorderLine {
    /// Line style
    pub style: LineStyle,
    /// Line width in points
    pub width_pt: f64,
    /// Line color
    pub color: Color,
}

impl BorderLine {
    /// Create a border line
    pub fn new(style: LineStyle, width_pt: f64, color: Color) -> Self {
        Self {
            style,
            width_pt,
            color,
        }
    }
}

/// Document-side border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    /// Single line
    #[default]
    Single,
    /// Thick single line
    Thick,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Double line
    Double,
}

/// Vertical alignment of content within a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellVerticalAlignment {
    /// Top aligned
    #[default]
    Top,
    /// Centered
    Center,
    /// Bottom aligned
    Bottom,
}

/// Rotated text directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Text runs bottom-to-top (the source's `btLr` rotation)
    BottomToTop,
}

/// Visual style of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TableLook {
    /// Regular intra-cell padding
    #[default]
    Normal,
    /// Reduced intra-cell padding, used for wide tables
    Compact,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_allocate_shape() {
        let table = Table::allocate(3, 4, 6.0);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.col_count(), 4);
        assert_eq!(table.cell(2, 3).unwrap().paragraphs.len(), 1);
        assert!(table.cell(3, 0).is_none());
    }

    #[test]
    fn test_merge_marks_anchor_and_covered() {
        let mut table = Table::allocate(3, 3, 6.0);
        for c in 0..3 {
            table.cell_mut(0, c).unwrap().width = 2.0;
            table.cell_mut(1, c).unwrap().width = 2.0;
        }
        table.merge(TableRegion::new(0, 1, 0, 1)).unwrap();

        assert_eq!(
            table.cell(0, 0).unwrap().merge,
            MergeState::Anchor {
                row_span: 2,
                col_span: 2
            }
        );
        assert!(table.cell(0, 1).unwrap().is_covered());
        assert!(table.cell(1, 1).unwrap().is_covered());
        assert!(!table.cell(2, 2).unwrap().is_covered());
        // anchor widened to the full horizontal extent
        assert!((table.cell(0, 0).unwrap().width - 4.0).abs() < f64::EPSILON);
        assert_eq!(table.merge_regions().len(), 1);
    }

    #[test]
    fn test_merge_out_of_bounds() {
        let mut table = Table::allocate(2, 2, 4.0);
        let err = table.merge(TableRegion::new(0, 2, 0, 1)).unwrap_err();
        assert!(matches!(err, Error::RegionOutOfBounds { .. }));
        assert!(table.merge_regions().is_empty());
    }

    #[test]
    fn test_merge_overlap_rejected() {
        let mut table = Table::allocate(4, 4, 8.0);
        table.merge(TableRegion::new(0, 1, 0, 1)).unwrap();
        let err = table.merge(TableRegion::new(1, 2, 1, 2)).unwrap_err();
        assert!(matches!(err, Error::MergeConflict(_)));
        assert_eq!(table.merge_regions().len(), 1);
    }

    #[test]
    fn test_single_cell_merge_is_noop() {
        let mut table = Table::allocate(2, 2, 4.0);
        table.merge(TableRegion::new(1, 1, 1, 1)).unwrap();
        assert_eq!(table.cell(1, 1).unwrap().merge, MergeState::None);
        assert!(table.merge_regions().is_empty());
    }

    #[test]
    fn test_region_from_merge_translation() {
        use pagegrid_core::MergeRegion;
        // sheet rows 2..4, cols 1..3, origin (2, 1) -> table rows 0..=1, cols 0..=1
        let region = TableRegion::from_merge(&MergeRegion::new(2, 4, 1, 3), 2, 1);
        assert_eq!(region, TableRegion::new(0, 1, 0, 1));
    }
}
