//! The resolved grid document handed to the renderer
//!
//! This module contains:
//! - [`GridDocument`] - One resolved sheet range: metadata, cells, merges
//! - [`CellRecord`] - A single cell's value, format, note, image, nested grid
//! - [`MergeRegion`] - A rectangle of grid cells collapsed into one
//!
//! A grid document is produced by the upstream acquisition layer (images
//! already downloaded, cross-sheet hyperlinks already resolved into nested
//! grids) and is immutable for the duration of one rendering pass.

use std::fmt;

use crate::directive::CellDirective;
use crate::error::{Error, Result};
use crate::format::EffectiveFormat;
use crate::image::ImageDescriptor;
use crate::text_format::TextFormatRun;

/// Grid dimensions as reported by the sheet metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridProperties {
    /// Total row count, including rows before the origin
    pub row_count: u32,
    /// Total column count, including columns before the origin
    pub column_count: u16,
}

impl GridProperties {
    /// Create grid properties
    pub fn new(row_count: u32, column_count: u16) -> Self {
        Self {
            row_count,
            column_count,
        }
    }
}

/// Per-column metadata
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColumnMetadata {
    /// Column width in pixels
    pub pixel_width: f64,
}

impl ColumnMetadata {
    /// Create column metadata with the given pixel width
    pub fn new(pixel_width: f64) -> Self {
        Self { pixel_width }
    }
}

/// A present row: its cells, left to right
///
/// The vector may be shorter than the grid's column count; trailing cells
/// are blank.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowRecord {
    /// Cell records, left to right from the origin column
    pub cells: Vec<CellRecord>,
}

impl RowRecord {
    /// Create a row from its cells
    pub fn new(cells: Vec<CellRecord>) -> Self {
        Self { cells }
    }
}

/// A single grid cell
///
/// Every field is optional; a fully-empty record is a blank cell that still
/// participates in the table shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellRecord {
    /// Formatted display text
    pub text: Option<String>,
    /// Rich-text run spans over `text`, ordered by ascending offset
    pub runs: Vec<TextFormatRun>,
    /// Effective format; absent means the cell renders blank
    pub format: Option<EffectiveFormat>,
    /// Raw note side-channel JSON
    pub note: Option<String>,
    /// Inline image, already downloaded by the acquisition layer
    pub image: Option<ImageDescriptor>,
    /// Nested grid, already resolved by the acquisition layer
    pub nested: Option<Box<GridDocument>>,
}

impl CellRecord {
    /// Create an empty cell record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display text
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the rich-text run spans
    pub fn with_runs(mut self, runs: Vec<TextFormatRun>) -> Self {
        self.runs = runs;
        self
    }

    /// Set the effective format
    pub fn with_format(mut self, format: EffectiveFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the raw note payload
    pub fn with_note<S: Into<String>>(mut self, note: S) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Set the inline image
    pub fn with_image(mut self, image: ImageDescriptor) -> Self {
        self.image = Some(image);
        self
    }

    /// Set the nested grid
    pub fn with_nested(mut self, nested: GridDocument) -> Self {
        self.nested = Some(Box::new(nested));
        self
    }

    /// True when the record carries nothing at all
    pub fn is_blank(&self) -> bool {
        self.text.is_none()
            && self.runs.is_empty()
            && self.format.is_none()
            && self.note.is_none()
            && self.image.is_none()
            && self.nested.is_none()
    }

    /// Parse the note side channel into a directive
    ///
    /// Absent or malformed notes yield [`CellDirective::None`].
    pub fn directive(&self) -> CellDirective {
        self.note
            .as_deref()
            .map(CellDirective::parse)
            .unwrap_or_default()
    }
}

/// A rectangle of grid cells collapsed into one logical cell
///
/// Coordinates are sheet coordinates (pre-origin-translation); end indices
/// are **exclusive**, per the source convention. The top-left cell is the
/// region's anchor and the format/border source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeRegion {
    /// First row of the region
    pub start_row: u32,
    /// One past the last row of the region
    pub end_row: u32,
    /// First column of the region
    pub start_col: u16,
    /// One past the last column of the region
    pub end_col: u16,
}

impl MergeRegion {
    /// Create a merge region from exclusive-end indices
    pub fn new(start_row: u32, end_row: u32, start_col: u16, end_col: u16) -> Self {
        Self {
            start_row,
            end_row,
            start_col,
            end_col,
        }
    }

    /// Check that both end indices exceed their start indices
    pub fn validate(&self) -> Result<()> {
        if self.end_row <= self.start_row || self.end_col <= self.start_col {
            return Err(Error::MalformedMerge(self.to_string()));
        }
        Ok(())
    }

    /// True when the given sheet coordinates are the region's anchor
    pub fn is_anchor(&self, row: u32, col: u16) -> bool {
        self.start_row == row && self.start_col == col
    }

    /// True when the given sheet coordinates fall inside the region
    pub fn contains(&self, row: u32, col: u16) -> bool {
        row >= self.start_row && row < self.end_row && col >= self.start_col && col < self.end_col
    }

    /// Number of rows the region spans
    pub fn row_count(&self) -> u32 {
        self.end_row.saturating_sub(self.start_row)
    }

    /// Number of columns the region spans
    pub fn col_count(&self) -> u16 {
        self.end_col.saturating_sub(self.start_col)
    }
}

impl fmt::Display for MergeRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[rows {}..{}, cols {}..{}]",
            self.start_row, self.end_row, self.start_col, self.end_col
        )
    }
}

/// One resolved sheet range, ready to be rendered into a document table
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridDocument {
    /// Grid dimensions from the sheet metadata
    pub properties: GridProperties,
    /// First data row (rows before this are outside the rendered range)
    pub start_row: u32,
    /// First data column
    pub start_col: u16,
    /// Column metadata, one entry per rendered column
    pub columns: Vec<ColumnMetadata>,
    /// Row records; `None` marks a sparse row that renders blank
    pub rows: Vec<Option<RowRecord>>,
    /// Merge regions, in sheet coordinates
    pub merges: Vec<MergeRegion>,
}

impl GridDocument {
    /// Create a grid document with the given dimensions
    pub fn new(properties: GridProperties) -> Self {
        Self {
            properties,
            ..Default::default()
        }
    }

    /// Set the origin (first data row/column)
    pub fn with_origin(mut self, start_row: u32, start_col: u16) -> Self {
        self.start_row = start_row;
        self.start_col = start_col;
        self
    }

    /// Set the column metadata from pixel widths
    pub fn with_pixel_widths(mut self, widths: &[f64]) -> Self {
        self.columns = widths.iter().map(|&w| ColumnMetadata::new(w)).collect();
        self
    }

    /// Append a present row
    pub fn push_row(mut self, row: RowRecord) -> Self {
        self.rows.push(Some(row));
        self
    }

    /// Append a sparse row (renders blank)
    pub fn push_sparse_row(mut self) -> Self {
        self.rows.push(None);
        self
    }

    /// Add a merge region
    pub fn with_merge(mut self, merge: MergeRegion) -> Self {
        self.merges.push(merge);
        self
    }

    /// Number of rows the rendered table will have
    pub fn table_row_count(&self) -> u32 {
        self.properties.row_count.saturating_sub(self.start_row)
    }

    /// Number of columns the rendered table will have
    pub fn table_col_count(&self) -> u16 {
        self.properties.column_count.saturating_sub(self.start_col)
    }

    /// Column widths in pixels, in column order
    pub fn pixel_widths(&self) -> Vec<f64> {
        self.columns.iter().map(|c| c.pixel_width).collect()
    }

    /// Validate the document against the producer contract
    ///
    /// Checks the parts whose violation would corrupt the rendered layout:
    /// non-empty dimensions and well-formed merge rectangles. Zero-sum pixel
    /// widths are caught separately when shares are distributed.
    pub fn validate(&self) -> Result<()> {
        if self.properties.row_count <= self.start_row
            || self.properties.column_count <= self.start_col
        {
            return Err(Error::EmptyGrid {
                rows: self.properties.row_count as i64 - self.start_row as i64,
                cols: self.properties.column_count as i64 - self.start_col as i64,
            });
        }
        for merge in &self.merges {
            merge.validate()?;
        }
        Ok(())
    }
}
