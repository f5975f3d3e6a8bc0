//! # pagegrid-docx
//!
//! Document table model and grid-to-table renderer for pagegrid.
//!
//! The renderer walks a resolved [`GridDocument`](pagegrid_core::GridDocument)
//! and emits an equivalent in-memory table inside a [`TableHost`]: the
//! document body, a header/footer region, or an existing table cell (nested
//! embedding). Formatting propagates cell by cell; merge regions are applied
//! last, each preceded by border propagation so the collapsed cell renders a
//! uniform outline.
//!
//! ## Example
//!
//! ```rust
//! use pagegrid_core::{CellRecord, GridDocument, GridProperties, RowRecord};
//! use pagegrid_docx::{DocumentBody, GridRenderer};
//!
//! let grid = GridDocument::new(GridProperties::new(1, 2))
//!     .with_pixel_widths(&[100.0, 100.0])
//!     .push_row(RowRecord::new(vec![
//!         CellRecord::new().with_text("A"),
//!         CellRecord::new().with_text("B"),
//!     ]));
//!
//! let mut body = DocumentBody::new();
//! let table = GridRenderer::new().render_into(&grid, 6.0, &mut body).unwrap();
//! assert_eq!(table.row_count(), 1);
//! assert_eq!(table.col_count(), 2);
//! ```

pub mod error;
pub mod model;
pub mod render;

pub use error::{Error, Result};
pub use model::{
    BorderLine, CellBorders, CellVerticalAlignment, CharacterFormat, Document, DocumentBody,
    FieldKind, HeaderFooter, LineStyle, MergeState, Paragraph, ParagraphAlignment, ParagraphStyle,
    Picture, Run, RunContent, StyleRegistry, Table, TableCell, TableHost, TableLook, TableRegion,
    TableRow, TextDirection,
};
pub use render::{GridRenderer, MergeIndex, COMPACT_COLUMN_THRESHOLD, MAX_NESTING_DEPTH};
