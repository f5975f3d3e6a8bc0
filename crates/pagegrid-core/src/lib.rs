//! # pagegrid-core
//!
//! Grid-side data model for the pagegrid renderer.
//!
//! This crate provides the types that describe one resolved spreadsheet
//! range, ready to be rendered into a document table:
//! - [`GridDocument`] - The resolved input: metadata, cells, merges
//! - [`CellRecord`] - One cell's text, runs, format, note, image, nested grid
//! - [`MergeRegion`] - A rectangle of cells collapsed into one
//! - [`CellDirective`] - The note side channel, parsed into a tagged variant
//!
//! ## Example
//!
//! ```rust
//! use pagegrid_core::{CellRecord, GridDocument, GridProperties, RowRecord};
//!
//! let grid = GridDocument::new(GridProperties::new(1, 2))
//!     .with_pixel_widths(&[100.0, 100.0])
//!     .push_row(RowRecord::new(vec![
//!         CellRecord::new().with_text("A"),
//!         CellRecord::new().with_text("B"),
//!     ]));
//!
//! assert_eq!(grid.table_row_count(), 1);
//! assert_eq!(grid.table_col_count(), 2);
//! ```

pub mod border;
pub mod color;
pub mod directive;
pub mod error;
pub mod format;
pub mod grid;
pub mod image;
pub mod text_format;

// Re-exports for convenience
pub use border::{BorderEdge, BorderLineStyle, Borders};
pub use color::{Color, ColorTriple};
pub use directive::CellDirective;
pub use error::{Error, Result};
pub use format::{EffectiveFormat, HorizontalAlignment, VerticalAlignment};
pub use grid::{CellRecord, ColumnMetadata, GridDocument, GridProperties, MergeRegion, RowRecord};
pub use image::{ImageDescriptor, DEFAULT_DPI};
pub use text_format::{TextFormat, TextFormatRun};
