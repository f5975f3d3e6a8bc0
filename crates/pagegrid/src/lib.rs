//! # pagegrid
//!
//! A Rust library for rendering resolved spreadsheet grids into
//! paginated-document tables.
//!
//! Pagegrid takes one already-resolved grid document (cell values, effective
//! formats, merge regions, inline images, nested grids) and emits an
//! equivalent in-memory table structure, preserving visual layout fidelity:
//! pixel column widths become proportional physical widths, merged-cell
//! geometry is resolved with uniform borders, and nested grids embed
//! recursively inside their host cell.
//!
//! ## Example
//!
//! ```rust
//! use pagegrid::prelude::*;
//!
//! let grid = GridDocument::new(GridProperties::new(2, 2))
//!     .with_pixel_widths(&[100.0, 100.0])
//!     .push_row(RowRecord::new(vec![
//!         CellRecord::new()
//!             .with_text("Name")
//!             .with_format(EffectiveFormat::new()),
//!         CellRecord::new()
//!             .with_text("Value")
//!             .with_format(EffectiveFormat::new()),
//!     ]))
//!     .push_sparse_row();
//!
//! let mut body = DocumentBody::new();
//! let table = GridRenderer::new().render_into(&grid, 6.0, &mut body).unwrap();
//!
//! assert_eq!(table.row_count(), 2);
//! assert_eq!(table.cell(0, 0).unwrap().first_paragraph().text(), "Name");
//! ```

pub mod prelude;

// Re-export grid-side types
pub use pagegrid_core::{
    BorderEdge,
    BorderLineStyle,
    Borders,
    // Directive types
    CellDirective,
    // Cell types
    CellRecord,
    Color,
    ColorTriple,
    ColumnMetadata,
    EffectiveFormat,
    // Error types
    Error,
    GridDocument,
    GridProperties,
    HorizontalAlignment,
    ImageDescriptor,
    MergeRegion,
    Result,
    RowRecord,
    TextFormat,
    TextFormatRun,
    VerticalAlignment,
    DEFAULT_DPI,
};

// Re-export document-side types and the renderer
pub use pagegrid_docx::{
    BorderLine,
    CellBorders,
    CellVerticalAlignment,
    CharacterFormat,
    Document,
    DocumentBody,
    // Renderer errors are distinct from grid errors
    Error as RenderError,
    FieldKind,
    GridRenderer,
    HeaderFooter,
    LineStyle,
    MergeIndex,
    MergeState,
    Paragraph,
    ParagraphAlignment,
    ParagraphStyle,
    Picture,
    Result as RenderResult,
    Run,
    RunContent,
    StyleRegistry,
    Table,
    TableCell,
    TableHost,
    TableLook,
    TableRegion,
    TableRow,
    TextDirection,
    COMPACT_COLUMN_THRESHOLD,
    MAX_NESTING_DEPTH,
};
