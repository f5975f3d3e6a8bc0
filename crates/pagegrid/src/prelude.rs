//! Prelude module - common imports for pagegrid users
//!
//! ```rust
//! use pagegrid::prelude::*;
//! ```

pub use crate::{
    BorderEdge,
    BorderLine,
    BorderLineStyle,
    Borders,
    CellBorders,
    // Directive types
    CellDirective,
    // Cell types
    CellRecord,
    CellVerticalAlignment,
    CharacterFormat,
    Color,
    ColorTriple,
    // Document-side types
    Document,
    DocumentBody,
    EffectiveFormat,
    // Error types
    Error,
    FieldKind,
    GridDocument,
    GridProperties,
    // The renderer
    GridRenderer,
    HeaderFooter,
    HorizontalAlignment,
    ImageDescriptor,
    LineStyle,
    MergeRegion,
    MergeState,
    Paragraph,
    ParagraphAlignment,
    ParagraphStyle,
    Picture,
    RenderError,
    RenderResult,
    Result,
    RowRecord,
    Run,
    RunContent,
    StyleRegistry,
    Table,
    TableCell,
    TableHost,
    TableLook,
    TableRegion,
    TextDirection,
    TextFormat,
    TextFormatRun,
    VerticalAlignment,
};
