//! Document-side model: tables, paragraphs, hosts, styles

mod host;
mod paragraph;
mod styles;
mod table;

pub use host::{Document, DocumentBody, HeaderFooter, TableHost};
pub use paragraph::{
    CharacterFormat, FieldKind, Paragraph, ParagraphAlignment, Picture, Run, RunContent,
};
pub use styles::{ParagraphStyle, StyleRegistry};
pub use table::{
    BorderLine, CellBorders, CellVerticalAlignment, LineStyle, MergeState, Table, TableCell,
    TableLook, TableRegion, TableRow, TextDirection,
};
