//! Error types for pagegrid-docx

use thiserror::Error;

/// Result type for document-side operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering into or mutating the document model
#[derive(Debug, Error)]
pub enum Error {
    /// Data-integrity fault reported by the grid model
    #[error("grid error: {0}")]
    Core(#[from] pagegrid_core::Error),

    /// A merge rectangle falls outside the table
    #[error("region {region} out of table bounds ({rows} x {cols})")]
    RegionOutOfBounds {
        /// The offending rectangle
        region: String,
        /// Table row count
        rows: u32,
        /// Table column count
        cols: u16,
    },

    /// A merge rectangle overlaps an already-merged region
    #[error("region {0} overlaps an existing merge")]
    MergeConflict(String),

    /// Nested grids exceed the recursion limit; almost always a cyclic
    /// cross-sheet reference upstream
    #[error("grid nesting exceeds {limit} levels")]
    NestingTooDeep {
        /// The configured depth limit
        limit: usize,
    },
}
