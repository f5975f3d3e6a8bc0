//! Error types for pagegrid-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pagegrid-core
///
/// All of these indicate a producer contract violation: the grid document
/// handed to the renderer carries data no well-formed acquisition layer
/// would produce. They are never retried.
#[derive(Debug, Error)]
pub enum Error {
    /// Column pixel widths sum to zero, so shares cannot be distributed
    #[error("column pixel widths sum to zero")]
    ZeroColumnWidths,

    /// A merge region's end index does not exceed its start index
    #[error("malformed merge region {0}: end indices must exceed start indices")]
    MalformedMerge(String),

    /// The grid has no rows or columns once the origin offset is applied
    #[error("grid is empty after origin offset (rows: {rows}, cols: {cols})")]
    EmptyGrid {
        /// Row count minus start row
        rows: i64,
        /// Column count minus start column
        cols: i64,
    },

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
