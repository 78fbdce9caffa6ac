//! Error types for the celltex library

use thiserror::Error;

/// Result type alias for celltex operations
pub type Result<T> = std::result::Result<T, CellTexError>;

/// Main error type for all celltex operations
///
/// Rendering a single cell never fails; these errors come from region lookups,
/// cell references and configuration parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CellTexError {
    /// Cell lookup outside the evaluated region
    #[error("Cell ({row}, {col}) is out of range for a {rows}x{cols} region")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Row-major linear lookup outside the evaluated region
    #[error("Index {index} is out of range for a region of {len} cells")]
    IndexOutOfRange { index: usize, len: usize },

    /// Malformed A1-style cell reference
    #[error("Invalid cell reference: {0}")]
    InvalidCellRef(String),

    /// Malformed region such as "A1:" or a reversed range
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Number of contexts does not fill the declared region
    #[error("Region shape mismatch: expected {expected} cells, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Row of a nested region whose length differs from the first row
    #[error("Row {row} has {actual} cells, expected {expected} like the first row")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Declared region shape does not fit in memory addressing
    #[error("Region of {rows}x{cols} cells is too large")]
    RegionTooLarge { rows: usize, cols: usize },

    /// Absolute reference beyond the last addressable sheet row or column
    #[error("Cell ({row}, {col}) offset from {origin} exceeds the sheet bounds")]
    ReferenceOverflow {
        origin: String,
        row: usize,
        col: usize,
    },

    /// Style command name not recognised
    #[error("Unknown style command '{0}'. Available: color, bold, italic, underline")]
    UnknownCommand(String),
}
