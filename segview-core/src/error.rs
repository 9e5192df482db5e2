//! Error types for segmented view operations

use thiserror::Error;

/// Errors that can occur while building buffers or accessing views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewError {
    /// Positional access outside a view
    #[error("index {index} out of range for view of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// Window bounds not satisfying `begin <= end <= len`
    #[error("invalid range {begin}..{end} for storage of length {len}")]
    InvalidRange { begin: usize, end: usize, len: usize },
    /// Row index past the last row
    #[error("row {row} out of range for buffer with {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },
    /// Offsets table violating the row layout invariants
    #[error("invalid offsets table: {0}")]
    InvalidOffsets(&'static str),
    /// Malformed user input
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Size arithmetic overflowed
    #[error("size calculation overflow")]
    SizeOverflow,
}

/// Coarse grouping of [`ViewError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Out-of-bounds access on a view or buffer
    Bounds,
    /// Structural problems in offsets or sizes
    Layout,
    /// Rejected input
    Input,
}

impl ViewError {
    /// Get the category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            ViewError::IndexOutOfRange { .. }
            | ViewError::InvalidRange { .. }
            | ViewError::RowOutOfRange { .. } => ErrorCategory::Bounds,
            ViewError::InvalidOffsets(_) | ViewError::SizeOverflow => ErrorCategory::Layout,
            ViewError::InvalidArgument(_) => ErrorCategory::Input,
        }
    }
}

/// Result type for segmented view operations
pub type Result<T> = core::result::Result<T, ViewError>;
