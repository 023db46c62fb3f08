//! Unified error types for CSR matrix construction and arithmetic
//!
//! Every fallible operation in this crate returns [`SparseResult`]. Errors are
//! raised at the point of violation and never recovered internally.
//!
//! # Design
//!
//! - **`SparseError`**: Top-level enum, one variant per failure category
//! - **Category enums**: `DimensionError`, `ShapeError`, `ShapeMismatchError`,
//!   `IndexError` carry the structured context of each failure
//!
//! # Examples
//!
//! ```
//! use csrmat::error::{DimensionError, SparseError};
//!
//! fn check_dims(rows: usize, cols: usize) -> Result<(), SparseError> {
//!     if rows == 0 {
//!         return Err(DimensionError::ZeroRows.into());
//!     }
//!     if cols == 0 {
//!         return Err(DimensionError::ZeroCols.into());
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_dims(2, 0).is_err());
//! ```

use thiserror::Error;

/// Top-level error type for all CSR matrix operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SparseError {
    /// Non-positive row or column count
    #[error("Invalid dimension: {0}")]
    InvalidDimension(#[from] DimensionError),

    /// Malformed construction input
    #[error("Shape error: {0}")]
    Shape(#[from] ShapeError),

    /// Operand shapes are incompatible for a binary operation
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(#[from] ShapeMismatchError),

    /// Operation requires a square matrix
    #[error("{operation} requires a square matrix, got {nrows}×{ncols}")]
    NotSquare {
        nrows: usize,
        ncols: usize,
        operation: &'static str,
    },

    /// Element index out of range
    #[error("Index error: {0}")]
    Index(#[from] IndexError),
}

/// Category of a [`SparseError`], for callers that only branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidDimension,
    Shape,
    ShapeMismatch,
    NotSquare,
    Index,
}

/// Dimension errors raised before any input is inspected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    #[error("row count must be positive")]
    ZeroRows,

    #[error("column count must be positive")]
    ZeroCols,
}

/// Construction input errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("dense row {row} has {len} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("dense input has {got} rows, expected {expected}")]
    RowCount { got: usize, expected: usize },

    #[error("row_ptr has length {len}, expected rows + 1 = {expected}")]
    RowPtrLength { len: usize, expected: usize },

    #[error("row_ptr must start at 0, found {first}")]
    RowPtrStart { first: usize },

    #[error("row_ptr not sorted at index {idx}: {curr} > {next}")]
    RowPtrNotSorted {
        idx: usize,
        curr: usize,
        next: usize,
    },

    #[error("row_ptr ends at {last} but {nnz} entries are stored")]
    NnzMismatch { last: usize, nnz: usize },

    #[error("length mismatch: {col_indices} col_indices but {values} values")]
    LengthMismatch { col_indices: usize, values: usize },

    #[error("column index out of bounds: {col_idx} >= {ncols}")]
    ColIndexOutOfBounds { col_idx: usize, ncols: usize },
}

/// Operand shape errors for binary operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeMismatchError {
    #[error("cannot add {m1}×{n1} and {m2}×{n2}")]
    Add {
        m1: usize,
        n1: usize,
        m2: usize,
        n2: usize,
    },

    #[error("cannot multiply {m1}×{n1} by {m2}×{n2}")]
    MatMul {
        m1: usize,
        n1: usize,
        m2: usize,
        n2: usize,
    },
}

/// Index errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("index ({row}, {col}) outside 1..={nrows} × 1..={ncols}")]
    OutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
}

/// Result type alias for CSR matrix operations
pub type SparseResult<T> = Result<T, SparseError>;

impl SparseError {
    /// Create an out-of-bounds error for 1-based indices
    pub fn index_out_of_bounds(row: usize, col: usize, shape: (usize, usize)) -> Self {
        SparseError::Index(IndexError::OutOfBounds {
            row,
            col,
            nrows: shape.0,
            ncols: shape.1,
        })
    }

    /// Create a not-square error for the named operation
    pub fn not_square(shape: (usize, usize), operation: &'static str) -> Self {
        SparseError::NotSquare {
            nrows: shape.0,
            ncols: shape.1,
            operation,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SparseError::InvalidDimension(_) => ErrorKind::InvalidDimension,
            SparseError::Shape(_) => ErrorKind::Shape,
            SparseError::ShapeMismatch(_) => ErrorKind::ShapeMismatch,
            SparseError::NotSquare { .. } => ErrorKind::NotSquare,
            SparseError::Index(_) => ErrorKind::Index,
        }
    }
}
