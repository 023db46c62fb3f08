//! CSR (Compressed Sparse Row) format for 2D matrices
//!
//! # Format
//!
//! For an m×n sparse matrix with nnz non-zeros:
//! - `row_ptr`: `Vec<usize>` of length m+1 - row_ptr\[i\] points to start of row i
//! - `col_indices`: `Vec<usize>` of length nnz - column index for each non-zero
//! - `values`: `Vec<T>` of length nnz - the non-zero values
//! - `shape`: (m, n) - dimensions of the matrix
//!
//! A matrix is immutable once built. Arithmetic in [`crate::ops`] and
//! [`crate::determinant`] always returns a new matrix.
//!
//! # Examples
//!
//! ```
//! use csrmat::CsrMatrix;
//!
//! // [1  0  2]
//! // [0  3  0]
//! let csr = CsrMatrix::from_dense(2, 3, &[vec![1, 0, 2], vec![0, 3, 0]]).unwrap();
//!
//! assert_eq!(csr.values(), &[1, 2, 3]);
//! assert_eq!(csr.col_indices(), &[0, 2, 1]);
//! assert_eq!(csr.row_ptr(), &[0, 2, 3]);
//! ```

use std::fmt;

use log::debug;

use crate::error::{DimensionError, ShapeError, SparseResult};
use crate::scalar::Scalar;

/// Raw CSR triple, as handed to or taken from a [`CsrMatrix`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CsrParts<T> {
    pub values: Vec<T>,
    pub col_indices: Vec<usize>,
    pub row_ptr: Vec<usize>,
}

/// Construction input accepted by [`CsrMatrix::create`]
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixSource<T> {
    /// Row-major dense rows, each of length `cols`
    Dense(Vec<Vec<T>>),
    /// Pre-built CSR triple
    Csr(CsrParts<T>),
}

impl<T> From<Vec<Vec<T>>> for MatrixSource<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        MatrixSource::Dense(rows)
    }
}

impl<T> From<CsrParts<T>> for MatrixSource<T> {
    fn from(parts: CsrParts<T>) -> Self {
        MatrixSource::Csr(parts)
    }
}

/// CSR (Compressed Sparse Row) matrix
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix<T> {
    /// Row pointers: row_ptr[i] = start index of row i in col_indices/values
    /// Length: nrows + 1, with row_ptr[nrows] = nnz
    row_ptr: Vec<usize>,

    /// Column indices for each non-zero element
    col_indices: Vec<usize>,

    /// Values of non-zero elements
    values: Vec<T>,

    /// Shape: (nrows, ncols)
    shape: (usize, usize),
}

pub(crate) fn check_dims(rows: usize, cols: usize) -> SparseResult<()> {
    if rows == 0 {
        return Err(DimensionError::ZeroRows.into());
    }
    if cols == 0 {
        return Err(DimensionError::ZeroCols.into());
    }
    Ok(())
}

impl<T: Scalar> CsrMatrix<T> {
    /// Create a matrix from either dense rows or a CSR triple
    ///
    /// # Errors
    ///
    /// - `InvalidDimension` if `rows` or `cols` is zero
    /// - `Shape` if the dense rows are ragged or miscounted, or if a CSR
    ///   `row_ptr` does not hold `rows + 1` entries
    pub fn create(
        rows: usize,
        cols: usize,
        source: impl Into<MatrixSource<T>>,
    ) -> SparseResult<Self> {
        match source.into() {
            MatrixSource::Dense(data) => Self::from_dense(rows, cols, &data),
            MatrixSource::Csr(parts) => {
                Self::from_csr(rows, cols, parts.values, parts.col_indices, parts.row_ptr)
            }
        }
    }

    /// Create a matrix by scanning dense rows and keeping the non-zero cells
    ///
    /// # Arguments
    ///
    /// * `rows` - Number of rows, must equal `data.len()`
    /// * `cols` - Number of columns, must equal every row's length
    /// * `data` - Row-major dense input
    pub fn from_dense<R: AsRef<[T]>>(
        rows: usize,
        cols: usize,
        data: &[R],
    ) -> SparseResult<Self> {
        check_dims(rows, cols)?;

        if let Some((row, len)) = data
            .iter()
            .map(|r| r.as_ref().len())
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(ShapeError::RaggedRow {
                row,
                len,
                expected: cols,
            }
            .into());
        }
        if data.len() != rows {
            return Err(ShapeError::RowCount {
                got: data.len(),
                expected: rows,
            }
            .into());
        }

        let mut row_ptr = Vec::with_capacity(rows + 1);
        let mut col_indices = Vec::new();
        let mut values = Vec::new();
        row_ptr.push(0);

        for row in data {
            for (col, &value) in row.as_ref().iter().enumerate() {
                if !value.is_structural_zero() {
                    col_indices.push(col);
                    values.push(value);
                }
            }
            row_ptr.push(values.len());
        }

        debug!(
            "built {}×{} CSR matrix from dense input, nnz = {}",
            rows,
            cols,
            values.len()
        );

        Ok(Self::from_parts_unchecked((rows, cols), row_ptr, col_indices, values))
    }

    /// Create a matrix from a pre-built CSR triple
    ///
    /// Only the length of `row_ptr` is checked. The caller vouches for the
    /// rest of the triple; use [`CsrMatrix::validate`] to check it fully.
    /// Entries within a row may appear in any column order.
    ///
    /// # Panics
    ///
    /// Later operations may panic on slice bounds if `row_ptr` points past
    /// the stored entries or a column index is `>= cols`.
    pub fn from_csr(
        rows: usize,
        cols: usize,
        values: Vec<T>,
        col_indices: Vec<usize>,
        row_ptr: Vec<usize>,
    ) -> SparseResult<Self> {
        check_dims(rows, cols)?;

        if row_ptr.len() != rows + 1 {
            return Err(ShapeError::RowPtrLength {
                len: row_ptr.len(),
                expected: rows + 1,
            }
            .into());
        }

        Ok(Self::from_parts_unchecked((rows, cols), row_ptr, col_indices, values))
    }

    /// Create an all-zero matrix
    pub fn zeros(rows: usize, cols: usize) -> SparseResult<Self> {
        check_dims(rows, cols)?;
        Ok(Self::from_parts_unchecked(
            (rows, cols),
            vec![0; rows + 1],
            Vec::new(),
            Vec::new(),
        ))
    }

    /// Create the n×n identity matrix
    pub fn identity(n: usize) -> SparseResult<Self> {
        check_dims(n, n)?;
        Ok(Self::from_parts_unchecked(
            (n, n),
            (0..=n).collect(),
            (0..n).collect(),
            vec![T::one(); n],
        ))
    }

    /// Deep check of the CSR invariants
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a `Shape` error.
    pub fn validate(&self) -> SparseResult<()> {
        let (nrows, ncols) = self.shape;

        if self.row_ptr.len() != nrows + 1 {
            return Err(ShapeError::RowPtrLength {
                len: self.row_ptr.len(),
                expected: nrows + 1,
            }
            .into());
        }
        if self.row_ptr[0] != 0 {
            return Err(ShapeError::RowPtrStart {
                first: self.row_ptr[0],
            }
            .into());
        }
        if self.col_indices.len() != self.values.len() {
            return Err(ShapeError::LengthMismatch {
                col_indices: self.col_indices.len(),
                values: self.values.len(),
            }
            .into());
        }
        for (idx, pair) in self.row_ptr.windows(2).enumerate() {
            if pair[0] > pair[1] {
                return Err(ShapeError::RowPtrNotSorted {
                    idx,
                    curr: pair[0],
                    next: pair[1],
                }
                .into());
            }
        }
        if self.row_ptr[nrows] != self.values.len() {
            return Err(ShapeError::NnzMismatch {
                last: self.row_ptr[nrows],
                nnz: self.values.len(),
            }
            .into());
        }
        if let Some(&col_idx) = self.col_indices.iter().find(|&&c| c >= ncols) {
            return Err(ShapeError::ColIndexOutOfBounds { col_idx, ncols }.into());
        }

        Ok(())
    }

    /// Expand to dense rows
    pub fn to_dense(&self) -> Vec<Vec<T>> {
        let (nrows, ncols) = self.shape;
        let mut dense = vec![vec![T::zero(); ncols]; nrows];

        for (i, dense_row) in dense.iter_mut().enumerate() {
            let (cols, vals) = self.row_slices(i);
            for (&col, &value) in cols.iter().zip(vals) {
                dense_row[col] = value;
            }
        }

        dense
    }
}

impl<T> CsrMatrix<T> {
    /// Build from parts already known to be consistent
    pub(crate) fn from_parts_unchecked(
        shape: (usize, usize),
        row_ptr: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        Self {
            row_ptr,
            col_indices,
            values,
            shape,
        }
    }

    /// Number of stored (non-zero) elements
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Shape of the matrix (nrows, ncols)
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    pub fn nrows(&self) -> usize {
        self.shape.0
    }

    pub fn ncols(&self) -> usize {
        self.shape.1
    }

    pub fn is_square(&self) -> bool {
        self.shape.0 == self.shape.1
    }

    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Fraction of cells that are stored (nnz / total_elements)
    pub fn density(&self) -> f64 {
        let total = self.nrows() * self.ncols();
        self.nnz() as f64 / total as f64
    }

    /// Get a zero-based row as (col_indices, values) slices
    pub fn row(&self, i: usize) -> Option<(&[usize], &[T])> {
        if i >= self.nrows() {
            return None;
        }
        Some(self.row_slices(i))
    }

    /// Row slices without the bounds check on `i`
    pub(crate) fn row_slices(&self, i: usize) -> (&[usize], &[T]) {
        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];
        (&self.col_indices[start..end], &self.values[start..end])
    }

    /// Consume the matrix and return its CSR triple
    pub fn into_parts(self) -> CsrParts<T> {
        CsrParts {
            values: self.values,
            col_indices: self.col_indices,
            row_ptr: self.row_ptr,
        }
    }
}

impl<T: Scalar> fmt::Display for CsrMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.to_dense().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}
