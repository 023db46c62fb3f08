//! Sparse arithmetic on CSR matrices
//!
//! # Operations
//!
//! - **Addition**: C = A + B, equal shapes
//! - **Scalar multiplication**: C = αA
//! - **Matrix multiplication**: C = AB, sparse result (SpSpMM)
//!
//! Every operation returns a new matrix whose rows list their columns in
//! ascending order and which stores no zero entries.
//!
//! # Examples
//!
//! ```
//! use csrmat::CsrMatrix;
//!
//! let a = CsrMatrix::from_dense(2, 3, &[[1, 0, 2], [0, 3, 0]]).unwrap();
//! let b = CsrMatrix::from_dense(3, 2, &[[0, 1], [4, 0], [5, 0]]).unwrap();
//!
//! let c = a.multiply_matrix(&b).unwrap();
//! assert_eq!(c.values(), &[10, 1, 12]);
//! assert_eq!(c.col_indices(), &[0, 1, 0]);
//! assert_eq!(c.row_ptr(), &[0, 2, 3]);
//! ```

use std::collections::BTreeMap;

use log::debug;

use crate::error::{ShapeMismatchError, SparseResult};
use crate::scalar::Scalar;
use crate::CsrMatrix;

/// Check if two matrices have the same shape for element-wise operations
pub fn check_eltwise_compatible(
    a_shape: (usize, usize),
    b_shape: (usize, usize),
) -> SparseResult<()> {
    let (m1, n1) = a_shape;
    let (m2, n2) = b_shape;

    if a_shape != b_shape {
        return Err(ShapeMismatchError::Add { m1, n1, m2, n2 }.into());
    }
    Ok(())
}

/// Check if two matrices have compatible shapes for matrix multiplication
///
/// Returns the shape of the product.
pub fn check_matmul_compatible(
    a_shape: (usize, usize),
    b_shape: (usize, usize),
) -> SparseResult<(usize, usize)> {
    let (m1, n1) = a_shape;
    let (m2, n2) = b_shape;

    if n1 != m2 {
        return Err(ShapeMismatchError::MatMul { m1, n1, m2, n2 }.into());
    }

    Ok((m1, n2))
}

/// Accumulates one output row keyed by column, emitted in ascending column order
struct RowAccumulator<T> {
    entries: BTreeMap<usize, T>,
}

impl<T: Scalar> RowAccumulator<T> {
    fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    fn add(&mut self, col: usize, value: T) {
        let entry = self.entries.entry(col).or_insert_with(T::zero);
        *entry = *entry + value;
    }

    /// Drain non-zero entries into the output arrays
    fn flush(&mut self, col_indices: &mut Vec<usize>, values: &mut Vec<T>) {
        for (col, value) in std::mem::take(&mut self.entries) {
            if !value.is_structural_zero() {
                col_indices.push(col);
                values.push(value);
            }
        }
    }
}

impl<T: Scalar> CsrMatrix<T> {
    /// Element-wise sum of two matrices of equal shape
    ///
    /// Entries that cancel to zero are dropped.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the shapes differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use csrmat::CsrMatrix;
    ///
    /// let a = CsrMatrix::from_dense(1, 2, &[[1, 2]]).unwrap();
    /// let b = CsrMatrix::from_dense(1, 2, &[[-1, 3]]).unwrap();
    ///
    /// let c = a.add(&b).unwrap();
    /// assert_eq!(c.values(), &[5]);
    /// assert_eq!(c.col_indices(), &[1]);
    /// ```
    pub fn add(&self, other: &CsrMatrix<T>) -> SparseResult<CsrMatrix<T>> {
        check_eltwise_compatible(self.shape(), other.shape())?;

        let m = self.nrows();
        let mut row_ptr = Vec::with_capacity(m + 1);
        let mut col_indices = Vec::new();
        let mut values = Vec::new();
        row_ptr.push(0);

        let mut acc = RowAccumulator::new();
        for i in 0..m {
            for matrix in [self, other] {
                let (cols, vals) = matrix.row_slices(i);
                for (&col, &value) in cols.iter().zip(vals) {
                    acc.add(col, value);
                }
            }
            acc.flush(&mut col_indices, &mut values);
            row_ptr.push(values.len());
        }

        debug!("add: {}×{} result, nnz = {}", m, self.ncols(), values.len());

        Ok(CsrMatrix::from_parts_unchecked(
            self.shape(),
            row_ptr,
            col_indices,
            values,
        ))
    }

    /// Multiply every entry by `scalar`
    ///
    /// Products that are zero are dropped; the remaining entries keep their
    /// order.
    pub fn multiply_scalar(&self, scalar: T) -> CsrMatrix<T> {
        let m = self.nrows();
        let mut row_ptr = Vec::with_capacity(m + 1);
        let mut col_indices = Vec::with_capacity(self.nnz());
        let mut values = Vec::with_capacity(self.nnz());
        row_ptr.push(0);

        for i in 0..m {
            let (cols, vals) = self.row_slices(i);
            for (&col, &value) in cols.iter().zip(vals) {
                let product = value * scalar;
                if !product.is_structural_zero() {
                    col_indices.push(col);
                    values.push(product);
                }
            }
            row_ptr.push(values.len());
        }

        debug!(
            "multiply_scalar: {} of {} entries kept",
            values.len(),
            self.nnz()
        );

        CsrMatrix::from_parts_unchecked(self.shape(), row_ptr, col_indices, values)
    }

    /// Sparse-sparse matrix multiplication: C = A * B
    ///
    /// Row i of C accumulates `A[i, k] * B[k, j]` over the stored entries
    /// `A[i, k]` and the stored entries of row k of B.
    ///
    /// # Complexity
    ///
    /// Proportional to the sum of `nnz(B row k)` over all stored `A[i, k]`,
    /// plus a log factor for the ordered per-row accumulator.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if `self.ncols() != other.nrows()`.
    pub fn multiply_matrix(&self, other: &CsrMatrix<T>) -> SparseResult<CsrMatrix<T>> {
        let (m, k) = check_matmul_compatible(self.shape(), other.shape())?;

        let mut row_ptr = Vec::with_capacity(m + 1);
        let mut col_indices = Vec::new();
        let mut values = Vec::new();
        row_ptr.push(0);

        let mut acc = RowAccumulator::new();
        for i in 0..m {
            let (a_cols, a_vals) = self.row_slices(i);
            for (&j, &a_val) in a_cols.iter().zip(a_vals) {
                let (b_cols, b_vals) = other.row_slices(j);
                for (&col, &b_val) in b_cols.iter().zip(b_vals) {
                    acc.add(col, a_val * b_val);
                }
            }
            acc.flush(&mut col_indices, &mut values);
            row_ptr.push(values.len());
        }

        debug!("multiply_matrix: {}×{} result, nnz = {}", m, k, values.len());

        Ok(CsrMatrix::from_parts_unchecked(
            (m, k),
            row_ptr,
            col_indices,
            values,
        ))
    }
}
