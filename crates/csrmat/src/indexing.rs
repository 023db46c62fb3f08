//! Element access for CSR matrices
//!
//! Public indices are 1-based, matching the row/column numbering users
//! type in. A cell with no stored entry reads as zero.
//!
//! # Examples
//!
//! ```
//! use csrmat::CsrMatrix;
//!
//! let csr = CsrMatrix::from_dense(2, 2, &[[1, 0], [0, 4]]).unwrap();
//! assert_eq!(csr.get_element(2, 2).unwrap(), 4);
//! assert_eq!(csr.get_element(1, 2).unwrap(), 0);
//! assert!(csr.get_element(3, 1).is_err());
//! ```

use crate::error::{SparseError, SparseResult};
use crate::scalar::Scalar;
use crate::CsrMatrix;

impl<T: Scalar> CsrMatrix<T> {
    /// Get element at 1-based (row, col), zero if no entry is stored
    ///
    /// Scans the row linearly, so rows built from unordered CSR triples
    /// are handled.
    ///
    /// # Errors
    ///
    /// `Index` if `row` is not in `1..=nrows` or `col` is not in `1..=ncols`.
    pub fn get_element(&self, row: usize, col: usize) -> SparseResult<T> {
        if !(1..=self.nrows()).contains(&row) || !(1..=self.ncols()).contains(&col) {
            return Err(SparseError::index_out_of_bounds(row, col, self.shape()));
        }

        Ok(self.get(row - 1, col - 1).copied().unwrap_or_else(T::zero))
    }

    /// Get the stored entry at zero-based (row, col), `None` if absent or out of range
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        let (cols, vals) = self.row(row)?;
        cols.iter().position(|&c| c == col).map(|pos| &vals[pos])
    }

    /// True if an entry is stored at zero-based (row, col)
    pub fn is_nonzero(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }
}
