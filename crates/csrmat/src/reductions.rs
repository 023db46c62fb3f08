//! Reductions over CSR matrices
//!
//! - Trace (sum of the main diagonal, square matrices only)
//! - Sum of all stored entries

use crate::error::{SparseError, SparseResult};
use crate::scalar::Scalar;
use crate::CsrMatrix;

impl<T: Scalar> CsrMatrix<T> {
    /// Sum of the main diagonal
    ///
    /// # Errors
    ///
    /// `NotSquare` if `nrows != ncols`.
    ///
    /// # Examples
    ///
    /// ```
    /// use csrmat::CsrMatrix;
    ///
    /// let csr = CsrMatrix::from_dense(3, 3, &[[1, 0, 0], [0, 2, 0], [0, 0, 3]]).unwrap();
    /// assert_eq!(csr.trace().unwrap(), 6);
    /// ```
    pub fn trace(&self) -> SparseResult<T> {
        if !self.is_square() {
            return Err(SparseError::not_square(self.shape(), "trace"));
        }

        let mut trace = T::zero();
        for i in 0..self.nrows() {
            let (cols, vals) = self.row_slices(i);
            for (&col, &value) in cols.iter().zip(vals) {
                if col == i {
                    trace = trace + value;
                }
            }
        }

        Ok(trace)
    }

    /// Sum of all entries
    pub fn sum(&self) -> T {
        self.values()
            .iter()
            .fold(T::zero(), |acc, &value| acc + value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_trace_square_matrix() {
        let csr = CsrMatrix::from_dense(3, 3, &[[1, 0, 0], [0, 2, 0], [0, 0, 3]]).unwrap();
        assert_eq!(csr.trace().unwrap(), 6);
    }

    #[test]
    fn test_trace_zero_matrix() {
        let csr = CsrMatrix::from_dense(3, 3, &[[0.0; 3]; 3]).unwrap();
        assert_eq!(csr.trace().unwrap(), 0.0);
    }

    #[test]
    fn test_trace_ignores_off_diagonal() {
        let csr = CsrMatrix::from_dense(2, 2, &[[0, 9], [8, 0]]).unwrap();
        assert_eq!(csr.trace().unwrap(), 0);
    }

    #[test]
    fn test_trace_non_square_matrix() {
        let csr = CsrMatrix::from_dense(2, 3, &[[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(csr.trace().unwrap_err().kind(), ErrorKind::NotSquare);
    }

    #[test]
    fn test_sum() {
        let csr = CsrMatrix::from_dense(2, 3, &[[1, 0, 2], [0, -3, 0]]).unwrap();
        assert_eq!(csr.sum(), 0);
        assert_eq!(CsrMatrix::<f64>::zeros(4, 4).unwrap().sum(), 0.0);
    }
}
