//! Determinant by cofactor (Laplace) expansion along the first row
//!
//! The expansion is the naive recursive one: an n×n determinant builds n
//! minors of order n-1, so the cost grows as n!. Orders 1 and 2 are closed
//! forms. Use it for small matrices only.
//!
//! With the `parallel` feature the top-level cofactor terms of matrices of
//! order `PARALLEL_MIN_ORDER` or more are evaluated on the rayon pool and
//! summed. Integer results are identical; float results may differ in the
//! last bits because the summation order changes.
//!
//! # Examples
//!
//! ```
//! use csrmat::{CsrMatrix, Invertibility};
//!
//! let csr = CsrMatrix::from_dense(3, 3, &[[1, 2, 3], [0, 4, 5], [1, 0, 6]]).unwrap();
//! assert_eq!(csr.determinant().unwrap(), 22);
//! assert_eq!(csr.is_invertible().unwrap(), Invertibility::Yes);
//! ```

use std::fmt;
use std::ops::Neg;

use log::{trace, warn};

use crate::csr::check_dims;
use crate::error::{SparseError, SparseResult};
use crate::scalar::Scalar;
use crate::CsrMatrix;

/// Orders above this log a warning about factorial cost
pub const FACTORIAL_WARN_ORDER: usize = 10;

/// Smallest order whose top-level expansion runs in parallel
#[cfg(feature = "parallel")]
pub const PARALLEL_MIN_ORDER: usize = 6;

/// Whether a square matrix has an inverse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Invertibility {
    Yes,
    No,
}

impl Invertibility {
    pub fn is_yes(self) -> bool {
        self == Invertibility::Yes
    }
}

impl From<Invertibility> for bool {
    fn from(value: Invertibility) -> Self {
        value.is_yes()
    }
}

impl fmt::Display for Invertibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invertibility::Yes => write!(f, "yes"),
            Invertibility::No => write!(f, "no"),
        }
    }
}

impl<T: Scalar> CsrMatrix<T> {
    /// Minor obtained by deleting row 1 and the 1-based column `col`
    ///
    /// Columns right of `col` shift left by one. Row order and the column
    /// order within each row are preserved.
    ///
    /// # Errors
    ///
    /// - `Index` if `col` is not in `1..=ncols`
    /// - `InvalidDimension` if the matrix has a single row or column
    pub fn minor(&self, col: usize) -> SparseResult<CsrMatrix<T>> {
        if !(1..=self.ncols()).contains(&col) {
            return Err(SparseError::index_out_of_bounds(1, col, self.shape()));
        }
        let shape = (self.nrows() - 1, self.ncols() - 1);
        check_dims(shape.0, shape.1)?;

        let target = col - 1;
        let mut row_ptr = Vec::with_capacity(shape.0 + 1);
        let mut col_indices = Vec::new();
        let mut values = Vec::new();
        row_ptr.push(0);

        for i in 1..self.nrows() {
            let (cols, vals) = self.row_slices(i);
            for (&c, &value) in cols.iter().zip(vals) {
                if c == target {
                    continue;
                }
                col_indices.push(if c > target { c - 1 } else { c });
                values.push(value);
            }
            row_ptr.push(values.len());
        }

        Ok(CsrMatrix::from_parts_unchecked(
            shape,
            row_ptr,
            col_indices,
            values,
        ))
    }
}

impl<T: Scalar + Neg<Output = T>> CsrMatrix<T> {
    /// Determinant by recursive cofactor expansion along the first row
    ///
    /// Products are formed in `T` itself, so narrow integer types overflow
    /// quickly: two diagonal entries of 100 000 already exceed `i32`. Prefer
    /// `i64` or `f64` elements.
    ///
    /// # Errors
    ///
    /// `NotSquare` if `nrows != ncols`.
    ///
    /// # Panics
    ///
    /// On integer overflow when overflow checks are enabled (debug builds).
    /// Without them the result wraps silently.
    pub fn determinant(&self) -> SparseResult<T> {
        if !self.is_square() {
            return Err(SparseError::not_square(self.shape(), "determinant"));
        }

        let n = self.nrows();
        if n > FACTORIAL_WARN_ORDER {
            warn!(
                "determinant of order {} expands {} cofactor levels (factorial cost)",
                n,
                n - 2
            );
        }

        self.expand_top()
    }

    /// `Yes` iff the determinant is not exactly zero
    ///
    /// The comparison has no tolerance, so a float matrix that is singular
    /// in exact arithmetic may report `Yes` after rounding.
    ///
    /// # Errors
    ///
    /// `NotSquare` if `nrows != ncols`.
    pub fn is_invertible(&self) -> SparseResult<Invertibility> {
        let det = self.determinant()?;
        Ok(if det.is_structural_zero() {
            Invertibility::No
        } else {
            Invertibility::Yes
        })
    }

    #[cfg(feature = "parallel")]
    fn expand_top(&self) -> SparseResult<T> {
        use rayon::prelude::*;

        let n = self.nrows();
        if n < PARALLEL_MIN_ORDER {
            return self.expand();
        }

        trace!("parallel cofactor expansion of order {}", n);
        (1..=n)
            .into_par_iter()
            .map(|col| self.cofactor_term(col))
            .try_reduce(T::zero, |a, b| Ok(a + b))
    }

    #[cfg(not(feature = "parallel"))]
    fn expand_top(&self) -> SparseResult<T> {
        self.expand()
    }

    fn expand(&self) -> SparseResult<T> {
        let n = self.nrows();
        trace!("cofactor expansion of order {}, nnz = {}", n, self.nnz());

        match n {
            1 => self.get_element(1, 1),
            2 => {
                let a = self.get_element(1, 1)?;
                let b = self.get_element(1, 2)?;
                let c = self.get_element(2, 1)?;
                let d = self.get_element(2, 2)?;
                Ok(a * d - b * c)
            }
            _ => {
                let mut det = T::zero();
                for col in 1..=n {
                    det = det + self.cofactor_term(col)?;
                }
                Ok(det)
            }
        }
    }

    /// `a[1, col] * (-1)^(col + 1) * det(minor(col))`
    fn cofactor_term(&self, col: usize) -> SparseResult<T> {
        let entry = self.get_element(1, col)?;
        let signed = if col % 2 == 1 { entry } else { -entry };
        Ok(signed * self.minor(col)?.expand()?)
    }
}
