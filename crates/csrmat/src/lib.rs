//! # csrmat
//!
//! Sparse matrices in Compressed Sparse Row (CSR) format.
//!
//! This crate provides:
//! - Construction from dense rows or a raw CSR triple
//! - 1-based element access and trace
//! - Addition, scalar multiplication and sparse-sparse matrix multiplication
//! - Determinant by cofactor expansion and an invertibility test
//!
//! Matrices are immutable; every arithmetic operation returns a new matrix
//! with ascending column order per row and no stored zeros.
//!
//! # Examples
//!
//! ```
//! use csrmat::CsrMatrix;
//!
//! let a = CsrMatrix::from_dense(3, 3, &[[1, 0, 0], [0, 2, 0], [0, 0, 3]])?;
//! let b = CsrMatrix::from_dense(3, 3, &[[0, 1, 0], [3, 0, 4], [0, 0, 0]])?;
//!
//! let sum = a.add(&b)?;
//! assert_eq!(sum.values(), &[1, 1, 3, 2, 4, 3]);
//! assert_eq!(sum.col_indices(), &[0, 1, 0, 1, 2, 2]);
//! assert_eq!(sum.row_ptr(), &[0, 2, 5, 6]);
//! assert_eq!(a.trace()?, 6);
//! # Ok::<(), csrmat::SparseError>(())
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate the top-level cofactor terms of large determinants on rayon

#![deny(warnings)]

pub mod csr;
pub mod determinant;
pub mod error;
pub mod indexing;
pub mod ops;
pub mod reductions;
pub mod scalar;

// Re-exports
pub use csr::{CsrMatrix, CsrParts, MatrixSource};
pub use determinant::{Invertibility, FACTORIAL_WARN_ORDER};
pub use error::*;
pub use scalar::Scalar;
