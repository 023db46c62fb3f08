//! Numeric element bound for CSR matrices

use std::fmt::{Debug, Display};

use num_traits::Num;

/// Element type stored in a [`CsrMatrix`](crate::CsrMatrix).
///
/// Implemented for every copyable numeric type (`i32`, `i64`, `f32`, `f64`, ...).
/// An entry counts as zero when it compares equal to `T::zero()`; there is no
/// tolerance, so `-0.0` is zero and `1e-300` is not.
pub trait Scalar: Num + Copy + Debug + Display + Send + Sync + 'static {
    /// True if the value would be elided from storage.
    #[inline]
    fn is_structural_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl<T> Scalar for T where T: Num + Copy + Debug + Display + Send + Sync + 'static {}
