//! Numeric capability traits for Vector and Matrix elements.
//!
//! These traits define the minimal contract an element type must satisfy.
//! `Scalar` covers arithmetic, equality, and comparison to zero; `Sqrt` is
//! the extra capability required by [`Matrix::norm`] and
//! [`Matrix::eigenvalues`], kept separate so the square-root-free operations
//! stay available for any numeric type.
//!
//! [`Matrix::norm`]: crate::primitives::Matrix::norm
//! [`Matrix::eigenvalues`]: crate::primitives::Matrix::eigenvalues

use std::fmt;

use num_traits::Num;

/// Element capability for all container operations.
///
/// Blanket-implemented for every type with ring arithmetic (`num_traits::Num`
/// gives `+`, `-`, `*`, `/`, zero, one, and equality), ordering against zero,
/// and `Display`/`Debug` for error context and rendering. Both integer and
/// floating-point primitives qualify.
///
/// # Examples
///
/// ```
/// use lineal::traits::Scalar;
///
/// fn trace<T: Scalar>(diag: &[T]) -> T {
///     diag.iter().fold(T::zero(), |acc, &x| acc + x)
/// }
///
/// assert_eq!(trace(&[1, 2, 3]), 6);
/// assert_eq!(trace(&[0.5, 0.25]), 0.75);
/// ```
pub trait Scalar: Num + Copy + PartialOrd + fmt::Debug + fmt::Display {}

impl<T> Scalar for T where T: Num + Copy + PartialOrd + fmt::Debug + fmt::Display {}

/// Square-root capability.
///
/// Floating-point types delegate to the intrinsic. Integer types compute
/// through `f64` and truncate the result back, so `norm` and `eigenvalues`
/// over integers behave like the classic C-family idiom of assigning a
/// floating square root to an integer variable: `30.sqrt() == 5`.
///
/// Callers are expected to guard against negative inputs; integer impls
/// would collapse them to zero.
pub trait Sqrt {
    /// Returns the square root of `self`, truncated for integer types.
    #[must_use]
    fn sqrt(self) -> Self;
}

impl Sqrt for f32 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}

impl Sqrt for f64 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}

impl Sqrt for i32 {
    fn sqrt(self) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let root = f64::from(self).sqrt() as Self;
        root
    }
}

impl Sqrt for i64 {
    fn sqrt(self) -> Self {
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        let root = (self as f64).sqrt() as Self;
        root
    }
}
