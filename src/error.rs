//! Error types for lineal operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for lineal operations.
///
/// Every operation raises its error at the point of the violated contract
/// and propagates it synchronously to the caller; nothing panics and no
/// operand is mutated on failure.
///
/// # Examples
///
/// ```
/// use lineal::error::LinealError;
///
/// let err = LinealError::DimensionMismatch {
///     expected: "2x2".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum LinealError {
    /// Operand shapes violate the operation's required relation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Operation is only defined for 2x2 matrices.
    UnsupportedShape {
        /// Operation name
        operation: String,
        /// Row count found
        rows: usize,
        /// Column count found
        cols: usize,
    },

    /// Matrix is singular (non-invertible).
    SingularMatrix {
        /// Determinant value, rendered
        det: String,
    },

    /// Element access beyond the container bounds.
    IndexOutOfRange {
        /// Axis name ("index", "row", "column")
        axis: String,
        /// Offending index
        index: usize,
        /// Valid length on that axis
        len: usize,
    },

    /// Eigenvalue discriminant is negative; the eigenvalues are complex.
    NegativeDiscriminant {
        /// Discriminant value, rendered
        discriminant: String,
    },
}

impl fmt::Display for LinealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinealError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            LinealError::UnsupportedShape {
                operation,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "{operation} is only supported for 2x2 matrices, got {rows}x{cols}"
                )
            }
            LinealError::SingularMatrix { det } => {
                write!(f, "singular matrix: determinant = {det}, cannot invert")
            }
            LinealError::IndexOutOfRange { axis, index, len } => {
                write!(f, "{axis} {index} out of range (len={len})")
            }
            LinealError::NegativeDiscriminant { discriminant } => {
                write!(
                    f,
                    "negative discriminant: {discriminant}, eigenvalues are complex"
                )
            }
        }
    }
}

impl std::error::Error for LinealError {}

impl LinealError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create a dimension mismatch error from two full shapes
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Create an unsupported shape error for a 2x2-only operation
    #[must_use]
    pub fn unsupported_shape(operation: &str, rows: usize, cols: usize) -> Self {
        Self::UnsupportedShape {
            operation: operation.to_string(),
            rows,
            cols,
        }
    }

    /// Create an index out of range error
    #[must_use]
    pub fn index_out_of_range(axis: &str, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            axis: axis.to_string(),
            index,
            len,
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for LinealError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<LinealError> for &str {
    fn eq(&self, other: &LinealError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, LinealError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = LinealError::DimensionMismatch {
            expected: "2x3".to_string(),
            actual: "3x3".to_string(),
        };
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains("2x3"));
        assert!(err.to_string().contains("3x3"));
    }

    #[test]
    fn test_dimension_mismatch_helper() {
        let err = LinealError::dimension_mismatch("length", 3, 5);
        assert_eq!(err, "dimension mismatch: expected length=3, got 5");
    }

    #[test]
    fn test_shape_mismatch_helper() {
        let err = LinealError::shape_mismatch((2, 2), (1, 4));
        assert_eq!(err, "dimension mismatch: expected 2x2, got 1x4");
    }

    #[test]
    fn test_unsupported_shape_display() {
        let err = LinealError::unsupported_shape("determinant", 3, 3);
        let msg = err.to_string();
        assert!(msg.contains("determinant"));
        assert!(msg.contains("2x2"));
        assert!(msg.contains("3x3"));
    }

    #[test]
    fn test_singular_matrix_display() {
        let err = LinealError::SingularMatrix {
            det: "0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("singular matrix"));
        assert!(msg.contains("cannot invert"));
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = LinealError::index_out_of_range("row", 4, 2);
        assert_eq!(err, "row 4 out of range (len=2)");
    }

    #[test]
    fn test_negative_discriminant_display() {
        let err = LinealError::NegativeDiscriminant {
            discriminant: "-4".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("negative discriminant"));
        assert!(msg.contains("-4"));
    }
}
