//! Matrix type for 2D numeric data.

use std::fmt;

use num_traits::Signed;
use serde::{Deserialize, Serialize};

use super::Vector;
use crate::error::{LinealError, Result};
use crate::traits::{Scalar, Sqrt};

/// A 2D matrix of numeric values (row-major storage).
///
/// Row and column counts are set at construction and never change; every
/// row has exactly `n_cols` elements by construction.
///
/// # Examples
///
/// ```
/// use lineal::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
///     .expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DimensionMismatch`] if data length doesn't
    /// match `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(LinealError::dimension_mismatch(
                "rows*cols",
                rows * cols,
                data.len(),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IndexOutOfRange`] if either index is out of
    /// bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_index(row, col)?;
        Ok(self.data[row * self.cols + col])
    }

    /// Sets the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IndexOutOfRange`] if either index is out of
    /// bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_index(row, col)?;
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Returns a row as a Vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IndexOutOfRange`] if `row_idx >= n_rows`.
    pub fn row(&self, row_idx: usize) -> Result<Vector<T>> {
        if row_idx >= self.rows {
            return Err(LinealError::index_out_of_range("row", row_idx, self.rows));
        }
        let start = row_idx * self.cols;
        let end = start + self.cols;
        Ok(Vector::from_slice(&self.data[start..end]))
    }

    /// Returns a column as a Vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IndexOutOfRange`] if `col_idx >= n_cols`.
    pub fn column(&self, col_idx: usize) -> Result<Vector<T>> {
        if col_idx >= self.cols {
            return Err(LinealError::index_out_of_range(
                "column", col_idx, self.cols,
            ));
        }
        let data: Vec<T> = (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect();
        Ok(Vector::from_vec(data))
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows {
            return Err(LinealError::index_out_of_range("row", row, self.rows));
        }
        if col >= self.cols {
            return Err(LinealError::index_out_of_range("column", col, self.cols));
        }
        Ok(())
    }

    fn check_2x2(&self, operation: &str) -> Result<()> {
        if self.rows != 2 || self.cols != 2 {
            return Err(LinealError::unsupported_shape(
                operation, self.rows, self.cols,
            ));
        }
        Ok(())
    }
}

impl<T: Scalar> Matrix<T> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = T::one();
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![T::zero(); self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DimensionMismatch`] if shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(LinealError::shape_mismatch(self.shape(), other.shape()));
        }
        let data: Vec<T> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DimensionMismatch`] if shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(LinealError::shape_mismatch(self.shape(), other.shape()));
        }
        let data: Vec<T> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: T) -> Self {
        Self {
            data: self.data.iter().map(|&x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Matrix-matrix multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DimensionMismatch`] unless
    /// `self.n_cols() == other.n_rows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(LinealError::dimension_mismatch(
                "inner dimension",
                self.cols,
                other.rows,
            ));
        }
        let mut data = vec![T::zero(); self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = T::zero();
                for k in 0..self.cols {
                    sum = sum + self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                data[i * other.cols + j] = sum;
            }
        }
        Ok(Self {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Determinant, defined for 2x2 matrices only.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::UnsupportedShape`] for any other shape.
    pub fn determinant(&self) -> Result<T> {
        self.check_2x2("determinant")?;
        Ok(self.data[0] * self.data[3] - self.data[1] * self.data[2])
    }
}

impl<T: Scalar + Sqrt> Matrix<T> {
    /// Frobenius norm: square root of the sum of squares of all elements.
    ///
    /// Truncates for integer `T`, like the rest of integer arithmetic here.
    #[must_use]
    pub fn norm(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, &x| acc + x * x)
            .sqrt()
    }
}

impl<T: Scalar + Signed> Matrix<T> {
    /// Inverse, defined for 2x2 matrices only.
    ///
    /// Swaps the diagonal, negates the off-diagonal, and divides every
    /// entry by the determinant. Integer `T` truncates per element.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::UnsupportedShape`] for any shape other than
    /// 2x2, and [`LinealError::SingularMatrix`] when the determinant is
    /// zero.
    pub fn inverse(&self) -> Result<Self> {
        self.check_2x2("inverse")?;
        let det = self.determinant()?;
        if det == T::zero() {
            return Err(LinealError::SingularMatrix {
                det: det.to_string(),
            });
        }
        let data = vec![
            self.data[3] / det,
            -self.data[1] / det,
            -self.data[2] / det,
            self.data[0] / det,
        ];
        Ok(Self {
            data,
            rows: 2,
            cols: 2,
        })
    }
}

impl<T: Scalar + Signed + Sqrt> Matrix<T> {
    /// Eigenvalues of a 2x2 matrix, larger root first.
    ///
    /// Solves the characteristic polynomial: with trace `t = a + d` and
    /// discriminant `t^2 - 4(ad - bc)`, the roots are
    /// `(t ± sqrt(disc)) / 2`. Integer `T` truncates both the square root
    /// and the halving.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::UnsupportedShape`] for any shape other than
    /// 2x2, and [`LinealError::NegativeDiscriminant`] when the eigenvalues
    /// are a complex pair.
    pub fn eigenvalues(&self) -> Result<[T; 2]> {
        self.check_2x2("eigenvalues")?;
        let a = self.data[0];
        let b = self.data[1];
        let c = self.data[2];
        let d = self.data[3];
        let two = T::one() + T::one();
        let four = two + two;
        let trace = a + d;
        let disc = trace * trace - four * (a * d - b * c);
        if disc < T::zero() {
            return Err(LinealError::NegativeDiscriminant {
                discriminant: disc.to_string(),
            });
        }
        let root = disc.sqrt();
        Ok([(trace + root) / two, (trace - root) / two])
    }
}

/// Renders each row on its own line, elements space-separated.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            for j in 0..self.cols {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.data[i * self.cols + j])?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod contract;
