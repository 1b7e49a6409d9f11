use crate::error::{MatrixError, Result};
use crate::kernel::MatmulKernel;
use std::fmt;

/// A square matrix of `i32` elements.
///
/// Holds an owned, contiguous, row-major buffer of `dim * dim` elements.
/// Element (i, j) lives at index `i * dim + j`. Multiplication is dispatched
/// to a `MatmulKernel`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    dim: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// Create a matrix from a row-major buffer.
    ///
    /// # Errors
    /// Returns `MatrixError::SizeMismatch` if `data.len() != dim * dim`.
    pub fn from_vec(dim: usize, data: Vec<i32>) -> Result<Self> {
        let expected = dim * dim;
        if data.len() != expected {
            return Err(MatrixError::SizeMismatch {
                dim,
                len: data.len(),
                expected,
            });
        }
        Ok(Matrix { dim, data })
    }

    /// Create a zero-filled matrix of the given dimension.
    pub fn zeros(dim: usize) -> Self {
        Matrix {
            dim,
            data: vec![0; dim * dim],
        }
    }

    /// Create the identity matrix of the given dimension.
    pub fn identity(dim: usize) -> Self {
        let mut m = Matrix::zeros(dim);
        for i in 0..dim {
            m.data[i * dim + i] = 1;
        }
        m
    }

    /// Per-side dimension of this matrix.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Total number of elements (`dim * dim`).
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Returns the element at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if `i >= dim` or `j >= dim`.
    pub fn get(&self, i: usize, j: usize) -> i32 {
        assert!(i < self.dim && j < self.dim, "index ({i}, {j}) out of range");
        self.data[i * self.dim + j]
    }

    /// Returns the underlying row-major data as a slice.
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Returns the underlying row-major data as a mutable slice.
    pub fn data_mut(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Consumes the matrix, returning the row-major buffer.
    pub fn into_vec(self) -> Vec<i32> {
        self.data
    }

    /// Matrix multiplication `self @ other` using the given kernel.
    ///
    /// Allocates the output matrix, then dispatches to the kernel.
    ///
    /// # Errors
    /// Returns `MatrixError::DimMismatch` if the dimensions differ.
    pub fn multiply(&self, other: &Matrix, kernel: &dyn MatmulKernel) -> Result<Matrix> {
        if self.dim != other.dim {
            return Err(MatrixError::DimMismatch {
                a: self.dim,
                b: other.dim,
            });
        }
        let mut out = Matrix::zeros(self.dim);
        kernel.matmul(self.dim, &self.data, &other.data, &mut out.data);
        Ok(out)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.dim {
            for j in 0..self.dim {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:4}", self.data[i * self.dim + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::NaiveKernel;

    #[test]
    fn test_from_vec() {
        let m = Matrix::from_vec(2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(m.dim(), 2);
        assert_eq!(m.numel(), 4);
        assert_eq!(m.get(0, 0), 1);
        assert_eq!(m.get(1, 0), 3);
        assert_eq!(m.data(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_from_vec_size_mismatch() {
        assert!(Matrix::from_vec(2, vec![1, 2, 3]).is_err());
    }

    #[test]
    fn test_zeros_identity() {
        let z = Matrix::zeros(3);
        assert_eq!(z.data(), &[0; 9]);

        let i = Matrix::identity(3);
        assert_eq!(i.data(), &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_multiply_2x2() {
        let kernel = NaiveKernel;
        let a = Matrix::from_vec(2, vec![1, 2, 3, 4]).unwrap();
        let b = Matrix::from_vec(2, vec![5, 6, 7, 8]).unwrap();
        let c = a.multiply(&b, &kernel).unwrap();
        assert_eq!(c.data(), &[19, 22, 43, 50]);
    }

    #[test]
    fn test_multiply_dim_mismatch() {
        let kernel = NaiveKernel;
        let a = Matrix::zeros(2);
        let b = Matrix::zeros(3);
        assert!(a.multiply(&b, &kernel).is_err());
    }

    #[test]
    fn test_into_vec_round_trip() {
        let m = Matrix::from_vec(2, vec![9, 8, 7, 6]).unwrap();
        assert_eq!(m.into_vec(), vec![9, 8, 7, 6]);
    }
}
