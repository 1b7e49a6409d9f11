//! `stmm-dataset` - Embedded benchmark datasets for st-matmul.
//!
//! Each dataset is a pair of square input matrices plus the precomputed
//! reference product, generated offline (uniform integers in 0..=2) and
//! embedded as `'static` arrays. The benchmark only consumes these three
//! sequences and the dimension; it never generates or parses them.

pub mod data;
pub mod error;

pub use error::{DatasetError, Result};

/// A benchmark dataset: two inputs and the expected product, all square
/// row-major `i32` matrices of the same dimension. Immutable for the life
/// of a run.
#[derive(Debug, Clone, Copy)]
pub struct Dataset {
    dim: usize,
    a: &'static [i32],
    b: &'static [i32],
    expected: &'static [i32],
}

impl Dataset {
    /// Create a dataset, validating that each buffer holds `dim * dim`
    /// elements.
    ///
    /// # Errors
    /// Returns `DatasetError::BadLength` naming the offending buffer.
    pub fn new(
        dim: usize,
        a: &'static [i32],
        b: &'static [i32],
        expected: &'static [i32],
    ) -> Result<Self> {
        let numel = dim * dim;
        for (name, buf) in [("input a", a), ("input b", b), ("expected", expected)] {
            if buf.len() != numel {
                return Err(DatasetError::BadLength {
                    name,
                    dim,
                    len: buf.len(),
                    expected: numel,
                });
            }
        }
        Ok(Dataset { dim, a, b, expected })
    }

    /// Look up the embedded dataset for a dimension.
    ///
    /// # Errors
    /// Returns `DatasetError::UnknownDim` for dimensions without embedded
    /// data (only 8 and 32 ship).
    pub fn for_dim(dim: usize) -> Result<Self> {
        match dim {
            data::matmul_8::DIM => Dataset::new(
                data::matmul_8::DIM,
                &data::matmul_8::INPUT_A,
                &data::matmul_8::INPUT_B,
                &data::matmul_8::EXPECTED,
            ),
            data::matmul_32::DIM => Dataset::new(
                data::matmul_32::DIM,
                &data::matmul_32::INPUT_A,
                &data::matmul_32::INPUT_B,
                &data::matmul_32::EXPECTED,
            ),
            other => Err(DatasetError::UnknownDim(other)),
        }
    }

    /// Dimensions with embedded data, ascending.
    pub fn available_dims() -> &'static [usize] {
        &[data::matmul_8::DIM, data::matmul_32::DIM]
    }

    /// Per-side matrix dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Total element count per matrix (`dim * dim`).
    pub fn numel(&self) -> usize {
        self.dim * self.dim
    }

    /// First input matrix, row-major.
    pub fn input_a(&self) -> &'static [i32] {
        self.a
    }

    /// Second input matrix, row-major.
    pub fn input_b(&self) -> &'static [i32] {
        self.b
    }

    /// Precomputed reference product, row-major.
    pub fn expected(&self) -> &'static [i32] {
        self.expected
    }
}
