//! `stmm-matrix` - Square integer matrix type and matmul kernels for st-matmul.
//!
//! This crate provides:
//! - A `Matrix` type owning a row-major flat `i32` buffer
//! - A `MatmulKernel` trait for pluggable multiply implementations
//! - `NaiveKernel` (i-j-k) and `RowMajorKernel` (i-k-j) CPU kernels
//!
//! All kernel arithmetic wraps on overflow, matching the two's-complement
//! behavior of the 32-bit integer data the benchmark was generated for.

pub mod error;
pub mod kernel;
pub mod matrix;

// Re-export primary types at the crate root for convenience.
pub use error::{MatrixError, Result};
pub use kernel::{MatmulKernel, NaiveKernel, RowMajorKernel};
pub use matrix::Matrix;
