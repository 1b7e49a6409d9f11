//! Embedded datasets, one module per generated dimension.

pub mod matmul_32;
pub mod matmul_8;
