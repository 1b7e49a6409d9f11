use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("buffer length {len} does not match dim {dim} (expected {expected})")]
    SizeMismatch { dim: usize, len: usize, expected: usize },
    #[error("dimension mismatch: [{a}x{a}] @ [{b}x{b}]")]
    DimMismatch { a: usize, b: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
