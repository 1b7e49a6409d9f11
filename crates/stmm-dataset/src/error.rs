use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("{name} has length {len} but dim {dim} requires {expected}")]
    BadLength {
        name: &'static str,
        dim: usize,
        len: usize,
        expected: usize,
    },
    #[error("no embedded dataset for dim {0}")]
    UnknownDim(usize),
}

pub type Result<T> = std::result::Result<T, DatasetError>;
