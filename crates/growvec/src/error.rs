use std::result;

use thiserror::Error;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for growvec operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Index out of range: index: {index}, len: {len}")]
    IndexOutOfRange { index: i128, len: usize },
    #[error("Invalid capacity: {capacity}, must be between 0 and usize::MAX")]
    InvalidArgument { capacity: i64 },
    #[error("Growth increment cannot be zero")]
    InvalidGrowth,
}
