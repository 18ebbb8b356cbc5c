#![doc = include_str!("../README.md")]

mod array;
mod cursor;
mod error;
mod growth;
mod options;
mod traits;

pub use array::*;
pub use cursor::*;
pub use error::*;
pub use growth::*;
pub use options::*;
pub use traits::*;

/// Number of slots allocated by [`DynamicArray::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Slots added per reallocation under the default [`Growth`].
pub const GROWTH_INCREMENT: usize = 10;
