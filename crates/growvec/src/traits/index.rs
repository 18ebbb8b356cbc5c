use std::fmt::Debug;

use crate::{Error, Result};

/// Trait for integer types that can be used as positions into a
/// [`DynamicArray`](crate::DynamicArray).
///
/// Signed types are accepted so that negative positions surface as
/// [`Error::IndexOutOfRange`] rather than being unrepresentable at the call site.
pub trait VecIndex
where
    Self: Debug + Copy + Send + Sync + 'static,
{
    /// Converts this index to a `usize`, or `None` if it is negative or too large.
    fn to_usize(self) -> Option<usize>;

    /// Widens this index for error reporting.
    fn to_i128(self) -> i128;

    /// Returns the index as `usize` if it lies within `[0, len)`.
    #[inline]
    fn checked_index(self, len: usize) -> Result<usize> {
        match self.to_usize() {
            Some(index) if index < len => Ok(index),
            _ => Err(Error::IndexOutOfRange {
                index: self.to_i128(),
                len,
            }),
        }
    }
}

macro_rules! impl_vec_index {
    ($($t:ty),* $(,)?) => {
        $(
            impl VecIndex for $t {
                #[inline]
                fn to_usize(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_vec_index!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64);
