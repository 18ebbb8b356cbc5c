use std::num::NonZeroUsize;

use crate::{Error, GROWTH_INCREMENT, Result};

const DEFAULT_INCREMENT: NonZeroUsize = NonZeroUsize::new(GROWTH_INCREMENT).unwrap();

/// How the backing buffer is resized once it is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Growth {
    /// Adds a constant number of slots on every reallocation.
    ///
    /// Appending `n` elements costs O(n²/increment) copies in total, so large
    /// arrays pay for this with quadratic behaviour.
    Fixed(NonZeroUsize),
    /// Doubles the capacity (or goes from 0 to 1), giving amortized O(1) appends.
    Doubling,
}

impl Growth {
    /// Fixed increment of `increment` slots.
    ///
    /// # Errors
    /// Returns `Error::InvalidGrowth` when `increment` is zero.
    pub fn fixed(increment: usize) -> Result<Self> {
        NonZeroUsize::new(increment)
            .map(Self::Fixed)
            .ok_or(Error::InvalidGrowth)
    }

    /// Capacity to reallocate to when a buffer of `current` slots is full.
    /// Strictly greater than `current` unless `current == usize::MAX`, where it
    /// saturates and returns `usize::MAX`.
    #[inline]
    pub fn next_capacity(self, current: usize) -> usize {
        match self {
            Self::Fixed(increment) => current.saturating_add(increment.get()),
            Self::Doubling => current.saturating_mul(2).max(current.saturating_add(1)),
        }
    }
}

impl Default for Growth {
    fn default() -> Self {
        Self::Fixed(DEFAULT_INCREMENT)
    }
}
