use crate::{DEFAULT_CAPACITY, Error, Growth, Result};

/// Options for creating a [`DynamicArray`](crate::DynamicArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Number of slots allocated up front.
    pub capacity: usize,
    /// Strategy used when the buffer is full.
    pub growth: Growth,
}

impl Options {
    pub fn new(capacity: usize, growth: Growth) -> Self {
        Self { capacity, growth }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_growth(mut self, growth: Growth) -> Self {
        self.growth = growth;
        self
    }

    /// Sets a fixed growth increment.
    ///
    /// # Errors
    /// Returns `Error::InvalidGrowth` when `increment` is zero.
    pub fn try_with_increment(self, increment: usize) -> Result<Self> {
        Ok(self.with_growth(Growth::fixed(increment)?))
    }

    /// Sets the initial capacity from a signed value.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` when `capacity` is negative or doesn't fit in `usize`.
    pub fn try_with_capacity(self, capacity: i64) -> Result<Self> {
        let capacity = usize::try_from(capacity).map_err(|_| Error::InvalidArgument { capacity })?;
        Ok(self.with_capacity(capacity))
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, Growth::default())
    }
}

impl From<usize> for Options {
    fn from(capacity: usize) -> Self {
        Self::default().with_capacity(capacity)
    }
}

impl From<(usize, Growth)> for Options {
    fn from((capacity, growth): (usize, Growth)) -> Self {
        Self::new(capacity, growth)
    }
}
