use std::{
    fmt, iter,
    ops::{Index, IndexMut},
    vec,
};

use log::{debug, trace};

use crate::{Cursor, Error, Growth, Options, Result, VecIndex};

/// A growable, bounds-checked array.
///
/// Elements live in a boxed slice of `capacity` slots. When a push finds the
/// buffer full, a larger buffer is allocated according to the configured
/// [`Growth`], the present elements are moved into its low slots and the old
/// buffer is dropped. Capacity never shrinks.
///
/// Slots `[0, len)` always hold a value, slots `[len, capacity)` never do.
///
/// # Example
/// ```
/// use growvec::DynamicArray;
///
/// let mut arr = DynamicArray::new();
/// arr.push(1);
/// arr.push(2);
/// arr.push(3);
///
/// assert_eq!(arr.len(), 3);
/// assert_eq!(arr.capacity(), 10);
/// assert_eq!(arr.get(1), Ok(&2));
/// assert_eq!(arr.index_of(&3), Some(2));
/// assert_eq!(arr.index_of(&5), None);
/// ```
#[derive(Clone)]
pub struct DynamicArray<T> {
    buffer: Box<[Option<T>]>,
    len: usize,
    growth: Growth,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY) slots.
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_options(Options::from(capacity))
    }

    /// Creates an empty array from a signed capacity.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` when `capacity` is negative or doesn't fit in `usize`.
    pub fn try_with_capacity(capacity: i64) -> Result<Self> {
        Ok(Self::with_options(
            Options::default().try_with_capacity(capacity)?,
        ))
    }

    pub fn with_options(options: Options) -> Self {
        trace!(
            "New array: capacity: {}, growth: {:?}",
            options.capacity, options.growth
        );
        Self {
            buffer: Self::alloc(options.capacity),
            len: 0,
            growth: options.growth,
        }
    }

    /// Number of present elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn growth(&self) -> Growth {
        self.growth
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// Returns `Error::IndexOutOfRange` when `index` is negative or `>= len`.
    #[inline]
    pub fn get<I: VecIndex>(&self, index: I) -> Result<&T> {
        let len = self.len;
        let i = index.checked_index(len)?;
        self.buffer[i].as_ref().ok_or(Error::IndexOutOfRange {
            index: index.to_i128(),
            len,
        })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns `Error::IndexOutOfRange` when `index` is negative or `>= len`.
    #[inline]
    pub fn get_mut<I: VecIndex>(&mut self, index: I) -> Result<&mut T> {
        let len = self.len;
        let i = index.checked_index(len)?;
        self.buffer[i].as_mut().ok_or(Error::IndexOutOfRange {
            index: index.to_i128(),
            len,
        })
    }

    /// Overwrites the element at `index`, returning the previous one.
    /// The length is unchanged.
    ///
    /// # Errors
    /// Returns `Error::IndexOutOfRange` when `index` is negative or `>= len`,
    /// in which case `value` is dropped and the array is left untouched.
    pub fn set<I: VecIndex>(&mut self, index: I, value: T) -> Result<T> {
        Ok(std::mem::replace(self.get_mut(index)?, value))
    }

    /// Appends `value`, reallocating first if the buffer is full.
    ///
    /// # Panics
    /// Panics with "capacity overflow" if the buffer is full at `usize::MAX` slots.
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.buffer[self.len] = Some(value);
        self.len += 1;
    }

    /// Creates a cursor positioned before the first element.
    #[inline]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Same as [`cursor`](Self::cursor), named for use as an iterator.
    #[inline]
    pub fn iter(&self) -> Cursor<'_, T> {
        self.cursor()
    }

    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = self.growth.next_capacity(old_capacity);
        if new_capacity <= old_capacity {
            panic!("capacity overflow");
        }
        debug!(
            "Growing buffer: {old_capacity} -> {new_capacity} slots, len: {}",
            self.len
        );

        let mut buffer = Self::alloc(new_capacity);
        for (dst, src) in buffer.iter_mut().zip(self.buffer[..self.len].iter_mut()) {
            *dst = src.take();
        }
        self.buffer = buffer;
    }

    fn alloc(capacity: usize) -> Box<[Option<T>]> {
        iter::repeat_with(|| None).take(capacity).collect()
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Returns the position of the first element equal to `value`, scanning
    /// from the front. O(len).
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        iter.into_iter().for_each(|value| self.push(value));
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = iter::Flatten<iter::Take<vec::IntoIter<Option<T>>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.into_vec().into_iter().take(self.len).flatten()
    }
}
