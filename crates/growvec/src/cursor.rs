use std::iter::FusedIterator;

use crate::DynamicArray;

/// Forward-only, restartable cursor over a [`DynamicArray`].
///
/// Borrows the array, so it cannot be mutated while the cursor is alive. Any
/// number of cursors can read the same array at once, each with its own position.
///
/// # Example
/// ```
/// use growvec::DynamicArray;
///
/// let arr: DynamicArray<i32> = (0..3).collect();
/// let mut c = arr.cursor();
/// while c.advance() {
///     let _ = c.current();
/// }
/// assert!(!c.advance());
/// c.restart();
/// assert!(c.advance());
/// assert_eq!(c.current(), Some(&0));
/// ```
///
/// The array stays borrowed for as long as a cursor is alive:
///
/// ```compile_fail
/// use growvec::DynamicArray;
///
/// let mut arr: DynamicArray<i32> = (0..3).collect();
/// let mut c = arr.cursor();
/// c.advance();
/// arr.push(3);
/// let _ = c.current();
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a, T> {
    source: &'a DynamicArray<T>,
    /// Absolute position of the next element to visit.
    next: usize,
    current: Option<&'a T>,
    exhausted: bool,
}

impl<'a, T> Cursor<'a, T> {
    #[inline]
    pub fn new(source: &'a DynamicArray<T>) -> Self {
        Self {
            source,
            next: 0,
            current: None,
            exhausted: false,
        }
    }

    /// Moves to the next element. Returns `false` once past the last one, and
    /// keeps returning `false` until [`restart`](Self::restart).
    #[inline]
    pub fn advance(&mut self) -> bool {
        let len = self.source.len();
        if self.next >= len {
            self.next = len;
            self.current = None;
            self.exhausted = true;
            return false;
        }

        self.current = self.source.get(self.next).ok();
        self.next += 1;
        self.current.is_some()
    }

    /// Element cached by the last successful [`advance`](Self::advance).
    /// `None` before the first advance and after exhaustion.
    #[inline]
    pub fn current(&self) -> Option<&'a T> {
        self.current
    }

    /// Goes back to before the first element.
    #[inline]
    pub fn restart(&mut self) {
        self.next = 0;
        self.current = None;
        self.exhausted = false;
    }

    /// Ends the traversal. Holds no resources, so this is the same as dropping it.
    #[inline]
    pub fn release(self) {}

    /// Index of the current element, if any.
    #[inline]
    pub fn current_index(&self) -> Option<usize> {
        self.current.map(|_| self.next - 1)
    }

    /// Returns the number of elements not yet visited.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.source.len().saturating_sub(self.next)
    }

    /// True once [`advance`](Self::advance) has run past the last element.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.advance() { self.current } else { None }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

impl<T> FusedIterator for Cursor<'_, T> {}
