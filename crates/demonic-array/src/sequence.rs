//! The [`Sequence`] container: construction, access and capacity management.
//!
//! Ordered mutation (`push_back`, `insert`, `erase`, …) lives in a separate
//! `impl` block next to the growth logic it drives.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice::SliceIndex;

use crate::cursor::Cursor;
use crate::error::SequenceError;

/// A contiguous, growable, owning sequence of `T`.
///
/// The backing buffer holds exactly [`capacity`](Sequence::capacity) slots.
/// The first [`len`](Sequence::len) are live; the rest are default-initialised
/// or hold stale values from earlier removals. Only live elements take part
/// in indexing, comparison, hashing, iteration and serialisation.
///
/// Cloning copies the live elements into a buffer of exactly `len` slots, so
/// spare capacity is not preserved. Moving transfers the buffer; use
/// [`Sequence::take`] to move out of a `&mut` and leave an empty sequence
/// behind.
pub struct Sequence<T> {
    /// Backing storage, one slot per unit of capacity.
    pub(crate) storage: Box<[T]>,
    /// Number of live elements at the front of `storage`.
    pub(crate) len: usize,
}

/// Allocate `capacity` default-initialised slots.
pub(crate) fn allocate<T: Default>(capacity: usize) -> Box<[T]> {
    std::iter::repeat_with(T::default).take(capacity).collect()
}

impl<T> Sequence<T> {
    /// Create an empty sequence. Does not allocate.
    pub fn new() -> Self {
        Self {
            storage: Box::default(),
            len: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Whether the sequence holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Memory held by the backing storage in bytes, spare slots included.
    pub fn memory_bytes(&self) -> usize {
        self.storage.len() * mem::size_of::<T>()
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.storage[..self.len]
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage[..self.len]
    }

    /// First live element.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    pub fn front(&self) -> &T {
        assert!(!self.is_empty(), "front() called on an empty sequence");
        &self.storage[0]
    }

    /// Mutable reference to the first live element.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    pub fn front_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "front_mut() called on an empty sequence");
        &mut self.storage[0]
    }

    /// Last live element.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    pub fn back(&self) -> &T {
        assert!(!self.is_empty(), "back() called on an empty sequence");
        &self.storage[self.len - 1]
    }

    /// Mutable reference to the last live element.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    pub fn back_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "back_mut() called on an empty sequence");
        let last = self.len - 1;
        &mut self.storage[last]
    }

    /// Drop the logical contents by resetting the length to zero.
    ///
    /// Neither the storage nor the capacity changes, and the old elements
    /// stay in their slots until overwritten.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Move the whole buffer out, leaving `self` empty with zero capacity.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Convert into a `Vec` holding only the live elements.
    pub fn into_vec(self) -> Vec<T> {
        let mut elements = self.storage.into_vec();
        elements.truncate(self.len);
        elements
    }

    /// Cursor at the first live element.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Cursor one past the last live element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.len)
    }

    /// Check that `index` addresses a live element.
    pub(crate) fn check_index(&self, index: usize) -> Result<(), SequenceError> {
        if index < self.len {
            Ok(())
        } else {
            Err(SequenceError::IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }
}

impl<T: Default> Sequence<T> {
    /// Create a sequence of `len` default values with `capacity == len`.
    pub fn with_len(len: usize) -> Self {
        Self {
            storage: allocate(len),
            len,
        }
    }

    /// Reallocate the buffer to exactly `new_capacity` slots.
    ///
    /// The first `min(len, new_capacity)` live elements are moved across in
    /// order and the rest of the new buffer is default-initialised. This
    /// always reallocates, and it can shrink: a `new_capacity` below `len`
    /// truncates the sequence, dropping the trailing elements.
    pub fn reserve(&mut self, new_capacity: usize) {
        let old_capacity = self.capacity();
        let kept = self.len.min(new_capacity);
        if kept < self.len {
            tracing::debug!(
                dropped = self.len - kept,
                new_capacity,
                "reserve truncated live elements"
            );
        }

        let old = mem::replace(&mut self.storage, allocate(new_capacity));
        for (slot, value) in self.storage.iter_mut().zip(old.into_vec().into_iter().take(kept)) {
            *slot = value;
        }
        self.len = kept;

        tracing::trace!(old_capacity, new_capacity, len = kept, "sequence reallocated");
    }

    /// Set the length to `count`.
    ///
    /// - `count < capacity`: only the length changes. Growing this way
    ///   exposes whatever the spare slots hold (defaults or stale values).
    /// - otherwise, if `count > len`: reallocates to exactly `count` slots
    ///   and exposes the fresh default slots.
    /// - otherwise (`count == capacity == len`): nothing happens.
    pub fn resize(&mut self, count: usize) {
        if count < self.capacity() {
            self.len = count;
        } else if count > self.len {
            self.reserve(count);
            self.len = count;
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.as_slice().into(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Sequence<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Indexing only reaches live elements; an index at or past `len` panics even
/// when it is below `capacity`.
impl<T, I: SliceIndex<[T]>> Index<I> for Sequence<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for Sequence<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T, U> PartialEq<Sequence<U>> for Sequence<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Sequence<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Sequence<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U> PartialEq<[U]> for Sequence<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<Vec<U>> for Sequence<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        let storage = elements.into_boxed_slice();
        let len = storage.len();
        Self { storage, len }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from(Vec::from(elements))
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(elements: &[T]) -> Self {
        Self {
            storage: elements.into(),
            len: elements.len(),
        }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(sequence: Sequence<T>) -> Self {
        sequence.into_vec()
    }
}
