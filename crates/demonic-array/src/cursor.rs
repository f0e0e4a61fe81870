//! Random-access cursors over the live elements of a [`Sequence`].
//!
//! A [`Cursor`] is a position in `[0, len]` within one sequence's live range,
//! where `len` is the one-past-the-end position returned by
//! [`Sequence::end`]. Offset arithmetic always yields another cursor.
//!
//! A cursor borrows the sequence immutably, so any operation that could
//! reallocate or shift elements (`reserve`, `push_back`, `insert`, `erase`,
//! …) cannot run while a cursor is alive. The same borrow pins the sequence
//! in place, so its address identifies it. The buffer's data pointer does
//! not: empty buffers and buffers of zero-sized elements share one dangling
//! pointer.
//!
//! [`Sequence`]: crate::Sequence
//! [`Sequence::end`]: crate::Sequence::end

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::ptr;

use crate::sequence::Sequence;

/// A position within the live elements of a sequence.
pub struct Cursor<'a, T> {
    owner: &'a Sequence<T>,
    elements: &'a [T],
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(owner: &'a Sequence<T>, position: usize) -> Self {
        let elements = owner.as_slice();
        debug_assert!(position <= elements.len());
        Self {
            owner,
            elements,
            position,
        }
    }

    /// Index of the element this cursor points at.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether this is the one-past-the-end position.
    pub fn is_end(&self) -> bool {
        self.position == self.elements.len()
    }

    /// The element under the cursor, or `None` at the end position.
    pub fn get(&self) -> Option<&'a T> {
        self.elements.get(self.position)
    }

    /// The element `delta` slots away, without moving.
    pub fn peek(&self, delta: isize) -> Option<&'a T> {
        let index = self.position.checked_add_signed(delta)?;
        self.elements.get(index)
    }

    /// The live elements from this position to the end.
    pub fn remaining(&self) -> &'a [T] {
        &self.elements[self.position..]
    }

    /// Advance one slot.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end position.
    pub fn move_next(&mut self) {
        *self = self.offset(1);
    }

    /// Retreat one slot.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the first position.
    pub fn move_prev(&mut self) {
        *self = self.offset(-1);
    }

    /// A cursor `delta` slots away from this one.
    ///
    /// # Panics
    ///
    /// Panics if the result lies outside `[0, len]`.
    pub fn offset(&self, delta: isize) -> Self {
        match self.position.checked_add_signed(delta) {
            Some(position) if position <= self.elements.len() => Self::new(self.owner, position),
            _ => panic!(
                "cursor offset {delta} from position {} leaves the range [0, {}]",
                self.position,
                self.elements.len()
            ),
        }
    }

    fn same_sequence(&self, other: &Self) -> bool {
        ptr::eq(self.owner, other.owner)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.elements.len())
            .finish()
    }
}

/// Cursors are equal when they point at the same slot of the same sequence.
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_sequence(other) && self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

/// Cursors into different sequences are unordered.
impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_sequence(other)
            .then(|| self.position.cmp(&other.position))
    }
}

impl<T> Add<usize> for Cursor<'_, T> {
    type Output = Self;

    fn add(self, rhs: usize) -> Self {
        let delta = isize::try_from(rhs).unwrap_or(isize::MAX);
        self.offset(delta)
    }
}

impl<T> Sub<usize> for Cursor<'_, T> {
    type Output = Self;

    fn sub(self, rhs: usize) -> Self {
        let delta = isize::try_from(rhs).map_or(isize::MIN, |d| -d);
        self.offset(delta)
    }
}

impl<T> AddAssign<usize> for Cursor<'_, T> {
    fn add_assign(&mut self, rhs: usize) {
        *self = *self + rhs;
    }
}

impl<T> SubAssign<usize> for Cursor<'_, T> {
    fn sub_assign(&mut self, rhs: usize) {
        *self = *self - rhs;
    }
}

/// Signed distance from `rhs` to `self`.
///
/// # Panics
///
/// Panics if the cursors belong to different sequences.
impl<T> Sub for Cursor<'_, T> {
    type Output = isize;

    fn sub(self, rhs: Self) -> isize {
        assert!(
            self.same_sequence(&rhs),
            "distance between cursors of different sequences"
        );
        self.position as isize - rhs.position as isize
    }
}
