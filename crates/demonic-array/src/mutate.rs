//! Ordered mutation: appends, insertion, erasure and popping.
//!
//! Every operation here either fits in the current buffer or grows it once
//! through [`growth`](crate::growth) before touching any element. Shifting is
//! done with slice rotations, so elements move instead of being cloned.

use std::mem;

use crate::error::SequenceError;
use crate::growth;
use crate::sequence::Sequence;

impl<T: Default> Sequence<T> {
    /// Append `value` after the last live element.
    ///
    /// A full buffer grows first, to 1 slot when empty and to twice its
    /// capacity otherwise. Amortized O(1).
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity overflows `usize`.
    pub fn push_back(&mut self, value: T) {
        if let Err(err) = self.try_push_back(value) {
            panic!("{err}");
        }
    }

    /// Checked [`push_back`](Sequence::push_back).
    ///
    /// On error the sequence is unchanged and `value` is dropped.
    pub fn try_push_back(&mut self, value: T) -> Result<(), SequenceError> {
        if self.len == self.capacity() {
            self.reserve(growth::next_capacity(self.capacity())?);
        }
        self.storage[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Append every element of an exact-size list, in order.
    ///
    /// Grows at most once, when `len + count >= capacity`: to `count` slots
    /// if the sequence is empty, otherwise to `(len + count) * 2`. If the
    /// iterator yields fewer elements than it reported, only those it yields
    /// are appended.
    ///
    /// # Panics
    ///
    /// Panics if the grown capacity overflows `usize`.
    pub fn push_back_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let elements = elements.into_iter();
        let count = elements.len();
        if growth::bulk_needs_growth(self.len, count, self.capacity()) {
            match growth::bulk_capacity(self.len, count) {
                Ok(capacity) => self.reserve(capacity),
                Err(err) => panic!("{err}"),
            }
        }

        let start = self.len;
        let mut written = 0;
        for (slot, value) in self.storage[start..start + count].iter_mut().zip(elements) {
            *slot = value;
            written += 1;
        }
        self.len += written;
    }

    /// Clone and append every element of `elements`, in order.
    ///
    /// Same growth rule as [`push_back_all`](Sequence::push_back_all).
    pub fn extend_from_slice(&mut self, elements: &[T])
    where
        T: Clone,
    {
        self.push_back_all(elements.iter().cloned());
    }

    /// Insert `value` before the element currently at `index`.
    ///
    /// `index` must address a live element, so appending through `insert`
    /// (`index == len`) is rejected; use [`push_back`](Sequence::push_back).
    /// A full buffer doubles first. O(len - index).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`, or if the doubled capacity overflows.
    pub fn insert(&mut self, index: usize, value: T) {
        if let Err(err) = self.try_insert(index, value) {
            panic!("{err}");
        }
    }

    /// Checked [`insert`](Sequence::insert).
    ///
    /// On error the sequence is unchanged and `value` is dropped.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        self.check_index(index)?;
        if self.len == self.capacity() {
            self.reserve(growth::next_capacity(self.capacity())?);
        }
        // Pulls the first spare slot down to `index`, opening the gap.
        self.storage[index..=self.len].rotate_right(1);
        self.storage[index] = value;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting the tail left.
    ///
    /// The vacated slot is refilled with `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        self.erase(index);
        mem::take(&mut self.storage[self.len])
    }

    /// Remove and return the last live element, or `None` when empty.
    ///
    /// Unlike [`pop_back`](Sequence::pop_back) this takes the value out,
    /// leaving `T::default()` in its slot.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(mem::take(&mut self.storage[self.len]))
    }
}

impl<T> Sequence<T> {
    /// Remove the element at `index`, shifting `[index + 1, len)` left by one.
    ///
    /// The erased value is parked in the first spare slot. O(len - index).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn erase(&mut self, index: usize) {
        if let Err(err) = self.try_erase(index) {
            panic!("{err}");
        }
    }

    /// Checked [`erase`](Sequence::erase).
    pub fn try_erase(&mut self, index: usize) -> Result<(), SequenceError> {
        self.check_index(index)?;
        self.storage[index..self.len].rotate_left(1);
        self.len -= 1;
        Ok(())
    }

    /// Drop the last live element from the logical contents.
    ///
    /// Returns `false` without changing anything when the sequence is empty.
    /// Capacity never shrinks, and the value stays in its slot until it is
    /// overwritten or the buffer is reallocated.
    pub fn pop_back(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.len -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capacities_while_pushing(n: usize) -> Vec<usize> {
        let mut seq = Sequence::new();
        let mut capacities = vec![seq.capacity()];
        for i in 0..n {
            seq.push_back(i);
            capacities.push(seq.capacity());
        }
        capacities
    }

    #[test]
    fn push_back_doubles_capacity() {
        assert_eq!(capacities_while_pushing(9), [0, 1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    fn push_back_fills_reserved_slots_without_growth() {
        let mut seq = Sequence::new();
        seq.reserve(3);
        seq.push_back(1);
        seq.push_back(2);
        seq.push_back(3);
        assert_eq!(seq.capacity(), 3);
        seq.push_back(4);
        assert_eq!(seq.capacity(), 6);
        assert_eq!(seq, [1, 2, 3, 4]);
    }

    #[test]
    fn push_back_all_on_empty_is_exact() {
        let mut seq = Sequence::new();
        seq.push_back_all([1, 2, 3]);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.capacity(), 3);
        assert_eq!(seq, [1, 2, 3]);
    }

    #[test]
    fn push_back_all_over_allocates() {
        let mut seq = Sequence::from([1, 2, 3]);
        seq.push_back_all([4, 5]);
        assert_eq!(seq.capacity(), 10);
        assert_eq!(seq, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn push_back_all_grows_on_exact_fit() {
        let mut seq = Sequence::from([1, 2]);
        seq.reserve(4);
        seq.push_back_all([3, 4]);
        assert_eq!(seq.capacity(), 8);
    }

    #[test]
    fn push_back_all_fits_without_growth() {
        let mut seq = Sequence::from([1]);
        seq.reserve(8);
        seq.push_back_all([2, 3]);
        assert_eq!(seq.capacity(), 8);
        assert_eq!(seq, [1, 2, 3]);
    }

    #[test]
    fn push_back_all_empty_list_on_empty_sequence() {
        let mut seq: Sequence<i32> = Sequence::new();
        seq.push_back_all([]);
        assert!(seq.is_empty());
        assert_eq!(seq.capacity(), 0);
    }

    #[test]
    fn extend_from_slice_clones() {
        let source = vec![String::from("a"), String::from("b")];
        let mut seq: Sequence<String> = Sequence::new();
        seq.extend_from_slice(&source);
        assert_eq!(seq, source);
    }

    #[test]
    fn pop_back_reports_empty() {
        let mut seq = Sequence::from([1]);
        assert!(seq.pop_back());
        assert!(!seq.pop_back());
        assert_eq!(seq.capacity(), 1);
    }

    #[test]
    fn pop_back_leaves_value_in_spare_slot() {
        let mut seq = Sequence::from([1, 2, 3]);
        assert!(seq.pop_back());
        assert!(seq.pop_back());
        seq.resize(2);
        assert_eq!(seq, [1, 2]);
    }

    #[test]
    fn pop_returns_owned_value() {
        let mut seq = Sequence::from([String::from("x"), String::from("y")]);
        assert_eq!(seq.pop().as_deref(), Some("y"));
        assert_eq!(seq.pop().as_deref(), Some("x"));
        assert_eq!(seq.pop(), None);
    }

    #[test]
    fn insert_shifts_tail() {
        let mut seq = Sequence::from([1, 2, 3]);
        seq.reserve(4);
        seq.insert(1, 9);
        assert_eq!(seq, [1, 9, 2, 3]);
        assert_eq!(seq.capacity(), 4);
    }

    #[test]
    fn insert_into_full_buffer_doubles() {
        let mut seq = Sequence::from([1, 2, 3]);
        seq.insert(0, 0);
        assert_eq!(seq, [0, 1, 2, 3]);
        assert_eq!(seq.capacity(), 6);
    }

    #[test]
    fn insert_before_last() {
        let mut seq = Sequence::from([1, 2, 3]);
        seq.insert(2, 7);
        assert_eq!(seq, [1, 2, 7, 3]);
    }

    #[test]
    #[should_panic(expected = "the len is 3 but the index is 3")]
    fn insert_at_end_panics() {
        let mut seq = Sequence::from([1, 2, 3]);
        seq.insert(3, 4);
    }

    #[test]
    fn try_insert_at_end_reports_error() {
        let mut seq = Sequence::from([1, 2, 3]);
        let result = seq.try_insert(3, 4);
        assert_eq!(result, Err(SequenceError::IndexOutOfBounds { index: 3, len: 3 }));
        assert_eq!(seq, [1, 2, 3]);
        assert_eq!(seq.capacity(), 3);
    }

    #[test]
    fn try_insert_into_empty_reports_error() {
        let mut seq: Sequence<i32> = Sequence::new();
        assert!(seq.try_insert(0, 1).is_err());
    }

    #[test]
    fn erase_shifts_tail_left() {
        let mut seq = Sequence::from([1, 2, 3, 4]);
        seq.erase(1);
        assert_eq!(seq, [1, 3, 4]);
        assert_eq!(seq.capacity(), 4);
    }

    #[test]
    fn erase_last_element() {
        let mut seq = Sequence::from([1, 2, 3]);
        seq.erase(2);
        assert_eq!(seq, [1, 2]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn erase_out_of_range_panics() {
        let mut seq = Sequence::from([1]);
        seq.erase(1);
    }

    #[test]
    fn try_erase_on_empty_reports_error() {
        let mut seq: Sequence<i32> = Sequence::new();
        assert_eq!(
            seq.try_erase(0),
            Err(SequenceError::IndexOutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn remove_returns_element() {
        let mut seq = Sequence::from([10, 20, 30]);
        assert_eq!(seq.remove(0), 10);
        assert_eq!(seq, [20, 30]);
        assert_eq!(seq.capacity(), 3);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn insert_then_read_back(
                elements in proptest::collection::vec(any::<i32>(), 1..64),
                index_seed in any::<usize>(),
                value in any::<i32>(),
            ) {
                let index = index_seed % elements.len();
                let mut seq = Sequence::from(elements.clone());
                seq.insert(index, value);

                let mut expected = elements;
                expected.insert(index, value);
                prop_assert_eq!(seq[index], value);
                prop_assert_eq!(seq.as_slice(), expected.as_slice());
            }

            #[test]
            fn erase_removes_exactly_one(
                elements in proptest::collection::vec(any::<i32>(), 1..64),
                index_seed in any::<usize>(),
            ) {
                let index = index_seed % elements.len();
                let mut seq = Sequence::from(elements.clone());
                seq.erase(index);

                let mut expected = elements;
                expected.remove(index);
                prop_assert_eq!(seq.as_slice(), expected.as_slice());
            }

            #[test]
            fn push_then_pop_restores_len_not_capacity(
                elements in proptest::collection::vec(any::<i32>(), 0..64),
                value in any::<i32>(),
            ) {
                let mut seq = Sequence::from(elements);
                let len = seq.len();
                seq.push_back(value);
                let grown = seq.capacity();
                prop_assert!(seq.pop_back());
                prop_assert_eq!(seq.len(), len);
                prop_assert_eq!(seq.capacity(), grown);
            }
        }
    }
}
