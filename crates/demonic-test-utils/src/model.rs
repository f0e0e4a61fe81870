//! Reference model of the sequence container.
//!
//! [`ModelSequence`] keeps one entry per allocated slot. `Some(v)` is a slot
//! whose content is known; `None` is a spare slot whose content the container
//! leaves unspecified (the erased value parked past the end). Comparisons
//! against a real sequence only check known slots.

use proptest::prelude::*;

/// One scripted operation on a sequence of `i32`.
#[derive(Clone, Debug)]
pub enum SeqOp {
    PushBack(i32),
    PushBackAll(Vec<i32>),
    PopBack,
    Insert(usize, i32),
    Erase(usize),
    Reserve(usize),
    Resize(usize),
    Clear,
}

/// Strategy producing a single [`SeqOp`].
///
/// Indices are drawn from a range wider than typical lengths so that
/// out-of-range `Insert`/`Erase` are exercised too.
pub fn op_strategy() -> impl Strategy<Value = SeqOp> {
    prop_oneof![
        4 => any::<i32>().prop_map(SeqOp::PushBack),
        1 => proptest::collection::vec(any::<i32>(), 0..8).prop_map(SeqOp::PushBackAll),
        2 => Just(SeqOp::PopBack),
        2 => (0usize..32, any::<i32>()).prop_map(|(index, value)| SeqOp::Insert(index, value)),
        2 => (0usize..32).prop_map(SeqOp::Erase),
        1 => (0usize..48).prop_map(SeqOp::Reserve),
        1 => (0usize..48).prop_map(SeqOp::Resize),
        1 => Just(SeqOp::Clear),
    ]
}

/// `Vec`-backed model of a sequence of `i32` with default value `0`.
#[derive(Clone, Debug, Default)]
pub struct ModelSequence {
    slots: Vec<Option<i32>>,
    len: usize,
}

impl ModelSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Live slots, `None` where the content is unspecified.
    pub fn live(&self) -> &[Option<i32>] {
        &self.slots[..self.len]
    }

    /// Whether `actual` agrees with every known live slot.
    pub fn matches(&self, actual: &[i32]) -> bool {
        actual.len() == self.len
            && self
                .live()
                .iter()
                .zip(actual)
                .all(|(expected, value)| expected.map_or(true, |e| e == *value))
    }

    pub fn reserve(&mut self, new_capacity: usize) {
        let kept = self.len.min(new_capacity);
        let mut slots = vec![Some(0); new_capacity];
        slots[..kept].copy_from_slice(&self.slots[..kept]);
        self.slots = slots;
        self.len = kept;
    }

    pub fn resize(&mut self, count: usize) {
        if count < self.capacity() {
            self.len = count;
        } else if count > self.len {
            self.reserve(count);
            self.len = count;
        }
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn push_back(&mut self, value: i32) {
        if self.len == self.capacity() {
            let grown = if self.capacity() == 0 {
                1
            } else {
                self.capacity() * 2
            };
            self.reserve(grown);
        }
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    pub fn push_back_all(&mut self, values: &[i32]) {
        let count = values.len();
        if self.len + count >= self.capacity() {
            let grown = if self.len == 0 {
                count
            } else {
                (self.len + count) * 2
            };
            self.reserve(grown);
        }
        for (offset, &value) in values.iter().enumerate() {
            self.slots[self.len + offset] = Some(value);
        }
        self.len += count;
    }

    pub fn pop_back(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.len -= 1;
        true
    }

    /// Returns `false`, leaving the model untouched, when `index >= len`.
    pub fn insert(&mut self, index: usize, value: i32) -> bool {
        if index >= self.len {
            return false;
        }
        if self.len == self.capacity() {
            let grown = self.capacity() * 2;
            self.reserve(grown);
        }
        // The first spare slot is consumed by the shift.
        self.slots.remove(self.len);
        self.slots.insert(index, Some(value));
        self.len += 1;
        true
    }

    /// Returns `false`, leaving the model untouched, when `index >= len`.
    pub fn erase(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.slots.remove(index);
        self.len -= 1;
        self.slots.insert(self.len, None);
        true
    }

    /// Apply `op`, returning whether it was accepted.
    ///
    /// Only out-of-range `Insert`/`Erase` and `PopBack` on an empty model
    /// are rejected.
    pub fn apply(&mut self, op: &SeqOp) -> bool {
        match op {
            SeqOp::PushBack(value) => self.push_back(*value),
            SeqOp::PushBackAll(values) => self.push_back_all(values),
            SeqOp::PopBack => return self.pop_back(),
            SeqOp::Insert(index, value) => return self.insert(*index, *value),
            SeqOp::Erase(index) => return self.erase(*index),
            SeqOp::Reserve(capacity) => self.reserve(*capacity),
            SeqOp::Resize(count) => self.resize(*count),
            SeqOp::Clear => self.clear(),
        }
        true
    }
}
