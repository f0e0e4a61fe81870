//! Capacity growth policy.
//!
//! Single-element appends and insertions grow geometrically: an empty
//! buffer jumps to [`INITIAL_CAPACITY`] slots, a full one is multiplied by
//! [`GROWTH_FACTOR`]. Bulk appends grow once per call, to
//! `(len + count) * GROWTH_FACTOR` slots, or exactly `count` slots when the
//! sequence is empty.
//!
//! The two paths use different triggers. A single append grows only when
//! `len == capacity`; a bulk append grows whenever `len + count >= capacity`,
//! so it may reallocate even when the elements would have fit exactly.

use crate::error::SequenceError;

/// Capacity of the first allocation made by a single-element append.
pub const INITIAL_CAPACITY: usize = 1;

/// Multiplier applied to the capacity on each geometric growth step.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity to grow to before appending or inserting one element into a full
/// buffer of `capacity` slots.
///
/// Produces the series 0 → 1 → 2 → 4 → 8 …. A full buffer holds
/// `capacity` elements, which is what an overflow reports as `len`.
pub fn next_capacity(capacity: usize) -> Result<usize, SequenceError> {
    if capacity == 0 {
        return Ok(INITIAL_CAPACITY);
    }
    capacity
        .checked_mul(GROWTH_FACTOR)
        .ok_or(SequenceError::CapacityOverflow {
            len: capacity,
            additional: 1,
        })
}

/// Whether a bulk append of `count` elements onto `len` live elements must
/// reallocate a buffer of `capacity` slots first.
pub fn bulk_needs_growth(len: usize, count: usize, capacity: usize) -> bool {
    len.saturating_add(count) >= capacity
}

/// Capacity to grow to before a bulk append of `count` elements onto `len`
/// live elements.
///
/// The result is never smaller than `len + count`.
pub fn bulk_capacity(len: usize, count: usize) -> Result<usize, SequenceError> {
    if len == 0 {
        return Ok(count);
    }
    len.checked_add(count)
        .and_then(|total| total.checked_mul(GROWTH_FACTOR))
        .ok_or(SequenceError::CapacityOverflow {
            len,
            additional: count,
        })
}
