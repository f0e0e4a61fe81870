//! Benchmark fixtures for the Demonic sequence container.
//!
//! - [`ascending`]: a tightly packed sequence `0, 1, …, n - 1`
//! - [`with_spare`]: the same contents with extra spare capacity

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use demonic_array::Sequence;

/// Element counts used across the benchmark groups.
pub const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Build `0, 1, …, n - 1` with `capacity == n`.
pub fn ascending(n: usize) -> Sequence<u64> {
    (0..n as u64).collect()
}

/// Build `0, 1, …, n - 1` with `spare` extra slots of capacity.
pub fn with_spare(n: usize, spare: usize) -> Sequence<u64> {
    let mut seq = ascending(n);
    seq.reserve(n + spare);
    seq
}
