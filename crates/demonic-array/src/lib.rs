//! Contiguous, growable sequence container with explicit capacity management.
//!
//! [`Sequence<T>`] owns a single boxed buffer of `capacity` slots, the first
//! `len` of which hold live elements. Appends are amortized O(1) through
//! geometric growth; insertion and erasure at arbitrary positions shift the
//! tail in place.
//!
//! # Architecture
//!
//! ```text
//! Sequence<T>
//! ├── storage: Box<[T]>   (capacity slots, default-initialised)
//! │   ├── [0, len)        live elements
//! │   └── [len, capacity) default or stale slots
//! ├── growth              (capacity policy: 0 → 1 → 2 → 4 → …)
//! └── Cursor<'_, T>       (random-access position over the live range)
//! ```
//!
//! # Slot initialisation
//!
//! Every allocated slot holds a constructed `T`. Fresh slots are filled with
//! `T::default()`, so operations that allocate require `T: Default`. Slots past
//! `len` may also hold stale values left behind by [`Sequence::pop_back`],
//! [`Sequence::clear`] or [`Sequence::erase`]; growing with
//! [`Sequence::resize`] inside the current capacity exposes them again.
//! No uninitialised memory is ever read, and the crate is free of `unsafe`.
//!
//! # Misuse
//!
//! Out-of-range indices and capacity overflow panic. The `try_*` companions
//! ([`Sequence::try_insert`], [`Sequence::try_erase`],
//! [`Sequence::try_push_back`]) report the same conditions as a
//! [`SequenceError`] instead. The only expected failure is popping an empty
//! sequence, which [`Sequence::pop_back`] reports by returning `false`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod cursor;
pub mod error;
pub mod growth;
pub mod iter;
mod mutate;
#[cfg(feature = "serde")]
mod serde;
pub mod sequence;

// Public re-exports for the primary API surface.
pub use cursor::Cursor;
pub use error::SequenceError;
pub use iter::IntoIter;
pub use sequence::Sequence;
