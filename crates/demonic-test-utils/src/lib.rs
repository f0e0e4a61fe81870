//! Test utilities for Demonic development.
//!
//! - [`ModelSequence`]: a `Vec`-backed reference model of the container's
//!   observable behaviour, for model-based property tests.
//! - [`SeqOp`] and [`op_strategy`]: random operation scripts.
//! - [`DropTracker`] / [`Tracked`]: element values that count their clones
//!   and drops, for ownership and leak checks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod model;
pub mod tracked;

pub use model::{op_strategy, ModelSequence, SeqOp};
pub use tracked::{DropTracker, Tracked};
