//! Element values that report their clones and drops.
//!
//! A [`DropTracker`] hands out [`Tracked`] values sharing one set of
//! counters. Default-constructed `Tracked` values are untracked, so the
//! default slots a container allocates do not disturb the counts.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
struct Counts {
    created: Cell<usize>,
    cloned: Cell<usize>,
    dropped: Cell<usize>,
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

/// Shared counters for a family of [`Tracked`] values.
#[derive(Clone, Default)]
pub struct DropTracker {
    counts: Rc<Counts>,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracked value.
    pub fn track(&self, value: i32) -> Tracked {
        bump(&self.counts.created);
        Tracked {
            value,
            counts: Some(Rc::clone(&self.counts)),
        }
    }

    /// Tracked values currently alive (created + cloned - dropped).
    pub fn live(&self) -> usize {
        self.counts.created.get() + self.counts.cloned.get() - self.counts.dropped.get()
    }

    /// Number of clones made of tracked values.
    pub fn clones(&self) -> usize {
        self.counts.cloned.get()
    }

    /// Number of tracked values dropped.
    pub fn drops(&self) -> usize {
        self.counts.dropped.get()
    }
}

/// An `i32` that reports clones and drops to its [`DropTracker`].
#[derive(Default)]
pub struct Tracked {
    value: i32,
    counts: Option<Rc<Counts>>,
}

impl Tracked {
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Whether this value was created by a tracker (not by `Default`).
    pub fn is_tracked(&self) -> bool {
        self.counts.is_some()
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if let Some(counts) = &self.counts {
            bump(&counts.cloned);
        }
        Self {
            value: self.value,
            counts: self.counts.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(counts) = &self.counts {
            bump(&counts.dropped);
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}
