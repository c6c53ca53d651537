//! Array-backed binary heap with a caller-supplied comparator.
//!
//! The heap is a complete binary tree flattened into an array. The root may
//! live at index 0 ("no sentinel") or index 1 ("one sentinel"); both layouts
//! are classic and differ only in the parent/child index arithmetic, which
//! is kept in one place here:
//!
//! ```text
//! parent(k)      = (k + 1 - first) / 2 + first - 1
//! first_child(k) = (k + 1 - first) * 2 + first - 1
//! ```
//!
//! where `first` is the root index (0 or 1). With `first = 1` these reduce
//! to the familiar `k / 2` and `2k`.
//!
//! Ordering is never implicit: the heap is constructed with an explicit
//! comparator plus a min/max mode, matching the rest of the crate's policy
//! of passing ordering capability at construction. A comparator result of
//! `Equal` is not stabilized — callers that need deterministic tie-breaking
//! must embed a tiebreaker (e.g. an insertion index) in the compared keys.
//!
//! Removal offers two strategies, selectable at construction:
//!
//! - [`PopStrategy::Sink`]: the textbook top-down sink, swapping with the
//!   preferred child while heap order is violated.
//! - [`PopStrategy::Floyd`]: Floyd's "snake" — descend *unconditionally* to
//!   a leaf along the preferred-child path, then swim the displaced value
//!   back up. Fewer comparisons on average for random data, same bound.
//!
//! [`Heap::heapify`] bulk-builds heap order bottom-up in linear time (the
//! classic Floyd construction), which is how Kruskal seeds its edge queue.

use crate::error::{Error, Result};
use std::cmp::Ordering;

/// Index of the root slot in the backing array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// Root at index 0, no sentinel slot.
    Zero,
    /// Root at index 1, one unused sentinel slot at index 0.
    One,
}

impl Origin {
    fn first(self) -> usize {
        match self {
            Origin::Zero => 0,
            Origin::One => 1,
        }
    }
}

/// How `pop` restores heap order after removing the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopStrategy {
    /// Conditional top-down sink.
    Sink,
    /// Floyd's trick: unconditional descent to a leaf, then swim back up.
    Floyd,
}

/// A generic binary heap over keys of type `K`.
///
/// Vacated slots are cleared (`None`) so popped keys are not retained by
/// the backing storage. The logical size is tracked separately from the
/// backing array's length, which only ever grows.
#[derive(Clone, Debug)]
pub struct Heap<K, C> {
    slots: Vec<Option<K>>,
    len: usize,
    first: usize,
    max: bool,
    strategy: PopStrategy,
    cmp: C,
}

impl<K, C> Heap<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// A min-heap: `pop` yields the smallest key under `cmp`.
    pub fn min(cmp: C) -> Self {
        Self::with_mode(false, cmp)
    }

    /// A max-heap: `pop` yields the largest key under `cmp`.
    pub fn max(cmp: C) -> Self {
        Self::with_mode(true, cmp)
    }

    fn with_mode(max: bool, cmp: C) -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
            first: 0,
            max,
            strategy: PopStrategy::Sink,
            cmp,
        }
    }

    /// Set the root index layout. Only valid on an empty heap, so it is a
    /// builder method consumed before any keys are inserted.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        debug_assert_eq!(self.len, 0);
        self.first = origin.first();
        self.slots.clear();
        self.slots.resize_with(self.first, || None);
        self
    }

    /// Set the removal strategy.
    pub fn with_pop(mut self, strategy: PopStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Append every key, then rebuild heap order in one bottom-up pass
    /// (sinking each internal node from the last toward the root). This is
    /// linear in the number of keys, against O(n log n) for repeated `push`.
    pub fn heapify<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.slots.push(Some(key));
            self.len += 1;
        }
        if self.len > 1 {
            let last = self.first + self.len - 1;
            for k in (self.first..=self.parent(last)).rev() {
                self.sink(k);
            }
        }
        self
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no keys are held.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a key, swimming it toward the root until heap order holds.
    pub fn push(&mut self, key: K) {
        let slot = self.first + self.len;
        if slot == self.slots.len() {
            self.slots.push(Some(key));
        } else {
            self.slots[slot] = Some(key);
        }
        self.len += 1;
        self.swim(slot);
    }

    /// Remove and return the root key (minimum or maximum per the mode).
    ///
    /// Fails with [`Error::EmptyQueue`] when the heap holds no keys.
    pub fn pop(&mut self) -> Result<K> {
        if self.len == 0 {
            return Err(Error::EmptyQueue);
        }
        let last = self.first + self.len - 1;
        self.slots.swap(self.first, last);
        let key = self.slots[last].take().ok_or(Error::EmptyQueue)?;
        self.len -= 1;
        if self.len > 1 {
            match self.strategy {
                PopStrategy::Sink => self.sink(self.first),
                PopStrategy::Floyd => self.snake(self.first),
            }
        }
        Ok(key)
    }

    /// Raw view of a backing-array slot.
    ///
    /// This exposes the internal layout (including the sentinel slot for
    /// [`Origin::One`]) and exists as a testing aid; it is not part of the
    /// queue abstraction and should not be relied on in production code.
    pub fn peek_at(&self, index: usize) -> Option<&K> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    fn parent(&self, k: usize) -> usize {
        (k + 1 - self.first) / 2 + self.first - 1
    }

    fn first_child(&self, k: usize) -> usize {
        (k + 1 - self.first) * 2 + self.first - 1
    }

    /// True when the key at `a` should be closer to the root than `b`'s.
    fn prefers(&self, a: usize, b: usize) -> bool {
        let (ka, kb) = match (&self.slots[a], &self.slots[b]) {
            (Some(ka), Some(kb)) => (ka, kb),
            _ => return false,
        };
        match (self.cmp)(ka, kb) {
            Ordering::Less => !self.max,
            Ordering::Greater => self.max,
            Ordering::Equal => false,
        }
    }

    /// Index of the child of `k` that should win a swap, if `k` has any
    /// children within the logical size.
    fn preferred_child(&self, k: usize) -> Option<usize> {
        let last = self.first + self.len - 1;
        let c = self.first_child(k);
        if c > last {
            return None;
        }
        if c < last && self.prefers(c + 1, c) {
            Some(c + 1)
        } else {
            Some(c)
        }
    }

    fn swim(&mut self, mut k: usize) {
        while k > self.first {
            let p = self.parent(k);
            if !self.prefers(k, p) {
                break;
            }
            self.slots.swap(k, p);
            k = p;
        }
    }

    fn sink(&mut self, mut k: usize) {
        while let Some(c) = self.preferred_child(k) {
            if !self.prefers(c, k) {
                break;
            }
            self.slots.swap(k, c);
            k = c;
        }
    }

    /// Floyd's trick: walk the hole to a leaf unconditionally along the
    /// preferred-child path, then swim the displaced key back up.
    fn snake(&mut self, mut k: usize) {
        while let Some(c) = self.preferred_child(k) {
            self.slots.swap(k, c);
            k = c;
        }
        self.swim(k);
    }
}
