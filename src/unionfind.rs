//! Disjoint-set (union-find) structures.
//!
//! A disjoint set tracks a partition of elements into equivalence classes
//! under incremental merging. Two operations dominate:
//!
//! - `find(x)`: the canonical representative (root) of x's class
//! - `union(a, b)`: merge the classes containing a and b
//!
//! With **path compression** (every node visited by `find` is re-pointed
//! directly at the root) and **union by size** (the smaller tree's root is
//! linked under the larger tree's root), a sequence of m operations over n
//! elements costs O(m α(n)) — effectively constant per operation.
//!
//! Two flavors are provided:
//!
//! - [`DisjointSet`]: elements are dense indices `0..n`. This is what the
//!   MST algorithms use internally, after mapping graph vertices to ids.
//! - [`VertexSets`]: wraps a `DisjointSet` with a hash map so arbitrary
//!   hashable vertex values can be used directly.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::hash::Hash;

/// A partition of `{0..n}` into mergeable equivalence classes.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    classes: usize,
}

impl DisjointSet {
    /// Create `n` singleton classes, one per element `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            classes: n,
        }
    }

    /// Total number of elements (not classes).
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// True when the structure holds no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of distinct classes remaining.
    pub fn classes(&self) -> usize {
        self.classes
    }

    /// Representative (root) of the class containing `x`.
    ///
    /// Compresses the path: every element walked over is re-pointed
    /// directly at the root, so repeated finds trend toward O(1).
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.find_unchecked(x))
    }

    /// Merge the classes containing `a` and `b`.
    ///
    /// Returns `true` if a merge happened, `false` if the two were already
    /// in the same class (the call is then a no-op).
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool> {
        let ra = self.find(a)?;
        let rb = self.find(b)?;
        Ok(self.union_roots(ra, rb))
    }

    /// Whether `a` and `b` are currently in the same class.
    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Number of elements in the class containing `x`.
    pub fn class_size(&mut self, x: usize) -> Result<usize> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }

    /// Merge two classes given their roots. Internal fast path for callers
    /// that already hold both roots from a prior `find`.
    pub(crate) fn union_roots(&mut self, ra: usize, rb: usize) -> bool {
        if ra == rb {
            return false;
        }

        // Union by size: the smaller tree hangs under the larger root.
        let (mut big, mut small) = (ra, rb);
        if self.size[big] < self.size[small] {
            std::mem::swap(&mut big, &mut small);
        }

        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.classes -= 1;
        true
    }

    /// Bounds-unchecked find, for the hot loops that already validated
    /// their indices against the graph.
    pub(crate) fn find_unchecked(&mut self, mut x: usize) -> usize {
        // First pass: locate the root.
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Second pass: point every visited element at it.
        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }
        root
    }

    fn check(&self, x: usize) -> Result<()> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                index: x,
                len: self.parent.len(),
            })
        }
    }
}

/// A disjoint set over arbitrary hashable vertex values.
///
/// Vertices are interned to dense 0-based ids in the iteration order of the
/// collection the structure was built from; all operations then delegate to
/// an inner [`DisjointSet`]. Querying a vertex that was not in the original
/// collection yields [`Error::UnknownVertex`].
#[derive(Clone, Debug)]
pub struct VertexSets<V> {
    ids: HashMap<V, usize>,
    sets: DisjointSet,
}

impl<V: Hash + Eq + Clone> VertexSets<V> {
    /// Build singleton classes for every vertex yielded by `vertices`.
    ///
    /// Duplicate values collapse to a single element.
    pub fn new<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut ids = HashMap::new();
        for v in vertices {
            let next = ids.len();
            ids.entry(v).or_insert(next);
        }
        let n = ids.len();
        Self {
            ids,
            sets: DisjointSet::new(n),
        }
    }

    /// Total number of vertices.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// True when no vertices were supplied.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Number of distinct classes remaining.
    pub fn classes(&self) -> usize {
        self.sets.classes()
    }

    /// Dense id assigned to `v` at construction.
    pub fn id(&self, v: &V) -> Result<usize> {
        self.ids.get(v).copied().ok_or(Error::UnknownVertex)
    }

    /// Representative id of the class containing `v`.
    pub fn find(&mut self, v: &V) -> Result<usize> {
        let x = self.id(v)?;
        self.sets.find(x)
    }

    /// Merge the classes containing `a` and `b`; `true` if a merge happened.
    pub fn union(&mut self, a: &V, b: &V) -> Result<bool> {
        let x = self.id(a)?;
        let y = self.id(b)?;
        self.sets.union(x, y)
    }

    /// Whether `a` and `b` are currently in the same class.
    pub fn connected(&mut self, a: &V, b: &V) -> Result<bool> {
        let x = self.id(a)?;
        let y = self.id(b)?;
        self.sets.connected(x, y)
    }
}
