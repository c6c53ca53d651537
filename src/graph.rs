//! Weighted graph model.
//!
//! A [`Graph`] maps vertices to the edges incident on them. Each undirected
//! edge is stored exactly once and indexed from both endpoints, so
//! traversal from either side sees the same [`Edge`] value; callers walk
//! the "other" endpoint via [`Edge::other`] rather than looking for a
//! stored reverse edge.
//!
//! Vertices may be any hashable, comparable value. They are interned to
//! dense 0-based ids in insertion order; all iteration (vertices, edges,
//! adjacency) follows that order, which is what makes the MST algorithms
//! downstream deterministic for a fixed construction sequence.
//!
//! The edge attribute type `X` is opaque here: the graph never compares or
//! mutates attributes. Ordering is supplied to the algorithms separately,
//! as an explicit comparator.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::hash::Hash;

/// An edge between two vertices carrying an attribute (typically a weight).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<V, X> {
    /// One endpoint.
    pub from: V,
    /// The other endpoint.
    pub to: V,
    /// The edge's payload; ordering over it is supplied externally.
    pub attr: X,
}

impl<V: Eq, X> Edge<V, X> {
    /// Create an edge from `from` to `to` with the given attribute.
    pub fn new(from: V, to: V, attr: X) -> Self {
        Self { from, to, attr }
    }

    /// The endpoint that is not `v`.
    ///
    /// Fails with [`Error::UnknownVertex`] if `v` is not an endpoint of
    /// this edge. For a self-loop, either query returns the same vertex.
    pub fn other(&self, v: &V) -> Result<&V> {
        if *v == self.from {
            Ok(&self.to)
        } else if *v == self.to {
            Ok(&self.from)
        } else {
            Err(Error::UnknownVertex)
        }
    }
}

impl<V: Clone, X: Clone> Edge<V, X> {
    /// The same connection viewed from the opposite direction; the
    /// attribute value is carried over unchanged.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            attr: self.attr.clone(),
        }
    }
}

/// An undirected weighted graph with interned vertices.
#[derive(Clone, Debug)]
pub struct Graph<V, X> {
    verts: Vec<V>,
    ids: HashMap<V, usize>,
    edges: Vec<Edge<V, X>>,
    /// Interned `(from, to)` ids, parallel to `edges`.
    ends: Vec<(usize, usize)>,
    /// Edge indices incident on each vertex id.
    adj: Vec<Vec<usize>>,
}

impl<V: Hash + Eq + Clone, X> Graph<V, X> {
    /// An empty graph.
    pub fn new() -> Self {
        Self {
            verts: Vec::new(),
            ids: HashMap::new(),
            edges: Vec::new(),
            ends: Vec::new(),
            adj: Vec::new(),
        }
    }

    /// Ensure `v` is a vertex of the graph (possibly with an empty
    /// adjacency list) and return its dense id.
    pub fn add_vertex(&mut self, v: V) -> usize {
        match self.ids.get(&v) {
            Some(&id) => id,
            None => {
                let id = self.verts.len();
                self.verts.push(v.clone());
                self.ids.insert(v, id);
                self.adj.push(Vec::new());
                id
            }
        }
    }

    /// Insert an edge. Both endpoints are interned (so the `to` endpoint
    /// gains an adjacency entry even if this is its only mention) and the
    /// single stored edge is indexed from both sides.
    pub fn add_edge(&mut self, edge: Edge<V, X>) {
        let u = self.add_vertex(edge.from.clone());
        let v = self.add_vertex(edge.to.clone());
        let idx = self.edges.len();
        self.edges.push(edge);
        self.ends.push((u, v));
        self.adj[u].push(idx);
        if v != u {
            self.adj[v].push(idx);
        }
    }

    /// Number of vertices.
    pub fn n_vertices(&self) -> usize {
        self.verts.len()
    }

    /// Number of stored edges (each undirected connection counts once).
    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &V> {
        self.verts.iter()
    }

    /// All edges, each exactly once, in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = &Edge<V, X>> {
        self.edges.iter()
    }

    /// Edges incident on `v`, in insertion order.
    pub fn adjacent(&self, v: &V) -> Result<impl Iterator<Item = &Edge<V, X>>> {
        let id = self.vertex_id(v)?;
        Ok(self.adj[id].iter().map(move |&i| &self.edges[i]))
    }

    /// Dense id assigned to `v` when it was first inserted.
    pub fn vertex_id(&self, v: &V) -> Result<usize> {
        self.ids.get(v).copied().ok_or(Error::UnknownVertex)
    }

    /// Vertex value for a dense id.
    pub fn vertex(&self, id: usize) -> Result<&V> {
        self.verts.get(id).ok_or(Error::InvalidVertex {
            index: id,
            len: self.verts.len(),
        })
    }

    /// Edge by storage index. Internal accessor for the algorithms, which
    /// work over edge indices to keep attribute values in one place.
    pub(crate) fn edge(&self, idx: usize) -> &Edge<V, X> {
        &self.edges[idx]
    }

    /// Interned endpoint ids of the edge at `idx`.
    pub(crate) fn edge_ends(&self, idx: usize) -> (usize, usize) {
        self.ends[idx]
    }

    /// Edge indices incident on vertex id `id`.
    pub(crate) fn adjacent_ids(&self, id: usize) -> &[usize] {
        &self.adj[id]
    }
}

impl<V: Hash + Eq + Clone, X> FromIterator<Edge<V, X>> for Graph<V, X> {
    fn from_iter<I: IntoIterator<Item = Edge<V, X>>>(iter: I) -> Self {
        let mut g = Self::new();
        for edge in iter {
            g.add_edge(edge);
        }
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph<&'static str, u32> {
        // a-b, a-c, b-d, c-d, b-c
        [
            Edge::new("a", "b", 1),
            Edge::new("a", "c", 2),
            Edge::new("b", "d", 3),
            Edge::new("c", "d", 4),
            Edge::new("b", "c", 5),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn counts_are_tracked() {
        let g = diamond();
        assert_eq!(g.n_vertices(), 4);
        assert_eq!(g.n_edges(), 5);
        assert_eq!(g.vertices().len(), 4);
        assert_eq!(g.edges().len(), 5);
    }

    #[test]
    fn vertices_iterate_in_insertion_order() {
        let g = diamond();
        let order: Vec<_> = g.vertices().copied().collect();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
        assert_eq!(g.vertex_id(&"a").unwrap(), 0);
        assert_eq!(g.vertex_id(&"d").unwrap(), 3);
    }

    #[test]
    fn adjacency_sees_edges_from_both_sides() {
        let g = diamond();
        let from_b: Vec<u32> = g.adjacent(&"b").unwrap().map(|e| e.attr).collect();
        assert_eq!(from_b, vec![1, 3, 5]);
        let from_c: Vec<u32> = g.adjacent(&"c").unwrap().map(|e| e.attr).collect();
        assert_eq!(from_c, vec![2, 4, 5]);
    }

    #[test]
    fn edges_yield_each_connection_once() {
        let g = diamond();
        let weights: Vec<u32> = g.edges().map(|e| e.attr).collect();
        assert_eq!(weights, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn other_walks_an_edge_symmetrically() {
        let e = Edge::new("u", "v", 9);
        assert_eq!(e.other(&"u").unwrap(), &"v");
        assert_eq!(e.other(&"v").unwrap(), &"u");
        assert_eq!(e.other(&"w"), Err(Error::UnknownVertex));
    }

    #[test]
    fn reversed_shares_the_attribute() {
        let e = Edge::new(1, 2, 7.5f64);
        let r = e.reversed();
        assert_eq!(r.from, 2);
        assert_eq!(r.to, 1);
        assert_eq!(r.attr, e.attr);
    }

    #[test]
    fn endpoint_only_mentioned_as_target_still_exists() {
        let mut g: Graph<&str, u32> = Graph::new();
        g.add_edge(Edge::new("x", "y", 1));
        // "y" never appears as a `from`, but it is a vertex with an
        // adjacency entry indexing the shared edge.
        assert_eq!(g.n_vertices(), 2);
        let from_y: Vec<u32> = g.adjacent(&"y").unwrap().map(|e| e.attr).collect();
        assert_eq!(from_y, vec![1]);
    }

    #[test]
    fn isolated_vertex_has_empty_adjacency() {
        let mut g: Graph<&str, u32> = Graph::new();
        g.add_vertex("lonely");
        assert_eq!(g.n_vertices(), 1);
        assert_eq!(g.adjacent(&"lonely").unwrap().count(), 0);
    }

    #[test]
    fn unknown_vertex_queries_fail() {
        let g = diamond();
        assert!(g.adjacent(&"zz").is_err());
        assert_eq!(g.vertex_id(&"zz"), Err(Error::UnknownVertex));
        assert_eq!(
            g.vertex(10),
            Err(Error::InvalidVertex { index: 10, len: 4 })
        );
    }

    #[test]
    fn self_loop_is_indexed_once() {
        let mut g: Graph<&str, u32> = Graph::new();
        g.add_edge(Edge::new("a", "a", 3));
        assert_eq!(g.adjacent(&"a").unwrap().count(), 1);
        let e = g.edges().next().unwrap();
        assert_eq!(e.other(&"a").unwrap(), &"a");
    }
}
