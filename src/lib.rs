//! Minimum spanning tree engine with pluggable algorithms.
//!
//! `spanner` computes minimum-weight spanning forests over weighted,
//! undirected graphs. It is built from three cooperating primitives — a
//! disjoint set ([`DisjointSet`]), a binary heap ([`Heap`]), and a
//! lightweight graph model ([`Graph`]) — and three interchangeable
//! algorithms behind one trait ([`MstAlgorithm`]):
//!
//! - [`Kruskal`]: global greedy over a heap of all edges
//! - [`Prim`]: lazy frontier growth
//! - [`Boruvka`]: round-based component merging
//!
//! The [`geo`] module layers a geographic planner on top: it prices the
//! complete graph over named sites on a sphere with a zone- and
//! phase-aware cost model, runs a chosen algorithm, and numbers the
//! accepted links in construction order.
//!
//! ```rust
//! use spanner::{Edge, Graph, Kruskal, MstAlgorithm};
//!
//! let graph: Graph<&str, u32> = [
//!     Edge::new("a", "b", 2),
//!     Edge::new("b", "c", 3),
//!     Edge::new("a", "c", 5),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mst = Kruskal::new(u32::cmp).compute(&graph).unwrap();
//! assert_eq!(mst.len(), 2);
//! assert_eq!(mst.iter().map(|e| e.attr).sum::<u32>(), 5);
//! ```
//!
//! Everything is single-threaded and deterministic: vertex and edge
//! iteration follow insertion order, and the only randomness in the crate
//! (Borůvka's optional tie-break shuffle) is seeded explicitly.

#![forbid(unsafe_code)]

pub mod error;
pub mod geo;
pub mod graph;
pub mod heap;
pub mod mst;
pub mod unionfind;

pub use error::{Error, Result};
pub use graph::{Edge, Graph};
pub use heap::{Heap, Origin, PopStrategy};
pub use mst::{Boruvka, Kruskal, MstAlgorithm, MstResult, Prim};
pub use unionfind::{DisjointSet, VertexSets};
