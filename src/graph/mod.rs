//! Spanning-tree construction.
//!
//! - [`UnionFind`] — Disjoint-set forest with path compression and union by rank
//! - [`kruskal_mst`] — Kruskal's MST with seeded tie shuffling, O(n² log n)
//! - [`Adjacency`] — Neighbor lists for the resulting tree

mod adjacency;
mod mst;
mod union_find;

pub use adjacency::Adjacency;
pub use mst::{candidate_edges, kruskal_mst, mst_weight, shuffle_ties, Edge};
pub use union_find::UnionFind;
