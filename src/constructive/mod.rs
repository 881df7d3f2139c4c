//! Constructive heuristics for building an initial tour.
//!
//! - [`dfs_tour`] — Depth-first pre-order walk of a spanning tree, O(n)

mod dfs;

pub use dfs::dfs_tour;
