//! Adjacency lists for an undirected edge set.

use super::Edge;

/// Neighbor lists indexed by node.
///
/// Each edge `(u, v)` appends `v` to `u`'s list and `u` to `v`'s list, in
/// edge order. That order is what the depth-first tour follows.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::{Adjacency, Edge};
///
/// let adj = Adjacency::from_edges(&[Edge::new(1, 0, 1), Edge::new(1, 1, 2)], 3);
/// assert_eq!(adj.neighbors(1), &[0, 2]);
/// assert_eq!(adj.degree(0), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    lists: Vec<Vec<usize>>,
}

impl Adjacency {
    /// Builds the adjacency lists of `n` nodes from an edge list.
    ///
    /// # Panics
    ///
    /// Panics if an edge endpoint is `>= n`.
    pub fn from_edges(edges: &[Edge], n: usize) -> Self {
        let mut lists = vec![Vec::new(); n];
        for e in edges {
            lists[e.u].push(e.v);
            lists[e.v].push(e.u);
        }
        Self { lists }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns `true` if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Neighbors of `node`, in insertion order.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.lists[node]
    }

    /// Number of neighbors of `node`.
    pub fn degree(&self, node: usize) -> usize {
        self.lists[node].len()
    }
}
