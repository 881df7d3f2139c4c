//! Depth-first tour construction over a spanning tree.
//!
//! Visiting the tree in pre-order and shortcutting the repeated nodes is
//! the classic "double tree" construction; for metric instances the result
//! is at most twice the optimal tour length.
//!
//! # Complexity
//!
//! O(n) for a tree.

use crate::graph::Adjacency;
use crate::models::Tour;

/// Builds a tour by depth-first pre-order traversal from `start`.
///
/// Neighbors are explored in adjacency-list order, and a node is appended
/// the first time it is reached. The traversal keeps its own stack of
/// `(node, next neighbor)` cursors, so it follows exactly the order a
/// recursive traversal would without depending on call-stack depth.
///
/// Nodes unreachable from `start` are not emitted; over a spanning tree the
/// result is a permutation of all nodes.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::{Adjacency, Edge};
/// use u_tsp::constructive::dfs_tour;
///
/// // 0 - 1 - 2
/// //     |
/// //     3
/// let edges = [Edge::new(1, 0, 1), Edge::new(1, 1, 2), Edge::new(1, 1, 3)];
/// let adj = Adjacency::from_edges(&edges, 4);
/// assert_eq!(dfs_tour(&adj, 0).nodes(), &[0, 1, 2, 3]);
/// ```
pub fn dfs_tour(adjacency: &Adjacency, start: usize) -> Tour {
    let n = adjacency.len();
    if start >= n {
        return Tour::new(Vec::new());
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    visited[start] = true;
    order.push(start);

    while let Some(top) = stack.last_mut() {
        let (node, cursor) = *top;
        match adjacency.neighbors(node).get(cursor) {
            Some(&next) => {
                top.1 += 1;
                if !visited[next] {
                    visited[next] = true;
                    order.push(next);
                    stack.push((next, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    Tour::new(order)
}
