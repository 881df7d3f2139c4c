//! Tour type: an ordering of node indices.

use crate::distance::Distances;

use super::Point;

/// A Hamiltonian tour stored in open form.
///
/// `nodes` is a permutation of `0..n`; the closing edge from the last node
/// back to the first is implied and counted by [`Tour::cost`].
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Point, Tour};
/// use u_tsp::distance::PointDistances;
///
/// let points = vec![
///     Point::new(1, 0.0, 0.0),
///     Point::new(2, 0.0, 1.0),
///     Point::new(3, 1.0, 1.0),
///     Point::new(4, 1.0, 0.0),
/// ];
/// let tour = Tour::new(vec![0, 1, 2, 3]);
/// let d = PointDistances::new(&points);
/// assert_eq!(tour.cost(&d), 4);
/// assert_eq!(tour.closed(), vec![0, 1, 2, 3, 0]);
/// assert_eq!(tour.ids(&points), vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    nodes: Vec<usize>,
}

impl Tour {
    /// Wraps an ordering of node indices.
    pub fn new(nodes: Vec<usize>) -> Self {
        Self { nodes }
    }

    /// Node indices in visit order.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Mutable access for in-place improvement.
    pub fn nodes_mut(&mut self) -> &mut [usize] {
        &mut self.nodes
    }

    /// Number of nodes visited.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tour visits nothing.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Closed-cycle form: the first node repeated at the end.
    pub fn closed(&self) -> Vec<usize> {
        let mut closed = self.nodes.clone();
        if let Some(&first) = self.nodes.first() {
            closed.push(first);
        }
        closed
    }

    /// Total length of the closed cycle, including the wraparound edge.
    pub fn cost<D: Distances>(&self, distances: &D) -> i64 {
        crate::local_search::tour_cost(&self.nodes, distances)
    }

    /// Longest single edge of the closed cycle.
    pub fn max_edge<D: Distances>(&self, distances: &D) -> i64 {
        crate::local_search::max_edge(&self.nodes, distances)
    }

    /// Returns `true` if the tour visits every index in `0..n` exactly once.
    pub fn is_permutation(&self, n: usize) -> bool {
        if self.nodes.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &node in &self.nodes {
            if node >= n || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        true
    }

    /// Maps node indices to the ids of the points they address.
    ///
    /// # Panics
    ///
    /// Panics if any node index is out of bounds for `points`.
    pub fn ids(&self, points: &[Point]) -> Vec<i64> {
        self.nodes.iter().map(|&i| points[i].id()).collect()
    }

    /// Consumes the tour, returning the node indices.
    pub fn into_nodes(self) -> Vec<usize> {
        self.nodes
    }
}
