//! Minimum spanning tree via Kruskal's algorithm with randomized tie-breaking.
//!
//! # Algorithm
//!
//! 1. Generate every unordered pair `(i, j)`, `i < j`, weighted by the
//!    rounded Euclidean distance.
//! 2. Sort ascending by `(weight, i, j)`.
//! 3. Shuffle each maximal run of equal weight with the caller's RNG, so
//!    degenerate inputs (grids, collinear points) do not always yield the
//!    same tree.
//! 4. Scan in that order, accepting every edge that joins two components,
//!    until `n - 1` edges are accepted.
//!
//! # Complexity
//!
//! O(n²) edges, O(n² log n) for the sort.
//!
//! # Reference
//!
//! Kruskal, J.B. (1956). "On the shortest spanning subtree of a graph and
//! the traveling salesman problem", *Proc. AMS* 7(1), 48-50.

use rand::seq::SliceRandom;
use rand::Rng;

use super::UnionFind;
use crate::distance::Distances;

/// An undirected weighted edge between node indices `u < v`.
///
/// Field order makes the derived ordering sort by weight first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Edge {
    pub weight: i64,
    pub u: usize,
    pub v: usize,
}

impl Edge {
    /// Creates an edge.
    pub fn new(weight: i64, u: usize, v: usize) -> Self {
        Self { weight, u, v }
    }
}

/// Generates every edge of the complete graph, sorted by `(weight, u, v)`.
pub fn candidate_edges<D: Distances>(distances: &D) -> Vec<Edge> {
    let n = distances.size();
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for u in 0..n {
        for v in (u + 1)..n {
            edges.push(Edge::new(distances.get(u, v), u, v));
        }
    }
    edges.sort_unstable();
    edges
}

/// Shuffles each maximal run of equal-weight edges in place.
///
/// `edges` must already be sorted by weight; the relative order of runs is
/// left untouched.
pub fn shuffle_ties<R: Rng + ?Sized>(edges: &mut [Edge], rng: &mut R) {
    for run in edges.chunk_by_mut(|a, b| a.weight == b.weight) {
        if run.len() > 1 {
            run.shuffle(rng);
        }
    }
}

/// Builds a minimum spanning tree over all node indices.
///
/// Returns exactly `n - 1` edges for `n >= 1` (none for `n <= 1`). Which of
/// several equal-weight trees is returned depends only on `rng`, so the
/// same seed reproduces the same tree.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use u_tsp::models::Point;
/// use u_tsp::distance::PointDistances;
/// use u_tsp::graph::{kruskal_mst, mst_weight};
///
/// let points = vec![
///     Point::new(1, 0.0, 0.0),
///     Point::new(2, 1.0, 0.0),
///     Point::new(3, 2.0, 0.0),
/// ];
/// let mut rng = StdRng::seed_from_u64(7);
/// let mst = kruskal_mst(&PointDistances::new(&points), &mut rng);
/// assert_eq!(mst.len(), 2);
/// assert_eq!(mst_weight(&mst), 2);
/// ```
pub fn kruskal_mst<D: Distances, R: Rng + ?Sized>(distances: &D, rng: &mut R) -> Vec<Edge> {
    let n = distances.size();
    if n <= 1 {
        return Vec::new();
    }

    let mut edges = candidate_edges(distances);
    shuffle_ties(&mut edges, rng);

    let mut uf = UnionFind::new(n);
    let mut tree = Vec::with_capacity(n - 1);
    for edge in edges {
        if uf.unite(edge.u, edge.v) {
            tree.push(edge);
            if tree.len() == n - 1 {
                break;
            }
        }
    }

    debug_assert_eq!(tree.len(), n - 1, "complete graph must span all nodes");
    tree
}

/// Sum of edge weights.
pub fn mst_weight(edges: &[Edge]) -> i64 {
    edges.iter().map(|e| e.weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{DistanceMatrix, PointDistances};
    use crate::models::Point;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid(side: usize) -> Vec<Point> {
        let mut points = Vec::new();
        for r in 0..side {
            for c in 0..side {
                points.push(Point::new(points.len() as i64 + 1, c as f64, r as f64));
            }
        }
        points
    }

    fn is_spanning_tree(edges: &[Edge], n: usize) -> bool {
        if edges.len() != n.saturating_sub(1) {
            return false;
        }
        let mut uf = UnionFind::new(n);
        for e in edges {
            if !uf.unite(e.u, e.v) {
                return false; // cycle
            }
        }
        uf.component_count() <= 1
    }

    #[test]
    fn test_candidate_edges_count_and_order() {
        let points = grid(3);
        let edges = candidate_edges(&PointDistances::new(&points));
        assert_eq!(edges.len(), 9 * 8 / 2);
        assert!(edges.windows(2).all(|w| w[0] <= w[1]));
        assert!(edges.iter().all(|e| e.u < e.v));
    }

    #[test]
    fn test_shuffle_ties_keeps_weight_order() {
        let points = grid(4);
        let mut edges = candidate_edges(&PointDistances::new(&points));
        let mut sorted = edges.clone();
        let mut rng = StdRng::seed_from_u64(3);
        shuffle_ties(&mut edges, &mut rng);
        assert!(edges.windows(2).all(|w| w[0].weight <= w[1].weight));
        // Same multiset of edges.
        let mut shuffled = edges.clone();
        shuffled.sort_unstable();
        sorted.sort_unstable();
        assert_eq!(shuffled, sorted);
    }

    #[test]
    fn test_mst_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(kruskal_mst(&PointDistances::new(&[]), &mut rng).is_empty());
        let one = vec![Point::new(1, 5.0, 5.0)];
        assert!(kruskal_mst(&PointDistances::new(&one), &mut rng).is_empty());
    }

    #[test]
    fn test_mst_collinear_is_path() {
        let points = vec![
            Point::new(1, 0.0, 0.0),
            Point::new(2, 1.0, 0.0),
            Point::new(3, 2.0, 0.0),
        ];
        let mut rng = StdRng::seed_from_u64(11);
        let mut mst = kruskal_mst(&PointDistances::new(&points), &mut rng);
        mst.sort_unstable();
        assert_eq!(mst, vec![Edge::new(1, 0, 1), Edge::new(1, 1, 2)]);
    }

    #[test]
    fn test_mst_grid_weight() {
        // Any spanning tree of a unit grid has n - 1 unit edges.
        let points = grid(5);
        let mut rng = StdRng::seed_from_u64(42);
        let mst = kruskal_mst(&DistanceMatrix::from_points(&points), &mut rng);
        assert!(is_spanning_tree(&mst, points.len()));
        assert_eq!(mst_weight(&mst), 24);
    }

    #[test]
    fn test_mst_seed_reproducible() {
        let points = grid(6);
        let d = PointDistances::new(&points);
        let a = kruskal_mst(&d, &mut StdRng::seed_from_u64(99));
        let b = kruskal_mst(&d, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_mst_seed_varies_tree_on_ties() {
        let points = grid(6);
        let d = PointDistances::new(&points);
        let reference = kruskal_mst(&d, &mut StdRng::seed_from_u64(0));
        let differs =
            (1..20u64).any(|s| kruskal_mst(&d, &mut StdRng::seed_from_u64(s)) != reference);
        assert!(differs, "tie shuffling should vary the tree on a grid");
    }

    #[test]
    fn test_mst_duplicate_points() {
        let points = vec![
            Point::new(1, 1.0, 1.0),
            Point::new(2, 1.0, 1.0),
            Point::new(3, 4.0, 5.0),
        ];
        let mut rng = StdRng::seed_from_u64(5);
        let mst = kruskal_mst(&PointDistances::new(&points), &mut rng);
        assert!(is_spanning_tree(&mst, 3));
        assert_eq!(mst_weight(&mst), 5);
    }
}
