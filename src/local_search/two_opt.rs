//! Bounded best-improvement 2-opt.
//!
//! # Algorithm
//!
//! For each pair of tour positions `1 <= i < j < n - 1`, with
//! `a = t[i-1]`, `b = t[i]`, `c = t[j]`, `d = t[j+1]`, compute
//!
//! ```text
//! gain = d(a, b) + d(c, d) - d(a, c) - d(b, d)
//! ```
//!
//! A pass scans every pair, then reverses `t[i..=j]` for the single pair
//! with the largest positive gain (best-improvement). Passes repeat until
//! one finds no positive gain or the iteration cap is reached.
//!
//! The first and last tour positions never move, so the closing edge
//! `t[n-1] → t[0]` is never exchanged and the closed tour shrinks by
//! exactly the applied gain.
//!
//! # Complexity
//!
//! O(n²) per pass, O(cap · n²) overall.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::Distances;

/// Cap on 2-opt passes used by the default solver configuration.
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// A candidate segment reversal and its cost reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    /// First position of the reversed segment.
    pub i: usize,
    /// Last position of the reversed segment (inclusive).
    pub j: usize,
    /// Reduction in tour length if applied.
    pub gain: i64,
}

/// What a 2-opt run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TwoOptOutcome {
    /// Passes performed, including the final non-improving one.
    pub passes: usize,
    /// Segment reversals applied.
    pub exchanges: usize,
    /// Total reduction in closed tour length.
    pub gain: i64,
}

impl TwoOptOutcome {
    /// Returns `true` if the run stopped at a local optimum rather than at
    /// the iteration cap.
    pub fn converged(&self) -> bool {
        self.passes > self.exchanges
    }
}

/// Finds the exchange with the strictly largest positive gain.
///
/// Ties keep the first pair in scan order (`i` ascending, then `j`).
/// Returns `None` when no exchange shortens the tour, which is always the
/// case for tours of fewer than four nodes.
pub fn best_exchange<D: Distances>(tour: &[usize], distances: &D) -> Option<Exchange> {
    let n = tour.len();
    let mut best: Option<Exchange> = None;
    let mut best_gain = 0;

    for i in 1..n.saturating_sub(1) {
        let a = tour[i - 1];
        let b = tour[i];
        let d_ab = distances.get(a, b);
        for j in (i + 1)..(n - 1) {
            let c = tour[j];
            let d = tour[j + 1];
            let gain = d_ab + distances.get(c, d) - distances.get(a, c) - distances.get(b, d);
            if gain > best_gain {
                best_gain = gain;
                best = Some(Exchange { i, j, gain });
            }
        }
    }

    best
}

/// Improves `tour` in place with at most `max_iterations` 2-opt passes.
///
/// Never drops or duplicates nodes: each applied exchange only reverses a
/// contiguous range. The tour length never increases between passes.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::PointDistances;
/// use u_tsp::local_search::{tour_cost, two_opt_improve};
///
/// let points = vec![
///     Point::new(1, 0.0, 0.0),
///     Point::new(2, 0.0, 10.0),
///     Point::new(3, 10.0, 10.0),
///     Point::new(4, 10.0, 0.0),
/// ];
/// let d = PointDistances::new(&points);
///
/// // Crossing order: 0 → 2 → 1 → 3
/// let mut tour = vec![0, 2, 1, 3];
/// let outcome = two_opt_improve(&mut tour, &d, 50);
/// assert_eq!(tour, vec![0, 1, 2, 3]);
/// assert_eq!(outcome.exchanges, 1);
/// assert_eq!(tour_cost(&tour, &d), 40);
/// ```
pub fn two_opt_improve<D: Distances>(
    tour: &mut [usize],
    distances: &D,
    max_iterations: usize,
) -> TwoOptOutcome {
    let mut outcome = TwoOptOutcome::default();
    let mut improved = true;

    while improved && outcome.passes < max_iterations {
        improved = false;
        outcome.passes += 1;

        if let Some(exchange) = best_exchange(tour, distances) {
            tour[exchange.i..=exchange.j].reverse();
            outcome.exchanges += 1;
            outcome.gain += exchange.gain;
            improved = true;
            log::trace!(
                "2-opt pass {}: reversed [{}..={}], gain {}",
                outcome.passes,
                exchange.i,
                exchange.j,
                exchange.gain
            );
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{DistanceMatrix, PointDistances};
    use crate::local_search::tour_cost;
    use crate::models::Point;

    fn square(side: f64) -> Vec<Point> {
        vec![
            Point::new(1, 0.0, 0.0),
            Point::new(2, 0.0, side),
            Point::new(3, side, side),
            Point::new(4, side, 0.0),
        ]
    }

    #[test]
    fn test_unit_square_no_improvement() {
        let points = square(1.0);
        let d = PointDistances::new(&points);
        for start in [vec![0, 1, 2, 3], vec![0, 2, 1, 3], vec![0, 1, 3, 2]] {
            let mut tour = start.clone();
            let outcome = two_opt_improve(&mut tour, &d, 50);
            assert_eq!(tour, start);
            assert_eq!(outcome.exchanges, 0);
            assert_eq!(outcome.passes, 1);
            assert_eq!(tour_cost(&tour, &d), 4);
        }
    }

    #[test]
    fn test_fixes_crossing() {
        let points = square(10.0);
        let d = DistanceMatrix::from_points(&points);
        let mut tour = vec![0, 2, 1, 3];
        let before = tour_cost(&tour, &d);
        let outcome = two_opt_improve(&mut tour, &d, 50);
        assert_eq!(before, 48);
        assert_eq!(tour, vec![0, 1, 2, 3]);
        assert_eq!(outcome.gain, 8);
        assert_eq!(outcome.passes, 2);
        assert!(outcome.converged());
    }

    #[test]
    fn test_three_nodes_untouched() {
        let points = vec![
            Point::new(1, 0.0, 0.0),
            Point::new(2, 1.0, 0.0),
            Point::new(3, 2.0, 0.0),
        ];
        let d = PointDistances::new(&points);
        let mut tour = vec![0, 1, 2];
        assert!(best_exchange(&tour, &d).is_none());
        let outcome = two_opt_improve(&mut tour, &d, 50);
        assert_eq!(tour, vec![0, 1, 2]);
        assert_eq!(outcome.exchanges, 0);
        assert_eq!(tour_cost(&tour, &d), 4);
    }

    #[test]
    fn test_tiny_tours() {
        let points = square(1.0);
        let d = PointDistances::new(&points);
        let mut empty: Vec<usize> = Vec::new();
        assert_eq!(two_opt_improve(&mut empty, &d, 50).exchanges, 0);
        let mut one = vec![2];
        assert_eq!(two_opt_improve(&mut one, &d, 50).exchanges, 0);
        let mut two = vec![1, 0];
        assert_eq!(two_opt_improve(&mut two, &d, 50).exchanges, 0);
    }

    #[test]
    fn test_zero_cap_does_nothing() {
        let points = square(10.0);
        let d = PointDistances::new(&points);
        let mut tour = vec![0, 2, 1, 3];
        let outcome = two_opt_improve(&mut tour, &d, 0);
        assert_eq!(tour, vec![0, 2, 1, 3]);
        assert_eq!(outcome, TwoOptOutcome::default());
    }

    #[test]
    fn test_cap_bounds_exchanges() {
        // Points on a circle visited in a scrambled order need several exchanges.
        let points: Vec<Point> = (0..12)
            .map(|k| {
                let a = k as f64 * std::f64::consts::TAU / 12.0;
                Point::new(k, 100.0 * a.cos(), 100.0 * a.sin())
            })
            .collect();
        let d = DistanceMatrix::from_points(&points);
        let start = vec![0, 5, 2, 9, 1, 7, 3, 11, 4, 8, 6, 10];

        let mut capped = start.clone();
        let one = two_opt_improve(&mut capped, &d, 1);
        assert_eq!(one.passes, 1);
        assert_eq!(one.exchanges, 1);
        assert!(!one.converged());

        let mut full = start.clone();
        let all = two_opt_improve(&mut full, &d, 1000);
        assert!(all.exchanges > 1);
        assert!(tour_cost(&full, &d) < tour_cost(&capped, &d));
    }

    #[test]
    fn test_best_not_first_improvement() {
        let points = square(10.0);
        let d = PointDistances::new(&points);
        let tour = vec![0, 2, 1, 3];
        let best = best_exchange(&tour, &d).expect("crossing has a gain");
        assert_eq!((best.i, best.j, best.gain), (1, 2, 8));
    }
}
