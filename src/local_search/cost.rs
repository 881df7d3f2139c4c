//! Closed-tour cost measures.

use crate::distance::Distances;

/// Total length of the closed tour `t[0] → ... → t[n-1] → t[0]`.
///
/// Zero for tours of fewer than two nodes.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::PointDistances;
/// use u_tsp::local_search::tour_cost;
///
/// let points = vec![
///     Point::new(1, 0.0, 0.0),
///     Point::new(2, 1.0, 0.0),
///     Point::new(3, 2.0, 0.0),
/// ];
/// assert_eq!(tour_cost(&[0, 1, 2], &PointDistances::new(&points)), 4);
/// ```
pub fn tour_cost<D: Distances>(tour: &[usize], distances: &D) -> i64 {
    closed_edges(tour).map(|(a, b)| distances.get(a, b)).sum()
}

/// Longest single edge of the closed tour, or zero for fewer than two nodes.
pub fn max_edge<D: Distances>(tour: &[usize], distances: &D) -> i64 {
    closed_edges(tour)
        .map(|(a, b)| distances.get(a, b))
        .max()
        .unwrap_or(0)
}

fn closed_edges(tour: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let wrap = match tour {
        [first, .., last] => Some((*last, *first)),
        _ => None,
    };
    tour.windows(2).map(|w| (w[0], w[1])).chain(wrap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::PointDistances;
    use crate::models::Point;

    #[test]
    fn test_cost_includes_wraparound() {
        let points = vec![
            Point::new(1, 0.0, 0.0),
            Point::new(2, 3.0, 0.0),
            Point::new(3, 3.0, 4.0),
        ];
        let d = PointDistances::new(&points);
        assert_eq!(tour_cost(&[0, 1, 2], &d), 3 + 4 + 5);
        assert_eq!(max_edge(&[0, 1, 2], &d), 5);
    }

    #[test]
    fn test_degenerate_tours() {
        let points = vec![Point::new(1, 0.0, 0.0), Point::new(2, 0.0, 7.0)];
        let d = PointDistances::new(&points);
        assert_eq!(tour_cost(&[], &d), 0);
        assert_eq!(tour_cost(&[1], &d), 0);
        assert_eq!(max_edge(&[1], &d), 0);
        // There and back.
        assert_eq!(tour_cost(&[0, 1], &d), 14);
        assert_eq!(max_edge(&[0, 1], &d), 7);
    }
}
