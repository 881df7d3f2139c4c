//! On-demand distances computed from point coordinates.

use super::{euclidean, Distances};
use crate::models::Point;

/// Distances evaluated from the points on every lookup.
///
/// Uses no memory beyond the borrowed slice, at the price of a square root
/// per query. Preferred over [`DistanceMatrix`](super::DistanceMatrix) once
/// an n×n table no longer fits comfortably in memory.
#[derive(Debug, Clone, Copy)]
pub struct PointDistances<'a> {
    points: &'a [Point],
}

impl<'a> PointDistances<'a> {
    /// Borrows the points to measure between.
    pub fn new(points: &'a [Point]) -> Self {
        Self { points }
    }
}

impl Distances for PointDistances<'_> {
    fn size(&self) -> usize {
        self.points.len()
    }

    fn get(&self, from: usize, to: usize) -> i64 {
        euclidean(&self.points[from], &self.points[to])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_lookup() {
        let points = vec![Point::new(1, 0.0, 0.0), Point::new(2, 3.0, 4.0)];
        let d = PointDistances::new(&points);
        assert_eq!(d.size(), 2);
        assert_eq!(d.get(0, 1), 5);
        assert_eq!(d.get(1, 0), 5);
        assert_eq!(d.get(1, 1), 0);
    }
}
