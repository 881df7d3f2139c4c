//! Dense distance matrix.

use super::{euclidean, Distances};
use crate::models::Point;

/// A dense n×n integer distance matrix stored in row-major order.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::{DistanceMatrix, Distances};
///
/// let points = vec![
///     Point::new(1, 0.0, 0.0),
///     Point::new(2, 3.0, 4.0),
///     Point::new(3, 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert_eq!(dm.get(0, 1), 5);
/// assert_eq!(dm.get(0, 2), 10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<i64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the rounded Euclidean matrix from point coordinates.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut dm = Self {
            data: vec![0; n * n],
            size: n,
        };
        for i in 0..n {
            for j in (i + 1)..n {
                let d = euclidean(&points[i], &points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    fn set(&mut self, from: usize, to: usize, distance: i64) {
        self.data[from * self.size + to] = distance;
    }
}

impl Distances for DistanceMatrix {
    fn size(&self) -> usize {
        self.size
    }

    fn get(&self, from: usize, to: usize) -> i64 {
        self.data[from * self.size + to]
    }
}
