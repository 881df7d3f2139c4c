//! Labeled 2-D point type.

use serde::{Deserialize, Serialize};

use crate::distance::euclidean;

/// Largest coordinate magnitude the solver accepts.
///
/// Two points inside the box are at most `2√2 · 1e9` apart, so a closed
/// tour over any point count that fits in memory sums well inside `i64`.
pub const MAX_COORDINATE: f64 = 1.0e9;

/// A labeled location in the plane.
///
/// The `id` is the caller's label and is what ends up in the output tour.
/// Algorithms address points by their position in the input slice instead,
/// so ids need not be contiguous, positive or start at zero.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
///
/// let a = Point::new(1, 0.0, 0.0);
/// let b = Point::new(2, 3.0, 4.0);
/// assert_eq!(a.id(), 1);
/// assert_eq!(a.distance_to(&b), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    id: i64,
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(id: i64, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Caller-facing label.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// True when both coordinates are finite and within
    /// [`MAX_COORDINATE`] of the origin.
    pub fn in_bounds(&self) -> bool {
        self.x.abs() <= MAX_COORDINATE && self.y.abs() <= MAX_COORDINATE
    }

    /// Rounded Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> i64 {
        euclidean(self, other)
    }
}
