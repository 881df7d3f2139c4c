//! Rounded Euclidean metric.

use crate::models::Point;

/// Euclidean distance between two points, rounded to the nearest integer.
///
/// Halfway cases round away from zero (`f64::round`), so a distance of
/// exactly 2.5 becomes 3.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::euclidean;
///
/// let a = Point::new(1, 0.0, 0.0);
/// let b = Point::new(2, 1.0, 1.0);
/// assert_eq!(euclidean(&a, &b), 1); // sqrt(2) ≈ 1.414
/// assert_eq!(euclidean(&a, &b), euclidean(&b, &a));
/// ```
pub fn euclidean(a: &Point, b: &Point) -> i64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    (dx * dx + dy * dy).sqrt().round() as i64
}
