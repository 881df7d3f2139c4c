//! Problem instance as loaded from an input source.

use serde::{Deserialize, Serialize};

use super::Point;

/// A named set of points to be toured.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Instance, Point};
///
/// let inst = Instance::new("square", vec![
///     Point::new(1, 0.0, 0.0),
///     Point::new(2, 0.0, 1.0),
/// ]);
/// assert_eq!(inst.name(), "square");
/// assert_eq!(inst.len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    name: String,
    points: Vec<Point>,
}

impl Instance {
    /// Creates an instance from its name and points.
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Instance name (empty if the source did not declare one).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Points in input order; position is the internal node index.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the instance, returning its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the instance has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_empty() {
        let inst = Instance::new("", Vec::new());
        assert!(inst.is_empty());
        assert_eq!(inst.len(), 0);
        assert_eq!(inst.name(), "");
    }

    #[test]
    fn test_into_points_keeps_order() {
        let inst = Instance::new(
            "t",
            vec![Point::new(3, 1.0, 1.0), Point::new(1, 2.0, 2.0)],
        );
        let ids: Vec<i64> = inst.into_points().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
