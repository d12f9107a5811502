//! Circle shape.

use super::{ShapeError, ShapeId, ShapeKind, ShapeTrait, check_dimension, check_points};
use crate::color::ShapeColor;
use kurbo::{BezPath, Circle as KurboCircle, Point, Rect, Shape as KurboShape};
use uuid::Uuid;

/// A filled circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Center point.
    pub center: Point,
    /// Radius.
    pub radius: f64,
    /// Fill color.
    pub color: ShapeColor,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: Point, radius: f64, color: ShapeColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius,
            color,
        }
    }

    /// Get as a kurbo Circle.
    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(self.center, self.radius)
    }
}

impl ShapeTrait for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        // Squared distances keep the boundary exact: on the circle means inside.
        let reach = self.radius + tolerance;
        (point - self.center).hypot2() <= reach * reach
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }

    fn color(&self) -> ShapeColor {
        self.color
    }

    fn validate(&self) -> Result<(), ShapeError> {
        check_points(ShapeKind::Circle, &[self.center])?;
        check_dimension(ShapeKind::Circle, "radius", self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_center() {
        let circle = Circle::new(Point::new(300.0, 100.0), 50.0, ShapeColor::RED);
        assert!(circle.hit_test(Point::new(300.0, 100.0), 0.0));
    }

    #[test]
    fn test_hit_test_boundary_is_inclusive() {
        let circle = Circle::new(Point::new(0.0, 0.0), 5.0, ShapeColor::RED);
        assert!(circle.hit_test(Point::new(3.0, 4.0), 0.0));
        assert!(circle.hit_test(Point::new(0.0, -5.0), 0.0));
        assert!(!circle.hit_test(Point::new(3.0, 4.01), 0.0));
    }

    #[test]
    fn test_hit_test_outside() {
        let circle = Circle::new(Point::new(0.0, 0.0), 10.0, ShapeColor::RED);
        assert!(!circle.hit_test(Point::new(15.0, 0.0), 0.0));
        // Inside the bounding box corner but outside the circle
        assert!(!circle.hit_test(Point::new(9.0, 9.0), 0.0));
        assert!(circle.hit_test(Point::new(15.0, 0.0), 5.0));
    }

    #[test]
    fn test_bounds() {
        let circle = Circle::new(Point::new(50.0, 50.0), 30.0, ShapeColor::RED);
        let bounds = circle.bounds();
        assert!((bounds.x0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 80.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate() {
        assert!(Circle::new(Point::new(0.0, 0.0), 0.0, ShapeColor::RED).validate().is_ok());
        assert!(matches!(
            Circle::new(Point::new(0.0, 0.0), -3.0, ShapeColor::RED).validate(),
            Err(ShapeError::InvalidDimension { field: "radius", .. })
        ));
        assert!(Circle::new(Point::new(0.0, 0.0), f64::INFINITY, ShapeColor::RED)
            .validate()
            .is_err());
    }
}
