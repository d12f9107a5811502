//! Shape definitions for the drawing board.

mod circle;
mod line;
mod rectangle;
mod triangle;

pub use circle::Circle;
pub use line::Line;
pub use rectangle::Rectangle;
pub use triangle::Triangle;

use crate::color::ShapeColor;
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Default distance in pixels within which a click hits a line.
pub const LINE_HIT_TOLERANCE: f64 = 5.0;

/// Shape and shape store errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("{kind} {field} must be finite and non-negative, got {value}")]
    InvalidDimension {
        kind: ShapeKind,
        field: &'static str,
        value: f64,
    },
    #[error("{kind} has a non-finite coordinate")]
    NonFiniteCoordinate { kind: ShapeKind },
    #[error("unknown shape kind: {0}")]
    UnknownKind(String),
    #[error("no shape at index {index} (document holds {len})")]
    MissingShape { index: usize, len: usize },
}

/// Discriminant for the shape variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
    Line,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Line,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Line => "line",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .ok_or(ShapeError::UnknownKind(lower))
    }
}

/// Hit tolerances in pixels.
///
/// `fill` grows filled shapes (rectangles, circles, triangles), `stroke` is
/// the distance under which a point counts as touching a line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitTolerance {
    pub fill: f64,
    pub stroke: f64,
}

impl Default for HitTolerance {
    fn default() -> Self {
        Self {
            fill: 0.0,
            stroke: LINE_HIT_TOLERANCE,
        }
    }
}

/// Distance from a point to a line segment (a -> b).
///
/// The closest point is clamped to the segment ends; a zero-length segment
/// degrades to point distance.
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let pv = point - a;
    let len_sq = seg.hypot2();
    if len_sq == 0.0 {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = a + seg * t;
    (point - proj).hypot()
}

pub(crate) fn check_dimension(kind: ShapeKind, field: &'static str, value: f64) -> Result<(), ShapeError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ShapeError::InvalidDimension { kind, field, value })
    }
}

pub(crate) fn check_points(kind: ShapeKind, points: &[Point]) -> Result<(), ShapeError> {
    if points.iter().all(|p| p.is_finite()) {
        Ok(())
    } else {
        Err(ShapeError::NonFiniteCoordinate { kind })
    }
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the discriminant.
    fn kind(&self) -> ShapeKind;

    /// Get the bounding box in surface coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point (in surface coordinates) hits this shape.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Get the path representation for rendering.
    fn to_path(&self) -> BezPath;

    /// Get the color (fill for areas, stroke for lines).
    fn color(&self) -> ShapeColor;

    /// Check the geometric invariants.
    fn validate(&self) -> Result<(), ShapeError>;
}

/// Enum wrapper over every shape kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Triangle(Triangle),
    Line(Line),
}

impl Shape {
    fn inner(&self) -> &dyn ShapeTrait {
        match self {
            Shape::Rectangle(s) => s,
            Shape::Circle(s) => s,
            Shape::Triangle(s) => s,
            Shape::Line(s) => s,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.inner().id()
    }

    pub fn kind(&self) -> ShapeKind {
        self.inner().kind()
    }

    pub fn bounds(&self) -> Rect {
        self.inner().bounds()
    }

    pub fn color(&self) -> ShapeColor {
        self.inner().color()
    }

    pub fn to_path(&self) -> BezPath {
        self.inner().to_path()
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        self.inner().validate()
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.inner().hit_test(point, tolerance)
    }

    /// Hit test picking the tolerance that applies to this kind.
    pub fn hit_test_with(&self, point: Point, tolerance: &HitTolerance) -> bool {
        let tolerance = if self.is_stroked() {
            tolerance.stroke
        } else {
            tolerance.fill
        };
        self.hit_test(point, tolerance)
    }

    /// Lines are stroked; everything else is filled.
    pub fn is_stroked(&self) -> bool {
        matches!(self, Shape::Line(_))
    }
}

impl From<Rectangle> for Shape {
    fn from(shape: Rectangle) -> Self {
        Shape::Rectangle(shape)
    }
}

impl From<Circle> for Shape {
    fn from(shape: Circle) -> Self {
        Shape::Circle(shape)
    }
}

impl From<Triangle> for Shape {
    fn from(shape: Triangle) -> Self {
        Shape::Triangle(shape)
    }
}

impl From<Line> for Shape {
    fn from(shape: Line) -> Self {
        Shape::Line(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("rectangle".parse::<ShapeKind>().unwrap(), ShapeKind::Rectangle);
        assert_eq!(" Circle".parse::<ShapeKind>().unwrap(), ShapeKind::Circle);
        assert_eq!(
            "hexagon".parse::<ShapeKind>(),
            Err(ShapeError::UnknownKind("hexagon".to_string()))
        );
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.name().parse::<ShapeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_point_to_segment_dist() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!((point_to_segment_dist(Point::new(5.0, 3.0), a, b) - 3.0).abs() < 1e-9);
        // Beyond the end, distance is to the endpoint
        assert!((point_to_segment_dist(Point::new(13.0, 4.0), a, b) - 5.0).abs() < 1e-9);
        assert!((point_to_segment_dist(Point::new(-3.0, -4.0), a, b) - 5.0).abs() < 1e-9);
        // Zero-length segment
        assert!((point_to_segment_dist(Point::new(3.0, 4.0), a, a) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_point_to_short_segment_dist() {
        // A sub-pixel segment is still a segment, not a point
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1e-9, 0.0);
        let dist = point_to_segment_dist(Point::new(0.5e-9, 1e-9), a, b);
        assert!((dist - 1e-9).abs() < 1e-18);
    }

    #[test]
    fn test_hit_test_with_picks_tolerance() {
        let tolerance = HitTolerance::default();
        let line: Shape = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), ShapeColor::BLACK).into();
        assert!(line.hit_test_with(Point::new(50.0, 4.0), &tolerance));

        let rect: Shape = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0, ShapeColor::BLUE).into();
        assert!(!rect.hit_test_with(Point::new(12.0, 5.0), &tolerance));
        let wide = HitTolerance { fill: 3.0, stroke: 0.0 };
        assert!(rect.hit_test_with(Point::new(12.0, 5.0), &wide));
    }
}
