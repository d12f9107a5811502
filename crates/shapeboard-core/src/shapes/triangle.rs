//! Triangle shape.

use super::{ShapeError, ShapeId, ShapeKind, ShapeTrait, check_points};
use crate::color::ShapeColor;
use kurbo::{BezPath, Point, Rect};
use uuid::Uuid;

/// Twice the area over the longest squared edge below which a triangle is
/// treated as collinear. Scale-free: it bounds the height relative to the
/// longest edge.
const DEGENERATE_RATIO: f64 = 1e-10;

/// A filled triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub(crate) id: ShapeId,
    /// The three vertices, in drawing order.
    pub vertices: [Point; 3],
    /// Fill color.
    pub color: ShapeColor,
}

impl Triangle {
    /// Create a new triangle.
    pub fn new(a: Point, b: Point, c: Point, color: ShapeColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            vertices: [a, b, c],
            color,
        }
    }

    /// An isosceles triangle around a point: apex `extent` above it, base
    /// `extent` below it and `2 * extent` wide.
    pub fn around(center: Point, extent: f64, color: ShapeColor) -> Self {
        Self::new(
            Point::new(center.x, center.y - extent),
            Point::new(center.x - extent, center.y + extent),
            Point::new(center.x + extent, center.y + extent),
            color,
        )
    }

    /// Twice the signed area; zero for collinear vertices.
    fn denominator(&self) -> f64 {
        let [p1, p2, p3] = self.vertices;
        (p2.y - p3.y) * (p1.x - p3.x) + (p3.x - p2.x) * (p1.y - p3.y)
    }

    /// Squared length of the longest edge.
    fn longest_edge_sq(&self) -> f64 {
        let [a, b, c] = self.vertices;
        (b - a).hypot2().max((c - b).hypot2()).max((a - c).hypot2())
    }

    /// Whether the vertices are collinear (zero area), relative to the
    /// triangle's own size.
    pub fn is_degenerate(&self) -> bool {
        let longest = self.longest_edge_sq();
        longest == 0.0 || self.denominator().abs() <= DEGENERATE_RATIO * longest
    }

    /// Barycentric coordinates of a point, or `None` for a degenerate triangle.
    pub fn barycentric(&self, point: Point) -> Option<(f64, f64, f64)> {
        if self.is_degenerate() {
            return None;
        }
        let denom = self.denominator();
        let [p1, p2, p3] = self.vertices;
        let a = ((p2.y - p3.y) * (point.x - p3.x) + (p3.x - p2.x) * (point.y - p3.y)) / denom;
        let b = ((p3.y - p1.y) * (point.x - p3.x) + (p1.x - p3.x) * (point.y - p3.y)) / denom;
        Some((a, b, 1.0 - a - b))
    }
}

impl ShapeTrait for Triangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }

    fn bounds(&self) -> Rect {
        let [a, b, c] = self.vertices;
        Rect::from_points(a, b).union_pt(c)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let inside = self
            .barycentric(point)
            .is_some_and(|(a, b, c)| a >= 0.0 && b >= 0.0 && c >= 0.0);
        if inside || tolerance <= 0.0 || self.is_degenerate() {
            return inside;
        }
        let [a, b, c] = self.vertices;
        [(a, b), (b, c), (c, a)]
            .into_iter()
            .any(|(p, q)| super::point_to_segment_dist(point, p, q) <= tolerance)
    }

    fn to_path(&self) -> BezPath {
        let [a, b, c] = self.vertices;
        let mut path = BezPath::new();
        path.move_to(a);
        path.line_to(b);
        path.line_to(c);
        path.close_path();
        path
    }

    fn color(&self) -> ShapeColor {
        self.color
    }

    fn validate(&self) -> Result<(), ShapeError> {
        check_points(ShapeKind::Triangle, &self.vertices)
    }
}
