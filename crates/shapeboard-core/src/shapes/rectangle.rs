//! Rectangle shape.

use super::{ShapeError, ShapeId, ShapeKind, ShapeTrait, check_dimension, check_points};
use crate::color::ShapeColor;
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use uuid::Uuid;

/// An axis-aligned filled rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Top-left corner position.
    pub origin: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
    /// Fill color.
    pub color: ShapeColor,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(origin: Point, width: f64, height: f64, color: ShapeColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin,
            width,
            height,
            color,
        }
    }

    /// Create a rectangle of the given size centered on a point.
    pub fn centered(center: Point, width: f64, height: f64, color: ShapeColor) -> Self {
        let origin = Point::new(center.x - width / 2.0, center.y - height / 2.0);
        Self::new(origin, width, height, color)
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + self.height,
        )
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        // kurbo's Rect::contains excludes the far edges; every edge counts here.
        let rect = self.as_rect().inflate(tolerance, tolerance);
        point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
    }

    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }

    fn color(&self) -> ShapeColor {
        self.color
    }

    fn validate(&self) -> Result<(), ShapeError> {
        check_points(ShapeKind::Rectangle, &[self.origin])?;
        check_dimension(ShapeKind::Rectangle, "width", self.width)?;
        check_dimension(ShapeKind::Rectangle, "height", self.height)
    }
}
