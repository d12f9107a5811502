//! Line shape.

use super::{ShapeError, ShapeId, ShapeKind, ShapeTrait, check_dimension, check_points, point_to_segment_dist};
use crate::color::ShapeColor;
use kurbo::{BezPath, Line as KurboLine, Point, Rect};
use uuid::Uuid;

/// A stroked line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub(crate) id: ShapeId,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Stroke width.
    pub width: f64,
    /// Stroke color.
    pub color: ShapeColor,
}

impl Line {
    /// Stroke width used when none is given.
    pub const DEFAULT_WIDTH: f64 = 1.0;

    /// Create a new line.
    pub fn new(start: Point, end: Point, color: ShapeColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            width: Self::DEFAULT_WIDTH,
            color,
        }
    }

    /// Set the stroke width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        (self.end - self.start).hypot()
    }

    /// Get as a kurbo Line.
    pub fn as_kurbo(&self) -> KurboLine {
        KurboLine::new(self.start, self.end)
    }
}

impl ShapeTrait for Line {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    /// A point hits when it is strictly closer than `tolerance` to the segment.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        point_to_segment_dist(point, self.start, self.end) < tolerance
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        path.line_to(self.end);
        path
    }

    fn color(&self) -> ShapeColor {
        self.color
    }

    fn validate(&self) -> Result<(), ShapeError> {
        check_points(ShapeKind::Line, &[self.start, self.end])?;
        check_dimension(ShapeKind::Line, "width", self.width)
    }
}
