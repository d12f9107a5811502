//! Click resolution: remove what was hit, or add something new.

use crate::canvas::CanvasDocument;
use crate::shapes::{HitTolerance, Shape, ShapeId};
use kurbo::Point;
use std::fmt;

/// What a click will do to the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickAction {
    /// Remove the topmost shape under the pointer.
    RemoveShape { index: usize },
    /// Nothing was hit; add a random shape centered here.
    AddShape { position: Point },
}

/// What a click did to the board.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    Removed { index: usize, shape: Shape },
    Added { index: usize, id: ShapeId },
}

impl fmt::Display for ClickOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClickOutcome::Removed { index, shape } => {
                write!(f, "removed {} at index {}", shape.kind(), index)
            }
            ClickOutcome::Added { index, id } => write!(f, "added shape {} at index {}", id, index),
        }
    }
}

/// Stateless click resolver.
///
/// The board has a single resting state; every click resolves to exactly one
/// action and returns to it.
pub struct ClickDispatcher;

impl ClickDispatcher {
    pub fn resolve(document: &CanvasDocument, point: Point, tolerance: &HitTolerance) -> ClickAction {
        match document.shape_at(point, tolerance) {
            Some(index) => ClickAction::RemoveShape { index },
            None => ClickAction::AddShape { position: point },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ShapeColor;
    use crate::shapes::{Circle, Line, Rectangle};
    use kurbo::Size;

    #[test]
    fn test_empty_document_adds() {
        let doc = CanvasDocument::new();
        let point = Point::new(10.0, 10.0);
        assert_eq!(
            ClickDispatcher::resolve(&doc, point, &HitTolerance::default()),
            ClickAction::AddShape { position: point }
        );
    }

    #[test]
    fn test_hit_resolves_to_topmost() {
        let mut doc = CanvasDocument::new();
        doc.add_shape(Rectangle::new(Point::new(0.0, 0.0), 100.0, 100.0, ShapeColor::BLUE).into())
            .unwrap();
        doc.add_shape(Circle::new(Point::new(50.0, 50.0), 20.0, ShapeColor::RED).into())
            .unwrap();
        let tolerance = HitTolerance::default();

        assert_eq!(
            ClickDispatcher::resolve(&doc, Point::new(50.0, 50.0), &tolerance),
            ClickAction::RemoveShape { index: 1 }
        );
        assert_eq!(
            ClickDispatcher::resolve(&doc, Point::new(5.0, 5.0), &tolerance),
            ClickAction::RemoveShape { index: 0 }
        );
    }

    #[test]
    fn test_line_on_top_of_initial_board() {
        let doc = CanvasDocument::with_initial_shapes(Size::new(800.0, 600.0));
        // (100, 75) is inside the rectangle and on the diagonal line
        assert_eq!(
            ClickDispatcher::resolve(&doc, Point::new(100.0, 75.0), &HitTolerance::default()),
            ClickAction::RemoveShape { index: 3 }
        );
        // Circle only
        assert_eq!(
            ClickDispatcher::resolve(&doc, Point::new(300.0, 60.0), &HitTolerance::default()),
            ClickAction::RemoveShape { index: 1 }
        );
    }

    #[test]
    fn test_near_miss_on_line_adds() {
        let mut doc = CanvasDocument::new();
        doc.add_shape(Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), ShapeColor::BLACK).into())
            .unwrap();
        let point = Point::new(50.0, 5.0);
        assert_eq!(
            ClickDispatcher::resolve(&doc, point, &HitTolerance::default()),
            ClickAction::AddShape { position: point }
        );
    }

    #[test]
    fn test_outcome_display() {
        let shape: Shape = Circle::new(Point::ZERO, 1.0, ShapeColor::RED).into();
        let outcome = ClickOutcome::Removed { index: 2, shape };
        assert_eq!(outcome.to_string(), "removed circle at index 2");
    }
}
