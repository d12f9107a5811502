//! A renderer that records draw calls instead of rasterizing them.

use crate::renderer::{RenderContext, Renderer, ShapeRenderer};
use kurbo::{Affine, BezPath, Rect};
use peniko::Color;
use shapeboard_core::color::ShapeColor;
use shapeboard_core::shapes::{Shape, ShapeId};

/// One recorded drawing operation.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Clear {
        rect: Rect,
        color: Color,
    },
    Fill {
        id: ShapeId,
        path: BezPath,
        transform: Affine,
        color: ShapeColor,
    },
    Stroke {
        id: ShapeId,
        path: BezPath,
        transform: Affine,
        color: ShapeColor,
        width: f64,
    },
}

impl DrawCommand {
    /// The shape this command draws, if any.
    pub fn shape_id(&self) -> Option<ShapeId> {
        match self {
            DrawCommand::Clear { .. } => None,
            DrawCommand::Fill { id, .. } | DrawCommand::Stroke { id, .. } => Some(*id),
        }
    }
}

/// Records the commands of the last built frame.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the most recent frame.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Renderer for RecordingRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.commands.clear();
        self.render_document(ctx);
    }
}

impl ShapeRenderer for RecordingRenderer {
    fn clear(&mut self, viewport: Rect, color: Color) {
        self.commands.push(DrawCommand::Clear { rect: viewport, color });
    }

    fn render_shape(&mut self, shape: &Shape, transform: Affine) {
        let id = shape.id();
        let path = shape.to_path();
        let color = shape.color();
        let command = match shape {
            Shape::Line(line) => DrawCommand::Stroke {
                id,
                path,
                transform,
                color,
                width: line.width,
            },
            _ => DrawCommand::Fill {
                id,
                path,
                transform,
                color,
            },
        };
        self.commands.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Size};
    use shapeboard_core::canvas::CanvasDocument;

    #[test]
    fn test_redraw_clears_then_draws_in_order() {
        let doc = CanvasDocument::with_initial_shapes(Size::new(800.0, 600.0));
        let mut renderer = RecordingRenderer::new();
        renderer.build_scene(&RenderContext::new(&doc, Size::new(800.0, 600.0)));

        let commands = renderer.commands();
        assert_eq!(commands.len(), 5);
        assert!(matches!(commands[0], DrawCommand::Clear { rect, .. } if rect == Rect::new(0.0, 0.0, 800.0, 600.0)));
        let drawn: Vec<ShapeId> = commands[1..].iter().filter_map(DrawCommand::shape_id).collect();
        let expected: Vec<ShapeId> = doc.shapes_ordered().map(Shape::id).collect();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_lines_are_stroked_and_areas_filled() {
        let doc = CanvasDocument::with_initial_shapes(Size::new(800.0, 600.0));
        let mut renderer = RecordingRenderer::new();
        renderer.build_scene(&RenderContext::new(&doc, Size::new(800.0, 600.0)));

        let commands = renderer.commands();
        assert!(commands[1..4].iter().all(|c| matches!(c, DrawCommand::Fill { .. })));
        assert!(matches!(
            commands[4],
            DrawCommand::Stroke { color: ShapeColor::YELLOW, width, .. } if (width - 1.0).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn test_empty_document_only_clears() {
        let mut doc = CanvasDocument::with_initial_shapes(Size::new(800.0, 600.0));
        let mut renderer = RecordingRenderer::new();
        renderer.build_scene(&RenderContext::new(&doc, Size::new(800.0, 600.0)));
        assert_eq!(renderer.commands().len(), 5);

        doc.clear();
        renderer.build_scene(&RenderContext::new(&doc, Size::new(800.0, 600.0)));
        assert_eq!(renderer.commands().len(), 1);
        assert!(matches!(renderer.commands()[0], DrawCommand::Clear { .. }));
    }

    #[test]
    fn test_scale_factor_applied() {
        let mut doc = CanvasDocument::new();
        doc.add_shape(
            shapeboard_core::shapes::Circle::new(Point::new(10.0, 10.0), 5.0, ShapeColor::RED).into(),
        )
        .unwrap();
        let mut renderer = RecordingRenderer::new();
        let ctx = RenderContext::new(&doc, Size::new(1600.0, 1200.0)).with_scale_factor(2.0);
        renderer.build_scene(&ctx);

        let DrawCommand::Fill { transform, .. } = &renderer.commands()[1] else {
            panic!("expected a fill");
        };
        assert_eq!(*transform * Point::new(10.0, 10.0), Point::new(20.0, 20.0));
    }
}
