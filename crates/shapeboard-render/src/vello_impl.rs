//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, Renderer, ShapeRenderer};
use kurbo::{Affine, Rect, Stroke};
use peniko::{Color, Fill};
use shapeboard_core::shapes::Shape;
use vello::Scene;

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self { scene: Scene::new() }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.scene.reset();
        self.render_document(ctx);
    }
}

impl ShapeRenderer for VelloRenderer {
    fn clear(&mut self, viewport: Rect, color: Color) {
        self.scene.fill(Fill::NonZero, Affine::IDENTITY, color, None, &viewport);
    }

    fn render_shape(&mut self, shape: &Shape, transform: Affine) {
        let path = shape.to_path();
        let color = Color::from(shape.color());
        match shape {
            Shape::Line(line) => {
                let stroke = Stroke::new(line.width);
                self.scene.stroke(&stroke, transform, color, None, &path);
            }
            _ => {
                self.scene.fill(Fill::NonZero, transform, color, None, &path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Size};
    use shapeboard_core::canvas::CanvasDocument;
    use shapeboard_core::color::ShapeColor;
    use shapeboard_core::shapes::Rectangle;

    #[test]
    fn test_renderer_creation() {
        let renderer = VelloRenderer::new();
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_empty_scene_still_clears() {
        let mut renderer = VelloRenderer::new();
        let doc = CanvasDocument::new();
        let ctx = RenderContext::new(&doc, Size::new(800.0, 600.0));

        renderer.build_scene(&ctx);
        assert!(!renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_scene_with_shapes() {
        let mut renderer = VelloRenderer::new();
        let mut doc = CanvasDocument::new();
        let rect = Rectangle::new(Point::new(100.0, 100.0), 200.0, 150.0, ShapeColor::BLUE);
        doc.add_shape(Shape::Rectangle(rect)).unwrap();

        let ctx = RenderContext::new(&doc, Size::new(800.0, 600.0)).with_scale_factor(2.0);
        renderer.build_scene(&ctx);
        let scene = renderer.take_scene();
        assert!(!scene.encoding().is_empty());
        assert!(renderer.scene().encoding().is_empty());
    }
}
