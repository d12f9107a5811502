//! Renderer trait abstraction.

use kurbo::{Affine, Rect, Size};
use peniko::Color;
use shapeboard_core::canvas::CanvasDocument;
use shapeboard_core::shapes::Shape;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The shapes to draw, bottom to top.
    pub document: &'a CanvasDocument,
    /// Viewport size in physical pixels.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Color the surface is cleared to.
    pub background_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(document: &'a CanvasDocument, viewport_size: Size) -> Self {
        Self {
            document,
            viewport_size,
            scale_factor: 1.0,
            background_color: Color::WHITE,
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Logical-to-physical transform applied to every shape.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale_factor)
    }

    /// The full surface in physical pixels.
    pub fn viewport_rect(&self) -> Rect {
        Rect::from_origin_size((0.0, 0.0), self.viewport_size)
    }
}

/// Trait for rendering backends.
///
/// Every frame is a full redraw: the whole surface is cleared, then every
/// shape is drawn in insertion order.
pub trait Renderer: Send + Sync {
    /// Build the scene/command buffer for a frame.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

/// Drawing primitives a backend provides.
pub trait ShapeRenderer {
    /// Fill the whole viewport with a color.
    fn clear(&mut self, viewport: Rect, color: Color);

    /// Fill or stroke a single shape.
    fn render_shape(&mut self, shape: &Shape, transform: Affine);

    /// Clear, then draw every shape of the document bottom to top.
    fn render_document(&mut self, ctx: &RenderContext) {
        self.clear(ctx.viewport_rect(), ctx.background_color);
        let transform = ctx.transform();
        for shape in ctx.document.shapes_ordered() {
            self.render_shape(shape, transform);
        }
    }
}
