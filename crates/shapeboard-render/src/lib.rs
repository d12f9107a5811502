//! Shapeboard Render Library
//!
//! Renderer abstraction and implementations for Shapeboard.
//! The default implementation uses Vello for GPU-accelerated rendering.

mod recording;
mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use recording::{DrawCommand, RecordingRenderer};
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError, ShapeRenderer};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
