//! Shapeboard Core Library
//!
//! Platform-agnostic shape model, hit testing and click handling for the
//! Shapeboard drawing board.

pub mod canvas;
pub mod color;
pub mod dispatch;
pub mod generator;
pub mod input;
pub mod shapes;

pub use canvas::{Canvas, CanvasDocument, CanvasSettings};
pub use color::{ColorError, ShapeColor};
pub use dispatch::{ClickAction, ClickDispatcher, ClickOutcome};
pub use generator::{GeneratorConfig, ShapeGenerator, ShapeSizes};
pub use input::{InputState, MouseButton, PointerEvent};
pub use shapes::{HitTolerance, Shape, ShapeError, ShapeId, ShapeKind};
