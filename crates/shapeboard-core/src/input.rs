//! Pointer input state and click detection.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum pointer travel, in physical pixels, between press and release
/// for the pair to count as a click.
pub const CLICK_SLOP: f64 = 5.0;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event with positions in physical window pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, button: MouseButton },
    Up { position: Point, button: MouseButton },
    Move { position: Point },
}

/// Tracks the pointer between events.
#[derive(Debug, Clone)]
pub struct InputState {
    /// Current pointer position in physical pixels.
    pub pointer_position: Point,
    pressed_buttons: HashSet<MouseButton>,
    /// Where the left button went down, while it is held.
    press_position: Option<Point>,
    scale_factor: f64,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pointer_position: Point::ZERO,
            pressed_buttons: HashSet::new(),
            press_position: None,
            scale_factor: 1.0,
        }
    }
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a pointer event.
    ///
    /// Returns the click position in surface coordinates when a left press
    /// and release land within [`CLICK_SLOP`] of each other.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Option<Point> {
        match event {
            PointerEvent::Down { position, button } => {
                self.pointer_position = position;
                self.pressed_buttons.insert(button);
                if button == MouseButton::Left {
                    self.press_position = Some(position);
                }
                None
            }
            PointerEvent::Up { position, button } => {
                self.pointer_position = position;
                self.pressed_buttons.remove(&button);
                if button != MouseButton::Left {
                    return None;
                }
                let start = self.press_position.take()?;
                ((position - start).hypot() <= CLICK_SLOP).then(|| self.to_surface(position))
            }
            PointerEvent::Move { position } => {
                self.pointer_position = position;
                None
            }
        }
    }

    /// Forget a pending press, e.g. when the UI overlay takes the pointer.
    pub fn cancel_press(&mut self) {
        self.press_position = None;
    }

    /// Check if a button is currently pressed.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Update the device scale factor. Non-positive values are ignored.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor.is_finite() && scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    /// Convert physical window pixels to logical surface coordinates.
    pub fn to_surface(&self, point: Point) -> Point {
        Point::new(point.x / self.scale_factor, point.y / self.scale_factor)
    }
}
