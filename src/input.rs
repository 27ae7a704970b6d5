//! Input sampling
//!
//! One snapshot of the input surface per tick. The core only ever sees an
//! `InputFrame`, so update logic stays testable without a window.

use macroquad::prelude::*;

/// Discrete key and pointer state for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
    /// True if *any* keyboard key is held. The actors zero their velocity
    /// accumulators only when the whole keyboard is idle - deliberate
    /// friction behavior carried over from the original tuning.
    pub any_key: bool,
    /// Primary pointer held this tick
    pub pointer_down: bool,
    /// Primary pointer went down this tick (edge)
    pub pointer_pressed: bool,
    /// Pointer position in screen coordinates
    pub pointer: Vec2,
}

impl InputFrame {
    /// Sample the live keyboard and mouse.
    pub fn poll() -> Self {
        Self {
            left: is_key_down(KeyCode::A),
            right: is_key_down(KeyCode::D),
            up: is_key_down(KeyCode::W),
            down: is_key_down(KeyCode::S),
            jump: is_key_down(KeyCode::Space),
            any_key: !get_keys_down().is_empty(),
            pointer_down: is_mouse_button_down(MouseButton::Left),
            pointer_pressed: is_mouse_button_pressed(MouseButton::Left),
            pointer: mouse_position().into(),
        }
    }
}
