use glam::Vec2;

use super::event::{Key, MouseButton};

/// Read-only view of the mouse for the current frame.
pub trait MouseState {
    /// Whether `button` is held this frame.
    fn is_button_down(&self, button: MouseButton) -> bool;

    /// Pointer movement accumulated over the frame, in pixels.
    fn delta(&self) -> Vec2;
}

/// Read-only view of the keyboard for the current frame.
pub trait KeyboardState {
    /// Whether `key` is held this frame.
    fn is_key_down(&self, key: Key) -> bool;

    /// Whether `key` went from held to up during this frame.
    fn is_key_released(&self, key: Key) -> bool;
}
