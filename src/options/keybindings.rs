use serde::{Deserialize, Serialize};

use crate::input::{Key, MouseButton};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Bindings for the fly-camera controls.
///
/// ```toml
/// [keybindings]
/// look_button = "Right"
/// move_forward = "W"
/// zoom_out = "Z"
/// ```
pub struct KeybindingOptions {
    /// Button that must be held for the camera to respond.
    pub look_button: MouseButton,
    /// Move along the look direction.
    pub move_forward: Key,
    /// Move against the look direction.
    pub move_backward: Key,
    /// Strafe left.
    pub strafe_left: Key,
    /// Strafe right.
    pub strafe_right: Key,
    /// Move down along world up.
    pub move_down: Key,
    /// Move up along world up.
    pub move_up: Key,
    /// Decreases the field of view on release.
    pub zoom_out: Key,
    /// Increases the field of view on release.
    pub zoom_in: Key,
}

impl KeybindingOptions {
    /// W/S forward-back, A/D strafe, Q/E down-up, Z/X field of view,
    /// right mouse button to look.
    pub const DEFAULT: Self = Self {
        look_button: MouseButton::Right,
        move_forward: Key::W,
        move_backward: Key::S,
        strafe_left: Key::A,
        strafe_right: Key::D,
        move_down: Key::Q,
        move_up: Key::E,
        zoom_out: Key::Z,
        zoom_in: Key::X,
    };
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
