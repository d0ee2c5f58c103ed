use glam::Vec2;
use rustc_hash::FxHashSet;

use super::event::{InputEvent, Key, MouseButton};
use super::query::{KeyboardState, MouseState};

/// Per-frame input snapshot built from a stream of [`InputEvent`]s.
///
/// Held keys and buttons persist across frames. Key releases and pointer
/// motion only live for the frame they happened in and are cleared by
/// [`end_frame`](Self::end_frame).
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    keys_down: FxHashSet<Key>,
    keys_released: FxHashSet<Key>,
    buttons_down: FxHashSet<MouseButton>,
    mouse_delta: Vec2,
    cursor_pos: Option<Vec2>,
}

impl FrameInput {
    /// Create an empty snapshot: nothing held, no motion.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the current frame.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor_pos = Some(Vec2::new(x, y));
            }
            InputEvent::MouseMotion { dx, dy } => {
                self.mouse_delta += Vec2::new(dx, dy);
            }
            InputEvent::MouseButton { button, pressed } => {
                if pressed {
                    let _ = self.buttons_down.insert(button);
                } else {
                    let _ = self.buttons_down.remove(&button);
                }
            }
            InputEvent::Key { key, pressed } => self.handle_key(key, pressed),
            InputEvent::FocusLost => self.release_all(),
        }
    }

    fn handle_key(&mut self, key: Key, pressed: bool) {
        if pressed {
            // OS key repeat arrives as repeated presses
            let _ = self.keys_down.insert(key);
        } else if self.keys_down.remove(&key) {
            let _ = self.keys_released.insert(key);
        }
    }

    /// Drop every held key and button. Held keys count as released this
    /// frame.
    pub fn release_all(&mut self) {
        self.keys_released.extend(self.keys_down.drain());
        self.buttons_down.clear();
    }

    /// Clear per-frame state (releases, accumulated motion). Call once the
    /// frame's consumers have read the snapshot.
    pub fn end_frame(&mut self) {
        self.keys_released.clear();
        self.mouse_delta = Vec2::ZERO;
    }

    /// Last known cursor position in physical pixels, if any was reported.
    #[must_use]
    pub fn cursor_pos(&self) -> Option<Vec2> {
        self.cursor_pos
    }
}

impl MouseState for FrameInput {
    fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    fn delta(&self) -> Vec2 {
        self.mouse_delta
    }
}

impl KeyboardState for FrameInput {
    fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    fn is_key_released(&self, key: Key) -> bool {
        self.keys_released.contains(&key)
    }
}
