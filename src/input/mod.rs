//! Input handling: event types, the per-frame query traits the camera reads,
//! and the snapshot that folds raw window events into frame state.

/// Platform-agnostic input events, keys, and buttons.
pub mod event;
/// Event-driven per-frame input snapshot.
pub mod frame;
/// Mouse and keyboard query traits.
pub mod query;

pub use event::{InputEvent, Key, MouseButton};
pub use frame::FrameInput;
pub use query::{KeyboardState, MouseState};
