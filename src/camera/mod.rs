//! Camera system for free-fly scene viewing.
//!
//! Provides a first-person camera that translates, turns, and zooms from
//! per-frame mouse and keyboard state, plus the matrices a renderer needs.

/// Per-frame fly controls: the update step and its outcome.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;

pub use self::core::{Camera, CameraUniform, PITCH_LIMIT};
pub use controller::{CameraUpdate, CursorMode, FlyControls};
