// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Test modules lean on unwrap and glob imports
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::wildcard_imports))]

//! Free-fly 3D camera controller.
//!
//! A [`Camera`] holds a position, a look direction, a vertical field of
//! view, and clip planes. Once per frame the host calls
//! [`Camera::update`] with the frame's delta time and read-only mouse and
//! keyboard state; the camera moves while the look button is held and
//! reports whether it was steered and which [`CursorMode`] the window
//! should use.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - the camera value and its per-frame update
//! - [`input::FrameInput`] - folds raw window events into per-frame state
//! - [`options::Options`] - TOML-backed projection, speed, and binding
//!   settings
//! - `Viewer` (feature `viewer`) - a winit window that flies the camera
//!
//! ```
//! use flycam::input::{FrameInput, InputEvent, Key, MouseButton};
//! use flycam::{Camera, CursorMode};
//!
//! let mut camera = Camera::new(45.0, 0.1, 100.0);
//! let mut input = FrameInput::new();
//! input.handle_event(InputEvent::MouseButton {
//!     button: MouseButton::Right,
//!     pressed: true,
//! });
//! input.handle_event(InputEvent::Key { key: Key::W, pressed: true });
//!
//! let outcome = camera.update(1.0, &input, &input);
//! assert_eq!(outcome.cursor_mode, CursorMode::Grabbed);
//! assert_eq!(camera.position(), glam::Vec3::new(0.0, 0.0, -2.0));
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{Camera, CameraUpdate, CursorMode, FlyControls};
pub use error::FlycamError;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
