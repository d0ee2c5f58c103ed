//! Standalone fly-camera window backed by winit.
//!
//! The window draws nothing. It collects input, drives a [`Camera`] once
//! per frame, applies the cursor mode the camera reports, and shows the
//! camera state in the title bar.
//!
//! ```no_run
//! # use flycam::Viewer;
//! Viewer::builder()
//!     .with_title("Fly")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use glam::Vec2;
use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::{
    camera::{Camera, CursorMode, FlyControls},
    error::FlycamError,
    input::{FrameInput, InputEvent, Key, MouseButton},
    options::Options,
    util::frame_timing::FrameTiming,
};

const TITLE_REFRESH: Duration = Duration::from_millis(250);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
    target_fps: u32,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Flycam", default
    /// options, 60 FPS cap).
    fn new() -> Self {
        Self {
            options: None,
            title: "Flycam".into(),
            target_fps: 60,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Cap the frame rate (0 = unlimited).
    #[must_use]
    pub fn with_target_fps(mut self, target_fps: u32) -> Self {
        self.target_fps = target_fps;
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
            target_fps: self.target_fps,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that flies a camera around an empty scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
    target_fps: u32,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), FlycamError> {
        let event_loop = EventLoop::new()
            .map_err(|e| FlycamError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            camera: Camera::from_options(&self.options.camera),
            controls: FlyControls::from_options(&self.options),
            input: FrameInput::new(),
            timing: FrameTiming::new(self.target_fps),
            cursor_mode: CursorMode::Normal,
            title: self.title,
            last_title_refresh: Instant::now(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| FlycamError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Window>,
    camera: Camera,
    controls: FlyControls,
    input: FrameInput,
    timing: FrameTiming,
    /// Cursor mode currently applied to the window.
    cursor_mode: CursorMode,
    title: String,
    last_title_refresh: Instant,
}

impl ViewerApp {
    /// Run one camera frame against the input gathered since the last one.
    fn frame(&mut self) {
        let dt = self.timing.tick();
        let outcome =
            self.camera
                .update_with(&self.controls, dt, &self.input, &self.input);
        self.apply_cursor_mode(outcome.cursor_mode);

        if outcome.moved {
            log::debug!(
                "camera at {} looking {} fov {}",
                self.camera.position(),
                self.camera.forward_direction(),
                self.camera.fov()
            );
        }

        let now = Instant::now();
        if now.duration_since(self.last_title_refresh) >= TITLE_REFRESH {
            self.refresh_title();
            self.last_title_refresh = now;
        }

        self.input.end_frame();
    }

    fn apply_cursor_mode(&mut self, mode: CursorMode) {
        if mode == self.cursor_mode {
            return;
        }
        let Some(window) = &self.window else {
            return;
        };

        match mode {
            CursorMode::Grabbed => {
                // Not every platform supports locking; confine instead
                let grab = window
                    .set_cursor_grab(CursorGrabMode::Locked)
                    .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
                if let Err(e) = grab {
                    log::warn!("cursor grab unavailable: {e}");
                }
                window.set_cursor_visible(false);
            }
            CursorMode::Normal => {
                if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
                    log::warn!("failed to release cursor: {e}");
                }
                window.set_cursor_visible(true);
            }
        }
        log::debug!("cursor mode {:?} -> {mode:?}", self.cursor_mode);
        self.cursor_mode = mode;
    }

    fn refresh_title(&self) {
        let Some(window) = &self.window else {
            return;
        };
        window.set_title(&title_text(
            &self.title,
            &self.camera,
            self.timing.fps(),
            self.input.cursor_pos(),
        ));
    }
}

/// Window title text. The cursor position is appended once one has been
/// reported.
fn title_text(base: &str, camera: &Camera, fps: f32, cursor: Option<Vec2>) -> String {
    let pos = camera.position();
    let cursor = cursor.map_or_else(String::new, |c| {
        format!(" | cursor ({:.0}, {:.0})", c.x, c.y)
    });
    format!(
        "{base} | pos ({:.2}, {:.2}, {:.2}) | fov {:.0} | {fps:.0} fps{cursor}",
        pos.x,
        pos.y,
        pos.z,
        camera.fov(),
    )
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => w,
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        log::info!(
            "hold {:?} to look, {:?}/{:?}/{:?}/{:?} to move, Escape to quit",
            self.controls.bindings.look_button,
            self.controls.bindings.move_forward,
            self.controls.bindings.strafe_left,
            self.controls.bindings.move_backward,
            self.controls.bindings.strafe_right,
        );

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => self.frame(),

            WindowEvent::Focused(false) => {
                self.input.handle_event(InputEvent::FocusLost);
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.input.handle_event(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.input.handle_event(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let pressed = event.state == ElementState::Pressed;

                if code == KeyCode::Escape && pressed {
                    event_loop.exit();
                    return;
                }
                if let Some(key) = Key::from_key_code(code) {
                    self.input.handle_event(InputEvent::Key { key, pressed });
                }
            }

            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.input.handle_event(InputEvent::MouseMotion {
                dx: dx as f32,
                dy: dy as f32,
            });
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };
        if self.timing.should_render() {
            event_loop.set_control_flow(ControlFlow::Poll);
            window.request_redraw();
        } else {
            event_loop
                .set_control_flow(ControlFlow::WaitUntil(self.timing.next_frame_at()));
        }
    }
}
