use glam::Vec3;

use crate::camera::core::Camera;
use crate::input::{KeyboardState, MouseState};
use crate::options::{KeybindingOptions, Options};

/// Cursor display mode the host window should apply after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorMode {
    /// Visible and free.
    #[default]
    Normal,
    /// Hidden and locked to the window while the camera is being steered.
    Grabbed,
}

/// Outcome of one [`Camera::update`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraUpdate {
    /// `true` when the look button was held and the camera was steered
    /// this frame, even if nothing about it actually changed.
    pub moved: bool,
    /// Cursor mode for the host window.
    pub cursor_mode: CursorMode,
}

impl CameraUpdate {
    const IDLE: Self = Self {
        moved: false,
        cursor_mode: CursorMode::Normal,
    };

    const ACTIVE: Self = Self {
        moved: true,
        cursor_mode: CursorMode::Grabbed,
    };
}

/// Speeds and bindings used by [`Camera::update_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyControls {
    /// Translation speed in world units per second.
    pub move_speed: f32,
    /// Degrees added or removed per zoom key release.
    pub fov_step: f32,
    /// Key and button bindings.
    pub bindings: KeybindingOptions,
}

impl FlyControls {
    /// 5 units/s, 3 degree zoom steps, WASD/QE/ZX with right-button look.
    pub const DEFAULT: Self = Self {
        move_speed: 5.0,
        fov_step: 3.0,
        bindings: KeybindingOptions::DEFAULT,
    };

    /// Controls taken from the `[camera]` speeds and `[keybindings]` table.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            move_speed: options.camera.move_speed,
            fov_step: options.camera.fov_step,
            bindings: options.keybindings,
        }
    }
}

impl Default for FlyControls {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Camera {
    /// Advance the camera by one frame with the default controls.
    ///
    /// Nothing happens unless the right mouse button is held. While it is,
    /// W/S, A/D and Q/E translate at 5 units per second, releasing Z or X
    /// steps the field of view by -3 or +3 degrees, and mouse motion turns
    /// the look direction.
    pub fn update(
        &mut self,
        delta_time: f32,
        mouse: &impl MouseState,
        keyboard: &impl KeyboardState,
    ) -> CameraUpdate {
        self.update_with(&FlyControls::DEFAULT, delta_time, mouse, keyboard)
    }

    /// Advance the camera by one frame with the given speeds and bindings.
    ///
    /// `delta_time` is in seconds and is not validated.
    pub fn update_with(
        &mut self,
        controls: &FlyControls,
        delta_time: f32,
        mouse: &impl MouseState,
        keyboard: &impl KeyboardState,
    ) -> CameraUpdate {
        let bindings = &controls.bindings;
        if !mouse.is_button_down(bindings.look_button) {
            return CameraUpdate::IDLE;
        }

        let forward = self.forward_direction();
        let right = forward.cross(Vec3::Y);
        let speed = controls.move_speed;

        // Within each pair the first key checked wins
        if keyboard.is_key_down(bindings.move_forward) {
            self.translate(forward * speed * delta_time);
        } else if keyboard.is_key_down(bindings.move_backward) {
            self.translate(-(forward * speed * delta_time));
        }
        if keyboard.is_key_down(bindings.strafe_left) {
            self.translate(-(right * speed * delta_time));
        } else if keyboard.is_key_down(bindings.strafe_right) {
            self.translate(right * speed * delta_time);
        }
        if keyboard.is_key_down(bindings.move_down) {
            self.translate(-(Vec3::Y * speed * delta_time));
        } else if keyboard.is_key_down(bindings.move_up) {
            self.translate(Vec3::Y * speed * delta_time);
        }

        if keyboard.is_key_released(bindings.zoom_out) {
            self.adjust_fov(-controls.fov_step);
        } else if keyboard.is_key_released(bindings.zoom_in) {
            self.adjust_fov(controls.fov_step);
        }

        let delta = mouse.delta();
        if delta.x != 0.0 || delta.y != 0.0 {
            let pitch_delta = -delta.y * self.rotation_speed();
            let yaw_delta = -delta.x * self.rotation_speed();
            let turned = self.rotate(forward, pitch_delta, yaw_delta);
            self.set_forward(turned);
            log::trace!("camera turned to {turned}");
        }

        CameraUpdate::ACTIVE
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::input::{FrameInput, InputEvent, Key, MouseButton};

    const EPS: f32 = 1e-5;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    fn camera() -> Camera {
        Camera::new(45.0, 0.1, 100.0)
    }

    fn looking() -> FrameInput {
        let mut input = FrameInput::new();
        input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        input
    }

    fn hold(input: &mut FrameInput, keys: &[Key]) {
        for &key in keys {
            input.handle_event(InputEvent::Key { key, pressed: true });
        }
    }

    /// Press `keys` in one frame and release them in the next, leaving the
    /// snapshot in the frame where the release is visible.
    fn release(input: &mut FrameInput, keys: &[Key]) {
        hold(input, keys);
        input.end_frame();
        for &key in keys {
            input.handle_event(InputEvent::Key { key, pressed: false });
        }
    }

    fn motion(input: &mut FrameInput, dx: f32, dy: f32) {
        input.handle_event(InputEvent::MouseMotion { dx, dy });
    }

    #[test]
    fn idle_without_look_button() {
        let mut camera = camera();
        let before = camera;

        let mut input = FrameInput::new();
        release(&mut input, &[Key::Z]);
        hold(&mut input, &[Key::W, Key::D, Key::E]);
        motion(&mut input, 40.0, -25.0);

        let outcome = camera.update(1.0, &input, &input);

        assert_eq!(camera, before);
        assert!(!outcome.moved);
        assert_eq!(outcome.cursor_mode, CursorMode::Normal);
    }

    #[test]
    fn other_buttons_do_not_activate() {
        let mut camera = camera();
        let mut input = FrameInput::new();
        input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        hold(&mut input, &[Key::W]);

        let outcome = camera.update(1.0, &input, &input);
        assert_eq!(outcome.cursor_mode, CursorMode::Normal);
        assert_eq!(camera.position(), Camera::DEFAULT_POSITION);
    }

    #[test]
    fn forward_moves_along_look_direction() {
        let mut camera = camera();
        let mut input = looking();
        hold(&mut input, &[Key::W]);

        let _ = camera.update(0.5, &input, &input);

        let expected = Vec3::new(0.0, 0.0, 3.0) + Vec3::NEG_Z * 5.0 * 0.5;
        assert!(approx(camera.position(), expected));
        assert_eq!(camera.forward_direction(), Vec3::NEG_Z);
    }

    #[test]
    fn forward_wins_over_backward() {
        let mut both = camera();
        let mut input = looking();
        hold(&mut input, &[Key::W, Key::S]);
        let _ = both.update(0.25, &input, &input);

        let mut only_w = camera();
        let mut input = looking();
        hold(&mut input, &[Key::W]);
        let _ = only_w.update(0.25, &input, &input);

        assert_eq!(both.position(), only_w.position());
    }

    #[test]
    fn backward_moves_against_look_direction() {
        let mut camera = camera();
        let mut input = looking();
        hold(&mut input, &[Key::S]);
        let _ = camera.update(1.0, &input, &input);
        assert!(approx(camera.position(), Vec3::new(0.0, 0.0, 8.0)));
    }

    #[test]
    fn strafe_left_wins_over_right() {
        let mut camera = camera();
        let mut input = looking();
        hold(&mut input, &[Key::A, Key::D]);
        let _ = camera.update(1.0, &input, &input);

        // right = (0,0,-1) x (0,1,0) = (1,0,0); A moves against it
        assert!(approx(camera.position(), Vec3::new(-5.0, 0.0, 3.0)));
    }

    #[test]
    fn strafe_right() {
        let mut camera = camera();
        let mut input = looking();
        hold(&mut input, &[Key::D]);
        let _ = camera.update(1.0, &input, &input);
        assert!(approx(camera.position(), Vec3::new(5.0, 0.0, 3.0)));
    }

    #[test]
    fn down_wins_over_up() {
        let mut camera = camera();
        let mut input = looking();
        hold(&mut input, &[Key::Q, Key::E]);
        let _ = camera.update(1.0, &input, &input);
        assert!(approx(camera.position(), Vec3::new(0.0, -5.0, 3.0)));

        let mut camera = Camera::new(45.0, 0.1, 100.0);
        let mut input = looking();
        hold(&mut input, &[Key::E]);
        let _ = camera.update(1.0, &input, &input);
        assert!(approx(camera.position(), Vec3::new(0.0, 5.0, 3.0)));
    }

    #[test]
    fn axis_pairs_combine() {
        let mut camera = camera();
        let mut input = looking();
        hold(&mut input, &[Key::W, Key::D, Key::E]);
        let _ = camera.update(0.2, &input, &input);
        assert!(approx(camera.position(), Vec3::new(1.0, 1.0, 2.0)));
    }

    #[test]
    fn held_forward_steps_exactly_by_direction_speed_and_dt() {
        let mut camera = camera();
        let mut input = looking();
        motion(&mut input, 37.0, -11.0);
        let _ = camera.update(0.016, &input, &input);
        input.end_frame();

        hold(&mut input, &[Key::W]);
        let forward = camera.forward_direction();
        for frame in 0..200 {
            let expected = camera.position() + forward * 5.0 * 0.016;
            let _ = camera.update(0.016, &input, &input);
            input.end_frame();
            assert_eq!(camera.position(), expected, "frame {frame}");
        }
        assert_eq!(camera.forward_direction(), forward);
    }

    #[test]
    fn zoom_out_release_steps_fov_down() {
        let mut camera = camera();
        let mut input = looking();
        release(&mut input, &[Key::Z]);
        let _ = camera.update(0.016, &input, &input);
        assert_eq!(camera.fov(), 42.0);
    }

    #[test]
    fn zoom_in_release_steps_fov_up() {
        let mut camera = camera();
        let mut input = looking();
        release(&mut input, &[Key::X]);
        let _ = camera.update(0.016, &input, &input);
        assert_eq!(camera.fov(), 48.0);
    }

    #[test]
    fn zoom_out_wins_when_both_released() {
        let mut camera = camera();
        let mut input = looking();
        release(&mut input, &[Key::Z, Key::X]);
        let _ = camera.update(0.016, &input, &input);
        assert_eq!(camera.fov(), 42.0);
    }

    #[test]
    fn holding_zoom_key_does_not_step() {
        let mut camera = camera();
        let mut input = looking();
        hold(&mut input, &[Key::Z, Key::X]);
        for _ in 0..10 {
            let _ = camera.update(0.016, &input, &input);
            input.end_frame();
        }
        assert_eq!(camera.fov(), 45.0);
    }

    #[test]
    fn release_steps_once_across_frames() {
        let mut camera = camera();
        let mut input = looking();
        release(&mut input, &[Key::Z]);
        let _ = camera.update(0.016, &input, &input);
        input.end_frame();
        let _ = camera.update(0.016, &input, &input);
        assert_eq!(camera.fov(), 42.0);
    }

    #[test]
    fn mouse_right_yaws_right() {
        let mut camera = camera();
        let mut input = looking();
        motion(&mut input, 10.0, 0.0);
        let _ = camera.update(0.016, &input, &input);

        // yaw = -10 * 0.1 = -1 degree about +Y turns -Z toward +X
        let yaw = (-1.0_f32).to_radians();
        let expected = Vec3::new(-yaw.sin(), 0.0, -yaw.cos());
        assert!(approx(camera.forward_direction(), expected));
        assert!(camera.forward_direction().x > 0.0);
    }

    #[test]
    fn mouse_up_raises_look_direction() {
        let mut camera = camera();
        let mut input = looking();
        motion(&mut input, 0.0, -20.0);
        let _ = camera.update(0.016, &input, &input);

        // pitch = 20 * 0.1 = 2 degrees, y = 0 + 2 * 0.1 / 10
        assert!((camera.forward_direction().y - 0.02).abs() < EPS);
    }

    #[test]
    fn pitch_never_leaves_limit() {
        for dy in [-400.0, 400.0] {
            let mut camera = camera();
            let mut input = looking();
            for _ in 0..50 {
                motion(&mut input, 3.0, dy);
                let _ = camera.update(0.016, &input, &input);
                input.end_frame();
                let y = camera.forward_direction().y;
                assert!((-0.4..=0.4).contains(&y), "y = {y}");
            }
            assert_eq!(camera.forward_direction().y.abs(), 0.4);
        }
    }

    #[test]
    fn rotation_speed_scales_turn() {
        let mut slow = camera();
        let mut fast = camera();
        fast.set_rotation_speed(0.2);

        let mut input = looking();
        motion(&mut input, 0.0, -10.0);
        let _ = slow.update(0.016, &input, &input);
        let _ = fast.update(0.016, &input, &input);

        // Y grows with the square of the rotation speed
        assert!((slow.forward_direction().y - 0.01).abs() < EPS);
        assert!((fast.forward_direction().y - 0.04).abs() < EPS);
    }

    #[test]
    fn zero_delta_with_look_button_is_active_but_unchanged() {
        let mut camera = camera();
        let before = camera;
        let input = looking();

        let outcome = camera.update(0.016, &input, &input);

        assert_eq!(camera, before);
        assert!(outcome.moved);
        assert_eq!(outcome.cursor_mode, CursorMode::Grabbed);
    }

    #[test]
    fn movement_uses_direction_from_before_turn() {
        let mut camera = camera();
        let mut input = looking();
        hold(&mut input, &[Key::W]);
        motion(&mut input, 900.0, 0.0);
        let _ = camera.update(1.0, &input, &input);

        assert!(approx(camera.position(), Vec3::new(0.0, 0.0, -2.0)));
        assert!(approx(camera.forward_direction(), Vec3::X));
    }

    #[test]
    fn negative_delta_time_moves_backwards() {
        let mut camera = camera();
        let mut input = looking();
        hold(&mut input, &[Key::W]);
        let _ = camera.update(-1.0, &input, &input);
        assert!(approx(camera.position(), Vec3::new(0.0, 0.0, 8.0)));
    }

    #[test]
    fn custom_controls_rebind_and_rescale() {
        let mut options = Options::default();
        options.camera.move_speed = 2.0;
        options.camera.fov_step = 10.0;
        options.keybindings.look_button = MouseButton::Middle;
        options.keybindings.move_forward = Key::I;
        options.keybindings.zoom_in = Key::O;
        let controls = FlyControls::from_options(&options);

        let mut camera = camera();
        let mut input = FrameInput::new();
        input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Middle,
            pressed: true,
        });
        hold(&mut input, &[Key::W]);
        release(&mut input, &[Key::O]);
        hold(&mut input, &[Key::I]);

        let outcome = camera.update_with(&controls, 1.0, &input, &input);

        assert_eq!(outcome.cursor_mode, CursorMode::Grabbed);
        assert!(approx(camera.position(), Vec3::new(0.0, 0.0, 1.0)));
        assert_eq!(camera.fov(), 55.0);
    }

    #[test]
    fn end_to_end_forward_one_second() {
        let mut camera = Camera::new(45.0, 0.1, 100.0);
        let mut input = looking();
        hold(&mut input, &[Key::W]);
        assert_eq!(input.delta(), Vec2::ZERO);

        let outcome = camera.update(1.0, &input, &input);

        assert!(approx(camera.position(), Vec3::new(0.0, 0.0, -2.0)));
        assert_eq!(camera.forward_direction(), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(camera.fov(), 45.0);
        assert_eq!(
            outcome,
            CameraUpdate {
                moved: true,
                cursor_mode: CursorMode::Grabbed,
            }
        );
    }
}
