use glam::{Mat4, Quat, Vec3};

use crate::options::CameraOptions;

/// Limit on the look direction's vertical component after a rotation.
pub const PITCH_LIMIT: f32 = 0.4;

/// Free-fly perspective camera: a position, a look direction, and
/// projection parameters.
///
/// The camera is a plain value owned by the frame loop. It changes only
/// through [`update`](Self::update) (or
/// [`update_with`](Self::update_with)) and
/// [`set_rotation_speed`](Self::set_rotation_speed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    forward: Vec3,
    fovy: f32,
    znear: f32,
    zfar: f32,
    rotation_speed: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Camera {
    /// Initial eye position.
    pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);
    /// Initial look direction.
    pub const DEFAULT_FORWARD: Vec3 = Vec3::NEG_Z;
    /// Initial mouse-look sensitivity.
    pub const DEFAULT_ROTATION_SPEED: f32 = 0.1;

    /// Create a camera at (0, 0, 3) looking down -Z.
    ///
    /// `near_clip < far_clip` is expected but not checked.
    #[must_use]
    pub fn new(vertical_fov: f32, near_clip: f32, far_clip: f32) -> Self {
        Self {
            position: Self::DEFAULT_POSITION,
            forward: Self::DEFAULT_FORWARD,
            fovy: vertical_fov,
            znear: near_clip,
            zfar: far_clip,
            rotation_speed: Self::DEFAULT_ROTATION_SPEED,
        }
    }

    /// Create a camera from the projection and sensitivity settings in
    /// `options`.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let mut camera = Self::new(options.fovy, options.znear, options.zfar);
        camera.set_rotation_speed(options.rotation_speed);
        camera
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current look direction. Not guaranteed to be unit length.
    #[must_use]
    pub fn forward_direction(&self) -> Vec3 {
        self.forward
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fov(&self) -> f32 {
        self.fovy
    }

    /// Near clipping plane distance.
    #[must_use]
    pub fn near_clip(&self) -> f32 {
        self.znear
    }

    /// Far clipping plane distance.
    #[must_use]
    pub fn far_clip(&self) -> f32 {
        self.zfar
    }

    /// Mouse-look sensitivity multiplier.
    #[must_use]
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    /// Change the mouse-look sensitivity multiplier.
    pub fn set_rotation_speed(&mut self, rotation_speed: f32) {
        self.rotation_speed = rotation_speed;
    }

    pub(crate) fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    pub(crate) fn set_forward(&mut self, forward: Vec3) {
        self.forward = forward;
    }

    pub(crate) fn adjust_fov(&mut self, degrees: f32) {
        self.fovy += degrees;
    }

    /// Rotate `vector` by a pitch about world X and a yaw about world Y,
    /// both in degrees.
    ///
    /// The yaw is applied first. The vertical component of the result is
    /// not taken from the rotation: it is the input's Y nudged by
    /// `pitch_delta * rotation_speed / 10` and clamped to
    /// [`PITCH_LIMIT`], which keeps the view from flipping over the poles.
    #[must_use]
    pub fn rotate(&self, vector: Vec3, pitch_delta: f32, yaw_delta: f32) -> Vec3 {
        let pitch = Quat::from_axis_angle(Vec3::X, pitch_delta.to_radians());
        let yaw = Quat::from_axis_angle(Vec3::Y, yaw_delta.to_radians());
        let rotated = (pitch * yaw) * vector;

        let y = (vector.y + pitch_delta * self.rotation_speed / 10.0)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        Vec3::new(rotated.x, y, rotated.z)
    }

    /// Right-handed view matrix looking along the forward direction.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward, Vec3::Y)
    }

    /// Right-handed perspective projection for the given viewport aspect
    /// ratio.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(self.fovy.to_radians(), aspect, self.znear, self.zfar)
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: Camera::DEFAULT_POSITION.to_array(),
            aspect: 1.0,
            forward: Camera::DEFAULT_FORWARD.to_array(),
            fovy: 45.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_from(&mut self, camera: &Camera, aspect: f32) {
        self.view_proj = camera.view_projection(aspect).to_cols_array_2d();
        self.position = camera.position().to_array();
        self.aspect = aspect;
        self.forward = camera.forward_direction().normalize_or_zero().to_array();
        self.fovy = camera.fov();
    }
}
