use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Mouse-look sensitivity multiplier.
    pub rotation_speed: f32,
    /// Translation speed in world units per second.
    pub move_speed: f32,
    /// Degrees added or removed per zoom key release.
    pub fov_step: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            rotation_speed: 0.1,
            move_speed: 5.0,
            fov_step: 3.0,
        }
    }
}
