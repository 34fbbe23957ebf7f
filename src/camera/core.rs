//! The camera end of the rig: the sink trait and a look-at camera.

use glam::{Affine3A, Vec3};

/// Consumer of the camera world transform computed by the orbit rig.
///
/// The transform maps camera-local X/Y/Z onto forward/right/up and places
/// the origin at the camera position.
pub trait CameraSink {
    /// Receive a new world transform.
    fn set_world_transform(&mut self, transform: Affine3A);
}

/// Look-at camera updated from the rig's world transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target, one unit along the view direction.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
}

impl Default for Camera {
    /// At the origin looking down +X with +Z up.
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            target: Vec3::X,
            up: Vec3::Z,
        }
    }
}

impl Camera {
    /// Unit view direction (from eye toward target).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }
}

impl CameraSink for Camera {
    fn set_world_transform(&mut self, transform: Affine3A) {
        let forward = Vec3::from(transform.matrix3.x_axis).normalize_or_zero();
        self.eye = Vec3::from(transform.translation);
        self.target = self.eye + forward;
        self.up = Vec3::from(transform.matrix3.z_axis).normalize_or_zero();
    }
}
