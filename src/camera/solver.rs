//! Spherical-to-ellipsoid placement math.
//!
//! Uses the physics convention: the polar angle is measured from the +Z
//! pole and the azimuth rotates around +Z starting at +X. Each Cartesian
//! component is scaled by the matching ellipsoid semi axis.

use glam::{Affine3A, Mat3, Vec3};
use serde::{Deserialize, Serialize};

use super::ellipsoid::EllipsoidSize;
use crate::error::OrbitError;

/// World up direction used to complete the camera basis.
pub const WORLD_UP: Vec3 = Vec3::Z;

/// Squared-length threshold below which a direction is treated as zero.
const DEGENERATE_EPSILON: f32 = 1e-8;

/// Camera placement relative to the ellipsoid center.
///
/// The camera frame is X forward, Y right, Z up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitPlacement {
    /// Camera position on the ellipsoid surface.
    pub position: Vec3,
    /// Unit view direction, toward the ellipsoid center.
    pub forward: Vec3,
    /// Unit right direction, perpendicular to world up.
    pub right: Vec3,
    /// Unit up direction completing the frame.
    pub up: Vec3,
}

impl OrbitPlacement {
    /// Rotation taking camera-local X/Y/Z onto forward/right/up.
    #[must_use]
    pub fn basis(&self) -> Mat3 {
        Mat3::from_cols(self.forward, self.right, self.up)
    }

    /// Local transform of the camera.
    #[must_use]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_mat3_translation(self.basis(), self.position)
    }
}

/// Map spherical angles (radians) onto an ellipsoid with the given semi
/// axes.
#[must_use]
pub fn spherical_to_cartesian(azimuth: f32, polar: f32, semi_axes: Vec3) -> Vec3 {
    let (sin_polar, cos_polar) = polar.sin_cos();
    let (sin_azimuth, cos_azimuth) = azimuth.sin_cos();
    Vec3::new(
        semi_axes.x * sin_polar * cos_azimuth,
        semi_axes.y * sin_polar * sin_azimuth,
        semi_axes.z * cos_polar,
    )
}

/// Compute the camera placement for `azimuth`/`polar` (radians) on an
/// ellipsoid of the given size, looking at its center.
///
/// Refuses degenerate input instead of producing NaNs: a non-positive axis
/// yields [`OrbitError::DegenerateEllipsoid`], and a position at the
/// origin or on the world-up axis yields [`OrbitError::DegenerateBasis`].
pub fn solve_placement(
    azimuth: f32,
    polar: f32,
    size: EllipsoidSize,
) -> Result<OrbitPlacement, OrbitError> {
    if !size.is_valid() {
        return Err(OrbitError::DegenerateEllipsoid { size: size.size() });
    }

    let position = spherical_to_cartesian(azimuth, polar, size.semi_axes());
    let forward = safe_normalize(-position)?;
    let right = safe_normalize(WORLD_UP.cross(forward))?;
    let up = forward.cross(right);

    Ok(OrbitPlacement {
        position,
        forward,
        right,
        up,
    })
}

/// Degree front-end for [`solve_placement`].
pub fn solve_placement_deg(
    azimuth_deg: f32,
    polar_deg: f32,
    size: EllipsoidSize,
) -> Result<OrbitPlacement, OrbitError> {
    solve_placement(azimuth_deg.to_radians(), polar_deg.to_radians(), size)
}

fn safe_normalize(v: Vec3) -> Result<Vec3, OrbitError> {
    if v.length_squared() <= DEGENERATE_EPSILON {
        return Err(OrbitError::DegenerateBasis);
    }
    v.try_normalize().ok_or(OrbitError::DegenerateBasis)
}
