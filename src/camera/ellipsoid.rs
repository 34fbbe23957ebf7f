//! Ellipsoid extents and their world-space bounds.

use glam::{Affine3A, Vec3};
use serde::{Deserialize, Serialize};

/// Ellipsoid the camera orbits on, stored as full diameters along the
/// local X (width), Y (length) and Z (height) axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipsoidSize(pub Vec3);

impl Default for EllipsoidSize {
    fn default() -> Self {
        Self(Vec3::splat(100.0))
    }
}

impl From<Vec3> for EllipsoidSize {
    fn from(size: Vec3) -> Self {
        Self(size)
    }
}

impl EllipsoidSize {
    /// Create a size from width, length and height.
    #[must_use]
    pub const fn new(width: f32, length: f32, height: f32) -> Self {
        Self(Vec3::new(width, length, height))
    }

    /// Full diameters.
    #[must_use]
    pub const fn size(self) -> Vec3 {
        self.0
    }

    /// Half of each diameter.
    #[must_use]
    pub fn semi_axes(self) -> Vec3 {
        self.0 / 2.0
    }

    /// True when every axis is strictly positive.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.0.cmpgt(Vec3::ZERO).all()
    }

    /// Local-space bounds of the ellipsoid centered at the origin.
    #[must_use]
    pub fn bounds(self) -> EllipsoidBounds {
        let half_extents = self.semi_axes();
        EllipsoidBounds {
            center: Vec3::ZERO,
            half_extents,
            sphere_radius: half_extents.max_element(),
        }
    }
}

/// Axis-aligned box plus bounding sphere around an ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipsoidBounds {
    /// Box and sphere center.
    pub center: Vec3,
    /// Half size of the axis-aligned box.
    pub half_extents: Vec3,
    /// Bounding sphere radius.
    pub sphere_radius: f32,
}

impl EllipsoidBounds {
    /// Move the bounds into the space described by `transform`.
    ///
    /// The box is re-fitted around the transformed box corners, and the
    /// sphere radius grows by the largest axis scale.
    #[must_use]
    pub fn transform_by(&self, transform: &Affine3A) -> Self {
        let center = transform.transform_point3(self.center);
        let m = transform.matrix3;
        let half_extents = Vec3::from(m.x_axis).abs() * self.half_extents.x
            + Vec3::from(m.y_axis).abs() * self.half_extents.y
            + Vec3::from(m.z_axis).abs() * self.half_extents.z;
        let max_scale = m
            .x_axis
            .length()
            .max(m.y_axis.length())
            .max(m.z_axis.length());
        Self {
            center,
            half_extents,
            sphere_radius: self.sphere_radius * max_scale,
        }
    }
}
