use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{EllipsoidSize, VerticalAngleLimit};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit Rig", inline)]
#[serde(default)]
/// Ellipsoid and spherical angles of the orbit rig. Angles are in degrees.
pub struct RigOptions {
    /// Ellipsoid width, length and height (full diameters).
    #[schemars(title = "Ellipsoid Size")]
    pub ellipsoid_size: [f32; 3],
    /// Allowed polar angle range `[min, max]` in degrees.
    #[schemars(title = "Vertical Angle Limit")]
    pub vertical_angle_limit_deg: [f32; 2],
    /// Azimuthal angle in degrees.
    #[schemars(title = "Horizontal Angle", range(min = 0.0, max = 360.0), extend("step" = 1.0))]
    pub horizontal_angle_deg: f32,
    /// Polar angle in degrees, measured from the +Z pole.
    #[schemars(title = "Vertical Angle", range(min = 0.0, max = 180.0), extend("step" = 1.0))]
    pub vertical_angle_deg: f32,
}

impl Default for RigOptions {
    fn default() -> Self {
        Self {
            ellipsoid_size: [100.0, 100.0, 100.0],
            vertical_angle_limit_deg: [6.0, 174.0],
            horizontal_angle_deg: 180.0,
            vertical_angle_deg: 90.0,
        }
    }
}

impl RigOptions {
    /// Ellipsoid size as a typed value.
    #[must_use]
    pub fn ellipsoid(&self) -> EllipsoidSize {
        let [w, l, h] = self.ellipsoid_size;
        EllipsoidSize::new(w, l, h)
    }

    /// Vertical limit converted to radians.
    #[must_use]
    pub fn vertical_limit(&self) -> VerticalAngleLimit {
        let [min, max] = self.vertical_angle_limit_deg;
        VerticalAngleLimit::from_degrees(min, max)
    }
}
