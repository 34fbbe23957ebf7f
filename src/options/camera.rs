use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Interactive camera control parameters.
pub struct CameraOptions {
    /// Drag rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self { rotate_speed: 0.5 }
    }
}
