use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Debug visualization of the orbit ellipsoid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Debug", inline)]
#[serde(default)]
pub struct DebugOptions {
    /// Attach the ellipsoid visualizer.
    #[schemars(title = "Show Ellipsoid")]
    pub enabled: bool,
    /// Segments per principal-plane ellipse.
    #[schemars(title = "Ellipse Segments", range(min = 4, max = 128))]
    pub ellipse_segments: u32,
    /// Longitudinal subdivisions of the reachable band.
    #[schemars(title = "Band Sides", range(min = 3, max = 128))]
    pub patch_sides: u32,
    /// Latitudinal subdivisions of the reachable band.
    #[schemars(title = "Band Rings", range(min = 1, max = 64))]
    pub patch_rings: u32,
    /// Ellipse line color (RGBA).
    #[schemars(skip)]
    pub line_color: [f32; 4],
    /// Ellipse line thickness in pixels.
    #[schemars(skip)]
    pub line_thickness: f32,
    /// Band mesh color (RGB).
    #[schemars(skip)]
    pub mesh_color: [f32; 3],
    /// Band mesh opacity.
    #[schemars(title = "Band Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub mesh_alpha: f32,
}

impl Default for DebugOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            ellipse_segments: 18,
            patch_sides: 20,
            patch_rings: 7,
            line_color: [0.0, 1.0, 0.0, 1.0],
            line_thickness: 3.0,
            mesh_color: [0.0, 1.0, 1.0],
            mesh_alpha: 0.25,
        }
    }
}
