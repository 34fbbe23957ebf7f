//! Pluggable debug drawing for the orbit rig.

use glam::{Affine3A, Vec3};
use serde::{Deserialize, Serialize};

use super::ellipsoid_mesh::{ellipsoid_patch, DebugMesh};
use super::wireframe::{
    append_ellipse_loop, DebugLine, MAX_ELLIPSE_SEGMENTS,
};
use crate::camera::{EllipsoidBounds, EllipsoidSize, VerticalAngleLimit};
use crate::options::DebugOptions;

/// Rig state a visualizer draws from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugDrawState {
    /// Ellipsoid diameters.
    pub ellipsoid: EllipsoidSize,
    /// Reachable polar range.
    pub limit: VerticalAngleLimit,
    /// World transform of the ellipsoid center.
    pub owner: Affine3A,
}

/// World-space geometry for one debug draw pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugDrawData {
    /// Wireframe lines.
    pub lines: Vec<DebugLine>,
    /// Solid band mesh.
    pub mesh: DebugMesh,
    /// Band mesh color (RGBA).
    pub mesh_color: [f32; 4],
    /// World bounds of the ellipsoid, if known.
    pub bounds: Option<EllipsoidBounds>,
}

/// Produces debug geometry from rig state.
///
/// Only attached in authoring/tooling setups; a rig without one draws
/// nothing. Implementations must rebuild from `state` on every call.
pub trait DebugVisualizer {
    /// Build the geometry for the current state.
    fn build(&self, state: &DebugDrawState) -> DebugDrawData;
}

/// Draws the three principal-plane ellipses and the band of latitudes the
/// camera can reach.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EllipsoidDebugVisualizer {
    options: DebugOptions,
}

impl EllipsoidDebugVisualizer {
    /// Create a visualizer with the given drawing options.
    #[must_use]
    pub fn new(options: DebugOptions) -> Self {
        Self { options }
    }

    /// Drawing options in use.
    #[must_use]
    pub fn options(&self) -> &DebugOptions {
        &self.options
    }
}

impl DebugVisualizer for EllipsoidDebugVisualizer {
    fn build(&self, state: &DebugDrawState) -> DebugDrawData {
        let o = &self.options;
        let (scale, rotation, center) =
            state.owner.to_scale_rotation_translation();
        let radius = state.ellipsoid.semi_axes() * scale;

        let x_axis = rotation * Vec3::X * radius.x;
        let y_axis = rotation * Vec3::Y * radius.y;
        let z_axis = rotation * Vec3::Z * radius.z;

        let segments = o.ellipse_segments.min(MAX_ELLIPSE_SEGMENTS);
        let mut lines = Vec::with_capacity(3 * segments as usize);
        for (a, b) in [(x_axis, y_axis), (y_axis, z_axis), (x_axis, z_axis)] {
            append_ellipse_loop(
                center,
                a,
                b,
                segments,
                o.line_color,
                o.line_thickness,
                &mut lines,
            );
        }

        let mesh = ellipsoid_patch(
            o.patch_sides,
            o.patch_rings,
            state.limit.min(),
            state.limit.max(),
        )
        .transformed(radius, rotation, center);

        let [r, g, b] = o.mesh_color;
        log::debug!(
            "orbit debug geometry: {} lines, {} vertices, {} triangles",
            lines.len(),
            mesh.vertices.len(),
            mesh.triangle_count()
        );

        DebugDrawData {
            lines,
            mesh,
            mesh_color: [r, g, b, o.mesh_alpha],
            bounds: Some(state.ellipsoid.bounds().transform_by(&state.owner)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use glam::Quat;

    use super::*;

    fn state(owner: Affine3A) -> DebugDrawState {
        DebugDrawState {
            ellipsoid: EllipsoidSize::new(200.0, 100.0, 60.0),
            limit: VerticalAngleLimit::default(),
            owner,
        }
    }

    #[test]
    fn default_draw_has_three_ellipses_and_band() {
        let vis = EllipsoidDebugVisualizer::default();
        let data = vis.build(&state(Affine3A::IDENTITY));
        assert_eq!(data.lines.len(), 3 * 18);
        assert_eq!(data.mesh.vertices.len(), 21 * 8);
        assert_eq!(data.mesh.triangle_count(), 2 * 20 * 7);
        assert_eq!(data.mesh_color, [0.0, 1.0, 1.0, 0.25]);
        let bounds = data.bounds.unwrap();
        assert_eq!(bounds.half_extents, Vec3::new(100.0, 50.0, 30.0));
    }

    #[test]
    fn band_lies_on_world_ellipsoid() {
        let center = Vec3::new(10.0, 20.0, 30.0);
        let rotation = Quat::from_rotation_z(FRAC_PI_2);
        let owner = Affine3A::from_rotation_translation(rotation, center);
        let data =
            EllipsoidDebugVisualizer::default().build(&state(owner));
        let semi = Vec3::new(100.0, 50.0, 30.0);
        for v in &data.mesh.vertices {
            let local =
                rotation.inverse() * (Vec3::from(v.position) - center);
            let q = local / semi;
            assert!((q.length() - 1.0).abs() < 1e-4, "{local:?}");
        }
        for line in &data.lines {
            let local = rotation.inverse() * (line.start - center);
            let q = local / semi;
            assert!((q.length() - 1.0).abs() < 1e-4, "{local:?}");
        }
    }

    #[test]
    fn band_respects_vertical_limit() {
        let mut s = state(Affine3A::IDENTITY);
        s.limit = VerticalAngleLimit::from_degrees(60.0, 120.0);
        let data = EllipsoidDebugVisualizer::default().build(&s);
        let z_max = 30.0 * 60.0_f32.to_radians().cos();
        for v in &data.mesh.vertices {
            assert!(v.position[2].abs() <= z_max + 1e-3);
        }
    }

    #[test]
    fn degenerate_ellipsoid_does_not_panic() {
        let mut s = state(Affine3A::IDENTITY);
        s.ellipsoid = EllipsoidSize::new(0.0, 100.0, 100.0);
        let data = EllipsoidDebugVisualizer::default().build(&s);
        assert_eq!(data.lines.len(), 54);
        assert!(data
            .mesh
            .vertices
            .iter()
            .all(|v| v.position.iter().all(|c| c.is_finite())));
    }

    #[test]
    fn custom_options_change_tessellation() {
        let vis = EllipsoidDebugVisualizer::new(DebugOptions {
            ellipse_segments: 2,
            patch_sides: 4,
            patch_rings: 2,
            ..DebugOptions::default()
        });
        let data = vis.build(&state(Affine3A::IDENTITY));
        // Segment count is raised to the four-segment minimum.
        assert_eq!(data.lines.len(), 12);
        assert_eq!(data.mesh.vertices.len(), 15);
        assert_eq!(data.mesh.triangle_count(), 16);
    }
}
