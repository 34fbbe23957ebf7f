//! Tessellated ellipsoid band covering a latitude range.
//!
//! The mesh is generated on the unit sphere: one arc sweeping the polar
//! range at longitude zero, copied `sides + 1` times around the +Z axis.
//! The first and last arcs coincide so the UV seam gets its own vertices.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Most longitude steps a band is tessellated with.
pub const MAX_PATCH_SIDES: u32 = 512;
/// Most latitude steps a band is tessellated with.
pub const MAX_PATCH_RINGS: u32 = 512;

/// Vertex of the debug band mesh.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize,
    Deserialize,
)]
pub struct MeshVertex {
    /// Vertex position.
    pub position: [f32; 3],
    /// Surface normal.
    pub normal: [f32; 3],
    /// Tangent along the longitude direction.
    pub tangent: [f32; 3],
    /// Texture coordinate: x follows sides, y follows rings.
    pub uv: [f32; 2],
}

/// Owned triangle mesh produced for one debug draw.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugMesh {
    /// Vertex buffer.
    pub vertices: Vec<MeshVertex>,
    /// Triangle list indices, three per triangle.
    pub indices: Vec<u32>,
}

impl DebugMesh {
    /// Number of triangles in the index buffer.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate the triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Apply a per-axis scale, then `rotation`, then `translation`.
    ///
    /// Normals use the inverse scale so they stay perpendicular to the
    /// stretched surface.
    #[must_use]
    pub fn transformed(
        &self,
        scale: Vec3,
        rotation: Quat,
        translation: Vec3,
    ) -> Self {
        let vertices = self
            .vertices
            .iter()
            .map(|v| {
                let position = rotation * (Vec3::from(v.position) * scale)
                    + translation;
                let normal = rotation
                    * (Vec3::from(v.normal) / scale).normalize_or_zero();
                let tangent = rotation
                    * (Vec3::from(v.tangent) * scale).normalize_or_zero();
                MeshVertex {
                    position: position.to_array(),
                    normal: normal.to_array(),
                    tangent: tangent.to_array(),
                    uv: v.uv,
                }
            })
            .collect();
        Self {
            vertices,
            indices: self.indices.clone(),
        }
    }
}

/// Generate the unit-sphere band between polar angles `start` and `end`
/// (radians).
///
/// Produces `(sides + 1) * (rings + 1)` vertices and `2 * sides * rings`
/// triangles. `sides` and `rings` are clamped into `1..=`[`MAX_PATCH_SIDES`]
/// and `1..=`[`MAX_PATCH_RINGS`], which keeps every index inside `u32`.
#[must_use]
pub fn ellipsoid_patch(
    sides: u32,
    rings: u32,
    start: f32,
    end: f32,
) -> DebugMesh {
    let sides = sides.clamp(1, MAX_PATCH_SIDES);
    let rings = rings.clamp(1, MAX_PATCH_RINGS);
    let arc_len = rings + 1;

    let arc: Vec<MeshVertex> = (0..arc_len)
        .map(|i| {
            let t = i as f32 / rings as f32;
            let (sin, cos) = (start + t * (end - start)).sin_cos();
            // Unit sphere: the position doubles as the normal.
            let position = Vec3::new(0.0, sin, cos);
            MeshVertex {
                position: position.to_array(),
                normal: position.to_array(),
                tangent: Vec3::X.to_array(),
                uv: [0.0, t],
            }
        })
        .collect();

    let mut vertices =
        Vec::with_capacity((sides as usize + 1) * arc_len as usize);
    for s in 0..=sides {
        let u = s as f32 / sides as f32;
        let rot = Quat::from_rotation_z(TAU * u);
        vertices.extend(arc.iter().map(|v| MeshVertex {
            position: (rot * Vec3::from(v.position)).to_array(),
            normal: (rot * Vec3::from(v.normal)).to_array(),
            tangent: (rot * Vec3::from(v.tangent)).to_array(),
            uv: [u, v.uv[1]],
        }));
    }

    let mut indices =
        Vec::with_capacity(sides as usize * rings as usize * 6);
    for s in 0..sides {
        let a0 = s * arc_len;
        let a1 = (s + 1) * arc_len;
        for r in 0..rings {
            indices.extend_from_slice(&[
                a0 + r,
                a1 + r,
                a0 + r + 1,
                a1 + r,
                a1 + r + 1,
                a0 + r + 1,
            ]);
        }
    }

    DebugMesh { vertices, indices }
}
