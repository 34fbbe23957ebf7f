//! Debug geometry for visualizing the orbit ellipsoid.
//!
//! Everything here is pure geometry generation: inputs in, owned vertex and
//! line buffers out. Nothing is cached between calls, so the geometry can be
//! rebuilt for every debug draw pass.

/// Tessellated ellipsoid band mesh.
pub mod ellipsoid_mesh;
/// Visualizer capability and the ellipsoid implementation.
pub mod visualizer;
/// Ellipse line loops.
pub mod wireframe;

pub use ellipsoid_mesh::{
    ellipsoid_patch, DebugMesh, MeshVertex, MAX_PATCH_RINGS, MAX_PATCH_SIDES,
};
pub use visualizer::{
    DebugDrawData, DebugDrawState, DebugVisualizer, EllipsoidDebugVisualizer,
};
pub use wireframe::{
    append_ellipse_loop, ellipse_loop, DebugLine, MAX_ELLIPSE_SEGMENTS,
    MIN_ELLIPSE_SEGMENTS,
};
