//! Orbit camera on an ellipsoid.
//!
//! Provides the spherical-to-ellipsoid placement solver, the angle
//! controller that clamps and recomputes on every change, and drag input
//! handling.

/// Angle controller driving a camera sink.
pub mod controller;
/// Camera sink trait and a perspective camera implementing it.
pub mod core;
/// Ellipsoid size and bounds.
pub mod ellipsoid;
/// Pointer-drag input handler.
pub mod input;
/// Polar angle range.
pub mod limits;
/// Placement math.
pub mod solver;

pub use controller::OrbitCameraController;
pub use self::core::{Camera, CameraSink};
pub use ellipsoid::{EllipsoidBounds, EllipsoidSize};
pub use limits::VerticalAngleLimit;
pub use solver::{
    solve_placement, solve_placement_deg, spherical_to_cartesian,
    OrbitPlacement, WORLD_UP,
};
