// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orbit camera rig that keeps a camera on the surface of an ellipsoid.
//!
//! The camera position comes from two spherical angles: the azimuth
//! (horizontal angle, unbounded) and the polar angle (vertical angle,
//! clamped to a configurable range). Each component is scaled by the
//! ellipsoid's semi axis, and the camera always looks at the ellipsoid
//! center.
//!
//! # Key entry points
//!
//! - [`camera::OrbitCameraController`] - angle state, clamping and
//!   recomputation into a [`camera::CameraSink`]
//! - [`camera::solve_placement`] - the pure placement solver
//! - [`debug::EllipsoidDebugVisualizer`] - editor wireframes and the band
//!   of reachable latitudes
//! - [`options::Options`] - TOML presets for the rig, camera and debug
//!   drawing
//!
//! Angles are radians throughout the API; options files and the `*_deg`
//! helpers use degrees.

pub mod camera;
pub mod debug;
pub mod error;
pub mod options;
pub mod validation;

pub use camera::{
    Camera, CameraSink, EllipsoidSize, OrbitCameraController, OrbitPlacement,
    VerticalAngleLimit,
};
pub use error::OrbitError;
pub use options::Options;
