//! Crate-level error types.

use std::fmt;

use glam::Vec3;

/// Errors produced by the orbicam crate.
#[derive(Debug)]
pub enum OrbitError {
    /// Ellipsoid size has a non-positive component.
    DegenerateEllipsoid {
        /// The offending size (diameters).
        size: Vec3,
    },
    /// The camera position cannot produce an orthonormal basis (zero
    /// position or a view direction parallel to world up).
    DegenerateBasis,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Failed to serialize a report.
    Report(String),
}

impl fmt::Display for OrbitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateEllipsoid { size } => {
                write!(f, "ellipsoid is degenerated: size {size}")
            }
            Self::DegenerateBasis => {
                write!(f, "camera basis is degenerated")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Report(msg) => write!(f, "report error: {msg}"),
        }
    }
}

impl std::error::Error for OrbitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrbitError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
