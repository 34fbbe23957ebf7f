//! Ellipse line loops for sketching the bounding ellipsoid.

use std::f32::consts::TAU;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Fewest segments an ellipse loop is drawn with.
pub const MIN_ELLIPSE_SEGMENTS: u32 = 4;
/// Most segments an ellipse loop is drawn with.
pub const MAX_ELLIPSE_SEGMENTS: u32 = 1024;

/// A single colored debug line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebugLine {
    /// Segment start.
    pub start: Vec3,
    /// Segment end.
    pub end: Vec3,
    /// Linear RGBA color.
    pub color: [f32; 4],
    /// Line thickness in screen pixels.
    pub thickness: f32,
}

/// Generate the closed polyline `center + a*cos(t) + b*sin(t)` as
/// `segments` line segments, clamped into
/// [`MIN_ELLIPSE_SEGMENTS`]`..=`[`MAX_ELLIPSE_SEGMENTS`].
#[must_use]
pub fn ellipse_loop(
    center: Vec3,
    a: Vec3,
    b: Vec3,
    segments: u32,
    color: [f32; 4],
    thickness: f32,
) -> Vec<DebugLine> {
    let mut lines = Vec::new();
    append_ellipse_loop(center, a, b, segments, color, thickness, &mut lines);
    lines
}

/// Same as [`ellipse_loop`] but appends into an existing line buffer.
pub fn append_ellipse_loop(
    center: Vec3,
    a: Vec3,
    b: Vec3,
    segments: u32,
    color: [f32; 4],
    thickness: f32,
    out: &mut Vec<DebugLine>,
) {
    let segments =
        segments.clamp(MIN_ELLIPSE_SEGMENTS, MAX_ELLIPSE_SEGMENTS);
    let step = TAU / segments as f32;
    let point = |k: u32| {
        // Wrap the last endpoint onto the first so the loop closes exactly.
        let (sin, cos) = (step * (k % segments) as f32).sin_cos();
        center + a * cos + b * sin
    };

    out.reserve(segments as usize);
    out.extend((0..segments).map(|k| DebugLine {
        start: point(k),
        end: point(k + 1),
        color,
        thickness,
    }));
}
