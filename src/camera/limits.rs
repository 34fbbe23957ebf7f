//! Polar angle range of the orbit.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Allowed range of the polar (vertical) angle, in radians.
///
/// Always satisfies `0 <= min <= max <= PI`. Each edit re-clamps the edited
/// bound against the other one, so no sequence of edits can invert the
/// range. Non-finite edits are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct VerticalAngleLimit {
    min: f32,
    max: f32,
}

impl Default for VerticalAngleLimit {
    fn default() -> Self {
        Self::from_degrees(6.0, 174.0)
    }
}

impl From<[f32; 2]> for VerticalAngleLimit {
    fn from([min, max]: [f32; 2]) -> Self {
        Self::new(min, max)
    }
}

impl From<VerticalAngleLimit> for [f32; 2] {
    fn from(limit: VerticalAngleLimit) -> Self {
        [limit.min, limit.max]
    }
}

impl VerticalAngleLimit {
    /// Upper bound of the polar angle (south pole).
    pub const POLAR_MAX: f32 = PI;

    /// Build a limit from radians. `min` is sanitized first, then `max` is
    /// clamped against it. A non-finite bound falls back to the full range
    /// on that side.
    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        let mut limit = Self {
            min: 0.0,
            max: Self::POLAR_MAX,
        };
        limit.set_min(min);
        limit.set_max(max);
        limit
    }

    /// Build a limit from degrees.
    #[must_use]
    pub fn from_degrees(min_deg: f32, max_deg: f32) -> Self {
        Self::new(min_deg.to_radians(), max_deg.to_radians())
    }

    /// Lower bound in radians.
    #[must_use]
    pub const fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound in radians.
    #[must_use]
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// Bounds in degrees as `[min, max]`.
    #[must_use]
    pub fn to_degrees(&self) -> [f32; 2] {
        [self.min.to_degrees(), self.max.to_degrees()]
    }

    /// Edit the lower bound; it is clamped into `[0, max]`. Non-finite
    /// values leave the bound unchanged.
    pub fn set_min(&mut self, min: f32) {
        if min.is_finite() {
            self.min = min.clamp(0.0, self.max);
        }
    }

    /// Edit the upper bound; it is clamped into `[min, PI]`. Non-finite
    /// values leave the bound unchanged.
    pub fn set_max(&mut self, max: f32) {
        if max.is_finite() {
            self.max = max.clamp(self.min, Self::POLAR_MAX);
        }
    }

    /// Clamp a polar angle into the range, or `None` when `angle` is not
    /// finite.
    #[must_use]
    pub fn clamp(&self, angle: f32) -> Option<f32> {
        angle
            .is_finite()
            .then(|| angle.clamp(self.min, self.max))
    }

    /// True when `angle` lies inside the range.
    #[must_use]
    pub fn contains(&self, angle: f32) -> bool {
        (self.min..=self.max).contains(&angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_degree_range() {
        let limit = VerticalAngleLimit::default();
        let [min, max] = limit.to_degrees();
        assert!((min - 6.0).abs() < 1e-4);
        assert!((max - 174.0).abs() < 1e-4);
    }

    #[test]
    fn min_above_max_clamps_min_down() {
        let mut limit = VerticalAngleLimit::new(0.5, 2.0);
        limit.set_min(2.5);
        assert_eq!(limit.min(), 2.0);
        assert_eq!(limit.max(), 2.0);
    }

    #[test]
    fn max_below_min_clamps_max_up() {
        let mut limit = VerticalAngleLimit::new(0.5, 2.0);
        limit.set_max(0.1);
        assert_eq!(limit.max(), 0.5);
        assert_eq!(limit.min(), 0.5);
    }

    #[test]
    fn bounds_stay_inside_polar_range() {
        let mut limit = VerticalAngleLimit::default();
        limit.set_min(-1.0);
        limit.set_max(10.0);
        assert_eq!(limit.min(), 0.0);
        assert_eq!(limit.max(), PI);
    }

    #[test]
    fn edit_order_never_inverts_range() {
        let edits: [(bool, f32); 6] = [
            (true, 3.0),
            (false, 0.2),
            (true, -4.0),
            (false, 9.0),
            (true, 1.7),
            (false, 1.0),
        ];
        let mut limit = VerticalAngleLimit::default();
        for (edit_min, value) in edits {
            if edit_min {
                limit.set_min(value);
            } else {
                limit.set_max(value);
            }
            assert!(
                limit.min() <= limit.max(),
                "inverted after edit {value}: {limit:?}"
            );
        }
    }

    #[test]
    fn constructor_sanitizes_inverted_input() {
        let limit = VerticalAngleLimit::new(2.0, 1.0);
        assert_eq!(limit.min(), 2.0);
        assert_eq!(limit.max(), 2.0);
    }

    #[test]
    fn non_finite_edits_are_ignored() {
        let mut limit = VerticalAngleLimit::new(0.5, 2.0);
        limit.set_min(f32::NAN);
        limit.set_max(f32::INFINITY);
        limit.set_max(f32::NAN);
        assert_eq!(limit.min(), 0.5);
        assert_eq!(limit.max(), 2.0);

        let limit = VerticalAngleLimit::new(f32::NAN, f32::NAN);
        assert_eq!(limit.min(), 0.0);
        assert_eq!(limit.max(), PI);

        let limit = VerticalAngleLimit::new(f32::NAN, 2.0);
        assert_eq!(limit.min(), 0.0);
        assert_eq!(limit.max(), 2.0);
    }

    #[test]
    fn clamp_rejects_non_finite_angles() {
        let limit = VerticalAngleLimit::new(0.5, 2.0);
        assert_eq!(limit.clamp(f32::NAN), None);
        assert_eq!(limit.clamp(f32::NEG_INFINITY), None);
        assert_eq!(limit.clamp(-3.0), Some(0.5));
        assert_eq!(limit.clamp(1.0), Some(1.0));
    }

    #[test]
    fn deserialization_goes_through_constructor() {
        let limit: VerticalAngleLimit =
            serde_json::from_str("[2.5, 1.0]").unwrap();
        assert_eq!(limit.min(), 2.5);
        assert_eq!(limit.max(), 2.5);

        let limit: VerticalAngleLimit =
            serde_json::from_str("[-1.0, 9.0]").unwrap();
        assert_eq!(limit.min(), 0.0);
        assert_eq!(limit.max(), PI);

        let json = serde_json::to_string(&limit).unwrap();
        let back: VerticalAngleLimit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, limit);
    }
}
