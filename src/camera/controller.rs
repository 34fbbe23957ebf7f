//! The orbit rig: angle state, clamping and synchronous recompute.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Affine3A;

use super::core::CameraSink;
use super::ellipsoid::EllipsoidSize;
use super::limits::VerticalAngleLimit;
use super::solver::{solve_placement, OrbitPlacement};
use crate::debug::{DebugDrawData, DebugDrawState, DebugVisualizer};
use crate::error::OrbitError;
use crate::options::RigOptions;
use crate::validation::{ValidationContext, ValidationResult};

/// Orbit camera rig: angle state, ellipsoid, owner transform and the camera
/// that receives the computed placement.
///
/// Every setter runs synchronously: it updates state, clamps the polar
/// angle into the vertical limit and immediately recomputes the camera
/// transform. When the ellipsoid or basis is degenerate the new state is
/// kept, the camera keeps its previous transform and the error is returned.
pub struct OrbitCameraController<S: CameraSink> {
    horizontal_angle: f32,
    vertical_angle: f32,
    limit: VerticalAngleLimit,
    ellipsoid: EllipsoidSize,
    owner: Affine3A,
    placement: Option<OrbitPlacement>,

    sink: S,
    visualizer: Option<Box<dyn DebugVisualizer>>,
    render_state_dirty: bool,
}

impl<S: CameraSink> OrbitCameraController<S> {
    /// Create a rig with default options. The camera is not positioned
    /// until the first mutation or [`refresh`](Self::refresh).
    pub fn new(sink: S) -> Self {
        Self::with_rig(&RigOptions::default(), sink)
    }

    /// Create a rig from options and position the camera.
    pub fn from_options(
        options: &RigOptions,
        sink: S,
    ) -> Result<Self, OrbitError> {
        let mut controller = Self::with_rig(options, sink);
        controller.refresh()?;
        Ok(controller)
    }

    fn with_rig(options: &RigOptions, sink: S) -> Self {
        let limit = options.vertical_limit();
        let finite_or = |deg: f32, fallback: f32| {
            Some(deg.to_radians())
                .filter(|r| r.is_finite())
                .unwrap_or(fallback)
        };
        let vertical = finite_or(options.vertical_angle_deg, FRAC_PI_2);
        Self {
            horizontal_angle: finite_or(options.horizontal_angle_deg, 0.0),
            vertical_angle: limit.clamp(vertical).unwrap_or(limit.min()),
            limit,
            ellipsoid: options.ellipsoid(),
            owner: Affine3A::IDENTITY,
            placement: None,
            sink,
            visualizer: None,
            render_state_dirty: true,
        }
    }

    /// Attach a debug visualizer.
    #[must_use]
    pub fn with_debug_visualizer(
        mut self,
        visualizer: Box<dyn DebugVisualizer>,
    ) -> Self {
        self.visualizer = Some(visualizer);
        self.render_state_dirty = true;
        self
    }

    // -- Accessors --------------------------------------------------------

    /// Azimuthal angle in radians, as accumulated (not wrapped).
    #[must_use]
    pub fn horizontal_angle(&self) -> f32 {
        self.horizontal_angle
    }

    /// Azimuthal angle wrapped into `[0, 2π)` for display.
    #[must_use]
    pub fn horizontal_angle_normalized(&self) -> f32 {
        self.horizontal_angle.rem_euclid(TAU)
    }

    /// Polar angle in radians, always inside the vertical limit.
    #[must_use]
    pub fn vertical_angle(&self) -> f32 {
        self.vertical_angle
    }

    /// Current vertical angle limit.
    #[must_use]
    pub fn vertical_limit(&self) -> VerticalAngleLimit {
        self.limit
    }

    /// Current ellipsoid size.
    #[must_use]
    pub fn ellipsoid_size(&self) -> EllipsoidSize {
        self.ellipsoid
    }

    /// World transform of the ellipsoid center.
    #[must_use]
    pub fn owner_transform(&self) -> Affine3A {
        self.owner
    }

    /// Last successfully computed local placement.
    #[must_use]
    pub fn placement(&self) -> Option<&OrbitPlacement> {
        self.placement.as_ref()
    }

    /// The camera receiving transforms.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the camera.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Current rig state as options (angles in degrees).
    #[must_use]
    pub fn to_options(&self) -> RigOptions {
        RigOptions {
            ellipsoid_size: self.ellipsoid.size().to_array(),
            vertical_angle_limit_deg: self.limit.to_degrees(),
            horizontal_angle_deg: self.horizontal_angle.to_degrees(),
            vertical_angle_deg: self.vertical_angle.to_degrees(),
        }
    }

    // -- Angle control ----------------------------------------------------

    /// Set both angles (radians). The polar angle is clamped to the limit.
    /// A non-finite angle leaves that angle unchanged.
    pub fn set_angles(
        &mut self,
        horizontal: f32,
        vertical: f32,
    ) -> Result<(), OrbitError> {
        self.store_horizontal(horizontal);
        self.store_vertical(vertical);
        self.recalculate()
    }

    /// Degree front-end for [`set_angles`](Self::set_angles).
    pub fn set_angles_deg(
        &mut self,
        horizontal_deg: f32,
        vertical_deg: f32,
    ) -> Result<(), OrbitError> {
        self.set_angles(horizontal_deg.to_radians(), vertical_deg.to_radians())
    }

    /// Add deltas (radians) to both angles. The polar angle is clamped to
    /// the limit after adding.
    pub fn increment_angles(
        &mut self,
        horizontal_delta: f32,
        vertical_delta: f32,
    ) -> Result<(), OrbitError> {
        self.store_horizontal(self.horizontal_angle + horizontal_delta);
        self.store_vertical(self.vertical_angle + vertical_delta);
        self.recalculate()
    }

    /// Degree front-end for [`increment_angles`](Self::increment_angles).
    pub fn increment_angles_deg(
        &mut self,
        horizontal_delta_deg: f32,
        vertical_delta_deg: f32,
    ) -> Result<(), OrbitError> {
        self.increment_angles(
            horizontal_delta_deg.to_radians(),
            vertical_delta_deg.to_radians(),
        )
    }

    /// Set the azimuthal angle (radians) only.
    pub fn set_horizontal_angle(
        &mut self,
        horizontal: f32,
    ) -> Result<(), OrbitError> {
        self.store_horizontal(horizontal);
        self.recalculate()
    }

    /// Set the polar angle (radians) only, clamped to the limit.
    pub fn set_vertical_angle(
        &mut self,
        vertical: f32,
    ) -> Result<(), OrbitError> {
        self.store_vertical(vertical);
        self.recalculate()
    }

    fn store_horizontal(&mut self, horizontal: f32) {
        if horizontal.is_finite() {
            self.horizontal_angle = horizontal;
        } else {
            log::warn!("ignoring non-finite azimuth {horizontal}");
        }
    }

    fn store_vertical(&mut self, vertical: f32) {
        match self.limit.clamp(vertical) {
            Some(angle) => self.vertical_angle = angle,
            None => log::warn!("ignoring non-finite polar angle {vertical}"),
        }
    }

    // -- Shape and limits -------------------------------------------------

    /// Replace the ellipsoid size and invalidate debug geometry.
    pub fn set_ellipsoid_size(
        &mut self,
        size: EllipsoidSize,
    ) -> Result<(), OrbitError> {
        self.ellipsoid = size;
        self.render_state_dirty = true;
        self.recalculate()
    }

    /// Edit the lower polar bound (radians); clamped into `[0, max]`.
    pub fn set_vertical_limit_min(
        &mut self,
        min: f32,
    ) -> Result<(), OrbitError> {
        self.limit.set_min(min);
        self.on_limit_changed()
    }

    /// Edit the upper polar bound (radians); clamped into `[min, π]`.
    pub fn set_vertical_limit_max(
        &mut self,
        max: f32,
    ) -> Result<(), OrbitError> {
        self.limit.set_max(max);
        self.on_limit_changed()
    }

    fn on_limit_changed(&mut self) -> Result<(), OrbitError> {
        self.store_vertical(self.vertical_angle);
        self.render_state_dirty = true;
        self.recalculate()
    }

    /// The owner moved: recompose the camera and invalidate debug geometry.
    pub fn set_owner_transform(
        &mut self,
        owner: Affine3A,
    ) -> Result<(), OrbitError> {
        self.owner = owner;
        self.render_state_dirty = true;
        self.recalculate()
    }

    /// Apply every rig option through the regular setters.
    ///
    /// Limits are applied first so the angles are clamped against the new
    /// range. The first error is returned after all fields are applied.
    pub fn apply_options(
        &mut self,
        options: &RigOptions,
    ) -> Result<(), OrbitError> {
        let limit = options.vertical_limit();
        // Widen before narrowing so neither edit is clamped by the old range.
        let results = [
            self.set_vertical_limit_min(0.0),
            self.set_vertical_limit_max(limit.max()),
            self.set_vertical_limit_min(limit.min()),
            self.set_ellipsoid_size(options.ellipsoid()),
            self.set_angles_deg(
                options.horizontal_angle_deg,
                options.vertical_angle_deg,
            ),
        ];
        results.into_iter().collect()
    }

    /// Recompute the camera from the current state (after creation, load or
    /// any external change).
    pub fn refresh(&mut self) -> Result<(), OrbitError> {
        self.recalculate()
    }

    fn recalculate(&mut self) -> Result<(), OrbitError> {
        let placement = solve_placement(
            self.horizontal_angle,
            self.vertical_angle,
            self.ellipsoid,
        )
        .inspect_err(|e| {
            log::error!("orbit camera not updated: {e}");
        })?;

        self.sink
            .set_world_transform(self.owner * placement.to_affine());
        self.placement = Some(placement);
        log::debug!(
            "orbit camera at azimuth {:.2} polar {:.2}: {}",
            self.horizontal_angle,
            self.vertical_angle,
            placement.position
        );
        Ok(())
    }

    // -- Validation and debug ---------------------------------------------

    /// Report authoring problems into `context`.
    pub fn validate(&self, context: &mut ValidationContext) -> ValidationResult {
        if self.ellipsoid.is_valid() {
            ValidationResult::Valid
        } else {
            context.add_error("Ellipsoid has degenerated");
            ValidationResult::Invalid
        }
    }

    /// Return whether debug geometry must be rebuilt, clearing the flag.
    pub fn take_render_state_dirty(&mut self) -> bool {
        std::mem::take(&mut self.render_state_dirty)
    }

    /// Whether a debug visualizer is attached.
    #[must_use]
    pub fn has_debug_visualizer(&self) -> bool {
        self.visualizer.is_some()
    }

    /// State handed to debug visualizers.
    #[must_use]
    pub fn debug_state(&self) -> DebugDrawState {
        DebugDrawState {
            ellipsoid: self.ellipsoid,
            limit: self.limit,
            owner: self.owner,
        }
    }

    /// Build debug geometry, or `None` when no visualizer is attached.
    #[must_use]
    pub fn debug_draw(&self) -> Option<DebugDrawData> {
        let state = self.debug_state();
        self.visualizer.as_ref().map(|v| v.build(&state))
    }
}
