//! Pointer drags mapped onto orbit angle increments.

use glam::Vec2;

use super::controller::OrbitCameraController;
use super::core::CameraSink;
use crate::error::OrbitError;
use crate::options::CameraOptions;

/// Radians of orbit per pixel of drag at a rotate speed of 1.0.
const RADIANS_PER_PIXEL: f32 = 0.01;

/// Platform-agnostic pointer events understood by the orbit input handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Primary button pressed or released.
    PrimaryButton {
        /// `true` for press, `false` for release.
        pressed: bool,
    },
}

/// Turns primary-button drags into [`OrbitCameraController::increment_angles`]
/// calls.
#[derive(Debug, Clone)]
pub struct InputHandler {
    last_mouse_pos: Option<Vec2>,
    dragging: bool,
    rotate_speed: f32,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

impl InputHandler {
    /// Create a handler using the rotate speed from `options`.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            last_mouse_pos: None,
            dragging: false,
            rotate_speed: options.rotate_speed * RADIANS_PER_PIXEL,
        }
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Returns `Ok(true)` if the event was consumed by the camera.
    pub fn handle_event<S: CameraSink>(
        &mut self,
        controller: &mut OrbitCameraController<S>,
        event: InputEvent,
    ) -> Result<bool, OrbitError> {
        match event {
            InputEvent::PrimaryButton { pressed } => {
                self.dragging = pressed;
                Ok(true)
            }
            InputEvent::CursorMoved { x, y } => {
                let current_pos = Vec2::new(x, y);
                let delta = self
                    .last_mouse_pos
                    .map_or(Vec2::ZERO, |last| current_pos - last);
                self.last_mouse_pos = Some(current_pos);

                if !self.dragging || delta == Vec2::ZERO {
                    return Ok(false);
                }
                // Dragging right orbits left; dragging up raises the camera
                // toward the +Z pole.
                controller.increment_angles(
                    -delta.x * self.rotate_speed,
                    delta.y * self.rotate_speed,
                )?;
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::camera::core::Camera;
    use crate::options::RigOptions;

    fn rig() -> OrbitCameraController<Camera> {
        OrbitCameraController::from_options(
            &RigOptions::default(),
            Camera::default(),
        )
        .unwrap()
    }

    #[test]
    fn hover_without_button_is_ignored() {
        let mut c = rig();
        let mut input = InputHandler::default();
        let h = c.horizontal_angle();
        assert!(!input
            .handle_event(&mut c, InputEvent::CursorMoved { x: 0.0, y: 0.0 })
            .unwrap());
        assert!(!input
            .handle_event(&mut c, InputEvent::CursorMoved { x: 50.0, y: 9.0 })
            .unwrap());
        assert_eq!(c.horizontal_angle(), h);
    }

    #[test]
    fn drag_increments_angles() {
        let mut c = rig();
        c.set_angles(0.0, FRAC_PI_2).unwrap();
        let mut input = InputHandler::new(&CameraOptions {
            rotate_speed: 1.0,
            ..CameraOptions::default()
        });

        let _ = input
            .handle_event(&mut c, InputEvent::CursorMoved { x: 10.0, y: 10.0 })
            .unwrap();
        assert!(input
            .handle_event(&mut c, InputEvent::PrimaryButton { pressed: true })
            .unwrap());
        assert!(input
            .handle_event(&mut c, InputEvent::CursorMoved { x: 20.0, y: 0.0 })
            .unwrap());

        assert!((c.horizontal_angle() + 0.1).abs() < 1e-6);
        assert!((c.vertical_angle() - (FRAC_PI_2 - 0.1)).abs() < 1e-6);

        let _ = input
            .handle_event(&mut c, InputEvent::PrimaryButton { pressed: false })
            .unwrap();
        assert!(!input.is_dragging());
    }
}
