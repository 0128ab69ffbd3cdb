//! Camera controller for keyboard map navigation
//!
//! Controls:
//! - Left/Right: Pan along X by 1/20 of the extent width
//! - Up/Down: Pan along Y by 1/20 of the extent height, or along Z when
//!   vertical mode is on (Shift held in a 3D view)
//! - W/S: Zoom in/out (scale -/+ 100)
//! - Q/E: Heading +/- 10 degrees. With vertical mode off the camera switches
//!   to look-at and orbits the home reference; with it on, it turns in place.
//! - A/D: Reserved
//! - Left click: Consumed (the host shows the clicked map point)

use std::time::Duration;

use maptool_core::{CameraState, Extent, HeadingPolicy, HomeReference, NavError, ViewingMode, Viewpoint};
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::{KeyMap, NavCommand, VerticalMode};

/// Which host animation a transition should use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Zoom,
    Pan,
}

/// A camera to animate the active view to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransition {
    pub camera: CameraState,
    pub duration: Duration,
    pub kind: TransitionKind,
}

impl CameraTransition {
    pub fn zoom(camera: CameraState, duration: Duration) -> Self {
        Self {
            camera,
            duration,
            kind: TransitionKind::Zoom,
        }
    }

    pub fn pan(camera: CameraState, duration: Duration) -> Self {
        Self {
            camera,
            duration,
            kind: TransitionKind::Pan,
        }
    }
}

/// Outcome of a key-down
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyResponse {
    /// Not a navigation key; the host's default handling applies
    Unhandled,
    /// Navigation key, but no view is active
    NoActiveView,
    /// Navigation key; animate the view to this transition
    Animate(CameraTransition),
}

impl KeyResponse {
    /// Whether the event should be marked handled
    pub fn is_handled(&self) -> bool {
        !matches!(self, KeyResponse::Unhandled)
    }

    pub fn transition(&self) -> Option<&CameraTransition> {
        match self {
            KeyResponse::Animate(transition) => Some(transition),
            _ => None,
        }
    }
}

/// Camera controller for handling navigation input
pub struct CameraController {
    /// Last camera reported by (or sent to) the active view
    camera: Option<CameraState>,
    home: HomeReference,
    vertical_mode: VerticalMode,

    // Configuration
    pub pan_divisions: f64,
    pub altitude_step: f64,
    pub rotation_step: f64,
    pub scale_step: f64,
    pub min_scale: f64,
    pub key_duration: Duration,
    pub command_duration: Duration,
    pub heading_policy: HeadingPolicy,
}

impl CameraController {
    /// Create a controller for the camera active at tool activation
    ///
    /// The home reference is that camera's position, or the origin when no
    /// view is active yet.
    pub fn new(initial: Option<CameraState>) -> Self {
        let home = initial
            .as_ref()
            .map(HomeReference::from_camera)
            .unwrap_or_default();

        Self {
            camera: initial,
            home,
            vertical_mode: VerticalMode::Off,

            pan_divisions: 20.0,
            altitude_step: 20.0, // metres per key stroke
            rotation_step: 10.0,
            scale_step: 100.0,
            min_scale: 0.0,
            key_duration: Duration::from_millis(250),
            command_duration: Duration::from_millis(1500),
            heading_policy: HeadingPolicy::Accumulate,
        }
    }

    pub fn camera(&self) -> Option<&CameraState> {
        self.camera.as_ref()
    }

    pub fn home(&self) -> HomeReference {
        self.home
    }

    pub fn vertical_mode(&self) -> VerticalMode {
        self.vertical_mode
    }

    /// Enablement predicate for zoom/pan commands: an active view exists
    pub fn can_navigate(&self) -> bool {
        self.camera.is_some()
    }

    /// Replace the cached camera with the host's latest report
    pub fn on_external_camera_changed(&mut self, camera: CameraState) {
        self.camera = Some(camera);
    }

    /// Track a change of active view; `None` makes the controller inert
    pub fn on_active_view_changed(&mut self, camera: Option<CameraState>) {
        if camera.is_none() {
            log::debug!("Active view closed; navigation disabled");
        }
        self.camera = camera;
    }

    /// Process a key press
    pub fn handle_key_down(
        &mut self,
        key: KeyCode,
        shift_held: bool,
        viewing_mode: ViewingMode,
        extent: Extent,
    ) -> Result<KeyResponse, NavError> {
        match KeyMap::map_key(key) {
            Some(command) => self.apply_command(command, shift_held, viewing_mode, extent),
            None => Ok(KeyResponse::Unhandled),
        }
    }

    /// Compute the next camera for a navigation command and cache it
    ///
    /// Nothing changes when the extent is degenerate.
    pub fn apply_command(
        &mut self,
        command: NavCommand,
        shift_held: bool,
        viewing_mode: ViewingMode,
        extent: Extent,
    ) -> Result<KeyResponse, NavError> {
        let Some(current) = self.camera else {
            return Ok(KeyResponse::NoActiveView);
        };

        let (dx, dy) = extent.pan_steps(self.pan_divisions)?;
        let dz = self.altitude_step;
        let vertical = self.vertical_mode.on_key_down(viewing_mode, shift_held).is_on();

        let mut next = current;
        match command {
            NavCommand::PanLeft => next.x -= dx,
            NavCommand::PanRight => next.x += dx,
            NavCommand::PanUp => {
                if vertical {
                    next.z += dz;
                } else {
                    next.y += dy;
                }
            }
            NavCommand::PanDown => {
                if vertical {
                    next.z -= dz;
                } else {
                    next.y -= dy;
                }
            }
            NavCommand::RotateLeft => self.rotate(&mut next, self.rotation_step, vertical),
            NavCommand::RotateRight => self.rotate(&mut next, -self.rotation_step, vertical),
            // Vertical mode does not change zooming. A host scale already
            // below the bound is the floor, so zooming in never raises it.
            NavCommand::ZoomIn => {
                let floor = self.min_scale.min(next.scale);
                next.scale = (next.scale - self.scale_step).max(floor);
            }
            NavCommand::ZoomOut => next.scale = (next.scale + self.scale_step).max(self.min_scale),
            NavCommand::Reserved => {}
        }

        log::debug!(
            "{:?} (vertical: {}): ({}, {}, {}) -> ({}, {}, {}), heading {}, scale {}",
            command,
            vertical,
            current.x,
            current.y,
            current.z,
            next.x,
            next.y,
            next.z,
            next.heading,
            next.scale
        );

        self.camera = Some(next);
        Ok(KeyResponse::Animate(CameraTransition::zoom(next, self.key_duration)))
    }

    /// Turn in place, or orbit the home reference in look-at mode
    fn rotate(&self, camera: &mut CameraState, degrees: f64, vertical: bool) {
        if !vertical {
            camera.viewpoint = Viewpoint::LookAt;
            camera.move_to(self.home);
        }
        camera.heading = self.heading_policy.apply(camera.heading + degrees);
    }

    /// Check the tunables
    ///
    /// Steps must be finite and positive, and the scale bound finite and
    /// non-negative, so no key stroke can produce a NaN or negative scale.
    pub fn validate(&self) -> Result<(), NavError> {
        let steps = [
            ("pan_divisions", self.pan_divisions),
            ("altitude_step", self.altitude_step),
            ("rotation_step", self.rotation_step),
            ("scale_step", self.scale_step),
        ];
        for (name, value) in steps {
            if !(value.is_finite() && value > 0.0) {
                return Err(NavError::InvalidSetting(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )));
            }
        }
        if !(self.min_scale.is_finite() && self.min_scale >= 0.0) {
            return Err(NavError::InvalidSetting(format!(
                "min_scale must be finite and non-negative, got {}",
                self.min_scale
            )));
        }
        Ok(())
    }

    /// Process a key release; any key resets vertical mode
    pub fn handle_key_up(&mut self) {
        self.vertical_mode.on_key_up();
    }

    /// Process a mouse press; returns whether the tool consumed it
    pub fn handle_mouse_down(&self, button: MouseButton) -> bool {
        KeyMap::consumes_mouse_button(button)
    }

    /// Zoom the view to the cached camera
    pub fn zoom_to(&self) -> Option<CameraTransition> {
        self.camera
            .map(|camera| CameraTransition::zoom(camera, self.command_duration))
    }

    /// Pan the view to the cached camera
    pub fn pan_to(&self) -> Option<CameraTransition> {
        self.camera
            .map(|camera| CameraTransition::pan(camera, self.command_duration))
    }

    /// Builder: set how many pan steps span the extent
    pub fn with_pan_divisions(mut self, divisions: f64) -> Self {
        self.pan_divisions = divisions;
        self
    }

    /// Builder: set altitude change per vertical key stroke
    pub fn with_altitude_step(mut self, step: f64) -> Self {
        self.altitude_step = step;
        self
    }

    /// Builder: set heading change per rotate key stroke (degrees)
    pub fn with_rotation_step(mut self, degrees: f64) -> Self {
        self.rotation_step = degrees;
        self
    }

    /// Builder: set scale change per zoom key stroke
    pub fn with_scale_step(mut self, step: f64) -> Self {
        self.scale_step = step;
        self
    }

    /// Builder: set the lower bound for scale
    pub fn with_min_scale(mut self, min_scale: f64) -> Self {
        self.min_scale = min_scale;
        self
    }

    /// Builder: set animation duration for key strokes
    pub fn with_key_duration(mut self, duration: Duration) -> Self {
        self.key_duration = duration;
        self
    }

    /// Builder: set animation duration for zoom/pan commands
    pub fn with_command_duration(mut self, duration: Duration) -> Self {
        self.command_duration = duration;
        self
    }

    /// Builder: set heading normalisation
    pub fn with_heading_policy(mut self, policy: HeadingPolicy) -> Self {
        self.heading_policy = policy;
        self
    }
}
