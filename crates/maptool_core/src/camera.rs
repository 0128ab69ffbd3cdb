//! Camera state
//!
//! A [`CameraState`] is a full snapshot of a view's camera. The controller never
//! patches a host camera in place; it always builds a new snapshot and hands it
//! to the host's animated transition.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether orientation is anchored at the eye point or pivots around a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Viewpoint {
    /// Orientation rotates around the eye point
    #[default]
    LookFrom,
    /// Orientation rotates around a fixed target point
    LookAt,
}

impl fmt::Display for Viewpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Viewpoint::LookFrom => write!(f, "LookFrom"),
            Viewpoint::LookAt => write!(f, "LookAt"),
        }
    }
}

/// How heading changes are accumulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingPolicy {
    /// Heading grows without bound (e.g. 350 + 10 + 10 = 370)
    #[default]
    Accumulate,
    /// Heading is normalised into [0, 360)
    Wrap,
}

impl HeadingPolicy {
    /// Apply the policy to a raw heading in degrees
    pub fn apply(self, heading: f64) -> f64 {
        match self {
            HeadingPolicy::Accumulate => heading,
            HeadingPolicy::Wrap => heading.rem_euclid(360.0),
        }
    }
}

/// Viewpoint of a map view at an instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraState {
    /// World X position
    pub x: f64,
    /// World Y position
    pub y: f64,
    /// World Z position (altitude)
    pub z: f64,
    /// Heading in degrees
    pub heading: f64,
    /// Pitch in degrees
    pub pitch: f64,
    /// Roll in degrees
    pub roll: f64,
    /// Zoom/scale factor (smaller is closer in perspective views)
    pub scale: f64,
    /// Pivot mode for orientation changes
    pub viewpoint: Viewpoint,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            heading: 0.0,
            pitch: 0.0,
            roll: 0.0,
            scale: 0.0,
            viewpoint: Viewpoint::LookFrom,
        }
    }
}

impl CameraState {
    /// Create a look-from camera at a position with zero orientation
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            ..Self::default()
        }
    }

    /// Builder: set heading in degrees
    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = heading;
        self
    }

    /// Builder: set pitch in degrees
    pub fn with_pitch(mut self, pitch: f64) -> Self {
        self.pitch = pitch;
        self
    }

    /// Builder: set scale
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Builder: set viewpoint mode
    pub fn with_viewpoint(mut self, viewpoint: Viewpoint) -> Self {
        self.viewpoint = viewpoint;
        self
    }

    /// Position as `[x, y, z]`
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Move the eye to the home reference
    pub fn move_to(&mut self, home: HomeReference) {
        self.x = home.x;
        self.y = home.y;
        self.z = home.z;
    }
}

/// Fixed pivot point captured once at tool activation
///
/// Used only as the target of look-at rotations. It is never refreshed as the
/// camera moves afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HomeReference {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl HomeReference {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Capture the home reference from a camera's current position
    pub fn from_camera(camera: &CameraState) -> Self {
        Self::new(camera.x, camera.y, camera.z)
    }

    /// Position as `[x, y, z]`
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}
