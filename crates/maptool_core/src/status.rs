//! Plain-text readouts for the overlay panel

use std::fmt::Write;

use crate::CameraState;

/// A map coordinate projected from a client point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
    /// Present only when the view carries elevation
    pub z: Option<f64>,
}

impl MapPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    pub fn with_z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }
}

/// Multi-line camera readout: position, orientation, scale and viewpoint
pub fn status_text(camera: &CameraState) -> String {
    let mut text = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(text, "X: {}", camera.x);
    let _ = writeln!(text, "Y: {}", camera.y);
    let _ = writeln!(text, "Z: {}", camera.z);
    let _ = writeln!(text, "heading: {}", camera.heading);
    let _ = writeln!(text, "pitch: {}", camera.pitch);
    let _ = writeln!(text, "roll: {}", camera.roll);
    let _ = writeln!(text, "scale: {}", camera.scale);
    let _ = write!(text, "{}", camera.viewpoint);
    text
}

/// Readout for a clicked map point; the Z line is omitted for planar points
pub fn map_point_text(point: &MapPoint) -> String {
    let mut text = format!("X: {}\nY: {}", point.x, point.y);
    if let Some(z) = point.z {
        let _ = write!(text, "\nZ: {}", z);
    }
    text
}
