//! Keyboard map navigation tool
//!
//! Wires the [`maptool_input::CameraController`] to a host map view:
//! configuration, host notifications, the activated tool session and a
//! simulated host for running it outside a GIS application.

pub mod config;
pub mod host;
pub mod script;
pub mod tool;
