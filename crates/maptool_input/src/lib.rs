//! Keyboard-driven camera navigation
//!
//! This crate turns discrete key and mouse events into incremental camera
//! transitions for a host map view. The host is reached only through the
//! [`MapHost`] and [`StatusDisplay`] traits.

mod camera_controller;
mod host;
mod key_map;
mod vertical_mode;

pub use camera_controller::{CameraController, CameraTransition, KeyResponse, TransitionKind};
pub use host::{MapHost, StatusDisplay};
pub use key_map::{KeyMap, NavCommand};
pub use vertical_mode::VerticalMode;
