//! Core types for the map navigation tool
//!
//! This crate provides the value types shared by the controller and the host glue:
//!
//! - [`CameraState`] - Position, orientation, scale and viewpoint of a view
//! - [`Viewpoint`] - Whether orientation pivots at the eye or around a target
//! - [`HomeReference`] - Fixed pivot captured when the tool is activated
//! - [`ViewId`] - Identity of a host map view
//! - [`Extent`] - Visible map extent used to size pan steps
//! - [`ViewingMode`] - 2D map or 3D scene rendering
//! - [`HeadingPolicy`] - How accumulated heading is normalised
//! - [`MapPoint`] - A projected map coordinate for click readouts
//! - [`NavError`] - Errors raised while computing a camera transform

mod camera;
mod nav_error;
mod status;
mod view;

pub use camera::{CameraState, HeadingPolicy, HomeReference, Viewpoint};
pub use view::{Extent, ViewId, ViewingMode};
pub use nav_error::NavError;
pub use status::{map_point_text, status_text, MapPoint};
