//! Collaborator traits implemented by the embedding application

use std::time::Duration;

use maptool_core::{CameraState, Extent, MapPoint, ViewId, ViewingMode};
use winit::dpi::PhysicalPosition;

use crate::{CameraTransition, TransitionKind};

/// The host's active map view
///
/// Animation requests are fire-and-forget. The host reports where the camera
/// actually ended up through its camera-changed notifications.
pub trait MapHost {
    /// Identity of the active view, `None` when no view is active
    fn active_view_id(&self) -> Option<ViewId>;
    /// Camera of the active view, `None` when no view is active
    fn active_camera(&self) -> Option<CameraState>;
    /// Visible extent of the active view
    fn extent(&self) -> Option<Extent>;
    fn viewing_mode(&self) -> ViewingMode;
    fn zoom_to(&mut self, camera: CameraState, duration: Duration);
    fn pan_to(&mut self, camera: CameraState, duration: Duration);
    /// Project a client-space point onto the map
    fn client_to_map(&self, point: PhysicalPosition<f64>) -> Option<MapPoint>;

    /// Issue the request matching the transition kind
    fn animate(&mut self, transition: &CameraTransition) {
        match transition.kind {
            TransitionKind::Zoom => self.zoom_to(transition.camera, transition.duration),
            TransitionKind::Pan => self.pan_to(transition.camera, transition.duration),
        }
    }
}

/// Text panel overlaid on the map view
pub trait StatusDisplay {
    fn set_text(&mut self, text: String);
}
