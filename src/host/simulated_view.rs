//! In-memory map view
//!
//! Animation requests are queued and only land when [`SimulatedMapView::complete_animations`]
//! runs, publishing one camera-changed notification per request. This keeps
//! the ordering a real host gives: notifications always come after the command.

use std::collections::VecDeque;
use std::time::Duration;

use maptool_core::{CameraState, Extent, MapPoint, ViewId, ViewingMode};
use maptool_input::{CameraTransition, MapHost};
use winit::dpi::{PhysicalPosition, PhysicalSize};

use super::{ActiveView, EventBus, HostEvent};

/// Single-view host that publishes on an [`EventBus`]
pub struct SimulatedMapView {
    bus: EventBus,
    active: Option<ActiveView>,
    next_view_id: u64,
    extent: Extent,
    viewing_mode: ViewingMode,
    viewport: PhysicalSize<u32>,
    pending: VecDeque<CameraTransition>,
}

impl SimulatedMapView {
    /// Create a host whose view is already open with `camera`
    pub fn new(bus: EventBus, camera: CameraState, extent: Extent, viewing_mode: ViewingMode) -> Self {
        Self {
            bus,
            active: Some(ActiveView {
                id: ViewId(1),
                camera,
            }),
            next_view_id: 2,
            extent,
            viewing_mode,
            viewport: PhysicalSize::new(1280, 640),
            pending: VecDeque::new(),
        }
    }

    /// Create a host with no open view
    pub fn without_view(bus: EventBus, extent: Extent, viewing_mode: ViewingMode) -> Self {
        Self {
            active: None,
            next_view_id: 1,
            ..Self::new(bus, CameraState::default(), extent, viewing_mode)
        }
    }

    /// Builder: set the viewport size in pixels
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = PhysicalSize::new(width, height);
        self
    }

    pub fn camera(&self) -> Option<CameraState> {
        self.active.map(|view| view.camera)
    }

    pub fn set_extent(&mut self, extent: Extent) {
        self.extent = extent;
    }

    pub fn set_viewing_mode(&mut self, viewing_mode: ViewingMode) {
        self.viewing_mode = viewing_mode;
    }

    /// Animation requests not yet applied
    pub fn pending_animations(&self) -> &VecDeque<CameraTransition> {
        &self.pending
    }

    /// Land every queued animation in request order
    ///
    /// Returns the number of camera-changed notifications published. Requests
    /// made while no view is open are discarded.
    pub fn complete_animations(&mut self) -> usize {
        let mut published = 0;
        while let Some(transition) = self.pending.pop_front() {
            let Some(view) = self.active.as_mut() else {
                continue;
            };
            view.camera = transition.camera;
            let event = HostEvent::CameraChanged {
                view: view.id,
                camera: view.camera,
            };
            self.bus.publish(&event);
            published += 1;
        }
        published
    }

    /// Simulate the user dragging the map to `camera`
    pub fn drag_to(&mut self, camera: CameraState) {
        if let Some(view) = self.active.as_mut() {
            view.camera = camera;
            let event = HostEvent::CameraChanged {
                view: view.id,
                camera,
            };
            self.bus.publish(&event);
        }
    }

    /// Close the active view
    pub fn close(&mut self) {
        self.active = None;
        self.pending.clear();
        self.bus.publish(&HostEvent::ActiveViewChanged { incoming: None });
    }

    /// Open a new view and make it active
    pub fn open(&mut self, camera: CameraState) -> ViewId {
        let view = ActiveView {
            id: ViewId(self.next_view_id),
            camera,
        };
        self.next_view_id += 1;
        self.active = Some(view);
        self.bus.publish(&HostEvent::ActiveViewChanged {
            incoming: Some(view),
        });
        view.id
    }

    fn request(&mut self, transition: CameraTransition) {
        if self.active.is_some() {
            log::trace!("Queued {:?} over {:?}", transition.kind, transition.duration);
            self.pending.push_back(transition);
        }
    }
}

impl MapHost for SimulatedMapView {
    fn active_view_id(&self) -> Option<ViewId> {
        self.active.map(|view| view.id)
    }

    fn active_camera(&self) -> Option<CameraState> {
        self.camera()
    }

    fn extent(&self) -> Option<Extent> {
        self.active.map(|_| self.extent)
    }

    fn viewing_mode(&self) -> ViewingMode {
        self.viewing_mode
    }

    fn zoom_to(&mut self, camera: CameraState, duration: Duration) {
        self.request(CameraTransition::zoom(camera, duration));
    }

    fn pan_to(&mut self, camera: CameraState, duration: Duration) {
        self.request(CameraTransition::pan(camera, duration));
    }

    /// Linear projection through the extent, centred on the camera
    fn client_to_map(&self, point: PhysicalPosition<f64>) -> Option<MapPoint> {
        let camera = self.camera()?;
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return None;
        }
        let u = point.x / self.viewport.width as f64 - 0.5;
        let v = 0.5 - point.y / self.viewport.height as f64;
        let map_point = MapPoint::new(
            camera.x + u * self.extent.width,
            camera.y + v * self.extent.height,
        );

        // Scenes carry elevation; clicks land on the ground plane
        if self.viewing_mode.is_3d() {
            Some(map_point.with_z(0.0))
        } else {
            Some(map_point)
        }
    }
}
