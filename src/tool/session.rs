//! Tool session
//!
//! Activation captures the home reference from the host's current camera and
//! subscribes to host notifications. The subscription lives exactly as long as
//! the session: dropping it (or calling [`MapToolSession::deactivate`])
//! unsubscribes.

use std::cell::RefCell;
use std::rc::Rc;

use maptool_core::{map_point_text, status_text, CameraState, HomeReference, NavError, ViewId};
use maptool_input::{CameraController, CameraTransition, KeyMap, KeyResponse, MapHost, StatusDisplay, VerticalMode};
use winit::dpi::PhysicalPosition;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::config::NavigationConfig;
use crate::host::{EventBus, HostEvent, HostEventListener, Subscription};

/// State shared between the session and its bus subscription
struct ToolState {
    controller: CameraController,
    active_view: Option<ViewId>,
    display: Option<Box<dyn StatusDisplay>>,
}

impl ToolState {
    fn refresh_status(&mut self) {
        // Panel not attached yet, or nothing to show
        let (Some(display), Some(camera)) = (self.display.as_mut(), self.controller.camera()) else {
            return;
        };
        display.set_text(status_text(camera));
    }
}

impl HostEventListener for ToolState {
    fn on_event(&mut self, event: &HostEvent) {
        match event {
            HostEvent::CameraChanged { view, camera } => {
                if self.active_view == Some(*view) {
                    self.controller.on_external_camera_changed(*camera);
                } else {
                    log::trace!("Ignoring camera change from inactive view {:?}", view);
                }
                self.refresh_status();
            }
            HostEvent::ActiveViewChanged { incoming: None } => {
                self.active_view = None;
                self.controller.on_active_view_changed(None);
            }
            HostEvent::ActiveViewChanged { incoming: Some(view) } => {
                log::debug!("Active view is now {:?}", view.id);
                self.active_view = Some(view.id);
                self.controller.on_active_view_changed(Some(view.camera));
                self.refresh_status();
            }
        }
    }
}

/// An activated navigation tool
pub struct MapToolSession {
    state: Rc<RefCell<ToolState>>,
    subscription: Subscription,
}

impl MapToolSession {
    /// Activate the tool against the host's current view
    ///
    /// Fails without subscribing when the navigation settings are invalid.
    pub fn activate(
        bus: &EventBus,
        host: &dyn MapHost,
        display: Option<Box<dyn StatusDisplay>>,
        navigation: &NavigationConfig,
    ) -> Result<Self, NavError> {
        let controller = navigation.build_controller(host.active_camera())?;
        log::info!("Map tool activated, home reference {:?}", controller.home().position());

        let mut state = ToolState {
            controller,
            active_view: host.active_view_id(),
            display,
        };
        state.refresh_status();

        let state = Rc::new(RefCell::new(state));
        let subscription = bus.subscribe(state.clone());

        Ok(Self {
            state,
            subscription,
        })
    }

    /// Unsubscribe from the host and drop the tool state
    pub fn deactivate(self) {
        log::info!("Map tool deactivated");
        self.subscription.unsubscribe();
    }

    /// Attach the overlay panel once the host has built it
    pub fn attach_display(&self, display: Box<dyn StatusDisplay>) {
        let mut state = self.state.borrow_mut();
        state.display = Some(display);
        state.refresh_status();
    }

    /// Handle a key press; returns whether the event was handled
    ///
    /// A degenerate view extent is reported as an error and leaves the camera
    /// untouched.
    pub fn key_down(&self, host: &mut dyn MapHost, key: KeyCode, shift_held: bool) -> Result<bool, NavError> {
        let mut state = self.state.borrow_mut();
        let response = match host.extent() {
            Some(extent) => state
                .controller
                .handle_key_down(key, shift_held, host.viewing_mode(), extent)?,
            None if KeyMap::map_key(key).is_some() => KeyResponse::NoActiveView,
            None => KeyResponse::Unhandled,
        };
        // A host may notify synchronously from inside the animation request
        drop(state);

        if let Some(transition) = response.transition() {
            host.animate(transition);
        }
        Ok(response.is_handled())
    }

    /// Handle a key release
    pub fn key_up(&self) {
        self.state.borrow_mut().controller.handle_key_up();
    }

    /// Handle a mouse press; a left click shows the clicked map point
    pub fn mouse_down(&self, host: &dyn MapHost, button: MouseButton, point: PhysicalPosition<f64>) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.controller.handle_mouse_down(button) {
            return false;
        }
        if let (Some(display), Some(map_point)) = (state.display.as_mut(), host.client_to_map(point)) {
            display.set_text(map_point_text(&map_point));
        }
        true
    }

    /// Zoom the view to the cached camera; returns whether a request was made
    pub fn zoom_to(&self, host: &mut dyn MapHost) -> bool {
        let transition = self.state.borrow().controller.zoom_to();
        Self::request(host, transition)
    }

    /// Pan the view to the cached camera; returns whether a request was made
    pub fn pan_to(&self, host: &mut dyn MapHost) -> bool {
        let transition = self.state.borrow().controller.pan_to();
        Self::request(host, transition)
    }

    fn request(host: &mut dyn MapHost, transition: Option<CameraTransition>) -> bool {
        match transition {
            Some(transition) => {
                host.animate(&transition);
                true
            }
            None => false,
        }
    }

    /// Whether zoom/pan commands are enabled
    pub fn can_navigate(&self) -> bool {
        self.state.borrow().controller.can_navigate()
    }

    pub fn camera(&self) -> Option<CameraState> {
        self.state.borrow().controller.camera().copied()
    }

    pub fn home(&self) -> HomeReference {
        self.state.borrow().controller.home()
    }

    pub fn vertical_mode(&self) -> VerticalMode {
        self.state.borrow().controller.vertical_mode()
    }
}
