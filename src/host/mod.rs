//! Host-side plumbing
//!
//! The event bus the host publishes camera notifications on, and an in-memory
//! map view used by the demo binary and the integration tests.

mod event_bus;
mod simulated_view;

pub use event_bus::{ActiveView, EventBus, HostEvent, HostEventListener, Subscription};
pub use simulated_view::SimulatedMapView;
