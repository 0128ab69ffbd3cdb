//! Host notification bus with scoped subscriptions
//!
//! Subscribing returns a [`Subscription`]; dropping it removes the listener.
//! Everything runs on the host's UI thread, so listeners are `Rc<RefCell<_>>`.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use maptool_core::{CameraState, ViewId};

/// A view becoming active, with its camera at that moment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveView {
    pub id: ViewId,
    pub camera: CameraState,
}

/// Notifications published by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// A view's camera changed (animation step, drag, view switch)
    CameraChanged { view: ViewId, camera: CameraState },
    /// The active view changed; `None` when the last view closed
    ActiveViewChanged { incoming: Option<ActiveView> },
}

/// Receives host notifications
pub trait HostEventListener {
    fn on_event(&mut self, event: &HostEvent);
}

type ListenerList = RefCell<Vec<(u64, Rc<RefCell<dyn HostEventListener>>)>>;

/// Publish/subscribe channel for [`HostEvent`]s
///
/// Cloning the bus yields another handle to the same listener list.
#[derive(Clone, Default)]
pub struct EventBus {
    listeners: Rc<ListenerList>,
    next_id: Rc<Cell<u64>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener until the returned handle is dropped
    pub fn subscribe(&self, listener: Rc<RefCell<dyn HostEventListener>>) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, listener));
        log::debug!("Subscription {} registered", id);

        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Deliver an event to every current listener in subscription order
    pub fn publish(&self, event: &HostEvent) {
        // Snapshot so listeners may unsubscribe during delivery
        let snapshot: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in snapshot {
            listener.borrow_mut().on_event(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// Scoped registration on an [`EventBus`]
pub struct Subscription {
    id: u64,
    listeners: Weak<ListenerList>,
}

impl Subscription {
    /// Unsubscribe now rather than at scope exit
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
            log::debug!("Subscription {} removed", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<HostEvent>,
    }

    impl HostEventListener for Recorder {
        fn on_event(&mut self, event: &HostEvent) {
            self.events.push(*event);
        }
    }

    fn camera_changed(x: f64) -> HostEvent {
        HostEvent::CameraChanged {
            view: ViewId(1),
            camera: CameraState::at(x, 0.0, 0.0),
        }
    }

    #[test]
    fn test_publish_reaches_subscriber() {
        let bus = EventBus::new();
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let _subscription = bus.subscribe(recorder.clone());

        bus.publish(&camera_changed(1.0));
        assert_eq!(recorder.borrow().events, vec![camera_changed(1.0)]);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let bus = EventBus::new();
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        {
            let _subscription = bus.subscribe(recorder.clone());
            assert_eq!(bus.listener_count(), 1);
        }
        assert_eq!(bus.listener_count(), 0);

        bus.publish(&camera_changed(1.0));
        assert!(recorder.borrow().events.is_empty());
    }

    #[test]
    fn test_explicit_unsubscribe_keeps_others() {
        let bus = EventBus::new();
        let first = Rc::new(RefCell::new(Recorder::default()));
        let second = Rc::new(RefCell::new(Recorder::default()));
        let first_sub = bus.subscribe(first.clone());
        let _second_sub = bus.subscribe(second.clone());

        first_sub.unsubscribe();
        bus.publish(&HostEvent::ActiveViewChanged { incoming: None });

        assert!(first.borrow().events.is_empty());
        assert_eq!(second.borrow().events.len(), 1);
    }

    #[test]
    fn test_subscription_outliving_bus() {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let subscription = {
            let bus = EventBus::new();
            bus.subscribe(recorder)
        };
        // Bus is gone; dropping must not panic
        drop(subscription);
    }

    struct SelfRemoving {
        subscription: Option<Subscription>,
        calls: usize,
    }

    impl HostEventListener for SelfRemoving {
        fn on_event(&mut self, _event: &HostEvent) {
            self.calls += 1;
            self.subscription.take();
        }
    }

    #[test]
    fn test_listener_can_unsubscribe_during_delivery() {
        let bus = EventBus::new();
        let listener = Rc::new(RefCell::new(SelfRemoving {
            subscription: None,
            calls: 0,
        }));
        let subscription = bus.subscribe(listener.clone());
        listener.borrow_mut().subscription = Some(subscription);

        bus.publish(&camera_changed(1.0));
        bus.publish(&camera_changed(2.0));

        assert_eq!(listener.borrow().calls, 1);
        assert_eq!(bus.listener_count(), 0);
    }
}
