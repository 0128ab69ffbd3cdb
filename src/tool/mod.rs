//! The navigation tool as seen by the host
//!
//! A [`MapToolSession`] ties a camera controller to a host view and an
//! overlay panel for as long as the tool is active.

mod session;
mod text_panel;

pub use session::MapToolSession;
pub use text_panel::TextPanel;
