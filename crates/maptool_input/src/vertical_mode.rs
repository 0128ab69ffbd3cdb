//! Vertical input interpretation
//!
//! In a 3D view, holding Shift on the first key-down of a press turns the
//! Up/Down arrows into altitude changes. The mode is sticky until the next
//! key-up, whatever key is released.

use maptool_core::ViewingMode;

/// Whether vertical arrows move along Z (On) or screen Y (Off)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalMode {
    /// Up/Down move along Y
    #[default]
    Off,
    /// Up/Down move along Z
    On,
}

impl VerticalMode {
    /// Key-down transition: Off -> On only for a 3D view with Shift held
    ///
    /// Once On, repeated key-downs do not re-evaluate the modifier.
    pub fn on_key_down(&mut self, viewing_mode: ViewingMode, shift_held: bool) -> Self {
        if *self == VerticalMode::Off && viewing_mode.is_3d() && shift_held {
            *self = VerticalMode::On;
        }
        *self
    }

    /// Key-up transition: always back to Off
    pub fn on_key_up(&mut self) {
        *self = VerticalMode::Off;
    }

    pub fn is_on(self) -> bool {
        self == VerticalMode::On
    }
}
