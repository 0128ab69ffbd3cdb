//! Key bindings for navigation commands
//!
//! Maps raw winit key codes to semantic navigation commands:
//! - Arrows: pan (Up/Down become altitude in vertical mode)
//! - W/S: zoom in/out
//! - Q/E: rotate left/right
//! - A/D: reserved, consumed without moving the camera

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Semantic navigation commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    ZoomIn,
    ZoomOut,
    RotateLeft,
    RotateRight,
    /// Bound but without behaviour yet
    Reserved,
}

/// Maps input events to navigation commands
pub struct KeyMap;

impl KeyMap {
    /// Map a key to a command
    ///
    /// Returns `None` for keys the tool leaves to the host.
    pub fn map_key(key: KeyCode) -> Option<NavCommand> {
        match key {
            KeyCode::ArrowLeft => Some(NavCommand::PanLeft),
            KeyCode::ArrowRight => Some(NavCommand::PanRight),
            KeyCode::ArrowUp => Some(NavCommand::PanUp),
            KeyCode::ArrowDown => Some(NavCommand::PanDown),
            KeyCode::KeyW => Some(NavCommand::ZoomIn),
            KeyCode::KeyS => Some(NavCommand::ZoomOut),
            KeyCode::KeyQ => Some(NavCommand::RotateLeft),
            KeyCode::KeyE => Some(NavCommand::RotateRight),
            KeyCode::KeyA | KeyCode::KeyD => Some(NavCommand::Reserved),
            _ => None,
        }
    }

    /// Whether the key is one of the Shift modifiers
    pub fn is_shift(key: KeyCode) -> bool {
        matches!(key, KeyCode::ShiftLeft | KeyCode::ShiftRight)
    }

    /// Whether a mouse press is consumed by the tool (left button only)
    pub fn consumes_mouse_button(button: MouseButton) -> bool {
        button == MouseButton::Left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_pan() {
        assert_eq!(KeyMap::map_key(KeyCode::ArrowLeft), Some(NavCommand::PanLeft));
        assert_eq!(KeyMap::map_key(KeyCode::ArrowRight), Some(NavCommand::PanRight));
        assert_eq!(KeyMap::map_key(KeyCode::ArrowUp), Some(NavCommand::PanUp));
        assert_eq!(KeyMap::map_key(KeyCode::ArrowDown), Some(NavCommand::PanDown));
    }

    #[test]
    fn test_zoom_and_rotate_keys() {
        assert_eq!(KeyMap::map_key(KeyCode::KeyW), Some(NavCommand::ZoomIn));
        assert_eq!(KeyMap::map_key(KeyCode::KeyS), Some(NavCommand::ZoomOut));
        assert_eq!(KeyMap::map_key(KeyCode::KeyQ), Some(NavCommand::RotateLeft));
        assert_eq!(KeyMap::map_key(KeyCode::KeyE), Some(NavCommand::RotateRight));
    }

    #[test]
    fn test_reserved_keys() {
        assert_eq!(KeyMap::map_key(KeyCode::KeyA), Some(NavCommand::Reserved));
        assert_eq!(KeyMap::map_key(KeyCode::KeyD), Some(NavCommand::Reserved));
    }

    #[test]
    fn test_unbound_keys_not_mapped() {
        for key in [
            KeyCode::KeyZ,
            KeyCode::KeyX,
            KeyCode::KeyC,
            KeyCode::KeyV,
            KeyCode::Escape,
            KeyCode::ShiftLeft,
        ] {
            assert_eq!(KeyMap::map_key(key), None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_shift_detection() {
        assert!(KeyMap::is_shift(KeyCode::ShiftLeft));
        assert!(KeyMap::is_shift(KeyCode::ShiftRight));
        assert!(!KeyMap::is_shift(KeyCode::ControlLeft));
    }

    #[test]
    fn test_only_left_click_consumed() {
        assert!(KeyMap::consumes_mouse_button(MouseButton::Left));
        assert!(!KeyMap::consumes_mouse_button(MouseButton::Right));
        assert!(!KeyMap::consumes_mouse_button(MouseButton::Middle));
    }
}
