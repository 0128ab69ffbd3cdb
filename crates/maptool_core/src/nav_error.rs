//! Navigation error types
//!
//! Missing collaborators (no active view, no display) are not errors; they make
//! operations silent no-ops. Only conditions that would otherwise produce a
//! nonsensical camera are reported here.

use std::fmt;

/// Error type for camera transform computation
#[derive(Debug, Clone, PartialEq)]
pub enum NavError {
    /// The view extent has zero area or is not finite, so pan steps are undefined
    DegenerateExtent { width: f64, height: f64 },
    /// A controller tunable is out of range
    InvalidSetting(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::DegenerateExtent { width, height } => {
                write!(f, "Degenerate view extent: {} x {}", width, height)
            }
            NavError::InvalidSetting(msg) => write!(f, "Invalid navigation setting: {}", msg),
        }
    }
}

impl std::error::Error for NavError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_extent_display() {
        let err = NavError::DegenerateExtent {
            width: 0.0,
            height: 10.0,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Degenerate"));
        assert!(msg.contains("0 x 10"));
    }

    #[test]
    fn test_invalid_setting_display() {
        let err = NavError::InvalidSetting("pan divisions must be positive".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid navigation setting"));
        assert!(msg.contains("pan divisions"));
    }

    #[test]
    fn test_error_has_no_source() {
        use std::error::Error;
        let err = NavError::InvalidSetting("x".to_string());
        assert!(err.source().is_none());
    }
}
