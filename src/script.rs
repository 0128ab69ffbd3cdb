//! Key scripts for the demo binary
//!
//! A script is a list of whitespace-separated steps:
//! - `left right up down w s a d q e z x c v` - press and release a key
//! - `shift+<key>` - press with Shift held
//! - `hold:<key>` - press without releasing (vertical mode stays sticky)
//! - `zoom`, `pan` - run the zoom-to / pan-to commands
//! - `click:X,Y` - left click at a client pixel

use std::fmt;

use winit::dpi::PhysicalPosition;
use winit::keyboard::KeyCode;

/// One scripted input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptStep {
    Key { key: KeyCode, shift: bool, release: bool },
    ZoomTo,
    PanTo,
    Click(PhysicalPosition<f64>),
}

/// Script parse error
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptError {
    token: String,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unrecognised script step: {:?}", self.token)
    }
}

impl std::error::Error for ScriptError {}

/// Parse every token in order, failing on the first bad one
pub fn parse_script<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<ScriptStep>, ScriptError> {
    tokens.iter().map(|token| parse_step(token.as_ref())).collect()
}

pub fn parse_step(token: &str) -> Result<ScriptStep, ScriptError> {
    let error = || ScriptError {
        token: token.to_string(),
    };
    let lower = token.trim().to_ascii_lowercase();

    match lower.as_str() {
        "zoom" => return Ok(ScriptStep::ZoomTo),
        "pan" => return Ok(ScriptStep::PanTo),
        _ => {}
    }

    if let Some(coords) = lower.strip_prefix("click:") {
        let (x, y) = coords.split_once(',').ok_or_else(error)?;
        let x: f64 = x.trim().parse().map_err(|_| error())?;
        let y: f64 = y.trim().parse().map_err(|_| error())?;
        return Ok(ScriptStep::Click(PhysicalPosition::new(x, y)));
    }

    let (release, rest) = match lower.strip_prefix("hold:") {
        Some(rest) => (false, rest),
        None => (true, lower.as_str()),
    };
    let (shift, name) = match rest.strip_prefix("shift+") {
        Some(name) => (true, name),
        None => (false, rest),
    };
    let key = key_code(name).ok_or_else(error)?;

    Ok(ScriptStep::Key { key, shift, release })
}

fn key_code(name: &str) -> Option<KeyCode> {
    let key = match name {
        "left" => KeyCode::ArrowLeft,
        "right" => KeyCode::ArrowRight,
        "up" => KeyCode::ArrowUp,
        "down" => KeyCode::ArrowDown,
        "w" => KeyCode::KeyW,
        "s" => KeyCode::KeyS,
        "a" => KeyCode::KeyA,
        "d" => KeyCode::KeyD,
        "q" => KeyCode::KeyQ,
        "e" => KeyCode::KeyE,
        "z" => KeyCode::KeyZ,
        "x" => KeyCode::KeyX,
        "c" => KeyCode::KeyC,
        "v" => KeyCode::KeyV,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_key() {
        assert_eq!(
            parse_step("left").unwrap(),
            ScriptStep::Key {
                key: KeyCode::ArrowLeft,
                shift: false,
                release: true,
            }
        );
    }

    #[test]
    fn test_shift_and_hold() {
        assert_eq!(
            parse_step("hold:shift+Up").unwrap(),
            ScriptStep::Key {
                key: KeyCode::ArrowUp,
                shift: true,
                release: false,
            }
        );
    }

    #[test]
    fn test_commands_and_click() {
        assert_eq!(parse_step("zoom").unwrap(), ScriptStep::ZoomTo);
        assert_eq!(parse_step("PAN").unwrap(), ScriptStep::PanTo);
        assert_eq!(
            parse_step("click:10,20.5").unwrap(),
            ScriptStep::Click(PhysicalPosition::new(10.0, 20.5))
        );
    }

    #[test]
    fn test_bad_tokens() {
        assert!(parse_step("jump").is_err());
        assert!(parse_step("click:10").is_err());
        assert!(parse_step("click:a,b").is_err());
        assert!(parse_step("shift+").is_err());
    }

    #[test]
    fn test_script_stops_at_first_error() {
        let err = parse_script(&["left", "nope", "right"]).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
