//! Identity, visible extent and viewing mode of a map view

use serde::{Deserialize, Serialize};

use crate::NavError;

/// Identifies one of the host's map views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub u64);

/// How the host view renders its content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewingMode {
    /// Flat 2D map
    #[default]
    Map,
    /// 3D globe scene
    SceneGlobal,
    /// 3D local scene
    SceneLocal,
}

impl ViewingMode {
    /// Whether the view renders a perspective (non-planar) scene
    pub fn is_3d(self) -> bool {
        !matches!(self, ViewingMode::Map)
    }
}

/// Width and height of the visible map area in world units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// An extent is usable when both sides are finite and strictly positive
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    /// Horizontal and vertical pan steps for `divisions` steps per extent
    ///
    /// Fails with [`NavError::DegenerateExtent`] for a zero-area or non-finite extent.
    pub fn pan_steps(&self, divisions: f64) -> Result<(f64, f64), NavError> {
        if self.is_degenerate() {
            log::warn!("Refusing to size pan steps from degenerate extent {:?}", self);
            return Err(NavError::DegenerateExtent {
                width: self.width,
                height: self.height,
            });
        }
        if !(divisions.is_finite() && divisions > 0.0) {
            return Err(NavError::InvalidSetting(format!(
                "pan divisions must be positive, got {}",
                divisions
            )));
        }
        Ok((self.width / divisions, self.height / divisions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_is_2d_scenes_are_3d() {
        assert!(!ViewingMode::Map.is_3d());
        assert!(ViewingMode::SceneGlobal.is_3d());
        assert!(ViewingMode::SceneLocal.is_3d());
    }

    #[test]
    fn test_pan_steps() {
        let extent = Extent::new(200.0, 100.0);
        assert_eq!(extent.pan_steps(20.0).unwrap(), (10.0, 5.0));
    }

    #[test]
    fn test_zero_width_is_degenerate() {
        let extent = Extent::new(0.0, 100.0);
        assert!(extent.is_degenerate());
        match extent.pan_steps(20.0) {
            Err(NavError::DegenerateExtent { width, height }) => {
                assert_eq!(width, 0.0);
                assert_eq!(height, 100.0);
            }
            other => panic!("Expected DegenerateExtent, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_and_negative_are_degenerate() {
        assert!(Extent::new(f64::NAN, 1.0).is_degenerate());
        assert!(Extent::new(1.0, -5.0).is_degenerate());
        assert!(Extent::new(f64::INFINITY, 1.0).is_degenerate());
    }

    #[test]
    fn test_zero_divisions_rejected() {
        let extent = Extent::new(200.0, 100.0);
        assert!(matches!(
            extent.pan_steps(0.0),
            Err(NavError::InvalidSetting(_))
        ));
    }
}
