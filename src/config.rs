//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`MAPTOOL_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use std::time::Duration;

use maptool_core::{CameraState, Extent, HeadingPolicy, NavError, ViewingMode};
use maptool_input::CameraController;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Navigation step sizes and animation timing
    #[serde(default)]
    pub navigation: NavigationConfig,
    /// Simulated host view used by the demo binary
    #[serde(default)]
    pub view: ViewConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`MAPTOOL_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // MAPTOOL_NAVIGATION__HEADING_POLICY=wrap -> navigation.heading_policy = "wrap"
        figment = figment.merge(Env::prefixed("MAPTOOL_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Navigation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Pan steps across the visible extent
    pub pan_divisions: f64,
    /// Altitude change per vertical key stroke (metres)
    pub altitude_step: f64,
    /// Heading change per rotate key stroke (degrees)
    pub rotation_step: f64,
    /// Scale change per zoom key stroke
    pub scale_step: f64,
    /// Lower bound for scale
    pub min_scale: f64,
    /// Animation duration for key strokes (milliseconds)
    pub key_animation_ms: u64,
    /// Animation duration for zoom/pan commands (milliseconds)
    pub command_animation_ms: u64,
    /// `accumulate` keeps raw heading, `wrap` normalises into [0, 360)
    pub heading_policy: HeadingPolicy,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            pan_divisions: 20.0,
            altitude_step: 20.0,
            rotation_step: 10.0,
            scale_step: 100.0,
            min_scale: 0.0,
            key_animation_ms: 250,
            command_animation_ms: 1500,
            heading_policy: HeadingPolicy::Accumulate,
        }
    }
}

impl NavigationConfig {
    /// Build a controller for the camera active at tool activation
    ///
    /// Fails with [`NavError::InvalidSetting`] for out-of-range tunables.
    pub fn build_controller(&self, initial: Option<CameraState>) -> Result<CameraController, NavError> {
        let controller = CameraController::new(initial)
            .with_pan_divisions(self.pan_divisions)
            .with_altitude_step(self.altitude_step)
            .with_rotation_step(self.rotation_step)
            .with_scale_step(self.scale_step)
            .with_min_scale(self.min_scale)
            .with_key_duration(Duration::from_millis(self.key_animation_ms))
            .with_command_duration(Duration::from_millis(self.command_animation_ms))
            .with_heading_policy(self.heading_policy);
        controller.validate()?;
        Ok(controller)
    }

    /// Check the tunables without building a controller
    pub fn validate(&self) -> Result<(), NavError> {
        self.build_controller(None).map(|_| ())
    }
}

/// Simulated view configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Camera of the view when the tool starts
    pub camera: CameraState,
    /// Visible extent [width, height] in world units
    pub extent: [f64; 2],
    /// Map, SceneGlobal or SceneLocal
    pub viewing_mode: ViewingMode,
    /// Viewport size [width, height] in pixels
    pub viewport: [u32; 2],
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            camera: CameraState::at(0.0, 0.0, 500.0).with_scale(10_000.0),
            extent: [2000.0, 1000.0],
            viewing_mode: ViewingMode::SceneLocal,
            viewport: [1280, 640],
        }
    }
}

impl ViewConfig {
    pub fn extent(&self) -> Extent {
        Extent::new(self.extent[0], self.extent[1])
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
