//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use maptool::config::AppConfig;
use maptool_core::{HeadingPolicy, ViewingMode};
use serial_test::serial;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("maptool-config-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_default_toml_matches_defaults() {
    let config = AppConfig::load().unwrap();
    assert_eq!(config.navigation.pan_divisions, 20.0);
    assert_eq!(config.navigation.key_animation_ms, 250);
    assert_eq!(config.navigation.command_animation_ms, 1500);
    assert_eq!(config.view.viewing_mode, ViewingMode::SceneLocal);
    assert_eq!(config.view.camera.scale, 10_000.0);
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("MAPTOOL_DEBUG__LOG_LEVEL", "trace");
    std::env::set_var("MAPTOOL_NAVIGATION__HEADING_POLICY", "wrap");
    let config = AppConfig::load();
    std::env::remove_var("MAPTOOL_DEBUG__LOG_LEVEL");
    std::env::remove_var("MAPTOOL_NAVIGATION__HEADING_POLICY");

    let config = config.unwrap();
    assert_eq!(config.debug.log_level, "trace");
    assert_eq!(config.navigation.heading_policy, HeadingPolicy::Wrap);
}

#[test]
#[serial]
fn test_user_config_overrides_default() {
    let dir = scratch_dir("user");
    std::fs::write(dir.join("default.toml"), "[navigation]\nrotation_step = 10.0\nscale_step = 100.0\n").unwrap();
    std::fs::write(dir.join("user.toml"), "[navigation]\nrotation_step = 45.0\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.navigation.rotation_step, 45.0);
    assert_eq!(config.navigation.scale_step, 100.0);
    // Sections absent from both files fall back to defaults
    assert_eq!(config.debug.log_level, "info");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.navigation.altitude_step, 20.0);
    assert_eq!(config.view.extent, [2000.0, 1000.0]);
}

#[test]
#[serial]
fn test_invalid_value_is_an_error() {
    let dir = scratch_dir("invalid");
    std::fs::write(dir.join("default.toml"), "[navigation]\nheading_policy = \"spin\"\n").unwrap();

    let err = AppConfig::load_from(&dir).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));

    std::fs::remove_dir_all(&dir).ok();
}
