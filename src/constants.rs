//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and configuration locations.

/// The display name of the application.
pub const APP_NAME: &str = "HueForge";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "hueforge";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "hueforge";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "HUEFORGE_CONFIG_DIR";
