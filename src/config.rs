//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving user defaults in TOML
//! format with platform-specific directory resolution.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::color::HarmonyStrategy;
use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV};
use crate::extract::{ExtractorOptions, DEFAULT_SAMPLE_STRIDE};

/// Palette generation defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GenerationConfig {
    /// Strategy used when none is given on the command line
    #[serde(default)]
    pub harmony: HarmonyStrategy,
}

/// Image extraction defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Sample every n-th pixel (must be at least 1)
    #[serde(default = "default_sample_stride")]
    pub sample_stride: usize,
}

fn default_sample_stride() -> usize {
    DEFAULT_SAMPLE_STRIDE
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            sample_stride: default_sample_stride(),
        }
    }
}

impl ExtractionConfig {
    /// Extractor options for this configuration.
    pub fn options(&self) -> Result<ExtractorOptions> {
        ExtractorOptions::with_stride(self.sample_stride)
            .context("extraction.sample_stride must be at least 1")
    }
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Template catalog file replacing the embedded catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<PathBuf>,
}

/// Application configuration.
///
/// # File Location
///
/// - `$HUEFORGE_CONFIG_DIR/config.toml` when the variable is set
/// - Linux: `~/.config/hueforge/config.toml`
/// - macOS: `~/Library/Application Support/hueforge/config.toml`
/// - Windows: `%APPDATA%\hueforge\config.toml`
///
/// # Validation
///
/// - `extraction.sample_stride` must be at least 1
/// - `paths.templates` must exist if set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Generation defaults
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Extraction defaults
    #[serde(default)]
    pub extraction: ExtractionConfig,
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
}

impl Config {
    /// Keys accepted by [`set_value`](Self::set_value).
    pub const KEYS: [&'static str; 3] = [
        "generation.harmony",
        "extraction.sample_stride",
        "paths.templates",
    ];

    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path, honouring `HUEFORGE_CONFIG_DIR`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);
        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default location.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `config_path`, defaulting when absent.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `config_path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).with_context(|| {
                format!("Failed to create config directory: {}", config_dir.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, config_path).with_context(|| {
            format!("Failed to rename temp config file to: {}", config_path.display())
        })?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.extraction.sample_stride == 0 {
            bail!("extraction.sample_stride must be at least 1");
        }

        if let Some(templates) = &self.paths.templates {
            if !templates.exists() {
                bail!("Template catalog does not exist: {}", templates.display());
            }
        }

        Ok(())
    }

    /// Sets one value by dotted key, validating the result.
    ///
    /// An empty value for `paths.templates` clears it.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "generation.harmony" => {
                self.generation.harmony = value.parse()?;
            }
            "extraction.sample_stride" => {
                self.extraction.sample_stride = value
                    .parse()
                    .with_context(|| format!("Invalid sample stride '{value}'"))?;
            }
            "paths.templates" => {
                self.paths.templates = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            _ => bail!(
                "Unknown config key '{key}'. Valid keys: {}",
                Self::KEYS.join(", ")
            ),
        }
        self.validate()
    }
}
