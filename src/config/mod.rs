//! Configuration file support for corkboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/corkboard/config.toml`. Settings include pen and eraser defaults
//! and the font used for note text.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{EraserConfig, NoteConfig, PenConfig};

use crate::input::board_state::{MAX_ERASER_SIZE, MAX_PEN_WIDTH, MIN_ERASER_SIZE, MIN_PEN_WIDTH};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Example configuration written by `corkboard init-config`.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [pen]
/// default_color = "black"
/// default_width = 5.0
///
/// [eraser]
/// default_size = 20.0
///
/// [notes]
/// font_family = "Arial"
/// load_font_size = 16.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Pen defaults (color, width)
    #[serde(default)]
    pub pen: PenConfig,

    /// Eraser defaults (size)
    #[serde(default)]
    pub eraser: EraserConfig,

    /// Note text settings
    #[serde(default)]
    pub notes: NoteConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `pen.default_width`: 1.0 - 20.0
    /// - `eraser.default_size`: 1.0 - 50.0
    /// - `notes.load_font_size`: 6.0 - 72.0
    fn validate_and_clamp(&mut self) {
        if !(MIN_PEN_WIDTH..=MAX_PEN_WIDTH).contains(&self.pen.default_width) {
            log::warn!(
                "Invalid pen default_width {:.1}, clamping to {MIN_PEN_WIDTH:.1}-{MAX_PEN_WIDTH:.1} range",
                self.pen.default_width
            );
            self.pen.default_width = clamp_or(self.pen.default_width, MIN_PEN_WIDTH, MAX_PEN_WIDTH);
        }

        if !(MIN_ERASER_SIZE..=MAX_ERASER_SIZE).contains(&self.eraser.default_size) {
            log::warn!(
                "Invalid eraser default_size {:.1}, clamping to {MIN_ERASER_SIZE:.1}-{MAX_ERASER_SIZE:.1} range",
                self.eraser.default_size
            );
            self.eraser.default_size =
                clamp_or(self.eraser.default_size, MIN_ERASER_SIZE, MAX_ERASER_SIZE);
        }

        if !(6.0..=72.0).contains(&self.notes.load_font_size) {
            log::warn!(
                "Invalid notes load_font_size {:.1}, clamping to 6.0-72.0 range",
                self.notes.load_font_size
            );
            self.notes.load_font_size = clamp_or(self.notes.load_font_size, 6.0, 72.0);
        }

        if self.notes.font_family.trim().is_empty() {
            log::warn!("Empty notes font_family, falling back to 'Arial'");
            self.notes.font_family = "Arial".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/corkboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("corkboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is absent.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Serializes the config to TOML and writes it to `config_path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Writes the documented example config to `config_path`.
    ///
    /// # Errors
    /// Returns an error if a config file already exists at the target path or
    /// the file cannot be written.
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(config_path, EXAMPLE_CONFIG)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the config file, for editor tooling.
    pub fn config_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_or(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}
