//! Configuration file support for drawstroke.
//!
//! This module handles loading and validating settings from the configuration file
//! located at `~/.config/drawstroke/config.toml`. Settings include the stroke width
//! table, theme mode, export options, and the augmentation overlay styling.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, ThemeMode};
pub use types::{DebugConfig, RenderConfig, StrokeSizes, ThemeConfig};

use crate::draw::color::ColorTheme;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [stroke_sizes]
/// s = 1.0
/// m = 2.0
/// l = 3.5
/// xl = 6.0
///
/// [theme]
/// mode = "dark"
///
/// [render]
/// force_solid_indicator = false
/// export_padding = 8.0
///
/// [debug]
/// show_corner_ticks = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Stroke width per size class
    #[serde(default)]
    pub stroke_sizes: StrokeSizes,

    /// Palette selection
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Indicator and export options
    #[serde(default)]
    pub render: RenderConfig,

    /// Augmentation overlay styling
    #[serde(default)]
    pub debug: DebugConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    /// NaN has no nearest value and is reset to the field default instead.
    ///
    /// Validated ranges:
    /// - `stroke_sizes.*`: 0.5 - 50.0
    /// - `render.export_padding`: 0.0 - 256.0
    /// - `debug.marker_base_radius`, `debug.marker_weight_scale`, `debug.tick_length`: 0.0 - 100.0
    fn validate_and_clamp(&mut self) {
        let mut default_sizes = StrokeSizes::default();
        for ((name, width), (_, fallback)) in self
            .stroke_sizes
            .iter_mut()
            .zip(default_sizes.iter_mut())
        {
            if !(0.5..=50.0).contains(&*width) {
                log::warn!(
                    "Invalid stroke size {} = {:.2}, clamping to 0.5-50.0 range",
                    name,
                    width
                );
                *width = if width.is_nan() {
                    *fallback
                } else {
                    width.clamp(0.5, 50.0)
                };
            }
        }

        if !(0.0..=256.0).contains(&self.render.export_padding) {
            log::warn!(
                "Invalid export_padding {:.1}, clamping to 0.0-256.0 range",
                self.render.export_padding
            );
            self.render.export_padding = if self.render.export_padding.is_nan() {
                RenderConfig::default().export_padding
            } else {
                self.render.export_padding.clamp(0.0, 256.0)
            };
        }

        let defaults = DebugConfig::default();
        let debug = &mut self.debug;
        for (name, value, fallback) in [
            (
                "marker_base_radius",
                &mut debug.marker_base_radius,
                defaults.marker_base_radius,
            ),
            (
                "marker_weight_scale",
                &mut debug.marker_weight_scale,
                defaults.marker_weight_scale,
            ),
            ("tick_length", &mut debug.tick_length, defaults.tick_length),
        ] {
            if !(0.0..=100.0).contains(&*value) {
                log::warn!(
                    "Invalid debug {} {:.1}, clamping to 0.0-100.0 range",
                    name,
                    value
                );
                *value = if value.is_nan() {
                    fallback
                } else {
                    value.clamp(0.0, 100.0)
                };
            }
        }
    }

    /// The palette selected by `[theme]`.
    pub fn color_theme(&self) -> ColorTheme {
        ColorTheme::default_for(self.theme.mode.is_dark())
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/drawstroke/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("drawstroke");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. Unlike [`Config::load`], a missing
    /// file is an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::shape::SizeStyle;

    #[test]
    fn defaults_match_documented_table() {
        let config = Config::default();
        assert_eq!(config.stroke_sizes.width(SizeStyle::M), 2.0);
        assert_eq!(config.render.export_padding, 8.0);
        assert!(!config.theme.mode.is_dark());
        assert!(config.debug.show_corner_ticks);
    }

    #[test]
    fn load_from_reads_partial_toml_and_clamps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[stroke_sizes]\nm = 4.0\nxl = 500.0\n\n[theme]\nmode = \"dark\"\n\n[render]\nexport_padding = -3.0\n",
        )
        .unwrap();

        let config = Config::load_from(&path).expect("config parses");
        assert_eq!(config.stroke_sizes.m, 4.0);
        assert_eq!(config.stroke_sizes.xl, 50.0);
        assert_eq!(config.stroke_sizes.s, 1.0);
        assert_eq!(config.render.export_padding, 0.0);
        assert!(config.color_theme().is_dark_mode);
    }

    #[test]
    fn nan_values_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[stroke_sizes]\nl = nan\n\n[render]\nexport_padding = nan\n\n[debug]\ntick_length = nan\nmarker_weight_scale = -nan\n",
        )
        .unwrap();

        let config = Config::load_from(&path).expect("config parses");
        assert_eq!(config.stroke_sizes.l, 3.5);
        assert_eq!(config.render.export_padding, 8.0);
        assert_eq!(config.debug.tick_length, 10.0);
        assert_eq!(config.debug.marker_weight_scale, 7.0);
        assert_eq!(config.debug.marker_base_radius, 3.0);
    }

    #[test]
    fn load_from_reports_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[stroke_sizes\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn schema_mentions_every_section() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        for section in ["stroke_sizes", "theme", "render", "debug"] {
            assert!(schema.contains(section), "schema missing {section}");
        }
    }
}
