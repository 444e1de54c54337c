//! Configuration file support for intercom.
//!
//! Settings are read from `~/.config/intercom/config.toml` (or the path passed with
//! `--config`). Every field is optional; with no file at all the defaults reproduce
//! the stock panel: white canvas, black strokes, a 400px strip with a blue Send and
//! an orange-red Reset button, PNG exports into the working directory.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{ButtonsConfig, CanvasConfig, DisplayConfig, ExportConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// stroke_color = "black"
/// stroke_thickness = 4.0
///
/// [buttons]
/// strip_width = 400
/// send_label = "Call"
///
/// [export]
/// directory = "~/intercom"
/// format = "jpeg"
/// quality = 85
///
/// [display]
/// frame_interval_ms = 33
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Drawing area appearance
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Button strip layout and styling
    #[serde(default)]
    pub buttons: ButtonsConfig,

    /// Export destination and encoding
    #[serde(default)]
    pub export: ExportConfig,

    /// Render loop and surface settings
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    /// The strip width can only be checked against the screen once the display is
    /// known, so only its lower bound is enforced here.
    pub fn validate_and_clamp(&mut self) {
        if !(1.0..=40.0).contains(&self.canvas.stroke_thickness) {
            warn!(
                "Invalid stroke_thickness {:.1}, clamping to 1.0-40.0 range",
                self.canvas.stroke_thickness
            );
            self.canvas.stroke_thickness = if self.canvas.stroke_thickness.is_nan() {
                1.0
            } else {
                self.canvas.stroke_thickness.clamp(1.0, 40.0)
            };
        }

        if self.buttons.strip_width == 0 {
            warn!("Invalid strip_width 0, using 1");
            self.buttons.strip_width = 1;
        }

        if !(0.0..=1.0).contains(&self.buttons.pressed_shade) {
            warn!(
                "Invalid pressed_shade {:.2}, clamping to 0.0-1.0 range",
                self.buttons.pressed_shade
            );
            self.buttons.pressed_shade = if self.buttons.pressed_shade.is_nan() {
                1.0
            } else {
                self.buttons.pressed_shade.clamp(0.0, 1.0)
            };
        }

        if !(8.0..=200.0).contains(&self.buttons.font_size) {
            warn!(
                "Invalid font_size {:.1}, clamping to 8.0-200.0 range",
                self.buttons.font_size
            );
            self.buttons.font_size = if self.buttons.font_size.is_nan() {
                48.0
            } else {
                self.buttons.font_size.clamp(8.0, 200.0)
            };
        }

        let valid_weight = matches!(
            self.buttons.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .buttons
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            warn!(
                "Invalid font_weight '{}', falling back to 'bold'",
                self.buttons.font_weight
            );
            self.buttons.font_weight = "bold".to_string();
        }

        if !(1..=100).contains(&self.export.quality) {
            warn!(
                "Invalid export quality {}, clamping to 1-100 range",
                self.export.quality
            );
            self.export.quality = self.export.quality.clamp(1, 100);
        }

        if !(5..=1000).contains(&self.display.frame_interval_ms) {
            warn!(
                "Invalid frame_interval_ms {}, clamping to 5-1000 range",
                self.display.frame_interval_ms
            );
            self.display.frame_interval_ms = self.display.frame_interval_ms.clamp(5, 1000);
        }

        if !(2..=4).contains(&self.display.buffer_count) {
            warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.display.buffer_count
            );
            self.display.buffer_count = self.display.buffer_count.clamp(2, 4);
        }

        for (name, spec) in [
            ("background_color", &self.canvas.background_color),
            ("stroke_color", &self.canvas.stroke_color),
            ("send_color", &self.buttons.send_color),
            ("reset_color", &self.buttons.reset_color),
            ("label_color", &self.buttons.label_color),
        ] {
            if !spec.is_known() {
                warn!("Unknown color {:?} for {}, black will be used", spec, name);
            }
        }
    }

    /// Returns the default path of the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("intercom");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from `path`, or from the default location when `None`.
    ///
    /// A missing file at the default location yields defaults; a missing file that
    /// was asked for explicitly is an error.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file cannot be read
    /// - The file contains invalid TOML syntax
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = Self::get_config_path()?;
                if !default_path.exists() {
                    info!("Config file not found, using defaults");
                    debug!("Expected config at: {}", default_path.display());
                    return Ok(Self::default());
                }
                default_path
            }
        };

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        config.validate_and_clamp();
        Ok(config)
    }

    /// Parses a TOML document without validation.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportFormat;
    use tempfile::TempDir;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.buttons.strip_width, 400);
        assert_eq!(config.buttons.send_color, ColorSpec::Rgb([0, 69, 255]));
        assert_eq!(config.buttons.reset_color, ColorSpec::Rgb([255, 69, 0]));
        assert_eq!(config.export.directory, ".");
        assert_eq!(config.export.format, ExportFormat::Png);
        assert_eq!(config.display.frame_interval_ms, 33);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            [buttons]
            send_label = "Call"
            label_color = [10, 20, 30]

            [export]
            format = "jpg"
            quality = 70
            "#,
        )
        .unwrap();

        assert_eq!(config.buttons.send_label, "Call");
        assert_eq!(config.buttons.reset_label, "Reset");
        assert_eq!(config.buttons.label_color, ColorSpec::Rgb([10, 20, 30]));
        assert_eq!(config.export.format, ExportFormat::Jpeg);
        assert_eq!(config.export.quality, 70);
        assert_eq!(config.canvas.stroke_thickness, 4.0);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("[buttons\nstrip_width = 3").is_err());
        assert!(Config::from_toml("[export]\nformat = \"bmp\"").is_err());
    }

    #[test]
    fn validate_clamps_out_of_range_values() {
        let mut config = Config::default();
        config.canvas.stroke_thickness = 120.0;
        config.buttons.strip_width = 0;
        config.buttons.pressed_shade = -0.5;
        config.buttons.font_size = 2.0;
        config.buttons.font_weight = "extra-chunky".to_string();
        config.export.quality = 0;
        config.display.frame_interval_ms = 1;
        config.display.buffer_count = 9;

        config.validate_and_clamp();

        assert_eq!(config.canvas.stroke_thickness, 40.0);
        assert_eq!(config.buttons.strip_width, 1);
        assert_eq!(config.buttons.pressed_shade, 0.0);
        assert_eq!(config.buttons.font_size, 8.0);
        assert_eq!(config.buttons.font_weight, "bold");
        assert_eq!(config.export.quality, 1);
        assert_eq!(config.display.frame_interval_ms, 5);
        assert_eq!(config.display.buffer_count, 4);
    }

    #[test]
    fn load_reads_explicit_path_and_validates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("panel.toml");
        fs::write(&path, "[canvas]\nstroke_thickness = 0.1\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.canvas.stroke_thickness, 1.0);
    }

    #[test]
    fn load_fails_for_missing_explicit_path() {
        let temp = TempDir::new().unwrap();
        let err = Config::load(Some(&temp.path().join("absent.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read config"));
    }

    #[test]
    fn schema_lists_top_level_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for section in ["canvas", "buttons", "export", "display"] {
            assert!(properties.contains_key(section), "missing {section}");
        }
    }
}
