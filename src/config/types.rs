//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::export::ExportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing area appearance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas background, also the background of exported images
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,

    /// Stroke color
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Stroke width in pixels (valid range: 1.0 - 40.0)
    #[serde(default = "default_stroke_thickness")]
    pub stroke_thickness: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            stroke_color: default_stroke_color(),
            stroke_thickness: default_stroke_thickness(),
        }
    }
}

/// Button strip settings.
///
/// The strip occupies the rightmost `strip_width` pixels; Send fills its top
/// half and Reset its bottom half.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ButtonsConfig {
    /// Width of the button strip in pixels (must be narrower than the screen)
    #[serde(default = "default_strip_width")]
    pub strip_width: u32,

    /// Label drawn on the Send button
    #[serde(default = "default_send_label")]
    pub send_label: String,

    /// Label drawn on the Reset button
    #[serde(default = "default_reset_label")]
    pub reset_label: String,

    /// Send button fill
    #[serde(default = "default_send_color")]
    pub send_color: ColorSpec,

    /// Reset button fill
    #[serde(default = "default_reset_color")]
    pub reset_color: ColorSpec,

    /// Label text color
    #[serde(default = "default_label_color")]
    pub label_color: ColorSpec,

    /// Brightness multiplier applied to a button while it is held (valid range: 0.0 - 1.0)
    #[serde(default = "default_pressed_shade")]
    pub pressed_shade: f64,

    /// Font family for labels (e.g., "Sans", "DejaVu Sans")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Label font size in points (valid range: 8.0 - 200.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

impl Default for ButtonsConfig {
    fn default() -> Self {
        Self {
            strip_width: default_strip_width(),
            send_label: default_send_label(),
            reset_label: default_reset_label(),
            send_color: default_send_color(),
            reset_color: default_reset_color(),
            label_color: default_label_color(),
            pressed_shade: default_pressed_shade(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_size: default_font_size(),
        }
    }
}

/// Where and how Send writes the canvas.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Output directory; `~/` is expanded. Defaults to the working directory.
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// Image encoding: "png" or "jpeg"
    #[serde(default = "default_export_format")]
    pub format: ExportFormat,

    /// JPEG quality (valid range: 1 - 100)
    #[serde(default = "default_export_quality")]
    pub quality: u8,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            format: default_export_format(),
            quality: default_export_quality(),
        }
    }
}

/// Render loop and surface settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DisplayConfig {
    /// Sleep between frames in milliseconds (valid range: 5 - 1000)
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,

    /// Layer-shell namespace reported to the compositor
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Number of shared-memory buffers (valid range: 2 - 4)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Quit when Escape is pressed on an attached keyboard
    #[serde(default = "default_escape_quits")]
    pub escape_quits: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: default_frame_interval_ms(),
            namespace: default_namespace(),
            buffer_count: default_buffer_count(),
            escape_quits: default_escape_quits(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_background_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_stroke_thickness() -> f64 {
    4.0
}

fn default_strip_width() -> u32 {
    400
}

fn default_send_label() -> String {
    "Send".to_string()
}

fn default_reset_label() -> String {
    "Reset".to_string()
}

fn default_send_color() -> ColorSpec {
    ColorSpec::Rgb([0, 69, 255])
}

fn default_reset_color() -> ColorSpec {
    ColorSpec::Rgb([255, 69, 0])
}

fn default_label_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_pressed_shade() -> f64 {
    0.6
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "bold".to_string()
}

fn default_font_size() -> f64 {
    48.0
}

fn default_export_directory() -> String {
    ".".to_string()
}

fn default_export_format() -> ExportFormat {
    ExportFormat::Png
}

fn default_export_quality() -> u8 {
    90
}

fn default_frame_interval_ms() -> u64 {
    33
}

fn default_namespace() -> String {
    "intercom".to_string()
}

fn default_buffer_count() -> u32 {
    2
}

fn default_escape_quits() -> bool {
    true
}
