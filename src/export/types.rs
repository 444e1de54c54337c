//! Data types for canvas export.

use crate::draw::RenderError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Encoding used for exported canvases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Lossless PNG (quality is ignored).
    Png,
    /// Baseline JPEG at the configured quality.
    #[serde(alias = "jpg")]
    Jpeg,
}

impl ExportFormat {
    /// File extension written after the timestamp.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }
}

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to capture canvas: {0}")]
    Capture(#[from] RenderError),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to save image: {0}")]
    Io(#[from] std::io::Error),
}
