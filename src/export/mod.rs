//! Canvas export: timestamped image files written on Send.
//!
//! The exporter receives already-captured pixels, so it never touches the display.
//! Files are named `YYYY-MM-DD-HH-MM-SS.<ext>` from the local wall clock; two
//! exports within the same second overwrite each other.

pub mod file;
pub mod types;

pub use types::{ExportError, ExportFormat};

use crate::draw::PixelBuffer;
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Writes captured canvases to an export directory.
#[derive(Debug, Clone)]
pub struct ImageExporter {
    directory: PathBuf,
    format: ExportFormat,
    quality: u8,
}

impl ImageExporter {
    pub fn new(directory: PathBuf, format: ExportFormat, quality: u8) -> Self {
        Self {
            directory,
            format,
            quality,
        }
    }

    pub fn directory(&self) -> &std::path::Path {
        &self.directory
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// Encodes `pixels` into a file named after `at`, returning its path.
    pub fn export(&self, pixels: &PixelBuffer, at: DateTime<Local>) -> Result<PathBuf, ExportError> {
        file::ensure_directory_exists(&self.directory)?;

        let path = self.directory.join(file::generate_filename(at, self.format));
        log::info!(
            "Saving canvas to: {} ({}x{})",
            path.display(),
            pixels.width(),
            pixels.height()
        );

        file::encode_and_write(pixels, &path, self.format, self.quality)?;

        log::info!("Canvas saved successfully: {}", path.display());
        Ok(path)
    }
}

impl Default for ImageExporter {
    fn default() -> Self {
        Self::new(PathBuf::from("."), ExportFormat::Png, 90)
    }
}
