//! Timestamped file naming and image encoding.

use super::types::{ExportError, ExportFormat};
use crate::draw::PixelBuffer;
use chrono::{DateTime, Local};
use image::ColorType;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::ImageEncoder;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// chrono pattern for exported file names: sortable, one-second resolution.
pub const FILENAME_TIMESTAMP: &str = "%Y-%m-%d-%H-%M-%S";

/// Generate the file name for an export taken at `at`.
///
/// ```
/// use chrono::{Local, TimeZone};
/// use intercom::export::{ExportFormat, file::generate_filename};
///
/// let at = Local.with_ymd_and_hms(2023, 11, 4, 9, 5, 7).single().unwrap();
/// assert_eq!(generate_filename(at, ExportFormat::Png), "2023-11-04-09-05-07.png");
/// ```
pub fn generate_filename(at: DateTime<Local>, format: ExportFormat) -> String {
    format!("{}.{}", at.format(FILENAME_TIMESTAMP), format.extension())
}

/// Ensure the export directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<(), ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }
    Ok(())
}

/// Encodes `pixels` in `format` and writes them to `path`.
///
/// `quality` (1-100) only applies to JPEG; PNG output is lossless.
pub fn encode_and_write(
    pixels: &PixelBuffer,
    path: &Path,
    format: ExportFormat,
    quality: u8,
) -> Result<(), ExportError> {
    let writer = BufWriter::new(File::create(path)?);

    match format {
        ExportFormat::Png => PngEncoder::new(writer).write_image(
            pixels.as_rgba(),
            pixels.width(),
            pixels.height(),
            ColorType::Rgba8,
        )?,
        ExportFormat::Jpeg => JpegEncoder::new_with_quality(writer, quality.clamp(1, 100))
            .write_image(
                &pixels.to_rgb(),
                pixels.width(),
                pixels.height(),
                ColorType::Rgb8,
            )?,
    }

    let written_size = fs::metadata(path)?.len();
    log::debug!("File written: {} bytes", written_size);

    Ok(())
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
