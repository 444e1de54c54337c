//! Rendering error type.

use crate::util::Rect;
use thiserror::Error;

/// Errors raised by a display surface.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface pixels unavailable: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("Region {region:?} lies outside the {width}x{height} surface")]
    RegionOutOfBounds {
        region: Rect,
        width: u32,
        height: u32,
    },

    #[error("Failed to present frame: {0}")]
    Present(String),
}
