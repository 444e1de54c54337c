//! Rendering primitives (Cairo-based).
//!
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`DisplaySurface`]: the drawing target the controller renders into
//! - [`CairoSurface`]: offscreen implementation backed by a Cairo image surface
//! - [`LabelRenderer`]: Pango layout of button labels
//! - [`PixelBuffer`]: captured RGBA pixels handed to the exporter

pub mod color;
pub mod error;
pub mod font;
pub mod label;
pub mod pixels;
pub mod render;
pub mod surface;

pub use color::Color;
pub use error::RenderError;
pub use font::FontDescriptor;
pub use label::LabelRenderer;
pub use pixels::PixelBuffer;
pub use surface::{CairoSurface, DisplaySurface};
