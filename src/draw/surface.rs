//! Display surface abstraction and its offscreen Cairo implementation.

use super::color::Color;
use super::error::RenderError;
use super::label::LabelRenderer;
use super::pixels::PixelBuffer;
use super::render;
use crate::canvas::Point;
use crate::layout::Geometry;
use crate::util::Rect;
use log::debug;

/// 2D drawing target the canvas controller renders into.
///
/// Implementations buffer drawing until [`present`](Self::present) and must be able
/// to read back what they have drawn so far via
/// [`capture_region`](Self::capture_region).
pub trait DisplaySurface {
    /// Size of the surface in pixels.
    fn geometry(&self) -> Geometry;

    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Color) -> Result<(), RenderError>;

    /// Fills `rect` with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError>;

    /// Draws connected line segments through `points`.
    fn draw_polyline(
        &mut self,
        points: &[Point],
        color: Color,
        thickness: f64,
    ) -> Result<(), RenderError>;

    /// Renders `text` wrapped and centered inside `rect`.
    fn draw_label(&mut self, text: &str, color: Color, rect: Rect) -> Result<(), RenderError>;

    /// Makes the drawn frame visible.
    fn present(&mut self) -> Result<(), RenderError>;

    /// Reads back the current contents of `rect` as straight RGBA.
    fn capture_region(&mut self, rect: Rect) -> Result<PixelBuffer, RenderError>;
}

/// Offscreen `ARgb32` image surface.
///
/// Used directly in tests and wrapped by the Wayland backend, which copies the
/// finished frame into a shared-memory buffer on present.
pub struct CairoSurface {
    surface: cairo::ImageSurface,
    geometry: Geometry,
    labels: LabelRenderer,
}

impl CairoSurface {
    pub fn new(geometry: Geometry, labels: LabelRenderer) -> Result<Self, RenderError> {
        let surface = cairo::ImageSurface::create(
            cairo::Format::ARgb32,
            geometry.width() as i32,
            geometry.height() as i32,
        )?;
        debug!(
            "Created {}x{} offscreen surface",
            geometry.width(),
            geometry.height()
        );
        Ok(Self {
            surface,
            geometry,
            labels,
        })
    }

    /// Bytes per row of the backing memory.
    pub fn stride(&self) -> usize {
        self.surface.stride() as usize
    }

    /// Runs `f` over the raw native-endian ARGB bytes of the surface.
    pub fn with_pixels<T>(&mut self, f: impl FnOnce(&[u8]) -> T) -> Result<T, RenderError> {
        self.surface.flush();
        let data = self.surface.data()?;
        Ok(f(&data))
    }

    fn context(&self) -> Result<cairo::Context, RenderError> {
        Ok(cairo::Context::new(&self.surface)?)
    }
}

impl DisplaySurface for CairoSurface {
    fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn clear(&mut self, color: Color) -> Result<(), RenderError> {
        let ctx = self.context()?;
        render::render_background(&ctx, color)?;
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        let ctx = self.context()?;
        render::render_rect(&ctx, rect, color)?;
        Ok(())
    }

    fn draw_polyline(
        &mut self,
        points: &[Point],
        color: Color,
        thickness: f64,
    ) -> Result<(), RenderError> {
        let ctx = self.context()?;
        render::render_polyline(&ctx, points, color, thickness)?;
        Ok(())
    }

    fn draw_label(&mut self, text: &str, color: Color, rect: Rect) -> Result<(), RenderError> {
        let ctx = self.context()?;
        render::render_label(&ctx, &self.labels, text, color, rect)?;
        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.surface.flush();
        Ok(())
    }

    fn capture_region(&mut self, rect: Rect) -> Result<PixelBuffer, RenderError> {
        if !rect.is_valid() || !self.geometry.bounds().contains_rect(&rect) {
            return Err(RenderError::RegionOutOfBounds {
                region: rect,
                width: self.geometry.width(),
                height: self.geometry.height(),
            });
        }

        let stride = self.stride();
        self.with_pixels(|data| {
            PixelBuffer::from_cairo_argb32(
                data,
                stride,
                rect.x as usize,
                rect.y as usize,
                rect.width as u32,
                rect.height as u32,
            )
        })
    }
}
