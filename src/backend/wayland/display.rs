//! Presents the offscreen canvas through shared-memory buffers.

use log::{debug, info};
use smithay_client_toolkit::shm::{Shm, slot::SlotPool};
use wayland_client::{
    Connection,
    protocol::{wl_shm, wl_surface::WlSurface},
};

use crate::canvas::Point;
use crate::draw::{CairoSurface, Color, DisplaySurface, LabelRenderer, PixelBuffer, RenderError};
use crate::layout::Geometry;
use crate::util::Rect;

/// Display surface for the layer shell.
///
/// Drawing goes to an offscreen Cairo surface; [`present`](DisplaySurface::present)
/// copies the finished frame into a pooled `wl_buffer` and commits it.
pub(super) struct WaylandDisplay {
    canvas: CairoSurface,
    pool: SlotPool,
    wl_surface: WlSurface,
    conn: Connection,
}

impl WaylandDisplay {
    pub(super) fn new(
        geometry: Geometry,
        labels: LabelRenderer,
        shm: &Shm,
        buffer_count: usize,
        wl_surface: WlSurface,
        conn: Connection,
    ) -> Result<Self, RenderError> {
        let canvas = CairoSurface::new(geometry, labels)?;

        let buffer_size = geometry.width() as usize * geometry.height() as usize * 4;
        let pool_size = buffer_size * buffer_count;
        info!(
            "Creating new SlotPool ({}x{}, {} bytes, {} buffers)",
            geometry.width(),
            geometry.height(),
            pool_size,
            buffer_count
        );
        let pool = SlotPool::new(pool_size, shm)
            .map_err(|e| RenderError::Present(format!("failed to create slot pool: {e}")))?;

        Ok(Self {
            canvas,
            pool,
            wl_surface,
            conn,
        })
    }
}

impl DisplaySurface for WaylandDisplay {
    fn geometry(&self) -> Geometry {
        self.canvas.geometry()
    }

    fn clear(&mut self, color: Color) -> Result<(), RenderError> {
        self.canvas.clear(color)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.canvas.fill_rect(rect, color)
    }

    fn draw_polyline(
        &mut self,
        points: &[Point],
        color: Color,
        thickness: f64,
    ) -> Result<(), RenderError> {
        self.canvas.draw_polyline(points, color, thickness)
    }

    fn draw_label(&mut self, text: &str, color: Color, rect: Rect) -> Result<(), RenderError> {
        self.canvas.draw_label(text, color, rect)
    }

    fn present(&mut self) -> Result<(), RenderError> {
        let geometry = self.canvas.geometry();
        let width = geometry.width() as i32;
        let height = geometry.height() as i32;
        let row_bytes = geometry.width() as usize * 4;

        let (buffer, target) = self
            .pool
            .create_buffer(width, height, width * 4, wl_shm::Format::Argb8888)
            .map_err(|e| RenderError::Present(format!("failed to create buffer: {e}")))?;

        // Cairo ARgb32 and wl_shm Argb8888 share the native-endian layout, so rows
        // copy as-is; only the stride may differ.
        let stride = self.canvas.stride();
        self.canvas.with_pixels(|source| {
            for (dst, src) in target
                .chunks_exact_mut(row_bytes)
                .zip(source.chunks(stride))
            {
                dst.copy_from_slice(&src[..row_bytes]);
            }
        })?;

        buffer
            .attach_to(&self.wl_surface)
            .map_err(|e| RenderError::Present(format!("failed to attach buffer: {e}")))?;
        self.wl_surface.damage_buffer(0, 0, width, height);
        self.wl_surface.commit();
        self.conn
            .flush()
            .map_err(|e| RenderError::Present(format!("failed to flush connection: {e}")))?;
        Ok(())
    }

    fn capture_region(&mut self, rect: Rect) -> Result<PixelBuffer, RenderError> {
        self.canvas.capture_region(rect)
    }
}

impl Drop for WaylandDisplay {
    fn drop(&mut self) {
        debug!("Releasing shared-memory pool and offscreen canvas");
    }
}
