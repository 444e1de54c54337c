//! Tracks the layer surface and the size the compositor assigned to it.

use log::{debug, info, warn};
use smithay_client_toolkit::shell::{WaylandSurface, wlr_layer::LayerSurface};
use wayland_client::protocol::wl_surface::WlSurface;

/// Owns the fullscreen layer surface and its first configured size.
///
/// The size is fixed by the first non-empty configure; the canvas layout is
/// built from it and never changes for the lifetime of the process.
pub struct SurfaceState {
    layer_surface: Option<LayerSurface>,
    width: u32,
    height: u32,
    configured: bool,
}

impl SurfaceState {
    /// Creates a new, unconfigured surface state.
    pub fn new() -> Self {
        Self {
            layer_surface: None,
            width: 0,
            height: 0,
            configured: false,
        }
    }

    /// Assigns the layer surface produced during startup.
    pub fn set_layer_surface(&mut self, surface: LayerSurface) {
        self.layer_surface = Some(surface);
    }

    /// Underlying `wl_surface` of the layer surface, if created.
    pub fn wl_surface(&self) -> Option<&WlSurface> {
        self.layer_surface.as_ref().map(|layer| layer.wl_surface())
    }

    /// Records a configured size.
    ///
    /// Returns `true` only for the first non-empty size. Later sizes that differ
    /// are reported and ignored.
    pub fn apply_configure(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            debug!("Ignoring empty configure {}x{}", width, height);
            return false;
        }

        if self.configured {
            if (width, height) != (self.width, self.height) {
                warn!(
                    "Compositor resized surface to {}x{}; keeping startup size {}x{}",
                    width, height, self.width, self.height
                );
            }
            return false;
        }

        self.width = width;
        self.height = height;
        self.configured = true;
        true
    }

    /// Current surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns whether the surface has completed its initial configure.
    pub fn is_configured(&self) -> bool {
        self.configured
    }
}

impl Drop for SurfaceState {
    fn drop(&mut self) {
        if self.layer_surface.take().is_some() {
            info!("Destroying layer surface");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_configure_fixes_size() {
        let mut surface = SurfaceState::new();
        assert!(!surface.is_configured());

        assert!(!surface.apply_configure(0, 0));
        assert!(!surface.is_configured());

        assert!(surface.apply_configure(1920, 1080));
        assert!(surface.is_configured());

        assert!(!surface.apply_configure(1280, 720));
        assert_eq!((surface.width(), surface.height()), (1920, 1080));
    }
}
