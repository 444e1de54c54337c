// Holds the live Wayland protocol state shared by the backend loop and the handler
// submodules; handlers translate protocol events into queued `InputEvent`s.
use log::{debug, trace};
use smithay_client_toolkit::{
    compositor::CompositorState, output::OutputState, registry::RegistryState, seat::SeatState,
    shell::wlr_layer::LayerShell, shm::Shm,
};

use crate::input::InputEvent;

use super::surface::SurfaceState;

/// Touch contact currently driving the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ActiveContact {
    pub(super) id: i32,
    /// Last known surface-local position; `wl_touch.up` carries none.
    pub(super) position: (f64, f64),
}

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) layer_shell: LayerShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,

    // Layer surface and its configured size
    pub(super) surface: SurfaceState,

    // Input translation
    pending_events: Vec<InputEvent>,
    pub(super) active_contact: Option<ActiveContact>,
    pub(super) pointer_held: bool,
    pub(super) escape_quits: bool,

    /// Set once the compositor closes the layer surface.
    pub(super) closed: bool,
}

impl WaylandState {
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        layer_shell: LayerShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        escape_quits: bool,
    ) -> Self {
        Self {
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            surface: SurfaceState::new(),
            pending_events: Vec::new(),
            active_contact: None,
            pointer_held: false,
            escape_quits,
            closed: false,
        }
    }

    /// Converts surface-local coordinates into fractions of the surface size.
    pub(super) fn normalize(&self, position: (f64, f64)) -> (f64, f64) {
        normalize_position(position, self.surface.width(), self.surface.height())
    }

    pub(super) fn push_event(&mut self, event: InputEvent) {
        trace!("Queued {:?}", event);
        self.pending_events.push(event);
    }

    /// Hands the events queued since the last call to the frame loop.
    pub(super) fn take_events(&mut self) -> Vec<InputEvent> {
        let events = std::mem::take(&mut self.pending_events);
        if !events.is_empty() {
            debug!("Dispatching {} input event(s)", events.len());
        }
        events
    }
}

/// Normalizes a position against a `width`x`height` surface.
///
/// Before the first configure the size is unknown and every position maps
/// off-screen.
pub(super) fn normalize_position(position: (f64, f64), width: u32, height: u32) -> (f64, f64) {
    if width == 0 || height == 0 {
        return (f64::NAN, f64::NAN);
    }
    (position.0 / width as f64, position.1 / height as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_scale_to_fractions() {
        assert_eq!(normalize_position((100.0, 80.0), 1000, 800), (0.1, 0.1));
        assert_eq!(normalize_position((1000.0, 0.0), 1000, 800), (1.0, 0.0));
    }

    #[test]
    fn unconfigured_surface_maps_off_screen() {
        let (x, y) = normalize_position((5.0, 5.0), 0, 0);
        assert!(x.is_nan() && y.is_nan());
    }
}
