// Coordinates backend startup/shutdown and drives the fixed-rate frame loop while
// delegating protocol state to `WaylandState` and its handler modules.
use anyhow::{Context, Result, anyhow};
use calloop::EventLoop;
use log::{debug, info};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    reexports::calloop_wayland_source::WaylandSource,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        wlr_layer::{Anchor, KeyboardInteractivity, Layer, LayerShell},
    },
    shm::Shm,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use wayland_client::{Connection, globals::registry_queue_init};

use super::display::WaylandDisplay;
use super::state::WaylandState;
use crate::config::Config;
use crate::controller::{CanvasController, CanvasStyle, LoopControl};
use crate::draw::{FontDescriptor, LabelRenderer};
use crate::export::{ImageExporter, file::expand_tilde};
use crate::layout::{ButtonLayout, Geometry};

/// How long to block per dispatch while waiting for the first configure.
const CONFIGURE_POLL: Duration = Duration::from_millis(100);

/// Wayland backend state
pub struct WaylandBackend {
    config: Config,
}

impl WaylandBackend {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting Wayland backend");

        let quit_signal = Arc::new(AtomicBool::new(false));
        for signal in [signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&quit_signal))
                .with_context(|| format!("Failed to register handler for signal {signal}"))?;
        }

        // Connect to Wayland compositor
        let conn =
            Connection::connect_to_env().context("Failed to connect to Wayland compositor")?;
        debug!("Connected to Wayland display");

        // Initialize registry and event queue
        let (globals, event_queue) =
            registry_queue_init(&conn).context("Failed to initialize Wayland registry")?;
        let qh = event_queue.handle();

        // Bind global interfaces
        let compositor_state =
            CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
        debug!("Bound compositor");

        let layer_shell =
            LayerShell::bind(&globals, &qh).context("zwlr_layer_shell_v1 not available")?;
        debug!("Bound layer shell");

        let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
        debug!("Bound shared memory");

        let output_state = OutputState::new(&globals, &qh);
        let seat_state = SeatState::new(&globals, &qh);
        let registry_state = RegistryState::new(&globals);

        let mut event_loop: EventLoop<WaylandState> =
            EventLoop::try_new().context("Failed to create event loop")?;
        WaylandSource::new(conn.clone(), event_queue)
            .insert(event_loop.handle())
            .map_err(|e| anyhow!("Failed to insert Wayland source: {}", e.error))?;

        let mut state = WaylandState::new(
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            self.config.display.escape_quits,
        );

        // Create layer shell surface
        info!("Creating layer shell surface");
        let wl_surface = state.compositor_state.create_surface(&qh);
        let layer_surface = state.layer_shell.create_layer_surface(
            &qh,
            wl_surface,
            Layer::Overlay,
            Some(self.config.display.namespace.clone()),
            None, // Default output
        );

        // Fullscreen: anchored to every edge, no exclusive zone, all keyboard input
        layer_surface.set_anchor(Anchor::all());
        layer_surface.set_keyboard_interactivity(KeyboardInteractivity::Exclusive);
        layer_surface.set_size(0, 0);
        layer_surface.set_exclusive_zone(-1);
        layer_surface.commit();

        state.surface.set_layer_surface(layer_surface);
        info!("Layer shell surface created");

        while !state.surface.is_configured() {
            event_loop
                .dispatch(CONFIGURE_POLL, &mut state)
                .context("Wayland event dispatch failed")?;
            if state.closed || quit_signal.load(Ordering::Relaxed) {
                info!("Exit requested before the surface was configured");
                return Ok(());
            }
        }

        let geometry = Geometry::new(state.surface.width(), state.surface.height())
            .context("Compositor assigned an unusable surface size")?;
        let layout = ButtonLayout::new(geometry, self.config.buttons.strip_width)
            .context("Button strip does not fit the display")?;

        let labels = LabelRenderer::new(
            FontDescriptor::new(
                self.config.buttons.font_family.clone(),
                self.config.buttons.font_weight.clone(),
                "normal".to_string(),
            ),
            self.config.buttons.font_size,
        );
        let wl_surface = state
            .surface
            .wl_surface()
            .context("Layer surface not created")?
            .clone();
        let mut display = WaylandDisplay::new(
            geometry,
            labels,
            &state.shm,
            self.config.display.buffer_count as usize,
            wl_surface,
            conn.clone(),
        )
        .context("Failed to create display surface")?;

        let exporter = ImageExporter::new(
            expand_tilde(&self.config.export.directory),
            self.config.export.format,
            self.config.export.quality,
        );
        info!(
            "Exports go to {} as {:?}",
            exporter.directory().display(),
            exporter.format()
        );
        let mut controller =
            CanvasController::new(layout, CanvasStyle::from_config(&self.config), exporter);

        let frame_interval = Duration::from_millis(self.config.display.frame_interval_ms);
        info!(
            "Entering frame loop ({}x{}, {}ms per frame)",
            geometry.width(),
            geometry.height(),
            frame_interval.as_millis()
        );

        loop {
            event_loop
                .dispatch(Duration::ZERO, &mut state)
                .context("Wayland event dispatch failed")?;

            if quit_signal.load(Ordering::Relaxed) {
                info!("Termination signal received");
                break;
            }

            let events = state.take_events();
            let control = controller
                .handle_events(&mut display, events)
                .context("Failed to send canvas")?;
            if control == LoopControl::Quit {
                info!("Quit requested, leaving frame loop");
                break;
            }

            controller
                .draw(&mut display)
                .context("Failed to draw frame")?;

            thread::sleep(frame_interval);
        }

        info!("Wayland backend exiting");
        Ok(())
    }
}
