//! Controller state and the Send/Reset operations.

use crate::canvas::CanvasState;
use crate::config::Config;
use crate::draw::{Color, DisplaySurface};
use crate::export::{ExportError, ImageExporter};
use crate::input::InputEvent;
use crate::layout::{Button, ButtonId, ButtonLayout};
use chrono::Local;
use log::{debug, info};
use std::path::PathBuf;

/// Colors and labels used when drawing a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasStyle {
    pub background: Color,
    pub stroke_color: Color,
    pub stroke_thickness: f64,
    pub send_color: Color,
    pub reset_color: Color,
    pub label_color: Color,
    /// Multiplier applied to a button fill while it is held.
    pub pressed_shade: f64,
    pub send_label: String,
    pub reset_label: String,
}

impl CanvasStyle {
    pub fn from_config(config: &Config) -> Self {
        Self {
            background: config.canvas.background_color.to_color(),
            stroke_color: config.canvas.stroke_color.to_color(),
            stroke_thickness: config.canvas.stroke_thickness,
            send_color: config.buttons.send_color.to_color(),
            reset_color: config.buttons.reset_color.to_color(),
            label_color: config.buttons.label_color.to_color(),
            pressed_shade: config.buttons.pressed_shade,
            send_label: config.buttons.send_label.clone(),
            reset_label: config.buttons.reset_label.clone(),
        }
    }
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// What the frame loop should do after a batch of events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Owns the strokes and button state for one display.
///
/// All mutation happens on the frame loop thread through
/// [`handle_events`](Self::handle_events); drawing goes through
/// [`draw`](Self::draw).
pub struct CanvasController {
    pub(super) layout: ButtonLayout,
    pub(super) style: CanvasStyle,
    pub(super) canvas: CanvasState,
    /// Index of the stroke receiving points, set between finger-down and finger-up.
    pub(super) open_stroke: Option<usize>,
    pub(super) send: Button,
    pub(super) reset: Button,
    exporter: ImageExporter,
    pub(super) quit_requested: bool,
}

impl CanvasController {
    pub fn new(layout: ButtonLayout, style: CanvasStyle, exporter: ImageExporter) -> Self {
        debug!(
            "Canvas region {:?}, send {:?}, reset {:?}",
            layout.canvas_rect(),
            layout.button_rect(ButtonId::Send),
            layout.button_rect(ButtonId::Reset)
        );
        Self {
            send: layout.button(ButtonId::Send),
            reset: layout.button(ButtonId::Reset),
            layout,
            style,
            canvas: CanvasState::new(),
            open_stroke: None,
            exporter,
            quit_requested: false,
        }
    }

    pub fn layout(&self) -> &ButtonLayout {
        &self.layout
    }

    pub fn style(&self) -> &CanvasStyle {
        &self.style
    }

    pub fn canvas(&self) -> &CanvasState {
        &self.canvas
    }

    pub fn exporter(&self) -> &ImageExporter {
        &self.exporter
    }

    /// True while a finger-down has not been matched by a finger-up.
    pub fn is_drawing(&self) -> bool {
        self.open_stroke.is_some()
    }

    pub fn button(&self, id: ButtonId) -> &Button {
        match id {
            ButtonId::Send => &self.send,
            ButtonId::Reset => &self.reset,
        }
    }

    pub fn is_pressed(&self, id: ButtonId) -> bool {
        self.button(id).pressed
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Drains one frame's worth of input.
    ///
    /// Each event is decoded to pixels and applied in order. A release over Send
    /// exports the canvas from `surface` and then clears it; a release over Reset
    /// clears it. Export failures abort the batch and are returned to the caller.
    pub fn handle_events<S, I>(
        &mut self,
        surface: &mut S,
        events: I,
    ) -> Result<LoopControl, ExportError>
    where
        S: DisplaySurface + ?Sized,
        I: IntoIterator<Item = InputEvent>,
    {
        let geometry = self.layout.geometry();
        for event in events {
            let decoded = event.decode(geometry);
            match self.apply(decoded) {
                Some(ButtonId::Send) => {
                    self.send_image(surface)?;
                    self.reset_canvas();
                }
                Some(ButtonId::Reset) => self.reset_canvas(),
                None => {}
            }
        }

        Ok(if self.quit_requested {
            LoopControl::Quit
        } else {
            LoopControl::Continue
        })
    }

    /// Writes the canvas region of the current scene to a timestamped file.
    ///
    /// The scene is re-rendered before capture so the image reflects every
    /// stroke recorded so far, including ones added since the last present.
    pub fn send_image<S>(&self, surface: &mut S) -> Result<PathBuf, ExportError>
    where
        S: DisplaySurface + ?Sized,
    {
        self.render_scene(surface)?;
        let pixels = surface.capture_region(self.layout.canvas_rect())?;
        let path = self.exporter.export(&pixels, Local::now())?;
        info!(
            "Sent {} stroke(s) as {}",
            self.canvas.len(),
            path.display()
        );
        Ok(path)
    }

    /// Drops every stroke.
    pub fn reset_canvas(&mut self) {
        if !self.canvas.is_empty() {
            debug!("Clearing {} stroke(s)", self.canvas.len());
        }
        self.canvas.clear();
        self.open_stroke = None;
    }
}
