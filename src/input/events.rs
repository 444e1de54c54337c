//! Backend-neutral input events and their pixel-space decoding.

use crate::canvas::Point;
use crate::layout::Geometry;

/// Raw event as produced by an input source.
///
/// Coordinates are fractions of the screen width/height, nominally in `[0, 1]`.
/// Values outside that range are legal and decode to off-screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The user or the system asked the application to stop.
    Quit,
    /// A finger (or the primary mouse button) touched down.
    PointerDown { x: f64, y: f64 },
    /// The active contact moved.
    PointerMove { x: f64, y: f64 },
    /// The active contact lifted.
    PointerUp { x: f64, y: f64 },
    /// The compositor took over the active contact; no release position exists.
    PointerCancel,
}

impl InputEvent {
    /// Converts normalized coordinates into pixels on `geometry`.
    pub fn decode(self, geometry: Geometry) -> CanvasEvent {
        match self {
            InputEvent::Quit => CanvasEvent::Quit,
            InputEvent::PointerDown { x, y } => CanvasEvent::Down(geometry.to_pixel(x, y)),
            InputEvent::PointerMove { x, y } => CanvasEvent::Move(geometry.to_pixel(x, y)),
            InputEvent::PointerUp { x, y } => CanvasEvent::Up(geometry.to_pixel(x, y)),
            InputEvent::PointerCancel => CanvasEvent::Cancel,
        }
    }
}

/// Pixel-space event consumed by the canvas controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasEvent {
    Quit,
    Down(Point),
    Move(Point),
    Up(Point),
    Cancel,
}
