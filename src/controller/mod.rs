//! Canvas controller: stroke accumulation, button feedback, Send and Reset.
//!
//! The controller is backend-neutral. It consumes [`InputEvent`](crate::input::InputEvent)s,
//! decodes them into pixel space once, and draws into any
//! [`DisplaySurface`](crate::draw::DisplaySurface).

mod core;
mod render;
mod touch;
#[cfg(test)]
mod tests;

pub use core::{CanvasController, CanvasStyle, LoopControl};
