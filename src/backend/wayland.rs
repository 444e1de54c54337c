//! Wayland layer-shell backend.
//!
//! `backend` owns the frame loop, `state` and `handlers` translate protocol events
//! into [`InputEvent`](crate::input::InputEvent)s, and `display` presents the
//! offscreen canvas through shared-memory buffers.

mod backend;
mod display;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
