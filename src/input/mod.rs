//! Input event types.
//!
//! Backends report pointer and touch activity as [`InputEvent`]s carrying
//! normalized screen fractions. The controller decodes each one exactly once into a
//! pixel-space [`CanvasEvent`] before any handler sees it.

pub mod events;

pub use events::{CanvasEvent, InputEvent};
