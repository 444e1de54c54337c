//! Canvas data model: pixel points, strokes, and the ordered stroke list.
//!
//! - [`Point`]: an immutable pixel coordinate in surface space
//! - [`Stroke`]: one finger-down-to-finger-up path, append-only
//! - [`CanvasState`]: every stroke in draw (= chronological) order

pub mod frame;
pub mod stroke;

pub use frame::CanvasState;
pub use stroke::{Point, Stroke};
