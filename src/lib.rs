//! Library exports for the intercom canvas.
//!
//! The binary only wires these together: [`controller`] holds the touch state
//! machine, [`draw`] the rendering surfaces, [`export`] the timestamped image
//! writer and [`backend`] the Wayland frame loop. Everything except the backend is
//! display-independent and can be driven from tests.

pub mod backend;
pub mod canvas;
pub mod config;
pub mod controller;
pub mod draw;
pub mod export;
pub mod input;
pub mod layout;
pub mod util;

pub use config::Config;
