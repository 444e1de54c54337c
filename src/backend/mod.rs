use anyhow::Result;

use crate::config::Config;

pub mod wayland;

/// Runs the canvas on the Wayland compositor until a quit request.
///
/// # Arguments
/// * `config` - Validated configuration; the button strip must fit the display
pub fn run_wayland(config: Config) -> Result<()> {
    let mut backend = wayland::WaylandBackend::new(config);
    backend.run()
}
