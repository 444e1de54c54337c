use clap::Parser;
use std::path::PathBuf;

use intercom::Config;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("INTERCOM_GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "intercom")]
#[command(version = VERSION, about = "Fullscreen touch whiteboard for Wayland compositors")]
struct Cli {
    /// Read settings from this file instead of ~/.config/intercom/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;

    // Check for Wayland environment
    if std::env::var_os("WAYLAND_DISPLAY").is_none() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run on a compositor with wlr-layer-shell (Sway, Hyprland, etc.).");
        return Err(anyhow::anyhow!(
            "WAYLAND_DISPLAY not set: Wayland environment required"
        ));
    }

    log::info!("Starting intercom canvas...");
    log::info!("Controls:");
    log::info!("  - Draw: drag a finger across the canvas");
    log::info!("  - {}: export the canvas, then clear it", config.buttons.send_label);
    log::info!("  - {}: clear the canvas", config.buttons.reset_label);
    if config.display.escape_quits {
        log::info!("  - Exit: Escape");
    }

    intercom::backend::run_wayland(config)?;

    log::info!("intercom closed.");
    Ok(())
}
