use clap::{ArgAction, Parser};
use std::path::PathBuf;

use screenpen::backend::{self, BackendOptions};
use screenpen::config;

#[derive(Parser, Debug)]
#[command(name = "screenpen")]
#[command(version, about = "Freehand screen annotation overlay for Wayland compositors")]
struct Cli {
    /// Log every pointer, key, focus and placement event (same as SCREENPEN_DEBUG=1)
    #[arg(long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Output to place the overlay on (connector name, e.g. DP-1)
    #[arg(long, short = 'o', value_name = "NAME")]
    output: Option<String>,

    /// Config file to use instead of ~/.config/screenpen/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,
}

fn init_logging(debug: bool) {
    let default_filter = if debug {
        "info,screenpen=debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let debug = cli.debug || config::debug_from_env();
    init_logging(debug);

    log::info!(
        "screenpen {} ({}, {}) debug={}",
        env!("CARGO_PKG_VERSION"),
        env!("SCREENPEN_GIT_HASH"),
        env!("SCREENPEN_TARGET"),
        debug
    );

    // Check for Wayland environment
    if std::env::var("WAYLAND_DISPLAY").is_err() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run on a compositor with wlr-layer-shell support (Sway, Hyprland, ...).");
        return Err(anyhow::anyhow!("WAYLAND_DISPLAY not set"));
    }

    log::info!("Starting annotation overlay...");
    log::info!("Controls:");
    log::info!("  - Draw: drag with the left button");
    log::info!("  - Colors: R, G, B, Y, O, P");
    log::info!("  - Highlighter: X");
    log::info!("  - Width: 1 (thin), 2 (medium), 3 (thick)");
    log::info!("  - Dim background: A");
    log::info!("  - Clear all: C");
    log::info!("  - Exit: Escape");

    backend::run_wayland(BackendOptions {
        config_path: cli.config,
        output: cli.output,
        debug,
    })?;

    log::info!("Annotation overlay closed.");
    Ok(())
}
