use anyhow::Result;
use std::path::PathBuf;

pub mod placement;
pub mod wayland;

/// Startup choices taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct BackendOptions {
    /// Config file to read instead of the default location
    pub config_path: Option<PathBuf>,
    /// Output (connector name) to place the overlay on
    pub output: Option<String>,
    /// Verbose event logging
    pub debug: bool,
}

/// Run Wayland backend with full event loop
pub fn run_wayland(options: BackendOptions) -> Result<()> {
    wayland::WaylandBackend::new(options).run()
}
