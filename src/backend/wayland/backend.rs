// Coordinates backend startup/shutdown and drives the event loop while delegating
// rendering & protocol state to `WaylandState` and its handler modules.
use anyhow::{Context, Result};
use log::{debug, info, warn};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        wlr_layer::{Anchor, KeyboardInteractivity, Layer, LayerShell},
    },
    shm::Shm,
};
use wayland_client::{Connection, globals::registry_queue_init};

use super::state::WaylandState;
use crate::{
    backend::BackendOptions,
    config::Config,
    input::InputState,
};

const MAX_RENDER_FAILURES: u32 = 10;

/// Wayland backend state
pub struct WaylandBackend {
    options: BackendOptions,
}

impl WaylandBackend {
    pub fn new(options: BackendOptions) -> Self {
        Self { options }
    }

    fn load_config(&self) -> Config {
        let loaded = match &self.options.config_path {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };
        match loaded {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config: {:#}. Using defaults.", e);
                Config::default()
            }
        }
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting Wayland backend");

        // Connect to Wayland compositor
        let conn =
            Connection::connect_to_env().context("Failed to connect to Wayland compositor")?;
        debug!("Connected to Wayland display");

        // Initialize registry and event queue
        let (globals, mut event_queue) =
            registry_queue_init(&conn).context("Failed to initialize Wayland registry")?;
        let qh = event_queue.handle();

        // Bind global interfaces
        let compositor_state =
            CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
        debug!("Bound compositor");

        let layer_shell =
            LayerShell::bind(&globals, &qh).context("zwlr_layer_shell_v1 not available")?;
        debug!("Bound layer shell");

        let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
        debug!("Bound shared memory");

        let output_state = OutputState::new(&globals, &qh);
        let seat_state = SeatState::new(&globals, &qh);
        let registry_state = RegistryState::new(&globals);

        let config = self.load_config();
        info!("Configuration loaded");
        debug!("  Color: {:?}", config.drawing.default_color);
        debug!("  Width: {:.1}dp", config.drawing.default_width);
        debug!("  Buffer count: {}", config.performance.buffer_count);
        debug!("  VSync: {}", config.performance.enable_vsync);

        let input_state = InputState::from_config(&config, self.options.debug);

        let mut state = WaylandState::new(
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            config,
            input_state,
            self.options.debug,
        );

        // Learn output names before choosing one
        event_queue
            .roundtrip(&mut state)
            .context("Initial Wayland roundtrip failed")?;

        let target_output = match self.options.output.as_deref() {
            Some(name) => match state.find_output(name) {
                Ok(output) => {
                    info!("Placing overlay on output '{}'", name);
                    Some(output)
                }
                Err(err) => {
                    warn!("{}; letting the compositor choose", err);
                    None
                }
            },
            None => None,
        };

        // Create layer shell surface
        info!("Creating layer shell surface");
        let wl_surface = state.compositor_state.create_surface(&qh);
        let layer_surface = state.layer_shell.create_layer_surface(
            &qh,
            wl_surface,
            Layer::Overlay,
            Some("screenpen"),
            target_output.as_ref(),
        );

        // Fullscreen overlay that takes every key
        layer_surface.set_anchor(Anchor::all());
        layer_surface.set_keyboard_interactivity(KeyboardInteractivity::Exclusive);
        layer_surface.set_size(0, 0);
        layer_surface.set_exclusive_zone(-1);
        layer_surface.commit();

        state.surface.set_layer_surface(layer_surface);
        info!("Layer shell surface created");

        let mut consecutive_render_failures = 0u32;

        loop {
            if state.input_state.should_exit {
                info!("Exit requested, breaking event loop");
                break;
            }

            event_queue
                .blocking_dispatch(&mut state)
                .context("Wayland event queue error")?;

            state.drain_events();
            if state.input_state.should_exit {
                info!("Exit requested after dispatch, breaking event loop");
                break;
            }

            // Render if configured and needs redraw, but only if no frame callback pending
            let vsync = state.config.performance.enable_vsync;
            let can_render = state.surface.is_configured()
                && state.input_state.needs_redraw
                && (!state.surface.frame_callback_pending() || !vsync);

            if !can_render {
                continue;
            }

            match state.render(&qh) {
                Ok(()) => {
                    consecutive_render_failures = 0;
                    state.input_state.needs_redraw = false;
                    if vsync {
                        state.surface.set_frame_callback_pending(true);
                    }
                }
                Err(e) => {
                    consecutive_render_failures += 1;
                    warn!(
                        "Rendering error (attempt {}/{}): {:#}",
                        consecutive_render_failures, MAX_RENDER_FAILURES, e
                    );

                    if consecutive_render_failures >= MAX_RENDER_FAILURES {
                        return Err(e.context(format!(
                            "Too many consecutive render failures ({consecutive_render_failures})"
                        )));
                    }

                    // Clear redraw flag to avoid infinite error loop
                    state.input_state.needs_redraw = false;
                }
            }
        }

        info!("Wayland backend exiting");
        Ok(())
    }
}
