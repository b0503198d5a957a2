// Holds the live Wayland protocol state shared by the backend loop and the handler
// submodules. Handlers only queue input events here; the loop drains them.
use anyhow::{Context, Result};
use log::trace;
use smithay_client_toolkit::{
    compositor::CompositorState, output::OutputState, registry::RegistryState, seat::SeatState,
    shell::{WaylandSurface, wlr_layer::LayerShell}, shm::Shm,
};
use std::collections::VecDeque;
use wayland_client::{
    QueueHandle,
    protocol::{wl_output, wl_shm},
};

use crate::{
    backend::placement::{self, Placement, PlacementError},
    config::Config,
    draw::{FrameStyle, Point},
    input::{Buttons, InputEvent, InputState, Modifiers, PointerEvent, PointerKind},
};

use super::{handlers::touch::TouchTracker, surface::SurfaceState};

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) layer_shell: LayerShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,

    // Surface and buffer management
    pub(super) surface: SurfaceState,

    // Configuration
    pub(super) config: Config,
    pub(super) frame_style: FrameStyle,
    pub(super) debug: bool,

    // Input state, fed only through `pending_events`
    pub(super) input_state: InputState,
    pub(super) pending_events: VecDeque<InputEvent>,
    pub(super) pointer_position: Point,
    pub(super) pointer_buttons: Buttons,
    pub(super) modifiers: Modifiers,
    pub(super) touch: TouchTracker,
    // Surface-local; `wl_touch.up` has no position of its own
    pub(super) touch_position: (f64, f64),

    // First `surface_enter` only
    pub(super) placement: Placement,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        layer_shell: LayerShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        input_state: InputState,
        debug: bool,
    ) -> Self {
        let frame_style = config.frame_style();
        Self {
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            surface: SurfaceState::new(),
            config,
            frame_style,
            debug,
            input_state,
            pending_events: VecDeque::new(),
            pointer_position: Point::default(),
            pointer_buttons: Buttons::NONE,
            modifiers: Modifiers::new(),
            touch: TouchTracker::new(),
            touch_position: (0.0, 0.0),
            placement: Placement::new(),
        }
    }

    /// Queues an event for the next pass of the control loop.
    pub(super) fn push_event(&mut self, event: InputEvent) {
        self.pending_events.push_back(event);
    }

    /// Queues a pointer event at the last known position.
    pub(super) fn push_pointer(&mut self, kind: PointerKind) {
        self.push_event(InputEvent::Pointer(PointerEvent::new(
            kind,
            self.pointer_position,
            self.pointer_buttons,
        )));
    }

    /// Hands every queued event to the dispatcher, oldest first.
    pub(super) fn drain_events(&mut self) {
        let events = std::mem::take(&mut self.pending_events);
        self.input_state.dispatch(events);
    }

    /// Converts a surface-local position to buffer pixels.
    pub(super) fn to_device(&self, position: (f64, f64)) -> Point {
        Point::from(position).scaled(f64::from(self.surface.scale()))
    }

    /// Pushes the current buffer size and scale into the input state.
    pub(super) fn sync_input_geometry(&mut self) {
        self.input_state
            .update_screen_dimensions(self.surface.buffer_width(), self.surface.buffer_height());
        self.input_state
            .set_pixels_per_dp(f64::from(self.surface.scale()));
    }

    pub(super) fn output_identity_for(
        &self,
        output: &wl_output::WlOutput,
    ) -> Result<String, PlacementError> {
        let info = self
            .output_state
            .info(output)
            .ok_or(PlacementError::NoOutputInfo)?;

        Ok(placement::output_identity(
            info.name.as_deref(),
            &info.make,
            &info.model,
            info.id,
        ))
    }

    /// Finds the output with the given connector name.
    pub(super) fn find_output(&self, name: &str) -> Result<wl_output::WlOutput, PlacementError> {
        let candidates = self.output_state.outputs().map(|output| {
            let name = self
                .output_state
                .info(&output)
                .and_then(|info| info.name);
            (name, output)
        });
        placement::select_output(candidates, name)
    }

    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        trace!("=== RENDER START ===");
        let buffer_count = self.config.performance.buffer_count as usize;
        let width = self.surface.buffer_width();
        let height = self.surface.buffer_height();

        // Get a buffer from the pool
        let (buffer, canvas) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            pool.create_buffer(
                width as i32,
                height as i32,
                (width * 4) as i32,
                wl_shm::Format::Argb8888,
            )
            .context("Failed to create buffer")?
        };

        // SAFETY: `canvas` is a mutable slice from SlotPool holding exactly
        // width * height * 4 bytes in ARGB32 layout with stride width * 4.
        // `cairo_surface` and `ctx` are dropped before the buffer is attached,
        // so Cairo never touches the memory after ownership moves to the compositor.
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                canvas.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                (width * 4) as i32,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;

        let commands = self.input_state.compose_frame(&self.frame_style);
        trace!(
            "Painting {} commands ({} committed strokes)",
            commands.len(),
            self.input_state.frame.len()
        );
        crate::draw::paint(&ctx, &commands).context("Failed to paint frame")?;

        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        let wl_surface = self
            .surface
            .layer_surface()
            .context("Layer surface not created")?
            .wl_surface();
        wl_surface.set_buffer_scale(self.surface.scale());
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);
        wl_surface.damage_buffer(0, 0, width as i32, height as i32);

        if self.config.performance.enable_vsync {
            trace!("Requesting frame callback (vsync enabled)");
            wl_surface.frame(qh, wl_surface.clone());
        }

        wl_surface.commit();
        trace!("=== RENDER COMPLETE ===");

        Ok(())
    }
}
