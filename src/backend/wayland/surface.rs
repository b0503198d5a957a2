//! Manages layer-surface state and shared memory buffers for the Wayland backend.

use anyhow::{Context, Result};
use log::info;
use smithay_client_toolkit::{
    shell::wlr_layer::LayerSurface,
    shm::{Shm, slot::SlotPool},
};

/// Tracks the active layer surface, buffer pool, and associated sizing state.
///
/// `width`/`height` are surface-local (logical) units from the configure
/// event; buffers are `scale` times larger.
pub struct SurfaceState {
    layer_surface: Option<LayerSurface>,
    pool: Option<SlotPool>,
    width: u32,
    height: u32,
    scale: i32,
    configured: bool,
    frame_callback_pending: bool,
}

impl SurfaceState {
    /// Creates a new, unconfigured surface state.
    pub fn new() -> Self {
        Self {
            layer_surface: None,
            pool: None,
            width: 0,
            height: 0,
            scale: 1,
            configured: false,
            frame_callback_pending: false,
        }
    }

    /// Assigns the layer surface produced during startup.
    pub fn set_layer_surface(&mut self, surface: LayerSurface) {
        self.layer_surface = Some(surface);
    }

    /// Returns the current layer surface, if initialized.
    pub fn layer_surface(&self) -> Option<&LayerSurface> {
        self.layer_surface.as_ref()
    }

    /// Updates the surface dimensions, returning `true` if the size changed.
    ///
    /// When the size changes, any existing buffer pool becomes invalid and is dropped.
    pub fn update_dimensions(&mut self, width: u32, height: u32) -> bool {
        let changed = self.width != width || self.height != height;
        self.width = width;
        self.height = height;
        if changed {
            self.pool = None;
        }
        changed
    }

    /// Updates the integer buffer scale, returning `true` if it changed.
    pub fn set_scale(&mut self, scale: i32) -> bool {
        let scale = scale.max(1);
        let changed = self.scale != scale;
        self.scale = scale;
        if changed {
            self.pool = None;
        }
        changed
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Buffer width in device pixels.
    pub fn buffer_width(&self) -> u32 {
        self.width * self.scale as u32
    }

    /// Buffer height in device pixels.
    pub fn buffer_height(&self) -> u32 {
        self.height * self.scale as u32
    }

    /// Marks the surface as configured by the compositor.
    pub fn set_configured(&mut self, configured: bool) {
        self.configured = configured;
    }

    /// Returns whether the surface has completed its initial configure.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Sets the frame callback pending flag.
    pub fn set_frame_callback_pending(&mut self, pending: bool) {
        self.frame_callback_pending = pending;
    }

    /// Returns whether a frame callback is currently outstanding.
    pub fn frame_callback_pending(&self) -> bool {
        self.frame_callback_pending
    }

    /// Ensures a shared memory pool large enough for `buffer_count` buffers exists.
    pub fn ensure_pool(&mut self, shm: &Shm, buffer_count: usize) -> Result<&mut SlotPool> {
        if self.pool.is_none() {
            let (width, height) = (self.buffer_width(), self.buffer_height());
            let buffer_size = (width * height * 4) as usize;
            let pool_size = buffer_size * buffer_count;
            info!(
                "Creating new SlotPool ({}x{}, {} bytes, {} buffers)",
                width, height, pool_size, buffer_count
            );
            let pool = SlotPool::new(pool_size, shm).context("Failed to create slot pool")?;
            self.pool = Some(pool);
        }

        self.pool
            .as_mut()
            .context("Buffer pool not initialized despite previous check")
    }
}
