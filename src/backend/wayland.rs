//! Wayland backend using wlr-layer-shell for the overlay surface.
//!
//! Protocol callbacks live in `handlers/`; they only translate events into
//! [`InputEvent`](crate::input::InputEvent)s. The loop in `backend.rs` drains
//! that queue into the dispatcher and renders.

mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
