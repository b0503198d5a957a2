//! Library exports for the screenpen overlay.
//!
//! The ink model, input state machine and configuration are usable without a
//! Wayland connection; `backend` ties them to a layer-shell surface.

pub mod backend;
pub mod config;
pub mod draw;
pub mod input;
pub mod util;

pub use config::Config;
