//! Ink model and rendering (Cairo-based).
//!
//! This module defines the core drawing types used for screen annotation:
//! - [`Point`] and [`interpolate`]: device-pixel geometry and gap filling
//! - [`Stroke`]: one freehand stroke made of circular dabs
//! - [`Frame`]: the committed strokes in drawing order
//! - [`compose_frame`] / [`paint`]: frame composition and Cairo output

pub mod color;
pub mod frame;
pub mod interpolate;
pub mod point;
pub mod render;
pub mod stroke;

// Re-export commonly used types at module level
pub use color::Color;
pub use frame::Frame;
pub use interpolate::{Interpolated, interpolate};
pub use point::Point;
pub use render::{DrawCommand, FrameStyle, compose_frame, paint};
pub use stroke::Stroke;

pub use color::{
    BACKGROUND, BLACK, BLUE, DIM_OVERLAY, GREEN, HIGHLIGHTER, ORANGE, PINK, RED, WHITE, YELLOW,
};
