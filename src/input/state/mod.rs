mod actions;
mod core;
mod debug;
mod pointer;
mod render;
#[cfg(test)]
mod tests;

pub use core::{DrawingState, InputState};
pub use debug::{DebugLog, POINTER_LOG_INTERVAL};
