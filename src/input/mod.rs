//! Input handling and tool state machine.
//!
//! This module translates backend keyboard and pointer events into drawing actions.
//! It maintains the current tool state (color, width, dim) and the stroke
//! state machine (idle, drawing).

pub mod events;
pub mod modifiers;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Buttons, InputEvent, Key, KeyInput, KeyState, PointerEvent, PointerKind};
pub use modifiers::Modifiers;
pub use state::{DebugLog, DrawingState, InputState};
pub use tool::{ToolPresets, ToolState};
