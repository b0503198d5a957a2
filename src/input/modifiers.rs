//! Keyboard modifier state tracking.

use std::fmt;

/// Keyboard modifier state.
///
/// Tracks which modifier keys are currently held. Keybindings only look at
/// the modifiers they declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
    /// Ctrl key pressed
    pub ctrl: bool,
    /// Alt key pressed
    pub alt: bool,
    /// Super/logo key pressed
    pub logo: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        !(self.shift || self.ctrl || self.alt || self.logo)
    }
}

impl fmt::Display for Modifiers {
    /// Formats held modifiers as `Ctrl+Shift`, or `none`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names = [
            (self.ctrl, "Ctrl"),
            (self.shift, "Shift"),
            (self.alt, "Alt"),
            (self.logo, "Super"),
        ];
        let held: Vec<&str> = names
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&held.join("+"))
    }
}
