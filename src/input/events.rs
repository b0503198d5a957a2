//! Backend-neutral input event types.
//!
//! The Wayland handlers translate protocol callbacks into these values and
//! push them onto a FIFO that the control loop drains once per iteration.

use super::modifiers::Modifiers;
use crate::draw::Point;

/// Generic key representation.
///
/// Backend implementations map their native key codes to these generic
/// key values for unified input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Space bar
    Space,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Name used for keybinding lookup, or `None` for unmapped keys.
    ///
    /// Characters are upper-cased so bindings compare case-insensitively.
    pub fn name(&self) -> Option<String> {
        match self {
            Key::Char(c) => Some(c.to_uppercase().collect()),
            Key::Escape => Some("Escape".to_string()),
            Key::Return => Some("Return".to_string()),
            Key::Space => Some("Space".to_string()),
            Key::Unknown => None,
        }
    }
}

/// Whether a key went down or up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// One keyboard event with the modifiers held at the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub state: KeyState,
    pub modifiers: Modifiers,
}

impl KeyInput {
    /// Convenience constructor for a press with no modifiers held.
    pub fn press(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
        }
    }

    /// Convenience constructor for a release with no modifiers held.
    pub fn release(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Released,
            modifiers: Modifiers::default(),
        }
    }
}

/// Set of pointer buttons held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Buttons(u8);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    /// Left mouse button or touch contact.
    pub const PRIMARY: Buttons = Buttons(1);
    pub const SECONDARY: Buttons = Buttons(1 << 1);
    pub const TERTIARY: Buttons = Buttons(1 << 2);

    /// Returns true if every button in `other` is held.
    pub fn contains(self, other: Buttons) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Buttons) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Buttons) {
        self.0 &= !other.0;
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 | rhs.0)
    }
}

/// Kind of pointer transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// A button went down.
    Press,
    /// The pointer moved while at least one button is held.
    Drag,
    /// A button went up.
    Release,
    /// The gesture was interrupted (pointer left the surface, focus lost).
    Cancel,
}

/// One pointer event in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
    /// Buttons held after this event was applied (for `Press`, including the new one).
    pub buttons: Buttons,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, position: Point, buttons: Buttons) -> Self {
        Self {
            kind,
            position,
            buttons,
        }
    }
}

/// Everything the control loop consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(KeyInput),
    /// Keyboard focus gained (`true`) or lost (`false`).
    Focus(bool),
}
