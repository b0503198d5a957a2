// Bridges Wayland key events into the input queue. Modifiers come from
// `update_modifiers` and ride along with every key event.
use log::debug;
use smithay_client_toolkit::seat::keyboard::{
    KeyEvent, KeyboardHandler, Keysym, Modifiers, RawModifiers,
};
use wayland_client::{
    Connection, QueueHandle,
    protocol::{wl_keyboard, wl_surface},
};

use crate::input::{self, Buttons, InputEvent, Key, KeyInput, KeyState, PointerKind};

use super::super::state::WaylandState;

impl KeyboardHandler for WaylandState {
    fn enter(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _surface: &wl_surface::WlSurface,
        _serial: u32,
        _raw: &[u32],
        _keysyms: &[Keysym],
    ) {
        debug!("Keyboard focus entered");
        self.push_event(InputEvent::Focus(true));
    }

    fn leave(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _surface: &wl_surface::WlSurface,
        _serial: u32,
    ) {
        debug!("Keyboard focus left");
        self.push_event(InputEvent::Focus(false));
        // A drag cannot survive losing focus.
        self.pointer_buttons = Buttons::NONE;
        self.push_pointer(PointerKind::Cancel);
        self.modifiers = input::Modifiers::new();
    }

    fn press_key(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _serial: u32,
        event: KeyEvent,
    ) {
        let key = keysym_to_key(event.keysym);
        self.push_event(InputEvent::Key(KeyInput {
            key,
            state: KeyState::Pressed,
            modifiers: self.modifiers,
        }));
    }

    fn release_key(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _serial: u32,
        event: KeyEvent,
    ) {
        let key = keysym_to_key(event.keysym);
        self.push_event(InputEvent::Key(KeyInput {
            key,
            state: KeyState::Released,
            modifiers: self.modifiers,
        }));
    }

    fn update_modifiers(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _serial: u32,
        modifiers: Modifiers,
        _layout: RawModifiers,
        _group: u32,
    ) {
        self.modifiers = input::Modifiers {
            shift: modifiers.shift,
            ctrl: modifiers.ctrl,
            alt: modifiers.alt,
            logo: modifiers.logo,
        };
        debug!("Modifiers: {}", self.modifiers);
    }

    fn repeat_key(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _serial: u32,
        event: KeyEvent,
    ) {
        debug!("Ignoring key repeat: {:?}", keysym_to_key(event.keysym));
    }
}

fn keysym_to_key(keysym: Keysym) -> Key {
    match keysym {
        Keysym::Escape => Key::Escape,
        Keysym::Return | Keysym::KP_Enter => Key::Return,
        Keysym::space => Key::Space,
        _ => {
            let raw = keysym.raw();
            match raw {
                0x21..=0x7E => Key::Char(raw as u8 as char),
                // Keypad digits
                0xFFB0..=0xFFB9 => Key::Char(char::from(b'0' + (raw - 0xFFB0) as u8)),
                _ => Key::Unknown,
            }
        }
    }
}
