// Turns pointer frames into Press/Drag/Release/Cancel events in buffer pixels.
use log::debug;
use smithay_client_toolkit::seat::pointer::{
    BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, PointerEvent, PointerEventKind, PointerHandler,
};
use wayland_client::{Connection, QueueHandle, protocol::wl_pointer};

use crate::input::{Buttons, PointerKind};

use super::super::state::WaylandState;

/// Pointer transition with the protocol details stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Enter,
    Leave,
    Motion,
    Press(u32),
    Release(u32),
    Axis,
}

impl From<&PointerEventKind> for Transition {
    fn from(kind: &PointerEventKind) -> Self {
        match kind {
            PointerEventKind::Enter { .. } => Transition::Enter,
            PointerEventKind::Leave { .. } => Transition::Leave,
            PointerEventKind::Motion { .. } => Transition::Motion,
            PointerEventKind::Press { button, .. } => Transition::Press(*button),
            PointerEventKind::Release { button, .. } => Transition::Release(*button),
            PointerEventKind::Axis { .. } => Transition::Axis,
        }
    }
}

fn button_mask(button: u32) -> Option<Buttons> {
    match button {
        BTN_LEFT => Some(Buttons::PRIMARY),
        BTN_RIGHT => Some(Buttons::SECONDARY),
        BTN_MIDDLE => Some(Buttons::TERTIARY),
        _ => None,
    }
}

/// Updates the held-button set and returns the dispatcher event, if any.
fn translate(transition: Transition, held: &mut Buttons) -> Option<PointerKind> {
    match transition {
        Transition::Enter | Transition::Axis => None,
        Transition::Leave => {
            if held.is_empty() {
                return None;
            }
            *held = Buttons::NONE;
            Some(PointerKind::Cancel)
        }
        Transition::Motion => (!held.is_empty()).then_some(PointerKind::Drag),
        Transition::Press(button) => {
            let mask = button_mask(button)?;
            held.insert(mask);
            Some(PointerKind::Press)
        }
        Transition::Release(button) => {
            let mask = button_mask(button)?;
            held.remove(mask);
            // Only lifting the drawing button ends a stroke.
            (mask == Buttons::PRIMARY).then_some(PointerKind::Release)
        }
    }
}

impl PointerHandler for WaylandState {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _pointer: &wl_pointer::WlPointer,
        events: &[PointerEvent],
    ) {
        for event in events {
            self.pointer_position = self.to_device(event.position);

            let transition = Transition::from(&event.kind);
            match transition {
                Transition::Enter => debug!(
                    "Pointer entered at ({}, {})",
                    event.position.0, event.position.1
                ),
                Transition::Leave => debug!("Pointer left surface"),
                _ => {}
            }

            if let Some(kind) = translate(transition, &mut self.pointer_buttons) {
                self.push_pointer(kind);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_without_buttons_is_dropped() {
        let mut held = Buttons::NONE;
        assert_eq!(translate(Transition::Motion, &mut held), None);
        assert_eq!(translate(Transition::Enter, &mut held), None);
        assert_eq!(translate(Transition::Axis, &mut held), None);
    }

    #[test]
    fn primary_press_drag_release() {
        let mut held = Buttons::NONE;
        assert_eq!(
            translate(Transition::Press(BTN_LEFT), &mut held),
            Some(PointerKind::Press)
        );
        assert_eq!(held, Buttons::PRIMARY);
        assert_eq!(
            translate(Transition::Motion, &mut held),
            Some(PointerKind::Drag)
        );
        assert_eq!(
            translate(Transition::Release(BTN_LEFT), &mut held),
            Some(PointerKind::Release)
        );
        assert!(held.is_empty());
    }

    #[test]
    fn leave_during_drag_cancels() {
        let mut held = Buttons::NONE;
        translate(Transition::Press(BTN_LEFT), &mut held);
        assert_eq!(
            translate(Transition::Leave, &mut held),
            Some(PointerKind::Cancel)
        );
        assert!(held.is_empty());
        assert_eq!(translate(Transition::Leave, &mut held), None);
    }

    #[test]
    fn secondary_release_does_not_end_stroke() {
        let mut held = Buttons::NONE;
        translate(Transition::Press(BTN_LEFT), &mut held);
        translate(Transition::Press(BTN_RIGHT), &mut held);
        assert_eq!(
            translate(Transition::Release(BTN_RIGHT), &mut held),
            None
        );
        assert_eq!(held, Buttons::PRIMARY);
    }

    #[test]
    fn secondary_press_reports_held_set() {
        let mut held = Buttons::NONE;
        assert_eq!(
            translate(Transition::Press(BTN_RIGHT), &mut held),
            Some(PointerKind::Press)
        );
        assert_eq!(held, Buttons::SECONDARY);
        assert!(!held.contains(Buttons::PRIMARY));

        translate(Transition::Press(BTN_LEFT), &mut held);
        assert_eq!(held, Buttons::PRIMARY | Buttons::SECONDARY);
        // Motion with only the secondary button held still drags.
        translate(Transition::Release(BTN_LEFT), &mut held);
        assert_eq!(
            translate(Transition::Motion, &mut held),
            Some(PointerKind::Drag)
        );
    }

    #[test]
    fn unknown_buttons_are_ignored() {
        let mut held = Buttons::NONE;
        assert_eq!(translate(Transition::Press(0x116), &mut held), None);
        assert!(held.is_empty());
    }
}
