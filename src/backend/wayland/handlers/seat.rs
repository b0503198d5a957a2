// Requests keyboard, pointer and touch devices as seats advertise them. Losing
// the pointer or touch device mid-stroke is reported to the dispatcher as a cancel.
use log::{debug, info, warn};
use smithay_client_toolkit::seat::{Capability, SeatHandler, SeatState};
use wayland_client::{Connection, QueueHandle, protocol::wl_seat};

use crate::input::{Buttons, PointerKind};

use super::super::state::WaylandState;

impl SeatHandler for WaylandState {
    fn seat_state(&mut self) -> &mut SeatState {
        &mut self.seat_state
    }

    fn new_seat(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _seat: wl_seat::WlSeat) {
        debug!("New seat available");
    }

    fn new_capability(
        &mut self,
        _conn: &Connection,
        qh: &QueueHandle<Self>,
        seat: wl_seat::WlSeat,
        capability: Capability,
    ) {
        match capability {
            Capability::Keyboard => match self.seat_state.get_keyboard(qh, &seat, None) {
                Ok(_) => info!("Keyboard initialized"),
                Err(err) => warn!("Failed to get keyboard: {}", err),
            },
            Capability::Pointer => match self.seat_state.get_pointer(qh, &seat) {
                Ok(_) => info!("Pointer initialized"),
                Err(err) => warn!("Failed to get pointer: {}", err),
            },
            Capability::Touch => match self.seat_state.get_touch(qh, &seat) {
                Ok(_) => info!("Touch initialized"),
                Err(err) => warn!("Failed to get touch: {}", err),
            },
            _ => debug!("Ignoring seat capability {:?}", capability),
        }
    }

    fn remove_capability(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _seat: wl_seat::WlSeat,
        capability: Capability,
    ) {
        info!("Seat capability removed: {:?}", capability);
        if capability == Capability::Pointer && !self.pointer_buttons.is_empty() {
            self.pointer_buttons = Buttons::NONE;
            self.push_pointer(PointerKind::Cancel);
        }
        if capability == Capability::Touch && self.touch.cancel().is_some() {
            self.push_pointer(PointerKind::Cancel);
        }
    }

    fn remove_seat(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _seat: wl_seat::WlSeat) {
        debug!("Seat removed");
    }
}
