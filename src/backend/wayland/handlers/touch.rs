// Touch contacts draw like the primary mouse button. Only the first finger
// down is followed; others are ignored until it lifts.
use log::debug;
use smithay_client_toolkit::seat::touch::TouchHandler;
use wayland_client::{
    Connection, QueueHandle,
    protocol::{wl_surface, wl_touch},
};

use crate::input::{Buttons, InputEvent, PointerEvent, PointerKind};

use super::super::state::WaylandState;

/// Follows the single touch point that is allowed to draw.
#[derive(Debug, Default)]
pub(in crate::backend::wayland) struct TouchTracker {
    active: Option<i32>,
}

impl TouchTracker {
    pub(in crate::backend::wayland) fn new() -> Self {
        Self::default()
    }

    fn down(&mut self, id: i32) -> Option<PointerKind> {
        if self.active.is_some() {
            return None;
        }
        self.active = Some(id);
        Some(PointerKind::Press)
    }

    fn motion(&self, id: i32) -> Option<PointerKind> {
        (self.active == Some(id)).then_some(PointerKind::Drag)
    }

    fn up(&mut self, id: i32) -> Option<PointerKind> {
        if self.active != Some(id) {
            return None;
        }
        self.active = None;
        Some(PointerKind::Release)
    }

    /// Drops the tracked contact, returning `Cancel` if one was down.
    pub(in crate::backend::wayland) fn cancel(&mut self) -> Option<PointerKind> {
        self.active.take().map(|_| PointerKind::Cancel)
    }
}

/// Buttons reported with a touch-derived pointer event.
fn touch_buttons(kind: PointerKind) -> Buttons {
    match kind {
        PointerKind::Press | PointerKind::Drag => Buttons::PRIMARY,
        PointerKind::Release | PointerKind::Cancel => Buttons::NONE,
    }
}

impl WaylandState {
    fn push_touch(&mut self, kind: PointerKind, position: (f64, f64)) {
        let position = self.to_device(position);
        self.push_event(InputEvent::Pointer(PointerEvent::new(
            kind,
            position,
            touch_buttons(kind),
        )));
    }
}

impl TouchHandler for WaylandState {
    fn down(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _touch: &wl_touch::WlTouch,
        _serial: u32,
        _time: u32,
        _surface: wl_surface::WlSurface,
        id: i32,
        position: (f64, f64),
    ) {
        match self.touch.down(id) {
            Some(kind) => {
                self.touch_position = position;
                self.push_touch(kind, position);
            }
            None => debug!("Ignoring extra touch point {}", id),
        }
    }

    fn up(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _touch: &wl_touch::WlTouch,
        _serial: u32,
        _time: u32,
        id: i32,
    ) {
        if let Some(kind) = self.touch.up(id) {
            // wl_touch.up carries no position; reuse the last one.
            self.push_touch(kind, self.touch_position);
        }
    }

    fn motion(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _touch: &wl_touch::WlTouch,
        _time: u32,
        id: i32,
        position: (f64, f64),
    ) {
        if let Some(kind) = self.touch.motion(id) {
            self.touch_position = position;
            self.push_touch(kind, position);
        }
    }

    fn shape(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _touch: &wl_touch::WlTouch,
        _id: i32,
        _major: f64,
        _minor: f64,
    ) {
    }

    fn orientation(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _touch: &wl_touch::WlTouch,
        _id: i32,
        _orientation: f64,
    ) {
    }

    fn cancel(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _touch: &wl_touch::WlTouch) {
        debug!("Touch sequence cancelled by compositor");
        if let Some(kind) = self.touch.cancel() {
            self.push_touch(kind, self.touch_position);
        }
    }
}
