use crate::draw::Stroke;
use crate::input::events::{Buttons, PointerEvent, PointerKind};
use crate::util;
use log::debug;
use std::time::Instant;

use super::{DrawingState, InputState};

impl InputState {
    /// Processes one pointer event.
    ///
    /// # Behavior
    /// - Primary press while Idle and on the surface: starts a stroke with the
    ///   current tool settings
    /// - Press while Drawing: ignored
    /// - Drag while Drawing: extends the open stroke
    /// - Release or Cancel while Drawing: commits the open stroke
    /// - Anything else: ignored
    pub fn on_pointer(&mut self, event: PointerEvent) {
        if self.debug.should_log_pointer(Instant::now()) {
            debug!(
                "Pointer {:?} at ({:.1}, {:.1}) buttons {:?}",
                event.kind, event.position.x, event.position.y, event.buttons
            );
        }

        match event.kind {
            PointerKind::Press => {
                if self.is_drawing()
                    || !event.buttons.contains(Buttons::PRIMARY)
                    || !self.in_bounds(event.position)
                {
                    return;
                }
                let width = util::dp_to_px(self.tool.width_dp, self.pixels_per_dp);
                self.state = DrawingState::Drawing {
                    stroke: Stroke::begin(self.tool.color, width, event.position),
                };
                self.needs_redraw = true;
            }
            PointerKind::Drag => {
                if let DrawingState::Drawing { stroke } = &mut self.state {
                    if stroke.extend(event.position) > 0 {
                        self.needs_redraw = true;
                    }
                }
            }
            PointerKind::Release | PointerKind::Cancel => self.commit_current(),
        }
    }
}
