use crate::draw::{self, DrawCommand, FrameStyle};

use super::InputState;

impl InputState {
    /// Composes the draw commands for the current surface size.
    ///
    /// Background, optional dim overlay, committed strokes, then the open stroke.
    pub fn compose_frame(&self, style: &FrameStyle) -> Vec<DrawCommand> {
        draw::compose_frame(
            &self.frame,
            self.current_stroke(),
            self.tool.dim,
            style,
            self.screen_width,
            self.screen_height,
        )
    }
}
