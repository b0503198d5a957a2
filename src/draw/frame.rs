//! Frame container for the committed strokes.

use super::stroke::Stroke;

/// All strokes committed during this session.
///
/// Insertion order is drawing order: later strokes paint over earlier ones.
/// Strokes are never edited once committed; the only removal is [`Frame::clear`].
#[derive(Debug, Clone, Default)]
pub struct Frame {
    strokes: Vec<Stroke>,
}

impl Frame {
    /// Creates a new empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves a finished stroke onto the top of the frame.
    pub fn commit(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Removes every committed stroke.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Committed strokes, bottom layer first.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
