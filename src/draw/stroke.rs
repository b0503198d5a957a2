//! Ink strokes: chains of circular dabs.

use super::color::Color;
use super::interpolate::interpolate;
use super::point::Point;

/// Smallest stroke width in device pixels.
pub const MIN_STROKE_WIDTH: f64 = 1.0;

/// A single freehand ink stroke.
///
/// Rendered as a filled disc of [`Stroke::radius`] at every point, so the
/// density of `points` is what makes the stroke look continuous. Points are
/// only ever appended.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    /// Ink color captured from the tool state when the stroke began
    pub color: Color,
    /// Stroke width in device pixels (always >= [`MIN_STROKE_WIDTH`])
    pub width: f64,
}

impl Stroke {
    /// Starts a stroke containing only `origin`.
    ///
    /// Widths below [`MIN_STROKE_WIDTH`] (or NaN) are raised to the minimum.
    pub fn begin(color: Color, width: f64, origin: Point) -> Self {
        let width = if width >= MIN_STROKE_WIDTH {
            width
        } else {
            MIN_STROKE_WIDTH
        };
        Self {
            points: vec![origin],
            color,
            width,
        }
    }

    /// Appends interpolated points from the last point to `next`.
    ///
    /// Uses half the stroke width as dab spacing. Returns how many points were added.
    pub fn extend(&mut self, next: Point) -> usize {
        let Some(&last) = self.points.last() else {
            self.points.push(next);
            return 1;
        };
        let before = self.points.len();
        self.points.extend(interpolate(last, next, self.width / 2.0));
        self.points.len() - before
    }

    /// Dab centers in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Dab radius: half the width, never below one pixel.
    pub fn radius(&self) -> f64 {
        (self.width / 2.0).max(1.0)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
