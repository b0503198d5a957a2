//! Fills the gap between two pointer samples with evenly spaced dab centers.
//!
//! Pointer drags arrive sparsely, so a stroke made of one dab per sample
//! looks dotted. [`interpolate`] walks the straight segment from `a` to `b`
//! and yields points roughly `spacing` apart so overlapping dabs read as a
//! continuous line.

use super::point::Point;
use std::iter::FusedIterator;

/// Lazily yields the points strictly after `a` up to and including `b`.
///
/// - `spacing <= 1`: yields exactly `b`.
/// - `a == b`: yields nothing.
/// - segment shorter than `spacing`: yields exactly `b`.
/// - otherwise `floor(|b - a| / spacing)` points at `t = i / steps`; the last is `b`.
pub fn interpolate(a: Point, b: Point, spacing: f64) -> Interpolated {
    let steps = if spacing <= 1.0 {
        1
    } else {
        let distance = a.distance(b);
        if distance == 0.0 {
            0
        } else {
            ((distance / spacing).floor() as usize).max(1)
        }
    };

    Interpolated {
        from: a,
        to: b,
        steps,
        next: 1,
    }
}

/// Iterator returned by [`interpolate`].
#[derive(Debug, Clone)]
pub struct Interpolated {
    from: Point,
    to: Point,
    steps: usize,
    next: usize,
}

impl Iterator for Interpolated {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next > self.steps {
            return None;
        }
        let i = self.next;
        self.next += 1;

        // Land on the endpoint exactly instead of trusting float accumulation.
        if i == self.steps {
            return Some(self.to);
        }

        let t = i as f64 / self.steps as f64;
        Some(Point::new(
            self.from.x + (self.to.x - self.from.x) * t,
            self.from.y + (self.to.y - self.from.y) * t,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Interpolated {}

impl FusedIterator for Interpolated {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(a: (f64, f64), b: (f64, f64), spacing: f64) -> Vec<Point> {
        interpolate(a.into(), b.into(), spacing).collect()
    }

    #[test]
    fn vertical_segment_splits_into_spacing_sized_steps() {
        let points = collect((10.0, 10.0), (10.0, 16.0), 3.0);
        assert_eq!(points, vec![Point::new(10.0, 13.0), Point::new(10.0, 16.0)]);
    }

    #[test]
    fn identical_endpoints_yield_nothing() {
        assert!(collect((4.0, 4.0), (4.0, 4.0), 3.0).is_empty());
    }

    #[test]
    fn sub_pixel_spacing_jumps_straight_to_endpoint() {
        assert_eq!(collect((0.0, 0.0), (50.0, 0.0), 1.0), vec![Point::new(50.0, 0.0)]);
        assert_eq!(collect((0.0, 0.0), (50.0, 0.0), 0.5), vec![Point::new(50.0, 0.0)]);
    }

    #[test]
    fn short_segment_still_reaches_endpoint() {
        assert_eq!(collect((0.0, 0.0), (1.0, 1.0), 6.0), vec![Point::new(1.0, 1.0)]);
    }

    #[test]
    fn count_matches_floor_of_distance_over_spacing() {
        let cases = [
            ((0.0, 0.0), (10.0, 0.0), 3.0, 3),
            ((0.0, 0.0), (3.0, 4.0), 2.0, 2),
            ((-7.5, 2.0), (12.25, -30.0), 1.5, 25),
            ((1.0, 1.0), (1.0, 1.9), 1.5, 1),
        ];
        for (a, b, spacing, expected) in cases {
            let iter = interpolate(a.into(), b.into(), spacing);
            assert_eq!(iter.len(), expected, "{a:?} -> {b:?} @ {spacing}");
            assert_eq!(iter.count(), expected);
        }
    }

    #[test]
    fn last_point_is_exactly_the_endpoint() {
        let b = Point::new(123.456, -98.7654);
        let last = interpolate(Point::new(0.1, 0.2), b, 3.3).last().unwrap();
        assert_eq!(last, b);
    }

    #[test]
    fn consecutive_points_are_evenly_spaced_below_twice_the_spacing() {
        let a = Point::new(3.0, 7.0);
        let b = Point::new(211.0, -64.0);
        let spacing = 4.5;
        let iter = interpolate(a, b, spacing);
        let gap = a.distance(b) / iter.len() as f64;
        assert!(gap >= spacing && gap < 2.0 * spacing);

        let mut previous = a;
        for p in iter {
            assert!((previous.distance(p) - gap).abs() < 1e-9);
            previous = p;
        }
        assert_eq!(previous, b);
    }

    #[test]
    fn size_hint_shrinks_as_points_are_consumed() {
        let mut iter = interpolate(Point::new(0.0, 0.0), Point::new(0.0, 9.0), 3.0);
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        iter.by_ref().for_each(drop);
        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
    }
}
