//! Line segment geometry for paddles
//!
//! A paddle is a thick segment: the centerline from `start` to `end`, widened by
//! a thickness applied at collision time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::SEGMENT_EPSILON;

/// Nearest point to `p` on the segment `a`-`b`
///
/// The projection parameter is clamped to [0, 1]. A segment whose squared length
/// is at or below `SEGMENT_EPSILON` is treated as the point `a`.
pub fn nearest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= SEGMENT_EPSILON {
        return a;
    }

    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// A directed line segment
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Segment of `length` leaving `start` along `dir`
    pub fn from_direction(start: Vec2, dir: Vec2, length: f32) -> Self {
        Self {
            start,
            end: start + dir * length,
        }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }

    /// Nearest point on the segment to `p`
    #[inline]
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        nearest_point_on_segment(p, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_nearest_point_interior() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        let p = Vec2::new(4.0, 5.0);
        assert_eq!(nearest_point_on_segment(p, a, b), Vec2::new(4.0, 0.0));
    }

    #[test]
    fn test_nearest_point_clamps_to_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(nearest_point_on_segment(Vec2::new(-3.0, 2.0), a, b), a);
        assert_eq!(nearest_point_on_segment(Vec2::new(14.0, -2.0), a, b), b);
    }

    #[test]
    fn test_nearest_point_degenerate_segment() {
        let a = Vec2::new(3.0, 3.0);
        let p = Vec2::new(100.0, -40.0);
        assert_eq!(nearest_point_on_segment(p, a, a), a);

        // Shorter than the epsilon still counts as a point
        let b = a + Vec2::new(0.005, 0.0);
        assert_eq!(nearest_point_on_segment(p, a, b), a);
    }

    #[test]
    fn test_segment_from_direction() {
        let seg = Segment::from_direction(Vec2::new(1.0, 1.0), Vec2::Y, 5.0);
        assert_eq!(seg.end, Vec2::new(1.0, 6.0));
        assert!((seg.length() - 5.0).abs() < 1e-6);
        assert_eq!(seg.nearest_point(Vec2::new(4.0, 3.0)), Vec2::new(1.0, 3.0));
    }

    fn coord() -> impl Strategy<Value = f32> {
        -1000.0f32..1000.0
    }

    proptest! {
        #[test]
        fn prop_degenerate_segment_returns_start(
            px in coord(), py in coord(),
            ax in coord(), ay in coord(),
        ) {
            let a = Vec2::new(ax, ay);
            prop_assert_eq!(nearest_point_on_segment(Vec2::new(px, py), a, a), a);
        }

        #[test]
        fn prop_nearest_point_is_no_farther_than_endpoints(
            px in coord(), py in coord(),
            ax in coord(), ay in coord(),
            bx in coord(), by in coord(),
        ) {
            let p = Vec2::new(px, py);
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            let q = nearest_point_on_segment(p, a, b);
            let d = (p - q).length();
            prop_assert!(d <= (p - a).length() + 1e-2);
            prop_assert!(d <= (p - b).length() + 1e-2);
        }

        #[test]
        fn prop_beyond_end_on_axis_snaps_to_end(
            len in 1.0f32..500.0,
            beyond in 0.1f32..500.0,
            off in -500.0f32..500.0,
        ) {
            // Points past `b` along the axis, at any perpendicular offset, clamp to b
            let a = Vec2::ZERO;
            let b = Vec2::new(len, 0.0);
            let p = Vec2::new(len + beyond, off);
            prop_assert_eq!(nearest_point_on_segment(p, a, b), b);
        }
    }
}
