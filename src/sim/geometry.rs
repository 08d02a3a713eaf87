//! Pure geometry primitives shared by containment and collision
//!
//! No state here; everything is a function of its arguments.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A straight line segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Zero-length segments never intersect anything
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    /// Intersection point with another segment, if any
    #[inline]
    pub fn intersect(&self, other: &Segment) -> Option<Vec2> {
        segment_intersect(self.a, self.b, other.a, other.b)
    }
}

/// True iff `point` lies strictly inside the circle (boundary excluded)
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance(center) < radius
}

/// Intersection of segments p1-p2 and p3-p4 (Paul Bourke's parametric form)
///
/// Returns `None` when either segment has zero length, when the segments are
/// parallel (including collinear), or when the crossing of the infinite lines
/// falls outside either segment. Endpoints count as part of the segment.
pub fn segment_intersect(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<Vec2> {
    if p1 == p2 || p3 == p4 {
        return None;
    }

    let denominator = (p4.y - p3.y) * (p2.x - p1.x) - (p4.x - p3.x) * (p2.y - p1.y);
    if denominator == 0.0 {
        return None;
    }

    let ua = ((p4.x - p3.x) * (p1.y - p3.y) - (p4.y - p3.y) * (p1.x - p3.x)) / denominator;
    let ub = ((p2.x - p1.x) * (p1.y - p3.y) - (p2.y - p1.y) * (p1.x - p3.x)) / denominator;

    if !(0.0..=1.0).contains(&ua) || !(0.0..=1.0).contains(&ub) {
        return None;
    }

    Some(p1 + ua * (p2 - p1))
}
