//! Axis-aligned geometry and intersection tests
//!
//! Everything the simulation needs to resolve contacts: rect/rect, point/rect,
//! segment/segment, segment/rect, and circle/rect. All functions are pure and
//! use closed intervals, so touching edges count as contact.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Parallel/degenerate segment denominators below this are treated as a miss
const PARALLEL_EPSILON: f32 = 1e-6;

/// An axis-aligned rectangle anchored at its top-left corner in a y-up world.
///
/// The rect spans `[x, x + w]` horizontally and `[y - h, y]` vertically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Derive the anchored rect from a center position and dimensions
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            x: center.x - size.x / 2.0,
            y: center.y + size.y / 2.0,
            w: size.x,
            h: size.y,
        }
    }

    /// Center of the rectangle
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y - self.h / 2.0)
    }

    /// Corners in order: top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.w, self.y),
            Vec2::new(self.x + self.w, self.y - self.h),
            Vec2::new(self.x, self.y - self.h),
        ]
    }
}

/// Result of a circle-vs-rect proximity check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleRectHit {
    pub collided: bool,
    /// How far the circle overlaps the rect (0 when separated)
    pub penetration: f32,
}

/// True iff the rects' projections overlap on both axes
pub fn rects_intersect(a: Rect, b: Rect) -> bool {
    a.x <= b.x + b.w && b.x <= a.x + a.w && a.y >= b.y - b.h && b.y >= a.y - a.h
}

/// True iff the point lies within the rect's closed bounds
pub fn point_in_rect(rect: Rect, p: Vec2) -> bool {
    p.x >= rect.x && p.x <= rect.x + rect.w && p.y <= rect.y && p.y >= rect.y - rect.h
}

/// Parametric segment-segment intersection (Paul Bourke's formulation).
///
/// Returns true iff both interpolation parameters lie in [0, 1]. Parallel and
/// degenerate segments produce a near-zero denominator and report a miss
/// rather than dividing into a NaN.
pub fn segments_intersect(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> bool {
    let denom = (p4.y - p3.y) * (p2.x - p1.x) - (p4.x - p3.x) * (p2.y - p1.y);
    if denom.abs() < PARALLEL_EPSILON {
        return false;
    }

    let ua = ((p4.x - p3.x) * (p1.y - p3.y) - (p4.y - p3.y) * (p1.x - p3.x)) / denom;
    let ub = ((p2.x - p1.x) * (p1.y - p3.y) - (p2.y - p1.y) * (p1.x - p3.x)) / denom;

    (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub)
}

/// True iff the segment crosses any of the rect's four edges
pub fn segment_intersects_rect(p1: Vec2, p2: Vec2, rect: Rect) -> bool {
    let [tl, tr, br, bl] = rect.corners();

    segments_intersect(p1, p2, tl, tr)
        || segments_intersect(p1, p2, tr, br)
        || segments_intersect(p1, p2, br, bl)
        || segments_intersect(p1, p2, bl, tl)
}

/// Clamp the circle center onto the rect and compare against the radius
pub fn circle_rect_distance(center: Vec2, radius: f32, rect: Rect) -> CircleRectHit {
    let closest = Vec2::new(
        center.x.clamp(rect.x, rect.x + rect.w),
        center.y.clamp(rect.y - rect.h, rect.y),
    );
    let dist = (center - closest).length();

    CircleRectHit {
        collided: dist <= radius,
        penetration: (radius - dist).max(0.0),
    }
}
