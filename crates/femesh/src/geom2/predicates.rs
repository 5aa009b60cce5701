//! Orientation and intersection predicates on plain `f64` coordinates.
//!
//! No perturbation or exact arithmetic: collinear configurations are
//! "not strictly left" and "not strictly positive". Segments that only touch
//! or overlap collinearly therefore do not count as crossing.

use super::types::Point;

/// Cross product of `(b - a)` and `(c - a)`: twice the signed area of `abc`.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Strict counterclockwise test for the triangle `abc`.
#[inline]
pub fn ccw(a: Point, b: Point, c: Point) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// True if `c` lies strictly to the left of the directed line `a → b`.
#[inline]
pub fn is_left_of(c: Point, a: Point, b: Point) -> bool {
    orientation(a, b, c) > 0.0
}

/// Proper crossing of segments `ab` and `cd`.
///
/// `c` and `d` must be separated by line `ab` and `a`, `b` by line `cd`.
/// Callers exempt segments that share an endpoint.
#[inline]
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    ccw(a, c, d) != ccw(b, c, d) && ccw(a, b, c) != ccw(a, b, d)
}

/// Cosine of the angle `a-c-b` (the angle at apex `c`).
///
/// Minimizing it maximizes the apex angle, which favors well shaped triangles.
#[inline]
pub fn angle_cosine(a: Point, b: Point, c: Point) -> f64 {
    let u = a - c;
    let v = b - c;
    u.dot(&v) / (u.norm() * v.norm())
}
