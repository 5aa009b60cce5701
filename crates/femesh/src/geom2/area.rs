//! Signed areas and loop-level helpers over edge lists.

use super::types::{Edge, Point};

/// Signed (oriented) area enclosed by a list of directed edges.
///
/// Shoelace formula evaluated edge by edge, so the input need not be a single
/// vertex cycle: for several closed loops the result is the sum of their
/// signed areas (holes oriented clockwise subtract). Positive means CCW.
///
/// Terms are summed in undirected-edge order, so a flipped edge list yields
/// the exact negative.
pub fn polygon_area(nodes: &[Point], edges: &[Edge]) -> f64 {
    let mut terms: Vec<(Edge, f64)> = edges
        .iter()
        .map(|&(a, b)| {
            let p = nodes[a];
            let q = nodes[b];
            ((a.min(b), a.max(b)), p.x * q.y - q.x * p.y)
        })
        .collect();
    terms.sort_by_key(|&(key, _)| key);
    let twice: f64 = terms.iter().map(|&(_, t)| t).sum();
    twice / 2.0
}

/// Reverse a curve: edge order is reversed and every edge is flipped.
pub fn edges_flip_orientation(edges: &[Edge]) -> Vec<Edge> {
    edges.iter().rev().map(|&(a, b)| (b, a)).collect()
}

/// Even-odd point-in-polygon test against a closed loop of edges.
///
/// Points exactly on the loop may land on either side.
pub fn point_in_loop(p: Point, nodes: &[Point], edges: &[Edge]) -> bool {
    let mut inside = false;
    for &(a, b) in edges {
        let (u, v) = (nodes[a], nodes[b]);
        if (u.y > p.y) != (v.y > p.y) {
            let x_cross = u.x + (p.y - u.y) / (v.y - u.y) * (v.x - u.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Axis-aligned bounding box `(min, max)` of a point set, `None` when empty.
pub fn bounding_box(nodes: &[Point]) -> Option<(Point, Point)> {
    let first = *nodes.first()?;
    Some(nodes.iter().fold((first, first), |(lo, hi), p| {
        (
            Point::new(lo.x.min(p.x), lo.y.min(p.y)),
            Point::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    }))
}
