//! Apex search for a single front edge.

use crate::boundary::edge_intersects_edges;
use crate::geom2::{angle_cosine, is_left_of, Edge, Point};

/// Best third node for front edge `a → b`, or `None` if no node qualifies.
///
/// Candidates lie strictly left of `a → b` and neither `(a, c)` nor `(b, c)`
/// may cross a remaining front edge. The winner minimizes the cosine of the
/// apex angle `a-c-b`; ties keep the lowest node index.
pub fn find_third_point(a: usize, b: usize, nodes: &[Point], front: &[Edge]) -> Option<usize> {
    let (pa, pb) = (nodes[a], nodes[b]);
    let mut best: Option<(usize, f64)> = None;
    for (c, &pc) in nodes.iter().enumerate() {
        if c == a || c == b || !is_left_of(pc, pa, pb) {
            continue;
        }
        if edge_intersects_edges((a, c), nodes, front) || edge_intersects_edges((b, c), nodes, front)
        {
            continue;
        }
        let crit = angle_cosine(pa, pb, pc);
        if best.is_none_or(|(_, m)| crit < m) {
            best = Some((c, crit));
        }
    }
    best.map(|(c, _)| c)
}
