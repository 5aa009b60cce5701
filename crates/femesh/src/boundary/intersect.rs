//! Pairwise crossing checks over boundary edges.

use crate::geom2::{segments_intersect, share_endpoint, Edge, Point};

/// Proper crossing of two edges given by node indices.
#[inline]
pub fn two_edges_intersect(nodes: &[Point], e1: Edge, e2: Edge) -> bool {
    segments_intersect(nodes[e1.0], nodes[e1.1], nodes[e2.0], nodes[e2.1])
}

/// First pair of edges that cross, skipping pairs with a common endpoint.
///
/// O(n²) over all unordered pairs.
pub fn find_intersecting_pair(nodes: &[Point], edges: &[Edge]) -> Option<(Edge, Edge)> {
    edges.iter().enumerate().find_map(|(i, &e1)| {
        edges[i + 1..]
            .iter()
            .find(|&&e2| !share_endpoint(e1, e2) && two_edges_intersect(nodes, e1, e2))
            .map(|&e2| (e1, e2))
    })
}

/// True if any two non-adjacent edges cross.
pub fn any_edges_intersect(nodes: &[Point], edges: &[Edge]) -> bool {
    find_intersecting_pair(nodes, edges).is_some()
}

/// True if `edge` crosses any edge of `edges` it does not share a node with.
pub fn edge_intersects_edges(edge: Edge, nodes: &[Point], edges: &[Edge]) -> bool {
    edges
        .iter()
        .any(|&e| !share_endpoint(edge, e) && two_edges_intersect(nodes, edge, e))
}
