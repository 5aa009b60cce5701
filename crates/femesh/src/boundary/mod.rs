//! Boundary validation: loop extraction, winding normalization and the
//! self-intersection check.
//!
//! Purpose
//! - Turn raw `(nodes, edges)` into oriented, non-crossing closed loops: the
//!   outer boundary counterclockwise first, holes clockwise after it.
//!
//! Pipeline
//! - `loops::find_loops` (degree-2 regularity + head-to-tail walks)
//! - `orient::orient_loops` (largest |area| is outer, see `OuterLoopPolicy`)
//! - `intersect::find_intersecting_pair` (O(n²) pairwise crossings)
//! - `orient::check_single_outer` (fail fast on disjoint or nested regions)

mod intersect;
mod loops;
mod orient;

pub use intersect::{
    any_edges_intersect, edge_intersects_edges, find_intersecting_pair, two_edges_intersect,
};
pub use loops::{check_regularity, edges_is_closed_curve, find_loops};
pub use orient::{check_single_outer, orient_loops, OuterLoopPolicy};

use crate::error::{Error, Result};
use crate::geom2::{Edge, Point};

/// Fail if an edge references a node outside `0..len`.
pub fn check_indices(len: usize, edges: &[Edge]) -> Result<()> {
    for &(a, b) in edges {
        for index in [a, b] {
            if index >= len {
                return Err(Error::NodeOutOfRange { index, len });
            }
        }
    }
    Ok(())
}

/// Run the full validation pipeline and return the oriented loops.
pub fn validate(
    nodes: &[Point],
    edges: &[Edge],
    policy: OuterLoopPolicy,
) -> Result<Vec<Vec<Edge>>> {
    check_indices(nodes.len(), edges)?;
    let loops = find_loops(edges)?;
    let oriented = orient_loops(nodes, loops, policy);
    let flat: Vec<Edge> = oriented.iter().flatten().copied().collect();
    if let Some((first, second)) = find_intersecting_pair(nodes, &flat) {
        return Err(Error::SelfIntersecting { first, second });
    }
    check_single_outer(nodes, &oriented)?;
    Ok(oriented)
}
