//! Loop winding normalization and the outer-loop policy.
//!
//! Extraction (`loops`) is purely topological; deciding which loop bounds
//! the domain from outside lives here so the policy can change without
//! touching validation.

use crate::error::{Error, Result};
use crate::geom2::{edges_flip_orientation, point_in_loop, polygon_area, Edge, Point};

/// How the outer boundary is picked among extracted loops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OuterLoopPolicy {
    /// The loop with the largest absolute area is the outer boundary and
    /// every other loop is a hole inside it.
    #[default]
    LargestArea,
}

impl OuterLoopPolicy {
    /// Order loops so the outer boundary comes first.
    ///
    /// Stable: loops of equal absolute area keep their extraction order.
    pub fn rank(self, nodes: &[Point], loops: Vec<Vec<Edge>>) -> Vec<Vec<Edge>> {
        match self {
            OuterLoopPolicy::LargestArea => {
                let mut keyed: Vec<(f64, Vec<Edge>)> = loops
                    .into_iter()
                    .map(|l| (polygon_area(nodes, &l).abs(), l))
                    .collect();
                keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
                keyed.into_iter().map(|(_, l)| l).collect()
            }
        }
    }
}

/// Force a loop to the requested winding, flipping it if needed.
fn with_winding(nodes: &[Point], edges: Vec<Edge>, positive: bool) -> Vec<Edge> {
    let area = polygon_area(nodes, &edges);
    let flip = if positive { area < 0.0 } else { area > 0.0 };
    if flip {
        edges_flip_orientation(&edges)
    } else {
        edges
    }
}

/// Orient loops: outer boundary CCW, holes CW, outer loop first.
///
/// Returns the oriented loops in policy order.
pub fn orient_loops(
    nodes: &[Point],
    loops: Vec<Vec<Edge>>,
    policy: OuterLoopPolicy,
) -> Vec<Vec<Edge>> {
    policy
        .rank(nodes, loops)
        .into_iter()
        .enumerate()
        .map(|(k, l)| with_winding(nodes, l, k == 0))
        .collect()
}

/// Reject inputs the single-outer-loop model cannot represent.
///
/// Every hole must sit inside the outer loop and outside all other holes.
/// Loops are vertex-disjoint, so testing one vertex per hole is enough for
/// non-crossing boundaries.
pub fn check_single_outer(nodes: &[Point], oriented: &[Vec<Edge>]) -> Result<()> {
    let Some((outer, holes)) = oriented.split_first() else {
        return Ok(());
    };
    for (i, hole) in holes.iter().enumerate() {
        let probe = nodes[hole[0].0];
        if !point_in_loop(probe, nodes, outer) {
            return Err(Error::MultipleOuterLoops);
        }
        let nested = holes
            .iter()
            .enumerate()
            .any(|(j, other)| j != i && point_in_loop(probe, nodes, other));
        if nested {
            return Err(Error::MultipleOuterLoops);
        }
    }
    Ok(())
}
