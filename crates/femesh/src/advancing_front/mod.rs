//! Advancing-front triangulation of an oriented boundary.
//!
//! Purpose
//! - Consume the boundary edges one at a time, closing each with the best
//!   visible apex, until the front is exhausted.
//!
//! State machine
//! - State: `Front` (stack of directed edges, unmeshed region on the left).
//! - Step: pop `a → b`, pick apex `c` (`search::find_third_point`), emit
//!   `(a, b, c)`, then close or advance the sides `c → a` and `b → c`.
//! - Terminal: empty front. No apex is fatal (`Error::NoValidApex`).
//!
//! Every node of the node list is a candidate apex, so nodes that are not on
//! the boundary act as interior points of the mesh.

mod front;
mod search;

pub use front::Front;
pub use search::find_third_point;

use crate::error::{Error, Result};
use crate::geom2::{Edge, Point};

/// Triangulate the region bounded by oriented `bdy_edges`.
///
/// Outer loops must be counterclockwise and holes clockwise. Every returned
/// triangle `(a, b, c)` is positively oriented.
pub fn triangulate_af(nodes: &[Point], bdy_edges: &[Edge]) -> Result<Vec<[usize; 3]>> {
    let mut front = Front::new(bdy_edges.to_vec());
    let mut elems = Vec::new();
    while let Some((a, b)) = front.pop() {
        let c = find_third_point(a, b, nodes, front.edges()).ok_or(Error::NoValidApex { a, b })?;
        elems.push([a, b, c]);
        front.close_or_advance(c, a);
        front.close_or_advance(b, c);
        tracing::trace!(a, b, c, front = front.len(), "advancing front step");
    }
    tracing::debug!(
        boundary_edges = bdy_edges.len(),
        elements = elems.len(),
        "triangulated"
    );
    Ok(elems)
}
