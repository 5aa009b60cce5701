//! Basic 2D types and tolerances shared by the domain and mesh layers.
//!
//! - `Point`: node coordinates (`nalgebra::Vector2<f64>`).
//! - `Edge`: directed pair of node indices.
//! - `GeomCfg`: centralizes the few tolerances the algorithms need.

use nalgebra::Vector2;

/// Node coordinates. Nodes are identified by their index in a node sequence.
pub type Point = Vector2<f64>;

/// Directed edge `(from, to)` over node indices.
pub type Edge = (usize, usize);

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Bounding-box extent below which an axis counts as degenerate.
    pub eps_extent: f64,
    /// Node merge tolerance as a fraction of the shortest mesh edge.
    pub merge_fraction: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_extent: 1e-12,
            merge_fraction: 0.01,
        }
    }
}

/// True if both edges connect the same two nodes, in either direction.
#[inline]
pub fn same_undirected(e1: Edge, e2: Edge) -> bool {
    (e1.0 == e2.0 && e1.1 == e2.1) || (e1.0 == e2.1 && e1.1 == e2.0)
}

/// True if the edges have at least one endpoint in common.
#[inline]
pub fn share_endpoint(e1: Edge, e2: Edge) -> bool {
    e1.0 == e2.0 || e1.0 == e2.1 || e1.1 == e2.0 || e1.1 == e2.1
}
