//! Error taxonomy for domain construction, triangulation and refinement.
//!
//! Every failure is fatal for the call that raised it: no partially built
//! `Domain` or `Mesh` is ever returned.

use thiserror::Error;

/// Unified error type for femesh operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A boundary node is incident to a single edge.
    #[error("boundary is not closed: node {node} has degree 1")]
    NotClosed { node: usize },
    /// A boundary node is shared by more than two edges.
    #[error("more than two edges share node {node} (degree {degree})")]
    NonManifold { node: usize, degree: usize },
    /// The loop walk ran out of edges before returning to its start.
    #[error("missing boundary edge: no continuation from node {node}")]
    MissingBoundaryEdge { node: usize },
    /// Two boundary edges cross away from a shared endpoint.
    #[error("boundary edges {first:?} and {second:?} intersect")]
    SelfIntersecting {
        first: (usize, usize),
        second: (usize, usize),
    },
    /// The advancing front found no admissible apex for an edge.
    #[error("no valid third point for front edge ({a}, {b})")]
    NoValidApex { a: usize, b: usize },
    #[error("the width and height must be positive (got {width} x {height})")]
    InvalidRectangle { width: f64, height: f64 },
    #[error("editor `{0}` is not implemented")]
    UnsupportedEditor(String),
    #[error("unknown export target `{0}`")]
    UnsupportedExportTarget(String),
    /// An edge, element or boundary segment references a missing node.
    #[error("node index {index} out of range ({len} nodes)")]
    NodeOutOfRange { index: usize, len: usize },
    /// An edge starts and ends at the same node.
    #[error("degenerate edge at node {node}")]
    DegenerateEdge { node: usize },
    /// A non-outer loop lies outside the outer loop or inside another hole.
    #[error("domain has more than one outer loop (disjoint or nested regions are not supported)")]
    MultipleOuterLoops,
    #[error("element {0:?} is not part of the mesh")]
    ElementNotFound([usize; 3]),
    #[error("only triangular elements can be refined or triangulated")]
    NotATriangle,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
