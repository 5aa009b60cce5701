//! 2D finite-element mesh construction.
//!
//! Pipeline
//! - `Domain::new` validates an unordered boundary (closed loops, no
//!   crossings) and orients it: outer loop counterclockwise, holes clockwise.
//! - `Domain::triangulate` runs the advancing front and returns a `Mesh`.
//! - `Mesh::refine_all_elements` splits every triangle into four, sharing
//!   midpoints between neighbors.
//!
//! Coordinates are `nalgebra::Vector2<f64>`; predicates are plain floating
//! point with strict comparisons (collinear counts as neither side).

pub mod advancing_front;
pub mod api;
pub mod boundary;
pub mod domain;
mod error;
pub mod geom2;
pub mod interop;
pub mod mesh;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use domain::Domain;
pub use error::{Error, Result};
pub use geom2::{Edge, GeomCfg, Point};
pub use mesh::{BoundarySegment, Curve, Element, Mesh};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::domain::Domain;
    pub use crate::error::{Error, Result};
    pub use crate::geom2::rand::{draw_boundary_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{polygon_area, Edge, GeomCfg, Point};
    pub use crate::mesh::{BoundarySegment, Curve, Element, Mesh};
}
