//! Curated surface for tools built on top of the crate (CLI, benches).
//!
//! Prefer these re-exports over reaching into submodules.

// Boundary handling
pub use crate::boundary::{
    edges_is_closed_curve, find_intersecting_pair, find_loops, orient_loops, validate,
    OuterLoopPolicy,
};
pub use crate::domain::{Domain, DEFAULT_BOUNDARY_MARKER};
// Geometry
pub use crate::geom2::{
    bounding_box, edges_flip_orientation, polygon_area, Edge, GeomCfg, Point,
};
// Random boundaries
pub use crate::geom2::rand::{
    draw_boundary_radial, RadialCfg, ReplayToken as BoundaryReplay, VertexCount,
};
// Triangulation and meshes
pub use crate::advancing_front::triangulate_af;
pub use crate::interop::{
    convert_graph, export_mesh, EditorKind, ExportTarget, GraphEditorPayload, Hermes2dMesh,
    MeshEditorPayload,
};
pub use crate::mesh::{BoundarySegment, Curve, Element, Mesh};
