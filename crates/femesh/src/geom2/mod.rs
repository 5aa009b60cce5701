//! Planar geometry primitives.
//!
//! Purpose
//! - Points, directed edges and the tolerance config shared by every layer.
//! - Exact-input predicates (orientation, segment crossing, apex angle).
//! - Edge-list areas, loop flipping and point-in-loop classification.
//! - A seeded sampler for random simple boundaries.
//!
//! Numerics
//! - No perturbation: collinear ties count as "not left" and "not crossing".

mod area;
mod predicates;
pub mod rand;
mod types;

pub use area::{bounding_box, edges_flip_orientation, point_in_loop, polygon_area};
pub use predicates::{angle_cosine, ccw, is_left_of, orientation, segments_intersect};
pub use types::{same_undirected, share_endpoint, Edge, GeomCfg, Point};

#[cfg(test)]
mod tests;
