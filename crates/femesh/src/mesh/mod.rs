//! Mesh model: node arena, elements, boundary segments and curves.
//!
//! Purpose
//! - Hold the output of triangulation and support in-place red refinement.
//!
//! Invariants
//! - Every index stored in an element, boundary segment or curve is below
//!   `nodes().len()` (checked by `Mesh::new`, preserved by every mutation).
//! - The node list is append-only: indices are never reused or reordered.
//! - Curves are carried through for exporters. Only their endpoint indices
//!   are validated; the angle is never interpreted.

mod refine;
mod types;

pub use types::{BoundarySegment, Curve, Element};

use std::fmt;

use crate::advancing_front::triangulate_af;
use crate::error::{Error, Result};
use crate::geom2::{orientation, Edge, Point};

/// A 2D finite-element mesh.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    nodes: Vec<Point>,
    elements: Vec<Element>,
    boundaries: Vec<BoundarySegment>,
    curves: Vec<Curve>,
}

impl Mesh {
    /// Build a mesh, rejecting any reference to a node that does not exist.
    pub fn new(
        nodes: Vec<Point>,
        elements: Vec<Element>,
        boundaries: Vec<BoundarySegment>,
        curves: Vec<Curve>,
    ) -> Result<Self> {
        let len = nodes.len();
        let referenced = elements
            .iter()
            .flat_map(|e| e.nodes().iter().copied())
            .chain(boundaries.iter().flat_map(|b| [b.a, b.b]))
            .chain(curves.iter().flat_map(|c| [c.a, c.b]));
        for index in referenced {
            if index >= len {
                return Err(Error::NodeOutOfRange { index, len });
            }
        }
        Ok(Self {
            nodes,
            elements,
            boundaries,
            curves,
        })
    }

    #[inline]
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[inline]
    pub fn boundaries(&self) -> &[BoundarySegment] {
        &self.boundaries
    }

    #[inline]
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// True iff every element is strictly counterclockwise.
    ///
    /// Quads must turn left at each of their four corners.
    pub fn check_element_orientations(&self) -> bool {
        self.elements.iter().all(|e| {
            let n = e.nodes();
            (0..n.len()).all(|k| {
                let a = self.nodes[n[k]];
                let b = self.nodes[n[(k + 1) % n.len()]];
                let c = self.nodes[n[(k + 2) % n.len()]];
                orientation(a, b, c) > 0.0
            })
        })
    }

    /// True iff node `i` is an endpoint of some boundary segment.
    pub fn is_boundary_node(&self, i: usize) -> bool {
        self.boundaries.iter().any(|b| b.a == i || b.b == i)
    }

    /// Re-triangulate from the boundary segments, replacing all elements.
    ///
    /// The segments must form oriented loops (outer CCW, holes CW) as produced
    /// by `Domain::triangulate` and kept by refinement. Every node, including
    /// interior refinement midpoints, is an apex candidate.
    pub fn triangulate(&mut self) -> Result<()> {
        let edges: Vec<Edge> = self.boundaries.iter().map(BoundarySegment::edge).collect();
        let elems = triangulate_af(&self.nodes, &edges)?;
        self.elements = elems.into_iter().map(Element::Triangle).collect();
        Ok(())
    }
}

impl fmt::Display for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mesh:")?;
        writeln!(f, "    nodes:")?;
        for (i, p) in self.nodes.iter().enumerate() {
            writeln!(f, "        {i}: [{}, {}]", p.x, p.y)?;
        }
        writeln!(f, "    elements:")?;
        for e in &self.elements {
            writeln!(f, "        {e}")?;
        }
        writeln!(f, "    boundaries:")?;
        for b in &self.boundaries {
            writeln!(f, "        [{}, {}, {}]", b.a, b.b, b.marker)?;
        }
        writeln!(f, "    curves:")?;
        for c in &self.curves {
            writeln!(f, "        [{}, {}, {}]", c.a, c.b, c.angle)?;
        }
        Ok(())
    }
}
