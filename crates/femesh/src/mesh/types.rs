//! Mesh entities: elements, boundary segments and pass-through curves.

use std::fmt;

use crate::geom2::Edge;

/// A mesh element over node indices, counterclockwise when valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element {
    Triangle([usize; 3]),
    Quad([usize; 4]),
}

impl Element {
    #[inline]
    pub fn nodes(&self) -> &[usize] {
        match self {
            Element::Triangle(n) => &n[..],
            Element::Quad(n) => &n[..],
        }
    }

    /// Element sides in order, closing back to the first node.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.nodes();
        (0..n.len()).map(move |k| (n[k], n[(k + 1) % n.len()]))
    }

    #[inline]
    pub fn as_triangle(&self) -> Option<[usize; 3]> {
        match *self {
            Element::Triangle(t) => Some(t),
            Element::Quad(_) => None,
        }
    }
}

impl From<[usize; 3]> for Element {
    fn from(t: [usize; 3]) -> Self {
        Element::Triangle(t)
    }
}

impl From<[usize; 4]> for Element {
    fn from(q: [usize; 4]) -> Self {
        Element::Quad(q)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.nodes().iter().map(|i| i.to_string()).collect();
        write!(f, "({})", parts.join(", "))
    }
}

/// Boundary segment `a → b` carrying an opaque marker.
///
/// Markers come from the originating boundary edge and are copied, never
/// renumbered, when a segment is split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundarySegment {
    pub a: usize,
    pub b: usize,
    pub marker: i32,
}

impl BoundarySegment {
    #[inline]
    pub fn new(a: usize, b: usize, marker: i32) -> Self {
        Self { a, b, marker }
    }

    #[inline]
    pub fn edge(&self) -> Edge {
        (self.a, self.b)
    }
}

/// Curved-edge record `(a, b, angle)`, kept verbatim for exporters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Curve {
    pub a: usize,
    pub b: usize,
    pub angle: f64,
}
