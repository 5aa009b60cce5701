//! The active front: a stack of directed edges with the unmeshed region on
//! their left.

use crate::geom2::{same_undirected, Edge};

/// Stack of directed front edges. The most recently pushed edge is processed
/// next; the triangulation is finished when the stack is empty.
#[derive(Clone, Debug, Default)]
pub struct Front {
    edges: Vec<Edge>,
}

impl Front {
    pub fn new(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Edge> {
        self.edges.pop()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Edges still waiting to be triangulated.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Account for the triangle side `from → to` of a freshly emitted element.
    ///
    /// If the front already carries that side, the region behind it is now
    /// meshed and the edge is removed. Otherwise the reversed side becomes a
    /// new front edge.
    pub fn close_or_advance(&mut self, from: usize, to: usize) {
        match self
            .edges
            .iter()
            .position(|&e| same_undirected(e, (from, to)))
        {
            Some(pos) => {
                self.edges.remove(pos);
            }
            None => self.edges.push((to, from)),
        }
    }
}
