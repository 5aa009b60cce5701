//! Red (quadrisection) refinement with tolerance-based midpoint sharing.

use super::{BoundarySegment, Element, Mesh};
use crate::error::{Error, Result};
use crate::geom2::{same_undirected, GeomCfg, Point};

impl Mesh {
    /// Index of the first node closer than `tol` to `p`; appends `p` if none.
    ///
    /// This is the only deduplication mechanism: `tol` must stay below half
    /// the smallest feature size or distinct nodes merge.
    pub fn look_up_node(&mut self, p: Point, tol: f64) -> usize {
        if let Some(i) = self.nodes.iter().position(|q| (q - p).norm() < tol) {
            return i;
        }
        self.nodes.push(p);
        self.nodes.len() - 1
    }

    /// Shortest element side in the mesh (`f64::INFINITY` without elements).
    pub fn calc_min_edge_length(&self) -> f64 {
        self.elements
            .iter()
            .flat_map(|e| e.edges())
            .map(|(a, b)| (self.nodes[b] - self.nodes[a]).norm())
            .fold(f64::INFINITY, f64::min)
    }

    /// Node merge tolerance for the current mesh: a fixed fraction of the
    /// shortest side.
    pub fn merge_tolerance(&self, cfg: GeomCfg) -> f64 {
        cfg.merge_fraction * self.calc_min_edge_length()
    }

    /// Split triangle `tri` into four through its side midpoints.
    ///
    /// With `d`, `e`, `f` the midpoints of `ab`, `bc`, `ca`, the parent is
    /// removed and `(a,d,f)`, `(d,b,e)`, `(f,d,e)`, `(f,e,c)` are appended.
    /// Midpoints go through `look_up_node`, so a midpoint already created by a
    /// refined neighbor is reused. A boundary segment on one of the sides is
    /// replaced in place by its two halves, keeping direction and marker.
    pub fn refine_element(&mut self, tri: [usize; 3], tol: f64) -> Result<()> {
        let pos = self
            .elements
            .iter()
            .position(|e| *e == Element::Triangle(tri))
            .ok_or(Error::ElementNotFound(tri))?;
        let [a, b, c] = tri;
        let (pa, pb, pc) = (self.nodes[a], self.nodes[b], self.nodes[c]);
        self.elements.remove(pos);
        let d = self.look_up_node((pa + pb) / 2.0, tol);
        let e = self.look_up_node((pb + pc) / 2.0, tol);
        let f = self.look_up_node((pc + pa) / 2.0, tol);
        self.elements.extend([
            Element::Triangle([a, d, f]),
            Element::Triangle([d, b, e]),
            Element::Triangle([f, d, e]),
            Element::Triangle([f, e, c]),
        ]);

        let sides = [((a, b), d), ((b, c), e), ((c, a), f)];
        let mut split = Vec::with_capacity(self.boundaries.len() + 3);
        for seg in self.boundaries.drain(..) {
            match sides
                .iter()
                .find(|(side, _)| same_undirected(*side, seg.edge()))
            {
                Some(&(_, mid)) => {
                    split.push(BoundarySegment::new(seg.a, mid, seg.marker));
                    split.push(BoundarySegment::new(mid, seg.b, seg.marker));
                }
                None => split.push(seg),
            }
        }
        self.boundaries = split;
        Ok(())
    }

    /// Refine every element once, with the default tolerances.
    pub fn refine_all_elements(&mut self) -> Result<()> {
        self.refine_all_elements_with(GeomCfg::default())
    }

    /// Refine every current element once.
    ///
    /// The element list is snapshotted and the merge tolerance computed once
    /// up front, so every split in the pass shares it and midpoints of shared
    /// sides are created exactly once.
    pub fn refine_all_elements_with(&mut self, cfg: GeomCfg) -> Result<()> {
        let snapshot: Vec<[usize; 3]> = self
            .elements
            .iter()
            .map(|e| e.as_triangle().ok_or(Error::NotATriangle))
            .collect::<Result<_>>()?;
        let tol = self.merge_tolerance(cfg);
        let before = self.nodes.len();
        for tri in snapshot {
            self.refine_element(tri, tol)?;
        }
        tracing::debug!(
            elements = self.elements.len(),
            new_nodes = self.nodes.len() - before,
            tol,
            "refinement pass"
        );
        Ok(())
    }
}
