//! Validated planar domain: nodes plus oriented, closed, non-crossing
//! boundary loops.
//!
//! Construction runs the whole `boundary` pipeline, so a `Domain` value
//! always satisfies: the outer loop is counterclockwise and listed first,
//! holes are clockwise, and no two edges cross. Only node coordinates can
//! change afterwards (`fit_into_rectangle`, `normalize`).

use std::collections::BTreeMap;
use std::fmt;

use crate::advancing_front::triangulate_af;
use crate::boundary::{edges_is_closed_curve, validate, OuterLoopPolicy};
use crate::error::{Error, Result};
use crate::geom2::{bounding_box, polygon_area, Edge, GeomCfg, Point};
use crate::interop::convert_graph;
use crate::mesh::{BoundarySegment, Element, Mesh};

/// Marker given to every boundary segment of a freshly triangulated domain.
pub const DEFAULT_BOUNDARY_MARKER: i32 = 1;

/// A 2D finite-element domain.
#[derive(Clone, Debug)]
pub struct Domain {
    nodes: Vec<Point>,
    edges: Vec<Edge>,
    loop_lens: Vec<usize>,
}

impl Domain {
    /// Validate and orient an unordered boundary.
    ///
    /// An empty edge list is accepted and gives a domain without boundary.
    pub fn new(nodes: Vec<Point>, edges: &[Edge]) -> Result<Self> {
        Self::with_policy(nodes, edges, OuterLoopPolicy::default())
    }

    pub fn with_policy(nodes: Vec<Point>, edges: &[Edge], policy: OuterLoopPolicy) -> Result<Self> {
        let loops = validate(&nodes, edges, policy)?;
        let loop_lens: Vec<usize> = loops.iter().map(Vec::len).collect();
        let edges: Vec<Edge> = loops.into_iter().flatten().collect();
        tracing::debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            holes = loop_lens.len().saturating_sub(1),
            "domain built"
        );
        Ok(Self {
            nodes,
            edges,
            loop_lens,
        })
    }

    /// Build from a graph editor's keyed vertices and adjacency lists, then
    /// normalize into the unit square.
    pub fn from_graph_editor(
        vertices: &BTreeMap<usize, Point>,
        adjacency: &BTreeMap<usize, Vec<usize>>,
    ) -> Result<Self> {
        let (nodes, edges) = convert_graph(vertices, adjacency)?;
        let mut domain = Self::new(nodes, &edges)?;
        domain.normalize()?;
        Ok(domain)
    }

    #[inline]
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// Oriented boundary edges: the outer loop first, then every hole.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Oriented loops as consecutive slices of `edges()`.
    pub fn loops(&self) -> impl Iterator<Item = &[Edge]> + '_ {
        let mut rest = &self.edges[..];
        self.loop_lens.iter().map(move |&len| {
            let (head, tail) = rest.split_at(len);
            rest = tail;
            head
        })
    }

    /// The counterclockwise outer loop (empty without boundary).
    pub fn outer_loop(&self) -> &[Edge] {
        self.loops().next().unwrap_or(&[])
    }

    /// Clockwise hole loops.
    pub fn holes(&self) -> impl Iterator<Item = &[Edge]> + '_ {
        self.loops().skip(1)
    }

    /// True if the stored edges chain head to tail into closed loops.
    pub fn boundary_closed(&self) -> bool {
        edges_is_closed_curve(&self.edges)
    }

    /// Enclosed area: the outer loop minus all holes.
    pub fn boundary_area(&self) -> f64 {
        polygon_area(&self.nodes, &self.edges)
    }

    /// Map the bounding box onto the rectangle `[x0, x0+w] × [y0, y0+h]`.
    ///
    /// Axes are scaled independently. An axis without extent collapses to
    /// `x0` (or `y0`).
    pub fn fit_into_rectangle(&mut self, x0: f64, y0: f64, w: f64, h: f64) -> Result<()> {
        self.fit_into_rectangle_with(x0, y0, w, h, GeomCfg::default())
    }

    pub fn fit_into_rectangle_with(
        &mut self,
        x0: f64,
        y0: f64,
        w: f64,
        h: f64,
        cfg: GeomCfg,
    ) -> Result<()> {
        if !(w > 0.0 && h > 0.0) {
            return Err(Error::InvalidRectangle {
                width: w,
                height: h,
            });
        }
        let Some((lo, hi)) = bounding_box(&self.nodes) else {
            return Ok(());
        };
        // Endpoints map exactly onto the rectangle sides, so a second fit
        // into the same rectangle is the identity.
        let axis = |v: f64, min: f64, max: f64, origin: f64, size: f64| -> f64 {
            let extent = max - min;
            if extent.abs() < cfg.eps_extent {
                origin
            } else {
                origin + size * ((v - min) / extent)
            }
        };
        for p in &mut self.nodes {
            *p = Point::new(axis(p.x, lo.x, hi.x, x0, w), axis(p.y, lo.y, hi.y, y0, h));
        }
        Ok(())
    }

    /// Fit into the unit square `(0, 0, 1, 1)`.
    pub fn normalize(&mut self) -> Result<()> {
        self.fit_into_rectangle(0.0, 0.0, 1.0, 1.0)
    }

    /// Advancing-front triangulation of the domain.
    ///
    /// The mesh gets a copy of the nodes and one boundary segment per
    /// boundary edge, all tagged with `DEFAULT_BOUNDARY_MARKER`.
    pub fn triangulate(&self) -> Result<Mesh> {
        let elems = triangulate_af(&self.nodes, &self.edges)?;
        let boundaries = self
            .edges
            .iter()
            .map(|&(a, b)| BoundarySegment::new(a, b, DEFAULT_BOUNDARY_MARKER))
            .collect();
        Mesh::new(
            self.nodes.clone(),
            elems.into_iter().map(Element::Triangle).collect(),
            boundaries,
            Vec::new(),
        )
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Domain:")?;
        writeln!(f, "    nodes:")?;
        for (i, p) in self.nodes.iter().enumerate() {
            writeln!(f, "        {i}: [{}, {}]", p.x, p.y)?;
        }
        writeln!(f, "    boundary edges:")?;
        for (k, lp) in self.loops().enumerate() {
            let kind = if k == 0 { "outer" } else { "hole" };
            let chain: Vec<String> = lp.iter().map(|(a, b)| format!("({a}, {b})")).collect();
            writeln!(f, "        {kind}: {}", chain.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::any_edges_intersect;
    use crate::geom2::edges_flip_orientation;
    use crate::geom2::rand::{draw_boundary_radial, RadialCfg, ReplayToken, VertexCount};
    use nalgebra::vector;
    use proptest::prelude::*;

    fn square_with_triangle_hole() -> Domain {
        Domain::new(
            vec![
                vector![0.0, 0.0],
                vector![0.0, 1.0],
                vector![1.0, 1.0],
                vector![1.0, 0.0],
                vector![0.25, 0.25],
                vector![0.25, 0.75],
                vector![0.75, 0.5],
            ],
            &[(0, 1), (3, 2), (1, 2), (3, 0), (4, 5), (5, 6), (6, 4)],
        )
        .unwrap()
    }

    #[test]
    fn edges_are_sorted_and_oriented() {
        let d = square_with_triangle_hole();
        assert_eq!(
            d.edges(),
            &[(0, 3), (3, 2), (2, 1), (1, 0), (4, 5), (5, 6), (6, 4)]
        );
        assert_eq!(d.outer_loop().len(), 4);
        assert_eq!(d.holes().count(), 1);
        assert!(d.boundary_closed());
        assert!(polygon_area(d.nodes(), d.outer_loop()) > 0.0);
        assert!(d.holes().all(|h| polygon_area(d.nodes(), h) < 0.0));
    }

    #[test]
    fn square_area_is_one() {
        let d = Domain::new(
            vec![
                vector![0.0, 0.0],
                vector![0.0, 1.0],
                vector![1.0, 1.0],
                vector![1.0, 0.0],
            ],
            &[(0, 1), (1, 2), (2, 3), (3, 0)],
        )
        .unwrap();
        assert_eq!(d.edges(), &[(0, 3), (3, 2), (2, 1), (1, 0)]);
        assert!((d.boundary_area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn hole_is_subtracted_from_area() {
        let d = Domain::new(
            vec![
                vector![0.0, 0.0],
                vector![0.0, 1.0],
                vector![1.0, 1.0],
                vector![1.0, 0.0],
                vector![0.25, 0.25],
                vector![0.25, 0.75],
                vector![0.75, 0.75],
                vector![0.75, 0.25],
            ],
            &[
                (0, 1),
                (1, 2),
                (2, 3),
                (3, 0),
                (4, 5),
                (5, 6),
                (6, 7),
                (7, 4),
            ],
        )
        .unwrap();
        assert_eq!(
            d.edges(),
            &[
                (0, 3),
                (3, 2),
                (2, 1),
                (1, 0),
                (4, 5),
                (5, 6),
                (6, 7),
                (7, 4)
            ]
        );
        assert!((polygon_area(d.nodes(), d.outer_loop()) - 1.0).abs() < 1e-12);
        assert!((d.boundary_area() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn open_boundary_is_rejected() {
        let err = Domain::new(
            vec![
                vector![0.0, 0.0],
                vector![0.0, 1.0],
                vector![1.0, 1.0],
                vector![1.0, 0.0],
            ],
            &[(0, 1), (2, 3), (3, 0)],
        )
        .unwrap_err();
        assert!(matches!(err, Error::NotClosed { .. }));
    }

    #[test]
    fn empty_boundary_is_allowed() {
        let d = Domain::new(vec![vector![0.0, 0.0]], &[]).unwrap();
        assert!(d.edges().is_empty());
        assert!(d.outer_loop().is_empty());
        assert!(d.triangulate().unwrap().elements().is_empty());
    }

    #[test]
    fn fit_scales_axes_independently() {
        let mut d = square_with_triangle_hole();
        d.fit_into_rectangle(0.0, 0.0, 2.0, 4.0).unwrap();
        assert_eq!(d.nodes()[2], vector![2.0, 4.0]);
        assert_eq!(d.nodes()[6], vector![1.5, 2.0]);
        // Topology is untouched.
        assert_eq!(d.edges()[0], (0, 3));
    }

    #[test]
    fn fit_rejects_empty_rectangle() {
        let mut d = square_with_triangle_hole();
        let err = d.fit_into_rectangle(0.0, 0.0, 0.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidRectangle {
                width: 0.0,
                height: 1.0
            }
        );
        assert!(d.fit_into_rectangle(0.0, 0.0, 1.0, -2.0).is_err());
    }

    #[test]
    fn degenerate_axis_collapses_to_origin() {
        let mut d = Domain::new(vec![vector![3.0, 1.0], vector![5.0, 1.0]], &[]).unwrap();
        d.fit_into_rectangle(10.0, 20.0, 1.0, 1.0).unwrap();
        assert_eq!(d.nodes(), &[vector![10.0, 20.0], vector![11.0, 20.0]]);
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut d = Domain::new(
            vec![
                vector![69.0, 269.0],
                vector![284.0, 267.0],
                vector![285.0, 107.0],
                vector![75.0, 99.0],
            ],
            &[(0, 1), (1, 2), (2, 3), (3, 0)],
        )
        .unwrap();
        d.normalize().unwrap();
        let once = d.nodes().to_vec();
        d.normalize().unwrap();
        assert_eq!(d.nodes(), &once[..]);
        assert!(once.iter().all(|p| (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y)));
    }

    #[test]
    fn triangulate_tags_boundary_with_default_marker() {
        let d = Domain::new(
            vec![
                vector![0.0, 1.0],
                vector![1.0, 1.0],
                vector![1.0, 0.0],
                vector![0.0, 0.0],
            ],
            &[(0, 3), (3, 2), (2, 1), (1, 0)],
        )
        .unwrap();
        let m = d.triangulate().unwrap();
        assert_eq!(
            m.elements(),
            &[Element::Triangle([1, 0, 2]), Element::Triangle([2, 0, 3])]
        );
        assert_eq!(
            m.boundaries(),
            &[
                BoundarySegment::new(0, 3, 1),
                BoundarySegment::new(3, 2, 1),
                BoundarySegment::new(2, 1, 1),
                BoundarySegment::new(1, 0, 1),
            ]
        );
        assert!(m.check_element_orientations());
    }

    #[test]
    fn domain_with_hole_triangulates() {
        let m = square_with_triangle_hole().triangulate().unwrap();
        assert_eq!(m.elements().len(), 7);
        assert!(m.check_element_orientations());
    }

    #[test]
    fn graph_editor_input_is_renumbered_and_normalized() {
        let vertices: BTreeMap<usize, Point> = [
            (0, vector![69.0, 269.0]),
            (1, vector![284.0, 267.0]),
            (2, vector![285.0, 107.0]),
            (3, vector![75.0, 99.0]),
        ]
        .into_iter()
        .collect();
        let adjacency: BTreeMap<usize, Vec<usize>> = [
            (0, vec![1, 3]),
            (1, vec![0, 2]),
            (2, vec![1, 3]),
            (3, vec![2, 0]),
        ]
        .into_iter()
        .collect();
        let d = Domain::from_graph_editor(&vertices, &adjacency).unwrap();
        assert_eq!(d.edges(), &[(0, 3), (3, 2), (2, 1), (1, 0)]);
        assert_eq!(d.nodes()[0], vector![0.0, 1.0]);
        assert_eq!(d.nodes()[2].x, 1.0);
        assert_eq!(d.nodes()[3].y, 0.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]
        #[test]
        fn outer_loop_is_positive_for_either_input_direction(
            seed in any::<u64>(),
            n in 4usize..24,
            reverse in any::<bool>(),
        ) {
            let cfg = RadialCfg { vertex_count: VertexCount::Fixed(n), ..RadialCfg::default() };
            let (nodes, mut edges) = draw_boundary_radial(cfg, ReplayToken { seed, index: 1 });
            if reverse {
                edges = edges_flip_orientation(&edges);
            }
            let d = Domain::new(nodes, &edges).unwrap();
            prop_assert!(polygon_area(d.nodes(), d.outer_loop()) > 0.0);
            prop_assert!(!any_edges_intersect(d.nodes(), d.edges()));
            prop_assert!(d.boundary_closed());
        }
    }

    #[test]
    fn display_names_outer_loop_and_holes() {
        let text = square_with_triangle_hole().to_string();
        assert!(text.contains("outer: (0, 3) (3, 2) (2, 1) (1, 0)"));
        assert!(text.contains("hole: (4, 5) (5, 6) (6, 4)"));
    }
}
