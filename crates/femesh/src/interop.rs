//! Editor and solver interop: graph-editor input conversion, editor payloads
//! and solver export records.
//!
//! Purpose
//! - Keep every wire shape consumed by external tools out of the core types.
//! - Nothing here launches an editor or links a solver; callers serialize the
//!   payloads however the surrounding tool expects.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::domain::Domain;
use crate::error::{Error, Result};
use crate::geom2::{Edge, Point};
use crate::mesh::{Element, Mesh};

/// Supported editors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorKind {
    /// Browser graph editor for domains.
    GraphJs,
    /// Mesh editor fed with flat text lists.
    MeshFlex,
}

impl EditorKind {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "js" => Ok(EditorKind::GraphJs),
            "flex" => Ok(EditorKind::MeshFlex),
            other => Err(Error::UnsupportedEditor(other.to_string())),
        }
    }
}

/// Renumber a keyed graph densely and keep each undirected edge once.
///
/// Keys are renumbered in ascending order. An adjacency entry `k -> n` is
/// kept only when `n > k`, so symmetric adjacency lists yield every edge
/// exactly once. Neighbors without a vertex are rejected.
pub fn convert_graph(
    vertices: &BTreeMap<usize, Point>,
    adjacency: &BTreeMap<usize, Vec<usize>>,
) -> Result<(Vec<Point>, Vec<Edge>)> {
    let dense: BTreeMap<usize, usize> = vertices
        .keys()
        .enumerate()
        .map(|(i, &key)| (key, i))
        .collect();
    let index_of = |key: usize| {
        dense.get(&key).copied().ok_or(Error::NodeOutOfRange {
            index: key,
            len: vertices.len(),
        })
    };
    let nodes: Vec<Point> = vertices.values().copied().collect();
    let mut edges = Vec::new();
    for (&key, neighbors) in adjacency {
        let from = index_of(key)?;
        for &n in neighbors.iter().filter(|&&n| n > key) {
            edges.push((from, index_of(n)?));
        }
    }
    Ok((nodes, edges))
}

/// Data handed to the graph editor for a domain.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphEditorPayload {
    pub num_vertices: usize,
    pub edges: Vec<[usize; 2]>,
    /// Node positions in screen orientation (y grows downward).
    pub positions: Vec<[f64; 2]>,
}

impl GraphEditorPayload {
    /// Flip y against the largest y coordinate so the editor draws the domain
    /// upright.
    pub fn from_domain(domain: &Domain) -> Self {
        let nodes = domain.nodes();
        let y_max = nodes.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        Self {
            num_vertices: nodes.len(),
            edges: domain.edges().iter().map(|&(a, b)| [a, b]).collect(),
            positions: nodes.iter().map(|p| [p.x, y_max - p.y]).collect(),
        }
    }
}

/// Flat, comma-terminated text lists consumed by the mesh editor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeshEditorPayload {
    pub nodes: String,
    pub elements: String,
    pub boundaries: String,
    pub curves: String,
}

impl MeshEditorPayload {
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let mut out = Self::default();
        for p in mesh.nodes() {
            let _ = write!(out.nodes, "{:?} {:?},", p.x, p.y);
        }
        for e in mesh.elements() {
            for n in e.nodes() {
                let _ = write!(out.elements, "{n} ");
            }
            out.elements.push_str("0,");
        }
        for b in mesh.boundaries() {
            let _ = write!(out.boundaries, "{} {} {},", b.a, b.b, b.marker);
        }
        for c in mesh.curves() {
            let _ = write!(out.curves, "{} {} {:?},", c.a, c.b, c.angle);
        }
        out
    }
}

/// Supported solver export formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportTarget {
    Hermes2d,
}

impl ExportTarget {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "hermes2d" => Ok(ExportTarget::Hermes2d),
            other => Err(Error::UnsupportedExportTarget(other.to_string())),
        }
    }
}

/// The four tables a hermes2d mesh is created from.
///
/// Every element row carries a trailing material marker `0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Hermes2dMesh {
    pub vertices: Vec<[f64; 2]>,
    pub elements: Vec<Vec<usize>>,
    pub boundaries: Vec<[i64; 3]>,
    pub curves: Vec<(usize, usize, f64)>,
}

impl Hermes2dMesh {
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            vertices: mesh.nodes().iter().map(|p| [p.x, p.y]).collect(),
            elements: mesh.elements().iter().map(hermes2d_row).collect(),
            boundaries: mesh
                .boundaries()
                .iter()
                .map(|b| [b.a as i64, b.b as i64, i64::from(b.marker)])
                .collect(),
            curves: mesh.curves().iter().map(|c| (c.a, c.b, c.angle)).collect(),
        }
    }
}

fn hermes2d_row(e: &Element) -> Vec<usize> {
    let mut row = e.nodes().to_vec();
    row.push(0);
    row
}

/// Export `mesh` for the named solver.
pub fn export_mesh(mesh: &Mesh, target: &str) -> Result<Hermes2dMesh> {
    match ExportTarget::parse(target)? {
        ExportTarget::Hermes2d => Ok(Hermes2dMesh::from_mesh(mesh)),
    }
}
