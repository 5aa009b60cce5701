//! JSON file formats for domains, meshes and solver exports.
//!
//! The formats are plain arrays so they stay easy to produce from other
//! tools: nodes are `[x, y]`, edges `[a, b]`, boundaries `[a, b, marker]`.

use anyhow::{bail, Context, Result};
use femesh::interop::Hermes2dMesh;
use femesh::{BoundarySegment, Curve, Domain, Element, Mesh, Point};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DomainFile {
    pub nodes: Vec<[f64; 2]>,
    pub edges: Vec<[usize; 2]>,
}

impl DomainFile {
    pub fn from_domain(d: &Domain) -> Self {
        Self {
            nodes: d.nodes().iter().map(|p| [p.x, p.y]).collect(),
            edges: d.edges().iter().map(|&(a, b)| [a, b]).collect(),
        }
    }

    /// Validate and orient the stored boundary.
    pub fn to_domain(&self) -> femesh::Result<Domain> {
        let edges: Vec<(usize, usize)> = self.edges.iter().map(|&[a, b]| (a, b)).collect();
        Domain::new(to_points(&self.nodes), &edges)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MeshFile {
    pub nodes: Vec<[f64; 2]>,
    /// Three indices per triangle, four per quad.
    pub elements: Vec<Vec<usize>>,
    pub boundaries: Vec<(usize, usize, i32)>,
    #[serde(default)]
    pub curves: Vec<(usize, usize, f64)>,
}

impl MeshFile {
    pub fn from_mesh(m: &Mesh) -> Self {
        Self {
            nodes: m.nodes().iter().map(|p| [p.x, p.y]).collect(),
            elements: m.elements().iter().map(|e| e.nodes().to_vec()).collect(),
            boundaries: m.boundaries().iter().map(|b| (b.a, b.b, b.marker)).collect(),
            curves: m.curves().iter().map(|c| (c.a, c.b, c.angle)).collect(),
        }
    }

    pub fn to_mesh(&self) -> Result<Mesh> {
        let elements = self
            .elements
            .iter()
            .enumerate()
            .map(|(i, e)| match e[..] {
                [a, b, c] => Ok(Element::Triangle([a, b, c])),
                [a, b, c, d] => Ok(Element::Quad([a, b, c, d])),
                _ => bail!("element {i} has {} nodes (expected 3 or 4)", e.len()),
            })
            .collect::<Result<Vec<_>>>()?;
        let boundaries = self
            .boundaries
            .iter()
            .map(|&(a, b, m)| BoundarySegment::new(a, b, m))
            .collect();
        let curves = self
            .curves
            .iter()
            .map(|&(a, b, angle)| Curve { a, b, angle })
            .collect();
        Ok(Mesh::new(to_points(&self.nodes), elements, boundaries, curves)?)
    }
}

/// Serialized hermes2d tables, tagged with the export target.
#[derive(Debug, Serialize)]
pub struct ExportFile {
    pub target: &'static str,
    pub vertices: Vec<[f64; 2]>,
    pub elements: Vec<Vec<usize>>,
    pub boundaries: Vec<[i64; 3]>,
    pub curves: Vec<(usize, usize, f64)>,
}

impl ExportFile {
    pub fn hermes2d(h: Hermes2dMesh) -> Self {
        Self {
            target: "hermes2d",
            vertices: h.vertices,
            elements: h.elements,
            boundaries: h.boundaries,
            curves: h.curves,
        }
    }
}

fn to_points(raw: &[[f64; 2]]) -> Vec<Point> {
    raw.iter().map(|&[x, y]| Point::new(x, y)).collect()
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn square_file() -> DomainFile {
        DomainFile {
            nodes: vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]],
            edges: vec![[0, 1], [1, 2], [2, 3], [3, 0]],
        }
    }

    #[test]
    fn domain_file_is_oriented_on_load() {
        let d = square_file().to_domain().unwrap();
        let back = DomainFile::from_domain(&d);
        assert_eq!(back.edges, vec![[0, 3], [3, 2], [2, 1], [1, 0]]);
        assert_eq!(back.nodes, square_file().nodes);
    }

    #[test]
    fn mesh_file_survives_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/mesh.json");
        let mesh = square_file().to_domain().unwrap().triangulate().unwrap();
        write_json(&path, &MeshFile::from_mesh(&mesh)).unwrap();
        let loaded: MeshFile = read_json(&path).unwrap();
        let m2 = loaded.to_mesh().unwrap();
        assert_eq!(m2.elements(), mesh.elements());
        assert_eq!(m2.boundaries(), mesh.boundaries());
    }

    #[test]
    fn bad_element_arity_is_reported() {
        let f = MeshFile {
            nodes: vec![[0.0, 0.0], [1.0, 0.0]],
            elements: vec![vec![0, 1]],
            boundaries: vec![],
            curves: vec![],
        };
        let err = f.to_mesh().unwrap_err();
        assert!(err.to_string().contains("element 0 has 2 nodes"));
    }

    #[test]
    fn dangling_index_is_a_mesh_error() {
        let f = MeshFile {
            nodes: vec![[0.0, 0.0]],
            elements: vec![vec![0, 1, 2]],
            boundaries: vec![],
            curves: vec![],
        };
        let err = f.to_mesh().unwrap_err();
        assert!(err.downcast_ref::<femesh::Error>().is_some());
    }
}
