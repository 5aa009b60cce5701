//! Mesh the unit square with a triangular hole and refine it twice.
//!
//! Usage:
//!   cargo run -p femesh --example square_with_hole
//!
//! Prints element/node counts per refinement level and the final mesh.

use femesh::prelude::*;
use nalgebra::vector;

fn main() -> Result<()> {
    let nodes = vec![
        vector![0.0, 0.0],
        vector![0.0, 1.0],
        vector![1.0, 1.0],
        vector![1.0, 0.0],
        vector![0.25, 0.25],
        vector![0.25, 0.75],
        vector![0.75, 0.5],
    ];
    let edges = [(0, 1), (3, 2), (1, 2), (3, 0), (4, 5), (5, 6), (6, 4)];
    let domain = Domain::new(nodes, &edges)?;
    println!("{domain}");
    println!("area = {}", domain.boundary_area());

    let mut mesh = domain.triangulate()?;
    for level in 0..3 {
        if level > 0 {
            mesh.refine_all_elements()?;
        }
        println!(
            "level {level}: elements={}, nodes={}, boundaries={}, ccw={}",
            mesh.elements().len(),
            mesh.nodes().len(),
            mesh.boundaries().len(),
            mesh.check_element_orientations()
        );
    }
    Ok(())
}
