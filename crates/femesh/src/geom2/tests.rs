use super::rand::{draw_boundary_radial, RadialCfg, ReplayToken, VertexCount};
use super::*;
use nalgebra::vector;
use proptest::prelude::*;

fn unit_square() -> Vec<Point> {
    vec![
        vector![0.0, 0.0],
        vector![0.0, 1.0],
        vector![1.0, 1.0],
        vector![1.0, 0.0],
    ]
}

#[test]
fn area_sign_follows_winding() {
    let nodes = unit_square();
    let cw = [(0, 1), (1, 2), (2, 3), (3, 0)];
    assert!((polygon_area(&nodes, &cw) + 1.0).abs() < 1e-12);
    let ccw_edges = edges_flip_orientation(&cw);
    assert_eq!(ccw_edges, vec![(0, 3), (3, 2), (2, 1), (1, 0)]);
    assert!((polygon_area(&nodes, &ccw_edges) - 1.0).abs() < 1e-12);
}

#[test]
fn triangle_hole_area() {
    let nodes = vec![
        vector![0.25, 0.25],
        vector![0.25, 0.75],
        vector![0.75, 0.5],
    ];
    let tri = [(0, 1), (1, 2), (2, 0)];
    assert!((polygon_area(&nodes, &tri) + 0.125).abs() < 1e-12);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]
    #[test]
    fn flipped_area_is_exact_negative(seed in any::<u64>(), n in 5usize..45) {
        let cfg = RadialCfg { vertex_count: VertexCount::Fixed(n), ..RadialCfg::default() };
        let (nodes, edges) = draw_boundary_radial(cfg, ReplayToken { seed, index: 0 });
        let a = polygon_area(&nodes, &edges);
        prop_assert_eq!(polygon_area(&nodes, &edges_flip_orientation(&edges)), -a);
        prop_assert!(a > 0.0);
    }
}

#[test]
fn areas_of_several_loops_add_up() {
    let nodes = vec![
        vector![0.0, 0.0],
        vector![0.0, 1.0],
        vector![1.0, 1.0],
        vector![1.0, 0.0],
        vector![0.25, 0.25],
        vector![0.25, 0.75],
        vector![0.75, 0.75],
        vector![0.75, 0.25],
    ];
    // Outer CCW, hole CW.
    let edges = [
        (0, 3),
        (3, 2),
        (2, 1),
        (1, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
    ];
    assert!((polygon_area(&nodes, &edges) - 0.75).abs() < 1e-12);
}

#[test]
fn point_in_loop_classifies_square() {
    let nodes = unit_square();
    let edges = [(0, 3), (3, 2), (2, 1), (1, 0)];
    assert!(point_in_loop(vector![0.5, 0.5], &nodes, &edges));
    assert!(!point_in_loop(vector![1.5, 0.5], &nodes, &edges));
    assert!(!point_in_loop(vector![0.5, -0.1], &nodes, &edges));
}

#[test]
fn bounding_box_of_points() {
    assert!(bounding_box(&[]).is_none());
    let (lo, hi) = bounding_box(&[vector![1.0, -2.0], vector![-3.0, 4.0]]).unwrap();
    assert_eq!(lo, vector![-3.0, -2.0]);
    assert_eq!(hi, vector![1.0, 4.0]);
}

#[test]
fn undirected_edge_helpers() {
    assert!(same_undirected((1, 2), (2, 1)));
    assert!(!same_undirected((1, 2), (1, 3)));
    assert!(share_endpoint((1, 2), (3, 1)));
    assert!(!share_endpoint((1, 2), (3, 4)));
}
