//! Loop extraction from an unordered edge set.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::geom2::Edge;

/// Check that every referenced node has degree exactly two.
///
/// Edges are scanned in input order. Per edge, a degree-1 endpoint
/// (`NotClosed`) takes precedence over a degree above 2 (`NonManifold`).
pub fn check_regularity(edges: &[Edge]) -> Result<()> {
    let mut degree: BTreeMap<usize, usize> = BTreeMap::new();
    for &(a, b) in edges {
        if a == b {
            return Err(Error::DegenerateEdge { node: a });
        }
        *degree.entry(a).or_default() += 1;
        *degree.entry(b).or_default() += 1;
    }
    for &(a, b) in edges {
        if let Some(node) = [a, b].into_iter().find(|n| degree[n] == 1) {
            return Err(Error::NotClosed { node });
        }
        if let Some(node) = [a, b].into_iter().find(|n| degree[n] > 2) {
            return Err(Error::NonManifold {
                node,
                degree: degree[&node],
            });
        }
    }
    Ok(())
}

/// Split an unordered edge set into closed loops walked head to tail.
///
/// Each walk starts from the first unconsumed edge and repeatedly takes the
/// first remaining edge touching the trailing node, flipping it when it
/// matches on its tail. A loop closes when the walk is back at its start.
pub fn find_loops(edges: &[Edge]) -> Result<Vec<Vec<Edge>>> {
    check_regularity(edges)?;
    let mut pool: Vec<Edge> = edges.to_vec();
    let mut loops = Vec::new();
    while !pool.is_empty() {
        let first = pool.remove(0);
        let start = first.0;
        let mut current = vec![first];
        let mut last = first.1;
        while last != start {
            let pos = pool
                .iter()
                .position(|&(a, b)| a == last || b == last)
                .ok_or(Error::MissingBoundaryEdge { node: last })?;
            let (a, b) = pool.remove(pos);
            let next = if a == last { (a, b) } else { (b, a) };
            current.push(next);
            last = next.1;
        }
        loops.push(current);
    }
    Ok(loops)
}

/// True if an ordered edge list chains head to tail into closed curves.
///
/// Several loops may follow one another; a new loop may start only right
/// after the previous one closed.
pub fn edges_is_closed_curve(edges: &[Edge]) -> bool {
    let Some(&head) = edges.first() else {
        return true;
    };
    let mut first = head;
    let mut prev = head;
    for &e in &edges[1..] {
        if prev.1 != e.0 {
            if prev.1 == first.0 {
                first = e;
            } else {
                return false;
            }
        }
        prev = e;
    }
    prev.1 == first.0
}
