//! Nearest-neighbor constructive heuristic.
//!
//! Builds the tour greedily: starting from the start vertex, always move to
//! the nearest unvisited vertex, then return to the start. Leg costs come from
//! [`edge_weight`], so a missing edge is replaced by the haversine distance.
//!
//! # Complexity
//!
//! O(n²) where n = number of vertices.
//!
//! # Reference
//!
//! The simplest constructive heuristic for TSP. Tours are typically 15-25%
//! above optimal, which makes it a fast baseline.

use log::debug;

use crate::distance::edge_weight;
use crate::error::Result;
use crate::models::{Graph, Scratch, TspResult};
use crate::DEFAULT_START;

/// Greedy tour from vertex 0.
///
/// See [`nearest_neighbor`].
pub fn heuristic(graph: &Graph) -> Result<TspResult> {
    nearest_neighbor(graph, DEFAULT_START)
}

/// Constructs a tour using the nearest-neighbor heuristic.
///
/// Ties between equally near candidates go to the lowest id, so the result is
/// fully deterministic.
///
/// # Errors
///
/// [`Error::VertexNotFound`](crate::Error::VertexNotFound) if `start` is
/// missing. [`Error::MissingCoordinates`](crate::Error::MissingCoordinates)
/// if a candidate leg has no edge and no coordinates to derive one from.
///
/// # Examples
///
/// ```
/// use tsp_graph::constructive::nearest_neighbor;
/// use tsp_graph::models::{Graph, VertexInfo};
///
/// let mut g = Graph::new();
/// for id in 0..3 {
///     g.add_vertex(VertexInfo::new(id), id);
/// }
/// g.add_bidirectional_edge(0, 1, 10.0).unwrap();
/// g.add_bidirectional_edge(0, 2, 1.0).unwrap();
/// g.add_bidirectional_edge(1, 2, 9.0).unwrap();
///
/// let tour = nearest_neighbor(&g, 0).unwrap();
/// assert_eq!(tour.path, vec![0, 2, 1, 0]);
/// assert_eq!(tour.cost, 20.0);
/// ```
pub fn nearest_neighbor(graph: &Graph, start: u64) -> Result<TspResult> {
    graph.find_vertex(start)?;
    let ids = graph.vertex_ids();
    if ids.len() == 1 {
        return Ok(TspResult::trivial(start));
    }

    let mut scratch = Scratch::for_graph(graph);
    scratch.mark_visited(start);

    let mut path = Vec::with_capacity(ids.len() + 1);
    path.push(start);
    let mut cost = 0.0;
    let mut current = start;

    while path.len() < ids.len() {
        // Find nearest unvisited vertex; ascending ids make ties go to the lowest
        let mut best: Option<(u64, f64)> = None;
        for &candidate in &ids {
            if scratch.is_visited(candidate) {
                continue;
            }
            let d = edge_weight(graph, current, candidate)?;
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((candidate, d));
            }
        }

        let Some((next, d)) = best else {
            break;
        };
        scratch.mark_visited(next);
        path.push(next);
        cost += d;
        current = next;
    }

    cost += edge_weight(graph, current, start)?;
    path.push(start);

    debug!("nearest neighbor from {start}: tour cost {cost:.3}");
    Ok(TspResult::new(cost, path))
}
