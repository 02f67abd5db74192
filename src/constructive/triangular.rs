//! MST-based 2-approximation.
//!
//! # Algorithm
//!
//! 1. Complete the graph with synthetic haversine edges (scoped).
//! 2. Build a minimum spanning tree with Prim from the root.
//! 3. Walk the tree in preorder and return to the root.
//! 4. Drop the completion, restoring the graph.
//!
//! # Guarantee
//!
//! When every weight satisfies the triangle inequality the tour costs at most
//! twice the optimum. Haversine weights are metric; weights supplied by the
//! dataset are taken as given and not checked.
//!
//! # Reference
//!
//! Rosenkrantz, Stearns & Lewis (1977). "An analysis of several heuristics for
//! the traveling salesman problem", *SIAM J. Computing* 6(3), 563-581.

use log::debug;

use super::{prim, CompletedGraph};
use crate::error::Result;
use crate::evaluation::TourEvaluator;
use crate::models::{Graph, TspResult};
use crate::DEFAULT_START;

/// Approximates the TSP through an MST rooted at vertex 0.
///
/// See [`mst_approximation`].
pub fn triangular(graph: &mut Graph) -> Result<TspResult> {
    mst_approximation(graph, DEFAULT_START)
}

/// Builds a tour from the preorder walk of a minimum spanning tree.
///
/// The graph is mutated only for the duration of the call: synthetic edges
/// are added to complete it and removed before returning, on every path.
///
/// # Errors
///
/// [`Error::VertexNotFound`](crate::Error::VertexNotFound) if `root` is
/// missing, [`Error::MissingCoordinates`](crate::Error::MissingCoordinates) if
/// completion needs coordinates a vertex does not have.
///
/// # Examples
///
/// ```
/// use tsp_graph::constructive::mst_approximation;
/// use tsp_graph::models::{Coordinates, Graph, VertexInfo};
///
/// let mut g = Graph::new();
/// let points = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
/// for (id, (lat, lon)) in points.into_iter().enumerate() {
///     let id = id as u64;
///     g.add_vertex(VertexInfo::with_coordinates(id, Coordinates::new(lat, lon)), id);
/// }
///
/// let tour = mst_approximation(&mut g, 0).unwrap();
/// assert_eq!(tour.path.len(), 5);
/// assert_eq!(g.edge_count(), 0); // synthetic edges are gone
/// ```
pub fn mst_approximation(graph: &mut Graph, root: u64) -> Result<TspResult> {
    graph.find_vertex(root)?;
    if graph.vertex_count() == 1 {
        return Ok(TspResult::trivial(root));
    }

    let completed = CompletedGraph::new(graph)?;
    let tree = prim(&completed, root)?;
    if tree.len() != completed.vertex_count() {
        return Ok(TspResult::no_solution());
    }

    let mut path = tree.preorder();
    path.push(root);
    let cost = TourEvaluator::new(&completed).tour_cost(&path)?;

    debug!(
        "mst approximation: tree weight {:.3}, tour cost {:.3}, {} synthetic edges",
        tree.total_weight(),
        cost,
        completed.synthetic_count()
    );
    Ok(TspResult::new(cost, path))
}
