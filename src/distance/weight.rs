//! Edge weight with geometric fallback.

use super::haversine;
use crate::error::{Error, Result};
use crate::models::{Coordinates, Graph};

/// Cost of travelling `from -> to`.
///
/// Returns the stored weight when the graph has that edge, otherwise the
/// haversine distance between the two vertices.
///
/// # Errors
///
/// [`Error::VertexNotFound`] if either id is missing, and
/// [`Error::MissingCoordinates`] if there is no edge and a vertex has no
/// coordinates to derive one from.
///
/// # Examples
///
/// ```
/// use tsp_graph::distance::edge_weight;
/// use tsp_graph::models::{Coordinates, Graph, VertexInfo};
///
/// let mut g = Graph::new();
/// g.add_vertex(VertexInfo::with_coordinates(0, Coordinates::new(0.0, 0.0)), 0);
/// g.add_vertex(VertexInfo::with_coordinates(1, Coordinates::new(0.0, 1.0)), 1);
/// g.add_vertex(VertexInfo::with_coordinates(2, Coordinates::new(1.0, 0.0)), 2);
/// g.add_bidirectional_edge(0, 1, 5.0).unwrap();
///
/// assert_eq!(edge_weight(&g, 0, 1).unwrap(), 5.0);
/// assert!(edge_weight(&g, 0, 2).unwrap() > 100_000.0);
/// ```
pub fn edge_weight(graph: &Graph, from: u64, to: u64) -> Result<f64> {
    if let Some(edge) = graph.find_edge(from, to) {
        return Ok(edge.weight());
    }
    geometric_weight(graph, from, to)
}

/// Haversine distance between two vertices, ignoring stored edges.
pub fn geometric_weight(graph: &Graph, from: u64, to: u64) -> Result<f64> {
    let a = coordinates_of(graph, from)?;
    let b = coordinates_of(graph, to)?;
    Ok(haversine(a, b))
}

fn coordinates_of(graph: &Graph, id: u64) -> Result<Coordinates> {
    graph
        .find_vertex(id)?
        .info()
        .coordinates()
        .ok_or(Error::MissingCoordinates(id))
}
