//! Scoped synthetic completion of a graph.

use std::ops::Deref;

use log::debug;

use crate::distance::geometric_weight;
use crate::error::Result;
use crate::models::{Edge, Graph};

/// A graph temporarily completed with synthetic edges.
///
/// Creating the guard adds, for every ordered pair of distinct vertices that
/// lacks an edge, a synthetic edge weighted by the haversine distance between
/// them. Dropping the guard removes exactly those edges, whether the scope
/// ends normally, through `?`, or by unwinding. Completion that fails halfway
/// (a vertex without coordinates) rolls back what it had added before the
/// error is returned.
///
/// While the guard lives the graph is read-only through [`Deref`].
///
/// # Examples
///
/// ```
/// use tsp_graph::constructive::CompletedGraph;
/// use tsp_graph::models::{Coordinates, Graph, VertexInfo};
///
/// let mut g = Graph::new();
/// g.add_vertex(VertexInfo::with_coordinates(0, Coordinates::new(0.0, 0.0)), 0);
/// g.add_vertex(VertexInfo::with_coordinates(1, Coordinates::new(0.0, 1.0)), 1);
///
/// {
///     let completed = CompletedGraph::new(&mut g).unwrap();
///     assert_eq!(completed.synthetic_count(), 2);
///     assert!(completed.find_edge(0, 1).unwrap().is_synthetic());
/// }
/// assert_eq!(g.edge_count(), 0);
/// ```
pub struct CompletedGraph<'g> {
    graph: &'g mut Graph,
    added: Vec<(u64, u64)>,
}

impl<'g> CompletedGraph<'g> {
    /// Completes `graph`, borrowing it until the guard is dropped.
    ///
    /// # Errors
    ///
    /// [`Error::MissingCoordinates`](crate::Error::MissingCoordinates) if a
    /// pair lacking an edge involves a vertex without coordinates. The graph
    /// is left as it was.
    pub fn new(graph: &'g mut Graph) -> Result<Self> {
        let mut completed = Self {
            graph,
            added: Vec::new(),
        };
        completed.fill()?;
        debug!(
            "completed graph with {} synthetic edges",
            completed.added.len()
        );
        Ok(completed)
    }

    fn fill(&mut self) -> Result<()> {
        let ids = self.graph.vertex_ids();
        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                let missing: Vec<(u64, u64)> = [(a, b), (b, a)]
                    .into_iter()
                    .filter(|&(from, to)| self.graph.find_edge(from, to).is_none())
                    .collect();
                if missing.is_empty() {
                    continue;
                }

                let weight = geometric_weight(self.graph, a, b)?;
                for (from, to) in missing {
                    self.graph.insert_edge(Edge::synthetic(from, to, weight))?;
                    self.added.push((from, to));
                }
            }
        }
        Ok(())
    }

    /// Number of directed synthetic edges added.
    pub fn synthetic_count(&self) -> usize {
        self.added.len()
    }
}

impl Deref for CompletedGraph<'_> {
    type Target = Graph;

    fn deref(&self) -> &Graph {
        &*self.graph
    }
}

impl Drop for CompletedGraph<'_> {
    fn drop(&mut self) {
        for (from, to) in self.added.drain(..) {
            let synthetic = self
                .graph
                .find_edge(from, to)
                .is_some_and(Edge::is_synthetic);
            if synthetic {
                self.graph.remove_edge(from, to);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{Coordinates, VertexInfo};

    fn located(n: u64) -> Graph {
        let mut g = Graph::new();
        for id in 0..n {
            let c = Coordinates::new(id as f64 * 0.1, id as f64 * 0.2);
            g.add_vertex(VertexInfo::with_coordinates(id, c), id);
        }
        g
    }

    #[test]
    fn test_completes_all_pairs() {
        let mut g = located(4);
        g.add_bidirectional_edge(0, 1, 3.0).expect("exists");
        {
            let completed = CompletedGraph::new(&mut g).expect("coordinates exist");
            assert_eq!(completed.edge_count(), 12);
            assert_eq!(completed.synthetic_count(), 10);
            assert!(!completed.find_edge(0, 1).expect("real").is_synthetic());
            assert!(completed.find_edge(2, 3).expect("added").is_synthetic());
        }
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.find_edge(0, 1).map(Edge::weight), Some(3.0));
    }

    #[test]
    fn test_fills_missing_direction_only() {
        let mut g = located(2);
        g.add_edge(0, 1, 9.0).expect("exists");
        {
            let completed = CompletedGraph::new(&mut g).expect("coordinates exist");
            assert_eq!(completed.synthetic_count(), 1);
            assert!(completed.find_edge(1, 0).expect("added").is_synthetic());
        }
        assert!(g.find_edge(1, 0).is_none());
        assert_eq!(g.find_edge(0, 1).map(Edge::weight), Some(9.0));
    }

    #[test]
    fn test_complete_graph_needs_no_coordinates() {
        let mut g = Graph::new();
        for id in 0..3 {
            g.add_vertex(VertexInfo::new(id), id);
        }
        g.add_bidirectional_edge(0, 1, 1.0).expect("exists");
        g.add_bidirectional_edge(1, 2, 1.0).expect("exists");
        g.add_bidirectional_edge(0, 2, 1.0).expect("exists");
        let completed = CompletedGraph::new(&mut g).expect("nothing to add");
        assert_eq!(completed.synthetic_count(), 0);
    }

    #[test]
    fn test_failure_rolls_back() {
        let mut g = located(3);
        g.add_vertex(VertexInfo::new(3), 3);
        g.add_bidirectional_edge(0, 3, 1.0).expect("exists");
        let before = g.edge_count();

        let result = CompletedGraph::new(&mut g);
        assert!(matches!(result, Err(Error::MissingCoordinates(3))));
        drop(result);

        assert_eq!(g.edge_count(), before);
        assert!(g.vertices().flat_map(|v| v.adjacency().values()).all(|e| !e.is_synthetic()));
    }
}
