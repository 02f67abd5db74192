//! Loaded dataset and solver entry points.

use std::path::Path;

use log::warn;

use crate::aco::{AcoConfig, AcoReport, AntColony};
use crate::constructive;
use crate::error::Result;
use crate::exact;
use crate::io;
use crate::models::{Graph, TspResult};

/// A graph loaded once and solved with any of the four strategies.
///
/// Every solver starts at [`DEFAULT_START`](crate::DEFAULT_START) except the
/// ant colony, which takes its start explicitly.
///
/// # Examples
///
/// ```
/// use tsp_graph::dataset::Dataset;
/// use tsp_graph::models::{Graph, VertexInfo};
///
/// let mut g = Graph::new();
/// for id in 0..3 {
///     g.add_vertex(VertexInfo::new(id), id);
/// }
/// g.add_bidirectional_edge(0, 1, 1.0).unwrap();
/// g.add_bidirectional_edge(1, 2, 2.0).unwrap();
/// g.add_bidirectional_edge(2, 0, 3.0).unwrap();
///
/// let ds = Dataset::new(g);
/// let tour = ds.backtracking().unwrap();
/// assert_eq!(tour.cost, 6.0);
/// assert_eq!(tour.path, vec![0, 1, 2, 0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    graph: Graph,
}

impl Dataset {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    /// Loads an edge file and, optionally, a node file with coordinates.
    ///
    /// Nodes are read first so that edge rows attach to vertices that
    /// already carry coordinates.
    pub fn from_csv<P: AsRef<Path>>(edges: P, nodes: Option<P>) -> Result<Self> {
        let mut graph = Graph::new();
        if let Some(nodes) = nodes {
            io::load_nodes(nodes, &mut graph)?;
        }
        io::load_edges(edges, &mut graph)?;
        Ok(Self::new(graph))
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    fn warn_if_disconnected(&self) {
        if !self.graph.is_empty() && !self.graph.is_connected() {
            warn!(
                "graph with {} vertices is not connected; no tour can visit them all",
                self.graph.vertex_count()
            );
        }
    }

    /// Exact branch-and-bound over stored edges.
    pub fn backtracking(&self) -> Result<TspResult> {
        self.warn_if_disconnected();
        exact::backtracking(&self.graph)
    }

    /// MST 2-approximation. Needs coordinates for every pair without an edge.
    ///
    /// The graph is borrowed mutably for the duration of the call and is
    /// unchanged when it returns.
    pub fn triangular(&mut self) -> Result<TspResult> {
        constructive::triangular(&mut self.graph)
    }

    /// Nearest-neighbor tour.
    pub fn heuristic(&self) -> Result<TspResult> {
        self.warn_if_disconnected();
        constructive::heuristic(&self.graph)
    }

    /// Ant colony with default parameters. `None` if no tour closed.
    pub fn ant_colony(&self, start: u64, iterations: u32) -> Result<Option<TspResult>> {
        self.warn_if_disconnected();
        crate::aco::ant_colony(&self.graph, start, iterations)
    }

    /// Ant colony with a custom configuration, returning the full report.
    pub fn ant_colony_with(&self, config: AcoConfig, start: u64) -> Result<AcoReport> {
        self.warn_if_disconnected();
        AntColony::new(config)?.run(&self.graph, start)
    }
}

impl From<Graph> for Dataset {
    fn from(graph: Graph) -> Self {
        Self::new(graph)
    }
}
