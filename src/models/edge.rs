//! Directed weighted edge.

/// A directed edge between two vertex ids.
///
/// Edges hold only vertex keys, never references to vertices, so removing a
/// vertex cannot leave a dangling edge behind.
///
/// # Examples
///
/// ```
/// use tsp_graph::models::Edge;
///
/// let e = Edge::new(0, 1, 12.5);
/// assert_eq!(e.origin(), 0);
/// assert_eq!(e.destination(), 1);
/// assert!(!e.is_synthetic());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    origin: u64,
    destination: u64,
    weight: f64,
    flow: f64,
    synthetic: bool,
}

impl Edge {
    /// Creates an edge supplied by the dataset.
    pub fn new(origin: u64, destination: u64, weight: f64) -> Self {
        Self {
            origin,
            destination,
            weight,
            flow: 0.0,
            synthetic: false,
        }
    }

    /// Creates an edge that completes the graph for one algorithm run.
    pub(crate) fn synthetic(origin: u64, destination: u64, weight: f64) -> Self {
        Self {
            synthetic: true,
            ..Self::new(origin, destination, weight)
        }
    }

    pub fn origin(&self) -> u64 {
        self.origin
    }

    pub fn destination(&self) -> u64 {
        self.destination
    }

    /// Traversal cost.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Flow or pheromone carried by this edge.
    pub fn flow(&self) -> f64 {
        self.flow
    }

    pub fn set_flow(&mut self, flow: f64) {
        self.flow = flow;
    }

    /// `true` if the edge was not in the input and must be removed later.
    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }
}
