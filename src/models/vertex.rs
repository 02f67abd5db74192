//! Graph vertex with its outgoing adjacency.

use std::collections::HashMap;

use super::{Edge, VertexInfo};

/// A vertex and its outgoing edges, keyed by destination id.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: u64,
    info: VertexInfo,
    adjacency: HashMap<u64, Edge>,
}

impl Vertex {
    pub(crate) fn new(id: u64, info: VertexInfo) -> Self {
        Self {
            id,
            info,
            adjacency: HashMap::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn info(&self) -> &VertexInfo {
        &self.info
    }

    pub(crate) fn set_info(&mut self, info: VertexInfo) {
        self.info = info;
    }

    /// Outgoing edges keyed by destination id. Iteration order is unspecified.
    pub fn adjacency(&self) -> &HashMap<u64, Edge> {
        &self.adjacency
    }

    /// Outgoing edge to `destination`, if any.
    pub fn edge_to(&self, destination: u64) -> Option<&Edge> {
        self.adjacency.get(&destination)
    }

    /// Outgoing edges sorted by destination id.
    pub fn sorted_edges(&self) -> Vec<&Edge> {
        let mut edges: Vec<&Edge> = self.adjacency.values().collect();
        edges.sort_by_key(|e| e.destination());
        edges
    }

    /// Number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    pub(crate) fn insert_edge(&mut self, edge: Edge) -> Option<Edge> {
        self.adjacency.insert(edge.destination(), edge)
    }

    pub(crate) fn remove_edge(&mut self, destination: u64) -> Option<Edge> {
        self.adjacency.remove(&destination)
    }

    pub(crate) fn edge_to_mut(&mut self, destination: u64) -> Option<&mut Edge> {
        self.adjacency.get_mut(&destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_edges_by_destination() {
        let mut v = Vertex::new(0, VertexInfo::new(0));
        v.insert_edge(Edge::new(0, 5, 1.0));
        v.insert_edge(Edge::new(0, 2, 1.0));
        v.insert_edge(Edge::new(0, 9, 1.0));
        let dests: Vec<u64> = v.sorted_edges().iter().map(|e| e.destination()).collect();
        assert_eq!(dests, vec![2, 5, 9]);
        assert_eq!(v.degree(), 3);
    }

    #[test]
    fn test_insert_replaces_same_destination() {
        let mut v = Vertex::new(1, VertexInfo::new(1));
        assert!(v.insert_edge(Edge::new(1, 2, 3.0)).is_none());
        let old = v.insert_edge(Edge::new(1, 2, 4.0)).expect("replaced");
        assert_eq!(old.weight(), 3.0);
        assert_eq!(v.edge_to(2).map(|e| e.weight()), Some(4.0));
    }
}
