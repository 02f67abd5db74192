//! Id-indexed graph store.

use std::collections::{HashMap, HashSet, VecDeque};

use super::{Edge, Vertex, VertexInfo};
use crate::error::{Error, Result};

/// A directed weighted graph keyed by `u64` vertex ids.
///
/// Vertices own their outgoing edges; nothing holds a reference to another
/// vertex, only its id. Lookups are hash-indexed. Functions that hand out ids
/// (`vertex_ids`, `neighbors`) return them in ascending order so that the
/// solvers built on top are deterministic.
///
/// # Examples
///
/// ```
/// use tsp_graph::models::{Graph, VertexInfo};
///
/// let mut g = Graph::new();
/// g.add_vertex(VertexInfo::new(0), 0);
/// g.add_vertex(VertexInfo::new(1), 1);
/// g.add_bidirectional_edge(0, 1, 4.0).unwrap();
///
/// assert_eq!(g.vertex_count(), 2);
/// assert_eq!(g.find_edge(1, 0).map(|e| e.weight()), Some(4.0));
/// assert!(g.find_edge(0, 0).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: HashMap<u64, Vertex>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts a vertex under `id`.
    ///
    /// If the id is already present its info is replaced and its edges are kept.
    pub fn add_vertex(&mut self, info: VertexInfo, id: u64) -> &mut Vertex {
        let vertex = self
            .vertices
            .entry(id)
            .or_insert_with(|| Vertex::new(id, info));
        vertex.set_info(info);
        vertex
    }

    /// Returns the vertex with `id`.
    ///
    /// A missing id is a caller bug, reported as [`Error::VertexNotFound`].
    pub fn find_vertex(&self, id: u64) -> Result<&Vertex> {
        self.vertices.get(&id).ok_or(Error::VertexNotFound(id))
    }

    pub fn has_vertex(&self, id: u64) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Returns the vertex with `id`, inserting it with `info` if absent.
    ///
    /// An existing vertex keeps its original info.
    pub fn find_or_add_vertex(&mut self, id: u64, info: VertexInfo) -> &mut Vertex {
        self.vertices
            .entry(id)
            .or_insert_with(|| Vertex::new(id, info))
    }

    /// Removes a vertex together with every edge pointing at it.
    pub fn remove_vertex(&mut self, id: u64) -> Option<Vertex> {
        let removed = self.vertices.remove(&id)?;
        for vertex in self.vertices.values_mut() {
            vertex.remove_edge(id);
        }
        Some(removed)
    }

    /// Adds (or replaces) the directed edge `origin -> destination`.
    pub fn add_edge(&mut self, origin: u64, destination: u64, weight: f64) -> Result<()> {
        self.insert_edge(Edge::new(origin, destination, weight))
    }

    /// Adds `a -> b` and `b -> a` with the same weight.
    pub fn add_bidirectional_edge(&mut self, a: u64, b: u64, weight: f64) -> Result<()> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    pub(crate) fn insert_edge(&mut self, edge: Edge) -> Result<()> {
        if !self.has_vertex(edge.destination()) {
            return Err(Error::VertexNotFound(edge.destination()));
        }
        let origin = self
            .vertices
            .get_mut(&edge.origin())
            .ok_or(Error::VertexNotFound(edge.origin()))?;
        origin.insert_edge(edge);
        Ok(())
    }

    /// Removes the directed edge `origin -> destination`, returning it.
    pub fn remove_edge(&mut self, origin: u64, destination: u64) -> Option<Edge> {
        self.vertices.get_mut(&origin)?.remove_edge(destination)
    }

    /// The direct edge `origin -> destination`, if the graph has one.
    ///
    /// `None` is an ordinary outcome: callers fall back to geometry.
    pub fn find_edge(&self, origin: u64, destination: u64) -> Option<&Edge> {
        self.vertices.get(&origin)?.edge_to(destination)
    }

    pub fn find_edge_mut(&mut self, origin: u64, destination: u64) -> Option<&mut Edge> {
        self.vertices.get_mut(&origin)?.edge_to_mut(destination)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::degree).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertex ids in ascending order.
    pub fn vertex_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.vertices.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Vertices in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Destination ids of the outgoing edges of `id`, ascending.
    pub fn neighbors(&self, id: u64) -> Result<Vec<u64>> {
        let mut out: Vec<u64> = self.find_vertex(id)?.adjacency().keys().copied().collect();
        out.sort_unstable();
        Ok(out)
    }

    /// `true` if every vertex carries coordinates.
    pub fn has_all_coordinates(&self) -> bool {
        self.vertices.values().all(|v| v.info().has_coordinates())
    }

    /// Breadth-first order of the vertices reachable from `source`.
    ///
    /// Neighbors are expanded in ascending id order.
    pub fn bfs(&self, source: u64) -> Result<Vec<u64>> {
        self.find_vertex(source)?;
        let mut seen = HashSet::from([source]);
        let mut queue = VecDeque::from([source]);
        let mut order = Vec::with_capacity(self.vertex_count());

        while let Some(id) = queue.pop_front() {
            order.push(id);
            for next in self.neighbors(id)? {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        Ok(order)
    }

    /// `true` if every vertex is reachable from the lowest id.
    ///
    /// An empty graph counts as connected.
    pub fn is_connected(&self) -> bool {
        match self.vertices.keys().min() {
            Some(&root) => self
                .bfs(root)
                .map(|order| order.len() == self.vertex_count())
                .unwrap_or(false),
            None => true,
        }
    }
}
