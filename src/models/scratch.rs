//! Per-run algorithm scratch state.
//!
//! Traversal flags and tentative distances live here instead of on the
//! vertices, so a solver never leaves marks on the shared graph and no reset
//! pass is needed between runs.

use std::collections::HashMap;

use super::Graph;

/// Transient state of one vertex during one algorithm run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexState {
    pub visited: bool,
    pub processing: bool,
    pub tentative_distance: f64,
    /// Vertex the tree edge into this vertex comes from.
    pub predecessor: Option<u64>,
}

impl Default for VertexState {
    fn default() -> Self {
        Self {
            visited: false,
            processing: false,
            tentative_distance: f64::INFINITY,
            predecessor: None,
        }
    }
}

/// Scratch state for every vertex of a graph, fresh for each run.
///
/// # Examples
///
/// ```
/// use tsp_graph::models::{Graph, Scratch, VertexInfo};
///
/// let mut g = Graph::new();
/// g.add_vertex(VertexInfo::new(0), 0);
///
/// let mut scratch = Scratch::for_graph(&g);
/// assert!(!scratch.is_visited(0));
/// scratch.mark_visited(0);
/// assert!(scratch.is_visited(0));
///
/// // A new run starts clean.
/// assert!(!Scratch::for_graph(&g).is_visited(0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scratch {
    states: HashMap<u64, VertexState>,
}

impl Scratch {
    /// Default state for every vertex of `graph`.
    pub fn for_graph(graph: &Graph) -> Self {
        Self {
            states: graph
                .vertices()
                .map(|v| (v.id(), VertexState::default()))
                .collect(),
        }
    }

    /// State of `id`; unknown ids read as the default state.
    pub fn get(&self, id: u64) -> VertexState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    pub fn get_mut(&mut self, id: u64) -> &mut VertexState {
        self.states.entry(id).or_default()
    }

    pub fn is_visited(&self, id: u64) -> bool {
        self.get(id).visited
    }

    pub fn mark_visited(&mut self, id: u64) {
        self.get_mut(id).visited = true;
    }

    pub fn unmark_visited(&mut self, id: u64) {
        self.get_mut(id).visited = false;
    }

    pub fn tentative_distance(&self, id: u64) -> f64 {
        self.get(id).tentative_distance
    }

    pub fn predecessor(&self, id: u64) -> Option<u64> {
        self.get(id).predecessor
    }

    /// Number of vertices currently marked visited.
    pub fn visited_count(&self) -> usize {
        self.states.values().filter(|s| s.visited).count()
    }
}
