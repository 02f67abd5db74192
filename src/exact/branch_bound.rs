//! Depth-first branch-and-bound over Hamiltonian cycles.
//!
//! # Algorithm
//!
//! Starting from a single-vertex path, extend the path along every outgoing
//! edge whose destination is not yet on it, in ascending destination id. Once
//! every vertex is placed, the only legal move is the edge back to the start.
//! A branch is abandoned as soon as its accumulated cost reaches the best
//! complete tour found so far.
//!
//! Only edges stored in the graph are followed; geometry is never used to
//! invent a missing leg.
//!
//! # Complexity
//!
//! O(V!) worst case. Practical instances rely on pruning.

use std::collections::HashMap;

use log::debug;

use crate::error::Result;
use crate::models::{Graph, Scratch, TspResult};
use crate::DEFAULT_START;

/// Solves the TSP exactly, starting and ending at vertex 0.
///
/// See [`branch_and_bound`].
pub fn backtracking(graph: &Graph) -> Result<TspResult> {
    branch_and_bound(graph, DEFAULT_START)
}

/// Finds a minimum-cost Hamiltonian cycle through `start`.
///
/// Among tours of equal minimal cost, the first one reached in the
/// ascending-id search order is returned. If the graph has no Hamiltonian
/// cycle over its stored edges, the result is
/// [`TspResult::no_solution`].
///
/// # Errors
///
/// [`Error::VertexNotFound`](crate::Error::VertexNotFound) if `start` is not
/// in the graph.
///
/// # Examples
///
/// ```
/// use tsp_graph::exact::branch_and_bound;
/// use tsp_graph::models::{Graph, VertexInfo};
///
/// let mut g = Graph::new();
/// for id in 0..4 {
///     g.add_vertex(VertexInfo::new(id), id);
/// }
/// for (a, b, w) in [(0, 1, 10.0), (0, 2, 15.0), (0, 3, 20.0),
///                   (1, 2, 35.0), (1, 3, 25.0), (2, 3, 30.0)] {
///     g.add_bidirectional_edge(a, b, w).unwrap();
/// }
///
/// let tour = branch_and_bound(&g, 0).unwrap();
/// assert_eq!(tour.cost, 80.0);
/// assert_eq!(tour.path, vec![0, 1, 3, 2, 0]);
/// ```
pub fn branch_and_bound(graph: &Graph, start: u64) -> Result<TspResult> {
    graph.find_vertex(start)?;
    if graph.vertex_count() == 1 {
        return Ok(TspResult::trivial(start));
    }

    let mut search = Search::new(graph, start);
    search.path.push(start);
    search.scratch.mark_visited(start);
    search.expand(0.0);

    debug!(
        "branch-and-bound from {start}: {} nodes expanded, {} branches pruned",
        search.expanded, search.pruned
    );
    Ok(search.best)
}

struct Search {
    start: u64,
    target_len: usize,
    /// Outgoing `(destination, weight)` pairs per vertex, ascending destination.
    adjacency: HashMap<u64, Vec<(u64, f64)>>,
    scratch: Scratch,
    path: Vec<u64>,
    best: TspResult,
    expanded: u64,
    pruned: u64,
}

impl Search {
    fn new(graph: &Graph, start: u64) -> Self {
        let adjacency = graph
            .vertices()
            .map(|v| {
                let legs = v
                    .sorted_edges()
                    .into_iter()
                    .map(|e| (e.destination(), e.weight()))
                    .collect();
                (v.id(), legs)
            })
            .collect();

        Self {
            start,
            target_len: graph.vertex_count(),
            adjacency,
            scratch: Scratch::for_graph(graph),
            path: Vec::with_capacity(graph.vertex_count() + 1),
            best: TspResult::no_solution(),
            expanded: 0,
            pruned: 0,
        }
    }

    fn legs(&self, id: u64) -> &[(u64, f64)] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn expand(&mut self, cost: f64) {
        self.expanded += 1;
        let Some(&current) = self.path.last() else {
            return;
        };

        if self.path.len() == self.target_len {
            self.close(current, cost);
            return;
        }

        // Cloned so the recursion below can borrow `self` mutably.
        let legs = self.legs(current).to_vec();
        for (next, weight) in legs {
            if self.scratch.is_visited(next) {
                continue;
            }
            let next_cost = cost + weight;
            if next_cost >= self.best.cost {
                self.pruned += 1;
                continue;
            }

            self.path.push(next);
            self.scratch.mark_visited(next);
            self.expand(next_cost);
            self.scratch.unmark_visited(next);
            self.path.pop();
        }
    }

    fn close(&mut self, current: u64, cost: f64) {
        let closing = self
            .legs(current)
            .iter()
            .find(|(dest, _)| *dest == self.start)
            .map(|&(_, w)| w);

        let Some(weight) = closing else {
            return;
        };
        let total = cost + weight;
        if total < self.best.cost {
            let mut path = self.path.clone();
            path.push(self.start);
            self.best = TspResult::new(total, path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::VertexInfo;

    fn graph_with(n: u64, edges: &[(u64, u64, f64)]) -> Graph {
        let mut g = Graph::new();
        for id in 0..n {
            g.add_vertex(VertexInfo::new(id), id);
        }
        for &(a, b, w) in edges {
            g.add_bidirectional_edge(a, b, w).expect("both ends exist");
        }
        g
    }

    fn four_cities() -> Graph {
        graph_with(
            4,
            &[
                (0, 1, 10.0),
                (0, 2, 15.0),
                (0, 3, 20.0),
                (1, 2, 35.0),
                (1, 3, 25.0),
                (2, 3, 30.0),
            ],
        )
    }

    #[test]
    fn test_four_cities_optimal() {
        let tour = backtracking(&four_cities()).expect("start exists");
        assert_eq!(tour.cost, 80.0);
        assert_eq!(tour.path, vec![0, 1, 3, 2, 0]);
    }

    #[test]
    fn test_first_optimal_kept_on_ties() {
        // Square with unit sides: 0-1-2-3-0 and its mirror both cost 4.
        let g = graph_with(
            4,
            &[
                (0, 1, 1.0),
                (1, 2, 1.0),
                (2, 3, 1.0),
                (3, 0, 1.0),
                (0, 2, 5.0),
                (1, 3, 5.0),
            ],
        );
        let tour = backtracking(&g).expect("start exists");
        assert_eq!(tour.cost, 4.0);
        assert_eq!(tour.path, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_missing_closing_edge_kills_branch() {
        // A path 0-1-2 with no way back to 0.
        let g = graph_with(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
        let tour = backtracking(&g).expect("start exists");
        assert!(!tour.is_solution());
        assert!(tour.cost.is_infinite());
    }

    #[test]
    fn test_disconnected_vertex_no_solution() {
        let mut g = four_cities();
        g.add_vertex(VertexInfo::new(4), 4);
        assert!(!backtracking(&g).expect("start exists").is_solution());
    }

    #[test]
    fn test_directed_edges_respected() {
        let mut g = graph_with(3, &[]);
        g.add_edge(0, 1, 1.0).expect("exists");
        g.add_edge(1, 2, 1.0).expect("exists");
        g.add_edge(2, 0, 1.0).expect("exists");
        g.add_edge(0, 2, 0.5).expect("exists");
        let tour = backtracking(&g).expect("start exists");
        assert_eq!(tour.path, vec![0, 1, 2, 0]);
        assert_eq!(tour.cost, 3.0);
    }

    #[test]
    fn test_custom_start() {
        let tour = branch_and_bound(&four_cities(), 2).expect("start exists");
        assert_eq!(tour.cost, 80.0);
        assert_eq!(tour.path.first(), Some(&2));
        assert_eq!(tour.path.last(), Some(&2));
    }

    #[test]
    fn test_single_vertex() {
        let g = graph_with(1, &[]);
        let tour = backtracking(&g).expect("start exists");
        assert_eq!(tour.path, vec![0, 0]);
        assert_eq!(tour.cost, 0.0);
    }

    #[test]
    fn test_missing_start() {
        assert!(matches!(
            backtracking(&Graph::new()),
            Err(Error::VertexNotFound(0))
        ));
    }
}
