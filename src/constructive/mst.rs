//! Prim's minimum spanning tree.
//!
//! # Algorithm
//!
//! Grow the tree from a root: keep a tentative distance per vertex (infinite,
//! root = 0), repeatedly settle the unsettled vertex with the smallest
//! tentative distance, and relax its neighbors through its outgoing edges.
//! Stale heap entries are skipped on extraction. Ties are broken by the lower
//! vertex id so a run is reproducible.
//!
//! # Complexity
//!
//! O(E log V) with a binary heap.
//!
//! # Reference
//!
//! Prim, R.C. (1957). "Shortest connection networks and some generalizations",
//! *Bell System Technical Journal* 36(6), 1389-1401.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::error::Result;
use crate::models::{Graph, Scratch};

/// A rooted spanning tree given by parent links.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    root: u64,
    parent: HashMap<u64, u64>,
    children: HashMap<u64, Vec<u64>>,
    total_weight: f64,
}

impl SpanningTree {
    pub fn root(&self) -> u64 {
        self.root
    }

    /// Parent of `id`; `None` for the root and for vertices outside the tree.
    pub fn parent(&self, id: u64) -> Option<u64> {
        self.parent.get(&id).copied()
    }

    /// Children of `id` in ascending id order.
    pub fn children(&self, id: u64) -> &[u64] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sum of the tree edge weights.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Number of vertices in the tree, root included.
    pub fn len(&self) -> usize {
        self.parent.len() + 1
    }

    /// Always `false`: a tree contains at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Vertices in depth-first preorder, children visited in ascending id.
    pub fn preorder(&self) -> Vec<u64> {
        let mut order = Vec::with_capacity(self.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        order
    }
}

/// Builds a minimum spanning tree of the component containing `root`.
///
/// Only stored edges are followed. On a disconnected graph the tree covers the
/// root's component; compare [`SpanningTree::len`] with the vertex count to
/// detect that.
///
/// # Errors
///
/// [`Error::VertexNotFound`](crate::Error::VertexNotFound) if `root` is
/// missing.
///
/// # Examples
///
/// ```
/// use tsp_graph::constructive::prim;
/// use tsp_graph::models::{Graph, VertexInfo};
///
/// let mut g = Graph::new();
/// for id in 0..3 {
///     g.add_vertex(VertexInfo::new(id), id);
/// }
/// g.add_bidirectional_edge(0, 1, 1.0).unwrap();
/// g.add_bidirectional_edge(1, 2, 2.0).unwrap();
/// g.add_bidirectional_edge(0, 2, 5.0).unwrap();
///
/// let tree = prim(&g, 0).unwrap();
/// assert_eq!(tree.total_weight(), 3.0);
/// assert_eq!(tree.parent(2), Some(1));
/// assert_eq!(tree.preorder(), vec![0, 1, 2]);
/// ```
pub fn prim(graph: &Graph, root: u64) -> Result<SpanningTree> {
    graph.find_vertex(root)?;

    let mut scratch = Scratch::for_graph(graph);
    let mut heap = BinaryHeap::new();
    scratch.get_mut(root).tentative_distance = 0.0;
    heap.push(Candidate {
        distance: 0.0,
        id: root,
    });

    while let Some(Candidate { id, .. }) = heap.pop() {
        if scratch.is_visited(id) {
            continue;
        }
        {
            let state = scratch.get_mut(id);
            state.visited = true;
            state.processing = false;
        }

        for edge in graph.find_vertex(id)?.sorted_edges() {
            let state = scratch.get_mut(edge.destination());
            if state.visited || edge.weight() >= state.tentative_distance {
                continue;
            }
            state.tentative_distance = edge.weight();
            state.predecessor = Some(id);
            state.processing = true;
            heap.push(Candidate {
                distance: edge.weight(),
                id: edge.destination(),
            });
        }
    }

    let mut parent = HashMap::new();
    let mut children: HashMap<u64, Vec<u64>> = HashMap::new();
    let mut total_weight = 0.0;
    for id in graph.vertex_ids() {
        let state = scratch.get(id);
        if !state.visited {
            continue;
        }
        if let Some(p) = state.predecessor {
            parent.insert(id, p);
            children.entry(p).or_default().push(id);
            total_weight += state.tentative_distance;
        }
    }

    Ok(SpanningTree {
        root,
        parent,
        children,
        total_weight,
    })
}

/// Heap entry ordered so that [`BinaryHeap`] pops the smallest distance,
/// then the smallest id.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    distance: f64,
    id: u64,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

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

    #[test]
    fn test_heap_pops_smallest_then_lowest_id() {
        let mut heap = BinaryHeap::new();
        heap.push(Candidate { distance: 2.0, id: 1 });
        heap.push(Candidate { distance: 1.0, id: 5 });
        heap.push(Candidate { distance: 1.0, id: 3 });
        assert_eq!(heap.pop().map(|c| c.id), Some(3));
        assert_eq!(heap.pop().map(|c| c.id), Some(5));
        assert_eq!(heap.pop().map(|c| c.id), Some(1));
    }

    #[test]
    fn test_four_cities_star() {
        let g = graph_with(
            4,
            &[
                (0, 1, 10.0),
                (0, 2, 15.0),
                (0, 3, 20.0),
                (1, 2, 35.0),
                (1, 3, 25.0),
                (2, 3, 30.0),
            ],
        );
        let tree = prim(&g, 0).expect("root exists");
        assert_eq!(tree.total_weight(), 45.0);
        assert_eq!(tree.children(0), &[1, 2, 3]);
        assert_eq!(tree.preorder(), vec![0, 1, 2, 3]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_preorder_descends_before_siblings() {
        // 0 -- 1 -- 3
        //  \
        //   2
        let g = graph_with(
            4,
            &[(0, 1, 1.0), (1, 3, 1.0), (0, 2, 2.0), (2, 3, 9.0), (1, 2, 9.0)],
        );
        let tree = prim(&g, 0).expect("root exists");
        assert_eq!(tree.parent(3), Some(1));
        assert_eq!(tree.parent(2), Some(0));
        assert_eq!(tree.preorder(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_disconnected_covers_component() {
        let g = graph_with(3, &[(0, 1, 1.0)]);
        let tree = prim(&g, 0).expect("root exists");
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.parent(2), None);
    }

    #[test]
    fn test_missing_root() {
        let g = graph_with(2, &[]);
        assert!(matches!(prim(&g, 7), Err(Error::VertexNotFound(7))));
    }
}
