//! Constructive heuristics for building TSP tours.
//!
//! - [`nearest_neighbor`]: Greedy nearest-neighbor tour, O(n²)
//! - [`mst_approximation`]: Preorder walk of a Prim MST, 2-approximation on metric graphs
//! - [`prim`]: Minimum spanning tree (Prim, 1957), O(E log V)
//! - [`CompletedGraph`]: Scoped synthetic completion used by the MST tour

mod completion;
mod mst;
mod nearest_neighbor;
mod triangular;

pub use completion::CompletedGraph;
pub use mst::{prim, SpanningTree};
pub use nearest_neighbor::{heuristic, nearest_neighbor};
pub use triangular::{mst_approximation, triangular};
