//! Graph model types for TSP solving.
//!
//! Provides the id-indexed graph store that every solver queries, the vertex
//! payload with optional coordinates, per-run scratch state, and the tour
//! result returned by the solvers.

mod edge;
mod graph;
mod info;
mod result;
mod scratch;
mod vertex;

pub use edge::Edge;
pub use graph::Graph;
pub use info::{Coordinates, VertexInfo};
pub use result::TspResult;
pub use scratch::{Scratch, VertexState};
pub use vertex::Vertex;
