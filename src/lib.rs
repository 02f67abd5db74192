//! # tsp-graph
//!
//! Travelling salesman solvers over a weighted, id-keyed graph. The same
//! loaded graph can be solved exactly, approximated, or searched
//! stochastically.
//!
//! ## Modules
//!
//! - [`models`]: Graph store (vertices, edges), per-run scratch state, tour results
//! - [`distance`]: Haversine distance and edge-or-geometry weights
//! - [`evaluation`]: Tour cost and shape validation
//! - [`exact`]: Branch-and-bound
//! - [`constructive`]: MST 2-approximation and nearest neighbor
//! - [`aco`]: Ant colony optimization
//! - [`io`]: CSV ingestion of edge and node files
//! - [`dataset`]: Loaded graph with the four solver entry points
//! - [`logging`]: `env_logger` setup for the binary
//!
//! ## Example
//!
//! ```
//! use tsp_graph::dataset::Dataset;
//! use tsp_graph::io::read_edges;
//! use tsp_graph::models::Graph;
//!
//! let mut graph = Graph::new();
//! read_edges("0,1,10\n0,2,15\n0,3,20\n1,2,35\n1,3,25\n2,3,30\n".as_bytes(), &mut graph)?;
//!
//! let dataset = Dataset::new(graph);
//! let tour = dataset.backtracking()?;
//! assert_eq!(tour.cost, 80.0);
//! assert_eq!(tour.path, vec![0, 1, 3, 2, 0]);
//! # Ok::<(), tsp_graph::Error>(())
//! ```

pub mod aco;
pub mod constructive;
pub mod dataset;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod exact;
pub mod io;
pub mod logging;
pub mod models;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use models::{Graph, TspResult};

/// Start vertex of every solver that does not take one explicitly.
pub const DEFAULT_START: u64 = 0;
