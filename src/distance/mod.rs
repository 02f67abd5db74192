//! Distances between vertices.
//!
//! Provides the haversine great-circle distance and the edge-weight lookup
//! that falls back to it when the graph has no direct edge.

mod haversine;
mod weight;

pub use haversine::{haversine, EARTH_RADIUS_M};
pub use weight::{edge_weight, geometric_weight};
