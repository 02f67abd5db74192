//! Row types for the CSV inputs.

use serde::{Deserialize, Serialize};

use crate::models::{Coordinates, VertexInfo};

/// One row of an edge file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub origin: u64,
    pub destination: u64,
    pub weight: f64,
}

/// One row of a node file. Longitude comes before latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: u64,
    pub longitude: f64,
    pub latitude: f64,
}

impl NodeRecord {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    pub fn to_info(&self) -> VertexInfo {
        VertexInfo::with_coordinates(self.id, self.coordinates())
    }
}
