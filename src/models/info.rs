//! Vertex payload and geographic coordinates.

use serde::{Deserialize, Serialize};

use crate::distance::haversine;

/// A latitude/longitude pair in degrees.
///
/// # Examples
///
/// ```
/// use tsp_graph::models::Coordinates;
///
/// let porto = Coordinates::new(41.1579, -8.6291);
/// assert_eq!(porto.latitude(), 41.1579);
/// assert_eq!(porto.longitude(), -8.6291);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another point, in meters.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        haversine(*self, *other)
    }
}

/// Information stored inside a vertex.
///
/// Coordinates are present only when the dataset ships a node file.
///
/// # Examples
///
/// ```
/// use tsp_graph::models::{Coordinates, VertexInfo};
///
/// let bare = VertexInfo::new(4);
/// assert_eq!(bare.id(), 4);
/// assert!(bare.coordinates().is_none());
///
/// let placed = VertexInfo::with_coordinates(5, Coordinates::new(41.0, -8.0));
/// assert!(placed.coordinates().is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexInfo {
    id: u64,
    coordinates: Option<Coordinates>,
}

impl VertexInfo {
    /// Creates a payload without coordinates.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            coordinates: None,
        }
    }

    /// Creates a payload located at `coordinates`.
    pub fn with_coordinates(id: u64, coordinates: Coordinates) -> Self {
        Self {
            id,
            coordinates: Some(coordinates),
        }
    }

    /// Vertex id this payload belongs to.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    pub fn has_coordinates(&self) -> bool {
        self.coordinates.is_some()
    }
}
