//! CSV ingestion.
//!
//! - [`load_edges`]: `origin,destination,weight` rows as bidirectional edges
//! - [`load_nodes`]: `id,longitude,latitude` rows as vertices with coordinates
//!
//! Files carry no required header. A first row that does not parse is taken
//! as a header and skipped; any later row that does not parse is an
//! [`Error::InvalidInput`](crate::Error::InvalidInput) naming its line.

mod loader;
mod records;

pub use loader::{load_edges, load_nodes, read_edges, read_nodes};
pub use records::{EdgeRecord, NodeRecord};
