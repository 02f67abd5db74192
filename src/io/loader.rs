//! Readers that populate a [`Graph`] from CSV.

use std::io::Read;
use std::path::Path;

use log::{debug, info};
use serde::de::DeserializeOwned;

use super::records::{EdgeRecord, NodeRecord};
use crate::error::{Error, Result};
use crate::models::{Graph, VertexInfo};

const EDGE_FIELDS: usize = 3;
const NODE_FIELDS: usize = 3;

fn builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All);
    builder
}

/// Decodes every row of `reader` into `T`, paired with its line number.
fn parse_rows<R: Read, T: DeserializeOwned>(
    mut reader: csv::Reader<R>,
    kind: &str,
    fields: usize,
) -> Result<Vec<(u64, T)>> {
    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = record.position().map_or(index as u64 + 1, |pos| pos.line());

        let parsed = if record.len() == fields {
            record.deserialize::<T>(None).map_err(|e| e.to_string())
        } else {
            Err(format!("expected {fields} fields, found {}", record.len()))
        };

        match parsed {
            Ok(row) => rows.push((line, row)),
            Err(_) if index == 0 => debug!("skipping {kind} header on line {line}"),
            Err(message) => {
                return Err(Error::invalid_input(format!(
                    "{kind} line {line}: {message}"
                )))
            }
        }
    }
    Ok(rows)
}

/// Reads edge rows from `reader` into `graph`.
///
/// Both endpoints are created on demand and every row becomes a pair of
/// directed edges. Returns the number of rows applied.
///
/// # Errors
///
/// [`Error::InvalidInput`] for an unparsable row past the first or a weight
/// that is negative or not finite; [`Error::Csv`] for a low-level read
/// failure.
///
/// # Examples
///
/// ```
/// use tsp_graph::io::read_edges;
/// use tsp_graph::models::Graph;
///
/// let data = "origin,destination,weight\n0,1,10\n1,2,4.5\n";
/// let mut g = Graph::new();
/// assert_eq!(read_edges(data.as_bytes(), &mut g).unwrap(), 2);
/// assert_eq!(g.vertex_count(), 3);
/// assert_eq!(g.find_edge(2, 1).unwrap().weight(), 4.5);
/// ```
pub fn read_edges<R: Read>(reader: R, graph: &mut Graph) -> Result<usize> {
    let rows: Vec<(u64, EdgeRecord)> =
        parse_rows(builder().from_reader(reader), "edge", EDGE_FIELDS)?;

    for (line, edge) in &rows {
        if !edge.weight.is_finite() || edge.weight < 0.0 {
            return Err(Error::invalid_input(format!(
                "edge line {line}: weight must be finite and non-negative, got {}",
                edge.weight
            )));
        }
        graph.find_or_add_vertex(edge.origin, VertexInfo::new(edge.origin));
        graph.find_or_add_vertex(edge.destination, VertexInfo::new(edge.destination));
        graph.add_bidirectional_edge(edge.origin, edge.destination, edge.weight)?;
    }

    Ok(rows.len())
}

/// Reads node rows from `reader` into `graph`, attaching coordinates.
///
/// A node already present keeps its edges and gets the new coordinates.
/// Returns the number of rows applied.
pub fn read_nodes<R: Read>(reader: R, graph: &mut Graph) -> Result<usize> {
    let rows: Vec<(u64, NodeRecord)> =
        parse_rows(builder().from_reader(reader), "node", NODE_FIELDS)?;

    for (line, node) in &rows {
        if !node.latitude.is_finite() || !node.longitude.is_finite() {
            return Err(Error::invalid_input(format!(
                "node line {line}: coordinates must be finite"
            )));
        }
        graph.add_vertex(node.to_info(), node.id);
    }

    Ok(rows.len())
}

/// Loads an edge file into `graph`. See [`read_edges`].
pub fn load_edges<P: AsRef<Path>>(path: P, graph: &mut Graph) -> Result<usize> {
    let path = path.as_ref();
    let count = read_edges(std::fs::File::open(path)?, graph)?;
    info!("loaded {count} edges from {}", path.display());
    Ok(count)
}

/// Loads a node file into `graph`. See [`read_nodes`].
pub fn load_nodes<P: AsRef<Path>>(path: P, graph: &mut Graph) -> Result<usize> {
    let path = path.as_ref();
    let count = read_nodes(std::fs::File::open(path)?, graph)?;
    info!("loaded {count} nodes from {}", path.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_edges_without_header() {
        let mut g = Graph::new();
        let n = read_edges("0,1,10\n1,2,20\n".as_bytes(), &mut g).expect("valid rows");
        assert_eq!(n, 2);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.find_edge(1, 0).map(|e| e.weight()), Some(10.0));
    }

    #[test]
    fn test_read_edges_skips_header() {
        let mut g = Graph::new();
        let n = read_edges("from,to,cost\n0, 1, 3.5\n".as_bytes(), &mut g).expect("valid rows");
        assert_eq!(n, 1);
        assert_eq!(g.find_edge(0, 1).map(|e| e.weight()), Some(3.5));
    }

    #[test]
    fn test_read_edges_bad_row_names_line() {
        let mut g = Graph::new();
        let err = read_edges("0,1,10\n1,x,20\n".as_bytes(), &mut g).expect_err("bad row");
        match err {
            Error::InvalidInput(message) => assert!(message.contains("line 2"), "{message}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_edges_wrong_field_count() {
        let mut g = Graph::new();
        assert!(read_edges("0,1,10\n1,2\n".as_bytes(), &mut g).is_err());
        assert!(read_edges("0,1,10\n1,2,3,4\n".as_bytes(), &mut g).is_err());
    }

    #[test]
    fn test_read_edges_rejects_negative_weight() {
        let mut g = Graph::new();
        assert!(read_edges("0,1,-5\n".as_bytes(), &mut g).is_err());
    }

    #[test]
    fn test_read_nodes_then_edges() {
        let mut g = Graph::new();
        read_nodes("id,lon,lat\n0,-46.63,-23.55\n1,-43.17,-22.91\n".as_bytes(), &mut g)
            .expect("valid nodes");
        read_edges("0,1,360000\n".as_bytes(), &mut g).expect("valid edges");

        assert_eq!(g.vertex_count(), 2);
        let c = g
            .find_vertex(0)
            .expect("loaded")
            .info()
            .coordinates()
            .expect("coordinates kept after edge load");
        assert_eq!(c.latitude(), -23.55);
        assert!(g.has_all_coordinates());
    }

    #[test]
    fn test_load_from_files() {
        let mut nodes = NamedTempFile::new().expect("temp file");
        writeln!(nodes, "0,0.0,0.0").expect("write row");
        writeln!(nodes, "1,0.0,1.0").expect("write row");
        let mut edges = NamedTempFile::new().expect("temp file");
        writeln!(edges, "origin,destination,weight").expect("write header");
        writeln!(edges, "0,1,111195").expect("write row");

        let mut g = Graph::new();
        assert_eq!(load_nodes(nodes.path(), &mut g).expect("load nodes"), 2);
        assert_eq!(load_edges(edges.path(), &mut g).expect("load edges"), 1);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let mut g = Graph::new();
        let err = load_edges("/nonexistent/edges.csv", &mut g).expect_err("no such file");
        assert!(matches!(err, Error::Io(_)));
    }
}
