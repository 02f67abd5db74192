//! Tour evaluator that computes cost and checks tour shape.

use std::collections::HashSet;

use crate::distance::edge_weight;
use crate::error::Result;
use crate::models::{Graph, TspResult};

/// A problem found while checking a tour against a graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// The path is empty.
    Empty,
    /// The path does not end where it starts.
    NotClosed {
        /// First id on the path.
        first: u64,
        /// Last id on the path.
        last: u64,
    },
    /// The path does not have `vertex_count + 1` entries.
    WrongLength {
        /// Expected number of ids.
        expected: usize,
        /// Actual number of ids.
        actual: usize,
    },
    /// A vertex appears more than once (ignoring the closing repeat).
    DuplicateVertex(u64),
    /// A graph vertex is never visited.
    MissingVertex(u64),
    /// The path names an id the graph does not have.
    UnknownVertex(u64),
    /// A leg has neither an edge nor coordinates to derive one from.
    UntraversableLeg {
        /// Leg origin.
        from: u64,
        /// Leg destination.
        to: u64,
    },
    /// The reported cost differs from the recomputed one.
    CostMismatch {
        /// Cost carried by the result.
        reported: f64,
        /// Cost recomputed from the graph.
        computed: f64,
    },
}

/// Evaluates closed tours over a graph.
///
/// Leg costs come from [`edge_weight`]: a stored edge when present, the
/// haversine distance otherwise.
///
/// # Examples
///
/// ```
/// use tsp_graph::evaluation::TourEvaluator;
/// use tsp_graph::models::{Graph, TspResult, VertexInfo};
///
/// let mut g = Graph::new();
/// for id in 0..3 {
///     g.add_vertex(VertexInfo::new(id), id);
/// }
/// g.add_bidirectional_edge(0, 1, 1.0).unwrap();
/// g.add_bidirectional_edge(1, 2, 2.0).unwrap();
/// g.add_bidirectional_edge(2, 0, 3.0).unwrap();
///
/// let eval = TourEvaluator::new(&g);
/// assert_eq!(eval.tour_cost(&[0, 1, 2, 0]).unwrap(), 6.0);
/// assert!(eval.validate(&TspResult::new(6.0, vec![0, 1, 2, 0])).is_empty());
/// ```
pub struct TourEvaluator<'a> {
    graph: &'a Graph,
}

/// Relative tolerance used when comparing a reported cost to the recomputed one.
const COST_TOLERANCE: f64 = 1e-9;

impl<'a> TourEvaluator<'a> {
    /// Creates an evaluator over `graph`.
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Sum of the leg costs along `path`.
    ///
    /// # Errors
    ///
    /// Propagates [`edge_weight`] failures for the first leg that has neither
    /// an edge nor coordinates.
    pub fn tour_cost(&self, path: &[u64]) -> Result<f64> {
        path.windows(2)
            .map(|leg| edge_weight(self.graph, leg[0], leg[1]))
            .sum()
    }

    /// Checks that `result` is a closed tour visiting every vertex exactly
    /// once, that every leg is traversable, and that its cost is consistent.
    ///
    /// Returns an empty list for a valid tour.
    pub fn validate(&self, result: &TspResult) -> Vec<Violation> {
        let path = &result.path;
        let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
            return vec![Violation::Empty];
        };

        let mut violations = Vec::new();
        if first != last {
            violations.push(Violation::NotClosed { first, last });
        }

        let expected = self.graph.vertex_count() + 1;
        if path.len() != expected {
            violations.push(Violation::WrongLength {
                expected,
                actual: path.len(),
            });
        }

        let mut seen = HashSet::with_capacity(path.len());
        for &id in &path[..path.len() - 1] {
            if !self.graph.has_vertex(id) {
                violations.push(Violation::UnknownVertex(id));
            } else if !seen.insert(id) {
                violations.push(Violation::DuplicateVertex(id));
            }
        }
        for id in self.graph.vertex_ids() {
            if !seen.contains(&id) {
                violations.push(Violation::MissingVertex(id));
            }
        }

        let mut computed = 0.0;
        let mut traversable = true;
        for leg in path.windows(2) {
            match edge_weight(self.graph, leg[0], leg[1]) {
                Ok(w) => computed += w,
                Err(_) => {
                    traversable = false;
                    violations.push(Violation::UntraversableLeg {
                        from: leg[0],
                        to: leg[1],
                    });
                }
            }
        }

        let tolerance = COST_TOLERANCE * computed.abs().max(1.0);
        if traversable && (computed - result.cost).abs() > tolerance {
            violations.push(Violation::CostMismatch {
                reported: result.cost,
                computed,
            });
        }

        violations
    }

    /// `true` if [`validate`](Self::validate) finds nothing.
    pub fn is_valid(&self, result: &TspResult) -> bool {
        self.validate(result).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{Coordinates, VertexInfo};

    fn triangle() -> Graph {
        let mut g = Graph::new();
        for id in 0..3 {
            g.add_vertex(VertexInfo::new(id), id);
        }
        g.add_bidirectional_edge(0, 1, 1.0).expect("exists");
        g.add_bidirectional_edge(1, 2, 2.0).expect("exists");
        g.add_bidirectional_edge(2, 0, 3.0).expect("exists");
        g
    }

    #[test]
    fn test_tour_cost() {
        let g = triangle();
        let eval = TourEvaluator::new(&g);
        assert_eq!(eval.tour_cost(&[0, 2, 1, 0]).expect("edges exist"), 6.0);
        assert_eq!(eval.tour_cost(&[]).expect("empty"), 0.0);
    }

    #[test]
    fn test_tour_cost_uses_geometry() {
        let mut g = Graph::new();
        g.add_vertex(VertexInfo::with_coordinates(0, Coordinates::new(0.0, 0.0)), 0);
        g.add_vertex(VertexInfo::with_coordinates(1, Coordinates::new(0.0, 1.0)), 1);
        let eval = TourEvaluator::new(&g);
        let cost = eval.tour_cost(&[0, 1, 0]).expect("coordinates exist");
        assert!((cost - 2.0 * 111_195.0).abs() < 2.0);
    }

    #[test]
    fn test_tour_cost_missing_leg() {
        let mut g = triangle();
        g.add_vertex(VertexInfo::new(3), 3);
        let eval = TourEvaluator::new(&g);
        assert!(matches!(
            eval.tour_cost(&[0, 3]),
            Err(Error::MissingCoordinates(0))
        ));
    }

    #[test]
    fn test_valid_tour() {
        let g = triangle();
        let eval = TourEvaluator::new(&g);
        assert!(eval.is_valid(&TspResult::new(6.0, vec![0, 1, 2, 0])));
    }

    #[test]
    fn test_empty_tour() {
        let g = triangle();
        let eval = TourEvaluator::new(&g);
        assert_eq!(
            eval.validate(&TspResult::no_solution()),
            vec![Violation::Empty]
        );
    }

    #[test]
    fn test_open_tour() {
        let g = triangle();
        let eval = TourEvaluator::new(&g);
        let v = eval.validate(&TspResult::new(3.0, vec![0, 1, 2, 1]));
        assert!(v.contains(&Violation::NotClosed { first: 0, last: 1 }));
    }

    #[test]
    fn test_duplicate_and_missing() {
        let g = triangle();
        let eval = TourEvaluator::new(&g);
        let v = eval.validate(&TspResult::new(2.0, vec![0, 1, 0, 0]));
        assert!(v.contains(&Violation::DuplicateVertex(0)));
        assert!(v.contains(&Violation::MissingVertex(2)));
    }

    #[test]
    fn test_wrong_length_and_unknown() {
        let g = triangle();
        let eval = TourEvaluator::new(&g);
        let v = eval.validate(&TspResult::new(0.0, vec![0, 1, 2, 7, 0]));
        assert!(v.contains(&Violation::WrongLength {
            expected: 4,
            actual: 5
        }));
        assert!(v.contains(&Violation::UnknownVertex(7)));
    }

    #[test]
    fn test_cost_mismatch() {
        let g = triangle();
        let eval = TourEvaluator::new(&g);
        let v = eval.validate(&TspResult::new(5.0, vec![0, 1, 2, 0]));
        assert_eq!(
            v,
            vec![Violation::CostMismatch {
                reported: 5.0,
                computed: 6.0
            }]
        );
    }
}
