//! Tour result type.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A closed tour and its total cost.
///
/// A successful result on an `n`-vertex graph has `n + 1` ids with the start
/// repeated at the end. The "no solution" sentinel has infinite cost and an
/// empty path.
///
/// Results are compared by `cost` only, with [`f64::total_cmp`], so two tours
/// with the same cost are equal even if their paths differ.
///
/// # Examples
///
/// ```
/// use tsp_graph::models::TspResult;
///
/// let tour = TspResult::new(80.0, vec![0, 1, 3, 2, 0]);
/// assert!(tour.is_solution());
/// assert!(tour.is_better_than(&TspResult::no_solution()));
/// assert!(!TspResult::no_solution().is_solution());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TspResult {
    pub cost: f64,
    pub path: Vec<u64>,
}

impl TspResult {
    pub fn new(cost: f64, path: Vec<u64>) -> Self {
        Self { cost, path }
    }

    /// The sentinel returned when no closed tour exists.
    pub fn no_solution() -> Self {
        Self {
            cost: f64::INFINITY,
            path: Vec::new(),
        }
    }

    /// Tour of a single-vertex graph.
    pub(crate) fn trivial(start: u64) -> Self {
        Self {
            cost: 0.0,
            path: vec![start, start],
        }
    }

    /// `false` for the no-solution sentinel.
    pub fn is_solution(&self) -> bool {
        self.cost.is_finite() && !self.path.is_empty()
    }

    /// Strictly cheaper than `other`.
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.cost < other.cost
    }

    /// Converts the sentinel into `None`.
    pub fn into_option(self) -> Option<Self> {
        self.is_solution().then_some(self)
    }

    /// Number of distinct vertices on the tour.
    pub fn num_vertices(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl Default for TspResult {
    fn default() -> Self {
        Self::no_solution()
    }
}

impl PartialEq for TspResult {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TspResult {}

impl PartialOrd for TspResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TspResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.total_cmp(&other.cost)
    }
}
