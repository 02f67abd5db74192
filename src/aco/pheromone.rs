//! Dense pheromone matrix.

use std::collections::HashMap;

/// A dense n×n pheromone matrix over vertex ids, stored in row-major order.
///
/// Ids are mapped to rows once at construction. Lookups for ids outside the
/// matrix read as zero and writes to them are ignored.
///
/// # Examples
///
/// ```
/// use tsp_graph::aco::PheromoneMatrix;
///
/// let mut m = PheromoneMatrix::new(&[0, 5, 9], 0.1);
/// m.reinforce(&[0, 5, 9, 0], 1.0);
/// assert!((m.get(0, 5) - 1.1).abs() < 1e-12);
/// assert!((m.get(5, 0) - 0.1).abs() < 1e-12);
/// assert_eq!(m.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
    index: HashMap<u64, usize>,
}

impl PheromoneMatrix {
    /// Creates a matrix over `ids` with every entry set to `initial`.
    pub fn new(ids: &[u64], initial: f64) -> Self {
        let size = ids.len();
        Self {
            data: vec![initial; size * size],
            size,
            index: ids.iter().enumerate().map(|(i, &id)| (id, i)).collect(),
        }
    }

    fn offset(&self, from: u64, to: u64) -> Option<usize> {
        let i = self.index.get(&from)?;
        let j = self.index.get(&to)?;
        Some(i * self.size + j)
    }

    /// Pheromone on `from -> to`.
    pub fn get(&self, from: u64, to: u64) -> f64 {
        self.offset(from, to).map_or(0.0, |k| self.data[k])
    }

    /// Sets the pheromone on `from -> to`.
    pub fn set(&mut self, from: u64, to: u64, level: f64) {
        if let Some(k) = self.offset(from, to) {
            self.data[k] = level;
        }
    }

    /// Adds `amount` to every consecutive pair of `path`.
    pub fn reinforce(&mut self, path: &[u64], amount: f64) {
        for leg in path.windows(2) {
            if let Some(k) = self.offset(leg[0], leg[1]) {
                self.data[k] += amount;
            }
        }
    }

    /// Scales every entry by `1 - rho`.
    pub fn evaporate(&mut self, rho: f64) {
        let keep = 1.0 - rho;
        for level in &mut self.data {
            *level *= keep;
        }
    }

    /// Number of vertices covered.
    pub fn size(&self) -> usize {
        self.size
    }
}
