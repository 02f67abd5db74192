//! Ant colony configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Pheromone level every ordered vertex pair starts with.
pub const DEFAULT_PHEROMONE: f64 = 0.1;

/// Default pheromone exponent.
pub const ALPHA: f64 = 1.0;

/// Default heuristic (inverse weight) exponent.
pub const BETA: f64 = 2.0;

/// Configuration for the ant colony solver.
///
/// # Examples
///
/// ```
/// use tsp_graph::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_iterations(500)
///     .with_beta(3.0)
///     .with_evaporation(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcoConfig {
    /// Weight of the pheromone term in the transition rule.
    pub alpha: f64,

    /// Weight of the inverse edge weight in the transition rule.
    pub beta: f64,

    /// Pheromone level of every pair before the first iteration.
    pub initial_pheromone: f64,

    /// Reinforcement numerator: the best tour's edges gain `deposit / cost`.
    pub deposit: f64,

    /// Fraction of pheromone lost per iteration, in [0, 1).
    ///
    /// 0 means decay is implicit: unused edges simply fall behind.
    pub evaporation: f64,

    /// Walks per iteration.
    pub ants: usize,

    /// Number of iterations.
    pub iterations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            alpha: ALPHA,
            beta: BETA,
            initial_pheromone: DEFAULT_PHEROMONE,
            deposit: 1.0,
            evaporation: 0.0,
            ants: 1,
            iterations: 100,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_initial_pheromone(mut self, level: f64) -> Self {
        self.initial_pheromone = level;
        self
    }

    pub fn with_deposit(mut self, deposit: f64) -> Self {
        self.deposit = deposit;
        self
    }

    pub fn with_evaporation(mut self, rho: f64) -> Self {
        self.evaporation = rho;
        self
    }

    pub fn with_ants(mut self, ants: usize) -> Self {
        self.ants = ants;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.alpha < 0.0 || !self.alpha.is_finite() {
            return Err(Error::invalid_config(format!(
                "alpha must be finite and non-negative, got {}",
                self.alpha
            )));
        }
        if self.beta < 0.0 || !self.beta.is_finite() {
            return Err(Error::invalid_config(format!(
                "beta must be finite and non-negative, got {}",
                self.beta
            )));
        }
        if self.initial_pheromone <= 0.0 || !self.initial_pheromone.is_finite() {
            return Err(Error::invalid_config("initial_pheromone must be positive"));
        }
        if self.deposit < 0.0 || !self.deposit.is_finite() {
            return Err(Error::invalid_config("deposit must be non-negative"));
        }
        if !(0.0..1.0).contains(&self.evaporation) {
            return Err(Error::invalid_config(format!(
                "evaporation must be in [0, 1), got {}",
                self.evaporation
            )));
        }
        if self.ants == 0 {
            return Err(Error::invalid_config("ants must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcoConfig::default();
        assert_eq!(config.alpha, ALPHA);
        assert_eq!(config.beta, BETA);
        assert_eq!(config.initial_pheromone, DEFAULT_PHEROMONE);
        assert_eq!(config.ants, 1);
        assert_eq!(config.evaporation, 0.0);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AcoConfig::default().validate().is_ok());
        assert!(AcoConfig::default().with_iterations(0).validate().is_ok());
    }

    #[test]
    fn test_validate_bad_exponents() {
        assert!(AcoConfig::default().with_alpha(-1.0).validate().is_err());
        assert!(AcoConfig::default().with_beta(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_validate_bad_pheromone() {
        assert!(AcoConfig::default()
            .with_initial_pheromone(0.0)
            .validate()
            .is_err());
        assert!(AcoConfig::default().with_deposit(-0.5).validate().is_err());
    }

    #[test]
    fn test_validate_bad_evaporation() {
        assert!(AcoConfig::default().with_evaporation(1.0).validate().is_err());
        assert!(AcoConfig::default().with_evaporation(-0.1).validate().is_err());
    }

    #[test]
    fn test_validate_no_ants() {
        assert!(AcoConfig::default().with_ants(0).validate().is_err());
    }

    #[test]
    fn test_config_serde() {
        let config = AcoConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).expect("serializable");
        let back: AcoConfig = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, config);
    }
}
