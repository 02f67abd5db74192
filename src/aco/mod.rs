//! Ant Colony Optimization (ACO).
//!
//! A population metaheuristic: artificial ants build tours edge by edge,
//! choosing the next vertex with probability proportional to
//! `pheromone^alpha * (1 / weight)^beta`. After every iteration the edges of
//! the best tour found so far are reinforced by `deposit / cost`, so shorter
//! tours attract later ants more strongly.
//!
//! The pheromone matrix and the random source belong to a single run and are
//! passed explicitly to each walk.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant system: optimization by a colony
//!   of cooperating agents"
//! - Dorigo & Gambardella (1997), "Ant colony system: a cooperative learning
//!   approach to the traveling salesman problem"

mod colony;
mod config;
mod pheromone;

pub use colony::{ant_colony, walk, AcoReport, AntColony};
pub use config::{AcoConfig, ALPHA, BETA, DEFAULT_PHEROMONE};
pub use pheromone::PheromoneMatrix;
