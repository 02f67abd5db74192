//! Ant colony execution loop.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use crate::error::Result;
use crate::models::{Graph, Scratch, TspResult};

/// Floor applied to edge weights before inverting them.
const MIN_WEIGHT: f64 = 1e-9;

/// Result of an ant colony run.
#[derive(Debug, Clone)]
pub struct AcoReport {
    /// Cheapest closed tour observed, `None` if no walk ever closed one.
    pub best: Option<TspResult>,

    /// Best cost after each iteration (`+inf` until a tour is found).
    pub history: Vec<f64>,

    /// Walks attempted.
    pub walks: usize,

    /// Walks that closed a tour.
    pub completed_walks: usize,
}

/// Runs the ant colony metaheuristic over a graph.
///
/// Walks follow stored edges only: a graph that is too sparse to close a
/// tour yields no result instead of an invented one.
///
/// # Examples
///
/// ```
/// use tsp_graph::aco::{AcoConfig, AntColony};
/// use tsp_graph::models::{Graph, VertexInfo};
///
/// let mut g = Graph::new();
/// for id in 0..4 {
///     g.add_vertex(VertexInfo::new(id), id);
/// }
/// for (a, b, w) in [(0, 1, 10.0), (0, 2, 15.0), (0, 3, 20.0),
///                   (1, 2, 35.0), (1, 3, 25.0), (2, 3, 30.0)] {
///     g.add_bidirectional_edge(a, b, w).unwrap();
/// }
///
/// let colony = AntColony::new(AcoConfig::default().with_iterations(50).with_seed(42)).unwrap();
/// let report = colony.run(&g, 0).unwrap();
/// let best = report.best.unwrap();
/// assert_eq!(best.path.len(), 5);
/// assert_eq!(report.history.len(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct AntColony {
    config: AcoConfig,
}

impl AntColony {
    /// Creates a colony after validating `config`.
    pub fn new(config: AcoConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Runs every iteration from `start` and reports the best tour.
    ///
    /// # Errors
    ///
    /// [`Error::VertexNotFound`](crate::Error::VertexNotFound) if `start` is
    /// missing.
    pub fn run(&self, graph: &Graph, start: u64) -> Result<AcoReport> {
        graph.find_vertex(start)?;
        let config = &self.config;

        if graph.vertex_count() == 1 {
            return Ok(AcoReport {
                best: Some(TspResult::trivial(start)),
                history: vec![0.0; config.iterations],
                walks: 0,
                completed_walks: 0,
            });
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut pheromone = PheromoneMatrix::new(&graph.vertex_ids(), config.initial_pheromone);

        let mut best: Option<TspResult> = None;
        let mut history = Vec::with_capacity(config.iterations);
        let mut walks = 0usize;
        let mut completed_walks = 0usize;

        for _ in 0..config.iterations {
            for _ in 0..config.ants {
                walks += 1;
                let Some(tour) = walk(graph, start, &pheromone, config, &mut rng)? else {
                    continue;
                };
                completed_walks += 1;
                if best.as_ref().is_none_or(|b| tour.is_better_than(b)) {
                    best = Some(tour);
                }
            }

            if config.evaporation > 0.0 {
                pheromone.evaporate(config.evaporation);
            }
            if let Some(b) = &best {
                if b.cost > 0.0 {
                    pheromone.reinforce(&b.path, config.deposit / b.cost);
                }
            }
            history.push(best.as_ref().map_or(f64::INFINITY, |b| b.cost));
        }

        match &best {
            Some(b) => info!(
                "ant colony from {start}: best cost {:.3}, {completed_walks}/{walks} walks closed",
                b.cost
            ),
            None => info!("ant colony from {start}: no walk closed a tour in {walks} walks"),
        }

        Ok(AcoReport {
            best,
            history,
            walks,
            completed_walks,
        })
    }
}

/// Runs an ant colony with default parameters and `iterations` iterations.
///
/// Returns `None` when no walk closes a tour.
pub fn ant_colony(graph: &Graph, start: u64, iterations: u32) -> Result<Option<TspResult>> {
    let config = AcoConfig::default().with_iterations(iterations as usize);
    Ok(AntColony::new(config)?.run(graph, start)?.best)
}

/// One ant walk from `start`.
///
/// Returns `None` when the ant reaches a vertex with no legal move.
pub fn walk<R: Rng>(
    graph: &Graph,
    start: u64,
    pheromone: &PheromoneMatrix,
    config: &AcoConfig,
    rng: &mut R,
) -> Result<Option<TspResult>> {
    let n = graph.vertex_count();
    let mut scratch = Scratch::for_graph(graph);
    scratch.mark_visited(start);

    let mut path = Vec::with_capacity(n + 1);
    path.push(start);
    let mut cost = 0.0;
    let mut current = start;

    loop {
        let closing = path.len() == n;
        let moves: Vec<Move> = graph
            .find_vertex(current)?
            .sorted_edges()
            .into_iter()
            .filter(|e| {
                if closing {
                    e.destination() == start
                } else {
                    !scratch.is_visited(e.destination())
                }
            })
            .map(|e| Move {
                to: e.destination(),
                weight: e.weight(),
                score: pheromone.get(current, e.destination()).powf(config.alpha)
                    * (1.0 / e.weight().max(MIN_WEIGHT)).powf(config.beta),
            })
            .collect();

        let Some(chosen) = choose(&moves, rng) else {
            debug!("ant stuck at {current} after {} vertices", path.len());
            return Ok(None);
        };

        cost += chosen.weight;
        path.push(chosen.to);
        if closing {
            return Ok(Some(TspResult::new(cost, path)));
        }
        scratch.mark_visited(chosen.to);
        current = chosen.to;
    }
}

#[derive(Debug, Clone, Copy)]
struct Move {
    to: u64,
    weight: f64,
    score: f64,
}

/// Roulette-wheel selection proportional to `score`.
///
/// Falls back to a uniform pick when the scores do not form a usable
/// distribution.
fn choose<'m, R: Rng>(moves: &'m [Move], rng: &mut R) -> Option<&'m Move> {
    if moves.is_empty() {
        return None;
    }
    let total: f64 = moves.iter().map(|m| m.score).sum();
    if !(total.is_finite() && total > 0.0) {
        return moves.get(rng.random_range(0..moves.len()));
    }

    let mut draw = rng.random::<f64>() * total;
    for m in moves {
        if draw < m.score {
            return Some(m);
        }
        draw -= m.score;
    }
    moves.last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VertexInfo;

    fn four_cities() -> Graph {
        let mut g = Graph::new();
        for id in 0..4 {
            g.add_vertex(VertexInfo::new(id), id);
        }
        for (a, b, w) in [
            (0, 1, 10.0),
            (0, 2, 15.0),
            (0, 3, 20.0),
            (1, 2, 35.0),
            (1, 3, 25.0),
            (2, 3, 30.0),
        ] {
            g.add_bidirectional_edge(a, b, w).expect("both ends exist");
        }
        g
    }

    fn seeded(iterations: usize) -> AntColony {
        AntColony::new(
            AcoConfig::default()
                .with_iterations(iterations)
                .with_seed(42),
        )
        .expect("valid config")
    }

    #[test]
    fn test_finds_optimum_on_four_cities() {
        let report = seeded(50).run(&four_cities(), 0).expect("start exists");
        let best = report.best.expect("complete graph");
        assert_eq!(best.cost, 80.0);
        assert_eq!(best.path.first(), Some(&0));
        assert_eq!(best.path.last(), Some(&0));
        assert_eq!(report.completed_walks, 50);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let g = four_cities();
        let a = seeded(20).run(&g, 0).expect("start exists");
        let b = seeded(20).run(&g, 0).expect("start exists");
        assert_eq!(a.history, b.history);
        assert_eq!(a.best.map(|t| t.path), b.best.map(|t| t.path));
    }

    #[test]
    fn test_history_non_increasing() {
        let report = seeded(30).run(&four_cities(), 0).expect("start exists");
        assert_eq!(report.history.len(), 30);
        for w in report.history.windows(2) {
            assert!(w[1] <= w[0]);
        }
    }

    #[test]
    fn test_disconnected_returns_none() {
        let mut g = four_cities();
        g.add_vertex(VertexInfo::new(4), 4);
        let best = ant_colony(&g, 0, 50).expect("start exists");
        assert!(best.is_none());
    }

    #[test]
    fn test_dead_end_walk() {
        // Star around 0: any walk is stuck at the first leaf.
        let mut g = Graph::new();
        for id in 0..3 {
            g.add_vertex(VertexInfo::new(id), id);
        }
        g.add_bidirectional_edge(0, 1, 1.0).expect("exists");
        g.add_bidirectional_edge(0, 2, 1.0).expect("exists");

        let config = AcoConfig::default();
        let pheromone = PheromoneMatrix::new(&g.vertex_ids(), config.initial_pheromone);
        let mut rng = StdRng::seed_from_u64(1);
        let tour = walk(&g, 0, &pheromone, &config, &mut rng).expect("start exists");
        assert!(tour.is_none());
    }

    #[test]
    fn test_walk_closes_tour() {
        let g = four_cities();
        let config = AcoConfig::default();
        let pheromone = PheromoneMatrix::new(&g.vertex_ids(), config.initial_pheromone);
        let mut rng = StdRng::seed_from_u64(3);
        let tour = walk(&g, 0, &pheromone, &config, &mut rng)
            .expect("start exists")
            .expect("complete graph");
        assert_eq!(tour.path.len(), 5);
        let mut inner = tour.path[1..4].to_vec();
        inner.sort_unstable();
        assert_eq!(inner, vec![1, 2, 3]);
    }

    #[test]
    fn test_choose_follows_scores() {
        let moves = [
            Move { to: 1, weight: 1.0, score: 0.0 },
            Move { to: 2, weight: 1.0, score: 1.0 },
        ];
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            assert_eq!(choose(&moves, &mut rng).map(|m| m.to), Some(2));
        }
        assert!(choose(&[], &mut rng).is_none());
    }

    #[test]
    fn test_missing_start() {
        assert!(seeded(1).run(&four_cities(), 99).is_err());
    }
}
