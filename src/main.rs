//! tsp-graph CLI: solve a TSP instance loaded from CSV.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use log::{info, warn};
use serde::Serialize;

use tsp_graph::aco::AcoConfig;
use tsp_graph::evaluation::TourEvaluator;
use tsp_graph::logging::{init_logger, LogFormat, LogLevel};
use tsp_graph::{Dataset, TspResult, DEFAULT_START};

#[derive(Parser)]
#[command(name = "tsp-graph")]
#[command(about = "Travelling salesman solvers over a weighted graph loaded from CSV")]
#[command(version)]
struct Cli {
    /// Edge file: origin,destination,weight
    edges: PathBuf,

    /// Node file: id,longitude,latitude
    #[arg(short, long)]
    nodes: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exact branch-and-bound
    Backtracking,

    /// Minimum spanning tree 2-approximation (uses coordinates for missing edges)
    Triangular,

    /// Greedy nearest neighbor
    Heuristic,

    /// Ant colony optimization
    AntColony {
        /// Start vertex
        #[arg(short, long, default_value_t = DEFAULT_START)]
        start: u64,

        /// Number of iterations
        #[arg(short, long, default_value = "100")]
        iterations: usize,

        /// Ants per iteration
        #[arg(long, default_value = "1")]
        ants: usize,

        /// Fraction of pheromone evaporated per iteration
        #[arg(long, default_value = "0")]
        evaporation: f64,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Self::Backtracking => "backtracking",
            Self::Triangular => "triangular",
            Self::Heuristic => "heuristic",
            Self::AntColony { .. } => "ant-colony",
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    algorithm: &'a str,
    vertices: usize,
    tour: Option<TspResult>,
    elapsed_ms: f64,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logger(cli.log_level, cli.log_format) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut dataset = Dataset::from_csv(&cli.edges, cli.nodes.as_ref())?;
    let algorithm = cli.command.name();
    info!(
        "{} vertices, {} edges",
        dataset.graph().vertex_count(),
        dataset.graph().edge_count()
    );

    let started = Instant::now();
    let tour = match cli.command {
        Commands::Backtracking => dataset.backtracking()?.into_option(),
        Commands::Triangular => dataset.triangular()?.into_option(),
        Commands::Heuristic => dataset.heuristic()?.into_option(),
        Commands::AntColony {
            start,
            iterations,
            ants,
            evaporation,
            seed,
        } => {
            let mut config = AcoConfig::default()
                .with_iterations(iterations)
                .with_ants(ants)
                .with_evaporation(evaporation);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            dataset.ant_colony_with(config, start)?.best
        }
    };
    let elapsed = started.elapsed();

    if let Some(tour) = &tour {
        let violations = TourEvaluator::new(dataset.graph()).validate(tour);
        for v in &violations {
            warn!("{algorithm} tour: {v:?}");
        }
    }

    let report = Report {
        algorithm,
        vertices: dataset.graph().vertex_count(),
        tour,
        elapsed_ms: elapsed.as_secs_f64() * 1000.0,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }
    Ok(())
}

fn print_text(report: &Report<'_>) {
    println!("Algorithm:  {}", report.algorithm);
    println!("Vertices:   {}", report.vertices);
    match &report.tour {
        Some(tour) => {
            let path: Vec<String> = tour.path.iter().map(u64::to_string).collect();
            println!("Cost:       {:.4}", tour.cost);
            println!("Path:       {}", path.join(" -> "));
        }
        None => println!("No tour visits every vertex"),
    }
    println!("Elapsed:    {:.3} ms", report.elapsed_ms);
}
