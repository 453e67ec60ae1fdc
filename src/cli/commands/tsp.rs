//! TSP command - Local search over 2-opt moves

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    cli::{
        config::{AppConfig, TspConfig},
        output::{create_progress, format_tour, print_kv, print_section},
    },
    tsp::{
        HillClimbing, HillClimbingReset, LocalSearchKind, LocalSearchResult, OptProblem,
        TabuSearch, Tour, Tsp,
    },
};

#[derive(Parser, Debug)]
#[command(about = "Solve a Traveling Salesman instance with local search")]
pub struct TspArgs {
    /// TSPLIB instance file
    #[arg(required_unless_present = "random", conflicts_with = "random")]
    pub instance: Option<PathBuf>,

    /// Generate a random Euclidean instance with this many cities
    #[arg(long)]
    pub random: Option<usize>,

    /// Local search algorithm (defaults to the configured one)
    #[arg(long, short = 'a', value_enum)]
    pub algorithm: Option<LocalSearchKind>,

    /// Run every algorithm on the same instance
    #[arg(long, conflicts_with = "algorithm")]
    pub all: bool,

    /// Random restarts for hill climbing with restarts
    #[arg(long)]
    pub restarts: Option<usize>,

    /// Tabu tenure
    #[arg(long)]
    pub tenure: Option<usize>,

    /// Tabu iteration limit
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the runs as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: TspArgs, config: &AppConfig) -> Result<()> {
    let seed = args.seed.or(config.common.seed);
    let tsp = load_instance(&args, seed)?;

    let mut settings = config.tsp.clone();
    if let Some(restarts) = args.restarts {
        settings.restarts = restarts;
    }
    if let Some(tenure) = args.tenure {
        settings.tenure = tenure;
    }
    if let Some(max_iterations) = args.max_iterations {
        settings.max_iterations = max_iterations;
    }

    print_section(&format!("TSP instance '{}'", tsp.name));
    print_kv("Cities", &tsp.cities().to_string());
    print_kv("Initial length", &format!("{:.2}", -tsp.obj_val(&tsp.initial())));

    let algorithms: Vec<LocalSearchKind> = if args.all {
        LocalSearchKind::ALL.to_vec()
    } else {
        vec![args.algorithm.unwrap_or(settings.algorithm)]
    };

    let mut runs = Vec::with_capacity(algorithms.len());
    for algorithm in algorithms {
        let run = solve(&tsp, algorithm, &settings, seed, config.common.progress)?;
        if !tsp.is_valid_tour(&run.state) {
            return Err(anyhow!("{} returned an invalid tour", run.algorithm));
        }
        print_run(&run);
        runs.push(run);
    }

    if let Some(path) = &args.export {
        let file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &runs)?;
        println!("\nResults exported to: {}", path.display());
    }

    Ok(())
}

fn load_instance(args: &TspArgs, seed: Option<u64>) -> Result<Tsp> {
    match (&args.instance, args.random) {
        (Some(path), _) => Tsp::load(path)
            .with_context(|| format!("failed to load TSPLIB instance {}", path.display())),
        (None, Some(n)) => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::seed_from_u64(rand::random()),
            };
            Ok(Tsp::random_euclidean(n, &mut rng)?)
        }
        (None, None) => Err(anyhow!("either an instance file or --random is required")),
    }
}

/// Run one algorithm with the given settings
pub fn solve(
    tsp: &Tsp,
    algorithm: LocalSearchKind,
    settings: &TspConfig,
    seed: Option<u64>,
    progress: bool,
) -> Result<LocalSearchResult<Tour>> {
    let run = match algorithm {
        LocalSearchKind::HillClimbing => HillClimbing.solve(tsp),
        LocalSearchKind::HillClimbingReset => {
            let mut search = match seed {
                Some(seed) => HillClimbingReset::with_seed(settings.restarts, seed),
                None => HillClimbingReset::new(settings.restarts),
            };
            let pb = create_progress(settings.restarts as u64 + 1, "climbs", progress)?;
            let run = search.solve_with_progress(tsp, |done| pb.set_position(done as u64));
            pb.finish_and_clear();
            run
        }
        LocalSearchKind::Tabu => {
            TabuSearch::new(settings.tenure, settings.max_iterations, settings.patience).solve(tsp)
        }
    };
    Ok(run)
}

fn print_run(run: &LocalSearchResult<Tour>) {
    print_section(&run.algorithm);
    print_kv("Tour", &format_tour(&run.state));
    print_kv("Length", &format!("{:.2}", -run.value));
    print_kv("Iterations", &run.iterations.to_string());
    print_kv("Time", &format!("{:.2} ms", run.elapsed_ms));
    if let Some(summary) = &run.summary {
        print_kv("Climbs", &summary.runs.to_string());
        print_kv("Mean length", &format!("{:.2}", -summary.mean));
        print_kv("Std deviation", &format!("{:.2}", summary.std_dev));
        print_kv("Best length", &format!("{:.2}", -summary.max));
        print_kv("Worst length", &format!("{:.2}", -summary.min));
    }
}
