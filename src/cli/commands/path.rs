//! Path command - Solve a text maze with one or every search algorithm

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::AppConfig,
        output::{format_number, print_kv, print_section},
    },
    pathfinding::{Algorithm, Grid, Solution},
};

#[derive(Parser, Debug)]
#[command(about = "Find a path through a maze")]
pub struct PathArgs {
    /// Maze file: `#` wall, `.` open, `1`-`9` weighted, `A` start, `B` goal
    pub maze: PathBuf,

    /// Search algorithm (defaults to the configured one)
    #[arg(long, short = 'a', value_enum)]
    pub algorithm: Option<Algorithm>,

    /// Run every algorithm and print a comparison table
    #[arg(long, conflicts_with = "algorithm")]
    pub all: bool,

    /// Mark every reached cell with `o` in the rendering
    #[arg(long)]
    pub show_reached: bool,

    /// Export the comparison rows as CSV
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// One row of the algorithm comparison
#[derive(Debug, Serialize)]
pub struct ComparisonRow {
    pub algorithm: String,
    pub solved: bool,
    pub cost: Option<u64>,
    pub steps: Option<usize>,
    pub expanded: usize,
    pub reached: usize,
}

impl ComparisonRow {
    fn new(name: &str, solution: &Solution) -> Self {
        Self {
            algorithm: name.to_string(),
            solved: solution.is_solved(),
            cost: solution.cost(),
            steps: solution.path.as_ref().map(|p| p.actions.len()),
            expanded: solution.expanded,
            reached: solution.reached.len(),
        }
    }
}

pub fn execute(args: PathArgs, config: &AppConfig) -> Result<()> {
    let text = std::fs::read_to_string(&args.maze)
        .with_context(|| format!("failed to read maze {}", args.maze.display()))?;
    let grid = Grid::parse(&text)?;
    let show_reached = args.show_reached || config.path.show_reached;

    println!(
        "Maze {}: {}x{} from {} to {}",
        args.maze.display(),
        grid.height(),
        grid.width(),
        grid.start(),
        grid.end()
    );

    let algorithms: Vec<Algorithm> = if args.all {
        Algorithm::ALL.to_vec()
    } else {
        vec![args.algorithm.unwrap_or(config.path.algorithm)]
    };

    let mut rows = Vec::with_capacity(algorithms.len());
    for algorithm in algorithms {
        let solver = algorithm.solver();
        let solution = solver.search(&grid)?;

        print_section(solver.name());
        print_solution(&grid, &solution, show_reached);
        rows.push(ComparisonRow::new(solver.name(), &solution));
    }

    if rows.len() > 1 {
        print_comparison(&rows);
    }

    if let Some(path) = &args.export {
        export_csv(&rows, path)
            .with_context(|| format!("failed to export {}", path.display()))?;
        println!("\nResults exported to: {}", path.display());
    }

    Ok(())
}

fn print_solution(grid: &Grid, solution: &Solution, show_reached: bool) {
    let rendering = if show_reached {
        grid.render(Some(solution))
    } else {
        grid.render(Some(&Solution {
            reached: HashSet::new(),
            ..solution.clone()
        }))
    };
    println!("{rendering}");

    match &solution.path {
        Some(path) => {
            print_kv("Cost", &path.cost.to_string());
            print_kv("Steps", &path.actions.len().to_string());
            let moves: Vec<String> = path.actions.iter().map(ToString::to_string).collect();
            print_kv("Actions", &moves.join(" "));
        }
        None => print_kv("Result", "no solution"),
    }
    print_kv("Expanded", &format_number(solution.expanded));
    print_kv("Reached", &format_number(solution.reached.len()));
}

fn print_comparison(rows: &[ComparisonRow]) {
    print_section("Comparison");
    println!(
        "  {:<28} {:>8} {:>8} {:>10} {:>10}",
        "Algorithm", "Cost", "Steps", "Expanded", "Reached"
    );
    for row in rows {
        let cost = row.cost.map_or_else(|| "-".to_string(), |c| c.to_string());
        let steps = row.steps.map_or_else(|| "-".to_string(), |s| s.to_string());
        println!(
            "  {:<28} {:>8} {:>8} {:>10} {:>10}",
            row.algorithm, cost, steps, row.expanded, row.reached
        );
    }
}

fn export_csv(rows: &[ComparisonRow], path: &Path) -> crate::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
