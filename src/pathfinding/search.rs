//! Search strategies over a [`Grid`]

use clap::ValueEnum;
use log::info;
use serde::{Deserialize, Serialize};

use super::{grid::Grid, solution::Solution};
use crate::Result;

pub mod astar;
mod best_first;
pub mod breadth_first;
pub mod depth_first;
pub mod go_right;
pub mod greedy;
pub mod uniform_cost;

pub use astar::AStarSearch;
pub use breadth_first::BreadthFirstSearch;
pub use depth_first::DepthFirstSearch;
pub use go_right::GoRight;
pub use greedy::GreedyBestFirstSearch;
pub use uniform_cost::UniformCostSearch;

/// A strategy for finding a path from `grid.start()` to `grid.end()`
pub trait SearchAlgorithm {
    fn name(&self) -> &'static str;

    /// Run the search. An unreachable goal is not an error: it yields a
    /// [`Solution`] without a path.
    fn search(&self, grid: &Grid) -> Result<Solution>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    GoRight,
    Bfs,
    Dfs,
    Ucs,
    Greedy,
    #[default]
    Astar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::GoRight,
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::Greedy,
        Algorithm::Astar,
    ];

    pub fn solver(self) -> Box<dyn SearchAlgorithm> {
        match self {
            Algorithm::GoRight => Box::new(GoRight),
            Algorithm::Bfs => Box::new(BreadthFirstSearch),
            Algorithm::Dfs => Box::new(DepthFirstSearch),
            Algorithm::Ucs => Box::new(UniformCostSearch),
            Algorithm::Greedy => Box::new(GreedyBestFirstSearch),
            Algorithm::Astar => Box::new(AStarSearch),
        }
    }

    pub fn search(self, grid: &Grid) -> Result<Solution> {
        let solver = self.solver();
        let solution = solver.search(grid)?;
        match solution.cost() {
            Some(cost) => info!(
                "{}: path of cost {cost}, {} expanded, {} reached",
                solver.name(),
                solution.expanded,
                solution.reached.len()
            ),
            None => info!(
                "{}: no path, {} expanded, {} reached",
                solver.name(),
                solution.expanded,
                solution.reached.len()
            ),
        }
        Ok(solution)
    }
}
