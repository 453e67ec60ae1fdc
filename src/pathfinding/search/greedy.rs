use super::{SearchAlgorithm, best_first::best_first_search};
use crate::{
    Result,
    pathfinding::{grid::Grid, heuristic::manhattan, solution::Solution},
};

/// Greedy best-first search ordered by the Manhattan distance to the goal.
pub struct GreedyBestFirstSearch;

impl SearchAlgorithm for GreedyBestFirstSearch {
    fn name(&self) -> &'static str {
        "Greedy Best First Search"
    }

    fn search(&self, grid: &Grid) -> Result<Solution> {
        let goal = grid.end();
        best_first_search(grid, "greedy", |_, state| manhattan(state, goal))
    }
}
