use super::{SearchAlgorithm, best_first::best_first_search};
use crate::{
    Result,
    pathfinding::{grid::Grid, solution::Solution},
};

/// Dijkstra-style search ordered by path cost; returns a cheapest path.
pub struct UniformCostSearch;

impl SearchAlgorithm for UniformCostSearch {
    fn name(&self) -> &'static str {
        "Uniform Cost Search"
    }

    fn search(&self, grid: &Grid) -> Result<Solution> {
        best_first_search(grid, "ucs", |cost, _| cost)
    }
}
