use super::{SearchAlgorithm, best_first::best_first_search};
use crate::{
    Result,
    pathfinding::{grid::Grid, heuristic::manhattan, solution::Solution},
};

/// A* ordered by `g + h` with the Manhattan heuristic. Since every tile
/// costs at least 1 the heuristic is admissible and consistent, so the
/// returned path is a cheapest one.
pub struct AStarSearch;

impl SearchAlgorithm for AStarSearch {
    fn name(&self) -> &'static str {
        "A* Search"
    }

    fn search(&self, grid: &Grid) -> Result<Solution> {
        let goal = grid.end();
        best_first_search(grid, "astar", |cost, state| cost + manhattan(state, goal))
    }
}
