use std::collections::HashSet;

use super::SearchAlgorithm;
use crate::{
    Result,
    pathfinding::{
        frontier::QueueFrontier,
        grid::{Action, Grid},
        node::SearchTree,
        solution::Solution,
    },
};

/// Breadth-first search that only ever moves right. Finds the goal only
/// when it lies straight to the right of the start with no wall between.
pub struct GoRight;

impl SearchAlgorithm for GoRight {
    fn name(&self) -> &'static str {
        "Go Right"
    }

    fn search(&self, grid: &Grid) -> Result<Solution> {
        let mut tree = SearchTree::new();
        let root = tree.root(grid.start());

        let mut reached = HashSet::from([grid.start()]);
        if grid.objective_test(grid.start()) {
            return Ok(Solution::found(&tree, root, reached, 0));
        }

        let mut frontier = QueueFrontier::new();
        frontier.add(root);
        let mut expanded = 0;

        while let Some(node_id) = frontier.remove() {
            expanded += 1;
            let state = tree.get(node_id).state;

            for action in grid.actions(state) {
                if action != Action::Right {
                    continue;
                }

                let next = grid.result(state, action)?;
                if !reached.insert(next) {
                    continue;
                }

                let step = grid.individual_cost(state, action)?;
                let child = tree.child(node_id, next, action, step);

                if grid.objective_test(next) {
                    return Ok(Solution::found(&tree, child, reached, expanded));
                }
                frontier.add(child);
            }
        }

        Ok(Solution::no_solution(reached, expanded))
    }
}
