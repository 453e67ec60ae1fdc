use std::collections::HashSet;

use log::debug;

use super::SearchAlgorithm;
use crate::{
    Result,
    pathfinding::{frontier::QueueFrontier, grid::Grid, node::SearchTree, solution::Solution},
};

/// Breadth-first search with the goal test applied on generation.
/// Optimal in number of moves, not in cost.
pub struct BreadthFirstSearch;

impl SearchAlgorithm for BreadthFirstSearch {
    fn name(&self) -> &'static str {
        "Breadth First Search"
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
                let next = grid.result(state, action)?;
                if !reached.insert(next) {
                    continue;
                }

                let step = grid.individual_cost(state, action)?;
                let child = tree.child(node_id, next, action, step);
                if grid.objective_test(next) {
                    debug!("bfs: goal generated after {expanded} expansions");
                    return Ok(Solution::found(&tree, child, reached, expanded));
                }
                frontier.add(child);
            }
        }

        Ok(Solution::no_solution(reached, expanded))
    }
}
