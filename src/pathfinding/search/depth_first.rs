use std::collections::HashSet;

use log::debug;

use super::SearchAlgorithm;
use crate::{
    Result,
    pathfinding::{frontier::StackFrontier, grid::Grid, node::SearchTree, solution::Solution},
};

/// Depth-first graph search: LIFO frontier, every state generated at most
/// once, goal test on generation. Complete on finite grids, not optimal.
pub struct DepthFirstSearch;

impl SearchAlgorithm for DepthFirstSearch {
    fn name(&self) -> &'static str {
        "Depth First Search"
    }

    fn search(&self, grid: &Grid) -> Result<Solution> {
        let mut tree = SearchTree::new();
        let root = tree.root(grid.start());

        let mut reached = HashSet::from([grid.start()]);
        if grid.objective_test(grid.start()) {
            return Ok(Solution::found(&tree, root, reached, 0));
        }

        let mut frontier = StackFrontier::new();
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
                    debug!(
                        "dfs: goal generated at depth {} after {expanded} expansions",
                        tree.get(child).depth
                    );
                    return Ok(Solution::found(&tree, child, reached, expanded));
                }
                frontier.add(child);
            }
        }

        Ok(Solution::no_solution(reached, expanded))
    }
}
