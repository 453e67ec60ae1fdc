//! Shared best-first graph search loop for uniform cost, greedy and A*.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::{
    Result,
    pathfinding::{
        frontier::PriorityQueueFrontier,
        grid::{Grid, Position},
        node::SearchTree,
        solution::Solution,
    },
};

/// Expand nodes in order of `priority(path_cost, state)`.
///
/// `reached` keeps the cheapest known cost per state; a state is pushed again
/// whenever a cheaper path to it shows up, and stale frontier entries are
/// skipped on removal. The goal test runs on removal.
pub(super) fn best_first_search(
    grid: &Grid,
    label: &str,
    priority: impl Fn(u64, Position) -> u64,
) -> Result<Solution> {
    let mut tree = SearchTree::new();
    let root = tree.root(grid.start());

    let mut reached: HashMap<Position, u64> = HashMap::from([(grid.start(), 0)]);
    let mut frontier = PriorityQueueFrontier::new();
    frontier.add(root, priority(0, grid.start()));
    let mut expanded = 0;

    while let Some(node_id) = frontier.remove() {
        let (state, cost) = {
            let node = tree.get(node_id);
            (node.state, node.cost)
        };
        if reached.get(&state).is_some_and(|&best| best < cost) {
            continue;
        }

        if grid.objective_test(state) {
            debug!(
                "{label}: goal reached with cost {cost} after {expanded} expansions, frontier {}",
                frontier.len()
            );
            return Ok(Solution::found(&tree, node_id, reached_states(&reached), expanded));
        }

        expanded += 1;
        for action in grid.actions(state) {
            let next = grid.result(state, action)?;
            let next_cost = cost + grid.individual_cost(state, action)?;

            if reached.get(&next).is_none_or(|&known| next_cost < known) {
                reached.insert(next, next_cost);
                let child = tree.child(node_id, next, action, next_cost - cost);
                frontier.add(child, priority(next_cost, next));
            }
        }
    }

    Ok(Solution::no_solution(reached_states(&reached), expanded))
}

fn reached_states(reached: &HashMap<Position, u64>) -> HashSet<Position> {
    reached.keys().copied().collect()
}
