//! Search results

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{
    grid::{Action, Position},
    node::{NodeId, SearchTree},
};

/// A path from the start to the goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    /// Visited positions, start and goal included
    pub states: Vec<Position>,
    pub actions: Vec<Action>,
    pub cost: u64,
}

/// Outcome of one search. `path` is `None` when the goal is unreachable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    pub path: Option<Path>,
    /// Every state the search generated
    pub reached: HashSet<Position>,
    /// Nodes taken off the frontier
    pub expanded: usize,
}

impl Solution {
    pub fn found(tree: &SearchTree, goal: NodeId, reached: HashSet<Position>, expanded: usize) -> Self {
        let (states, actions) = tree.trace(goal);
        Self {
            path: Some(Path {
                states,
                actions,
                cost: tree.get(goal).cost,
            }),
            reached,
            expanded,
        }
    }

    pub fn no_solution(reached: HashSet<Position>, expanded: usize) -> Self {
        Self {
            path: None,
            reached,
            expanded,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }

    pub fn cost(&self) -> Option<u64> {
        self.path.as_ref().map(|p| p.cost)
    }
}
