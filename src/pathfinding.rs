//! Grid pathfinding with pluggable search strategies
//!
//! A [`Grid`] defines the state space (positions), the actions (four moves)
//! and the per-tile step costs. Every [`SearchAlgorithm`] explores it from
//! `start` to `end` and returns a [`Solution`].

pub mod frontier;
pub mod grid;
pub mod heuristic;
pub mod node;
pub mod search;
pub mod solution;

pub use grid::{Action, Grid, Position, Tile};
pub use search::{
    AStarSearch, Algorithm, BreadthFirstSearch, DepthFirstSearch, GoRight, GreedyBestFirstSearch,
    SearchAlgorithm, UniformCostSearch,
};
pub use solution::{Path, Solution};
