//! Classic AI search exercises
//!
//! This crate provides:
//! - Grid pathfinding with uninformed and informed search (BFS, DFS, uniform
//!   cost, greedy best-first, A*)
//! - Tic-Tac-Toe (Tateti) rules with minimax and alpha-beta players
//! - An interactive session driving human and AI players
//! - The Traveling Salesman Problem with 2-opt local search (hill climbing,
//!   random restarts, tabu search)

pub mod cli;
pub mod error;
pub mod pathfinding;
pub mod strategy;
pub mod tictactoe;
pub mod tsp;

pub use error::{Error, Result};
pub use pathfinding::{Algorithm, Grid, Solution};
pub use strategy::{Strategy, StrategyKind};
pub use tictactoe::{Board, GameMode, Player, Session, Square};
pub use tsp::{OptProblem, Tsp};
