//! Move selection strategies for Tateti
//!
//! A [`Strategy`] picks the square to play for whoever is to move:
//! - [`RandomStrategy`]: uniform choice among the legal squares
//! - [`MinimaxStrategy`]: exhaustive minimax, optionally with alpha-beta pruning

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    tictactoe::{Board, Square},
};

pub mod minimax;
pub mod random;

pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;

/// Strategy trait - unified interface for every decision procedure
pub trait Strategy: Send {
    /// Select a square for the player to move on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if no legal square exists.
    fn choose(&mut self, board: &Board) -> Result<Square>;

    /// Display name
    fn name(&self) -> &str;

    /// Reseed the internal random number generator, if there is one.
    fn set_rng_seed(&mut self, _seed: u64) {}
}

/// Selectable strategy families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    #[default]
    Random,
    Minimax,
    AlphaBeta,
}

impl StrategyKind {
    /// Instantiate the strategy; `seed` only matters for randomised ones.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(match seed {
                Some(seed) => RandomStrategy::with_seed(seed),
                None => RandomStrategy::new(),
            }),
            StrategyKind::Minimax => Box::new(MinimaxStrategy::new()),
            StrategyKind::AlphaBeta => Box::new(MinimaxStrategy::with_alpha_beta()),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrategyKind::Random => "Random",
            StrategyKind::Minimax => "Minimax",
            StrategyKind::AlphaBeta => "Minimax (alpha-beta)",
        }
    }
}
