//! Exhaustive minimax over the Tateti game tree.
//!
//! Values are always expressed as X's utility (1 win, 0.5 draw, 0 loss): X
//! maximises, O minimises. Among equally valued squares the first one in
//! row-major order is played.

use std::collections::HashMap;

use log::debug;

use super::Strategy;
use crate::{
    Error, Result,
    tictactoe::{Board, Player, Square},
};

pub struct MinimaxStrategy {
    alpha_beta: bool,
    /// Exact values keyed by canonical encoding; only filled without pruning
    transpositions: HashMap<String, f64>,
    nodes_expanded: u64,
}

impl MinimaxStrategy {
    /// Plain minimax with a symmetry-reduced transposition table
    pub fn new() -> Self {
        Self {
            alpha_beta: false,
            transpositions: HashMap::new(),
            nodes_expanded: 0,
        }
    }

    /// Minimax with alpha-beta pruning
    pub fn with_alpha_beta() -> Self {
        Self {
            alpha_beta: true,
            ..Self::new()
        }
    }

    /// Nodes visited since construction
    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded
    }

    /// Game-theoretic value of `board` for X
    pub fn value(&mut self, board: &Board) -> Result<f64> {
        if self.alpha_beta {
            self.alpha_beta_value(board, f64::NEG_INFINITY, f64::INFINITY)
        } else {
            self.minimax_value(board)
        }
    }

    /// Exact value of every legal square, in row-major order
    pub fn evaluate_actions(&mut self, board: &Board) -> Result<Vec<(Square, f64)>> {
        if board.is_terminal() {
            return Err(Error::NoValidMoves);
        }
        board
            .actions()
            .into_iter()
            .map(|square| {
                let child = board.result(square)?;
                Ok((square, self.value(&child)?))
            })
            .collect()
    }

    fn search_root(&mut self, board: &Board) -> Result<(Square, f64)> {
        if board.is_terminal() {
            return Err(Error::NoValidMoves);
        }

        let maximizing = board.player() == Player::X;
        let (mut alpha, mut beta) = (f64::NEG_INFINITY, f64::INFINITY);
        let mut best: Option<(Square, f64)> = None;

        for square in board.actions() {
            let child = board.result(square)?;
            let value = if self.alpha_beta {
                self.alpha_beta_value(&child, alpha, beta)?
            } else {
                self.minimax_value(&child)?
            };

            let improves = match best {
                None => true,
                Some((_, best_value)) if maximizing => value > best_value,
                Some((_, best_value)) => value < best_value,
            };
            if improves {
                best = Some((square, value));
                if maximizing {
                    alpha = alpha.max(value);
                } else {
                    beta = beta.min(value);
                }
            }
        }

        best.ok_or(Error::NoValidMoves)
    }

    fn minimax_value(&mut self, board: &Board) -> Result<f64> {
        self.nodes_expanded += 1;
        if let Some(value) = terminal_value(board) {
            return Ok(value);
        }

        let key = board.canonical().encode();
        if let Some(&value) = self.transpositions.get(&key) {
            return Ok(value);
        }

        let maximizing = board.player() == Player::X;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for square in board.actions() {
            let value = self.minimax_value(&board.result(square)?)?;
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }

        self.transpositions.insert(key, best);
        Ok(best)
    }

    fn alpha_beta_value(&mut self, board: &Board, mut alpha: f64, mut beta: f64) -> Result<f64> {
        self.nodes_expanded += 1;
        if let Some(value) = terminal_value(board) {
            return Ok(value);
        }

        if board.player() == Player::X {
            let mut value = f64::NEG_INFINITY;
            for square in board.actions() {
                value = value.max(self.alpha_beta_value(&board.result(square)?, alpha, beta)?);
                if value >= beta {
                    return Ok(value);
                }
                alpha = alpha.max(value);
            }
            Ok(value)
        } else {
            let mut value = f64::INFINITY;
            for square in board.actions() {
                value = value.min(self.alpha_beta_value(&board.result(square)?, alpha, beta)?);
                if value <= alpha {
                    return Ok(value);
                }
                beta = beta.min(value);
            }
            Ok(value)
        }
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for MinimaxStrategy {
    fn choose(&mut self, board: &Board) -> Result<Square> {
        let before = self.nodes_expanded;
        let (square, value) = self.search_root(board)?;
        debug!(
            "{} chose {square} for {} (value {value}, {} nodes)",
            self.name(),
            board.player(),
            self.nodes_expanded - before
        );
        Ok(square)
    }

    fn name(&self) -> &str {
        if self.alpha_beta {
            "Minimax (alpha-beta)"
        } else {
            "Minimax"
        }
    }
}

/// X's utility when the game is over
fn terminal_value(board: &Board) -> Option<f64> {
    match board.winner() {
        Some(Player::X) => Some(1.0),
        Some(Player::O) => Some(0.0),
        None if board.is_draw() => Some(0.5),
        None => None,
    }
}
