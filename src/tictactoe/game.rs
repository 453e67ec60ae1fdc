//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Player, Square};
use crate::{Error, Result};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub square: Square,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Read the outcome of a terminal board off MAX's utility.
    pub fn from_terminal(board: &Board) -> Result<Self> {
        let utility = board.utility(Player::X)?;
        Ok(if utility == 1.0 {
            GameOutcome::Win(Player::X)
        } else if utility == 0.0 {
            GameOutcome::Win(Player::O)
        } else {
            GameOutcome::Draw
        })
    }
}

/// A game with its move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
    current: Board,
}

impl Game {
    pub fn new() -> Self {
        Game {
            initial: Board::new(),
            moves: Vec::new(),
            outcome: None,
            current: Board::new(),
        }
    }

    /// Play a square for whoever is to move
    pub fn play(&mut self, square: Square) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }

        let player = self.current.player();
        let next = self.current.result(square)?;

        self.moves.push(Move { square, player });
        self.current = next;

        if next.is_terminal() {
            self.outcome = Some(GameOutcome::from_terminal(&next)?);
        }

        Ok(())
    }

    pub fn current(&self) -> &Board {
        &self.current
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_records_history_and_outcome() {
        let mut game = Game::new();
        for idx in [0, 3, 1, 4, 2] {
            game.play(Square::from_index(idx)).unwrap();
        }

        assert_eq!(game.moves.len(), 5);
        assert_eq!(game.moves[1].player, Player::O);
        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
        assert!(matches!(
            game.play(Square::new(2, 2)),
            Err(Error::GameOver)
        ));
    }

    #[test]
    fn test_illegal_move_keeps_state() {
        let mut game = Game::new();
        game.play(Square::new(1, 1)).unwrap();
        assert!(game.play(Square::new(1, 1)).is_err());
        assert_eq!(game.moves.len(), 1);
        assert_eq!(game.current().occupied_count(), 1);
    }
}
