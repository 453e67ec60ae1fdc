//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{lines::LineAnalyzer, symmetry::D4Transform};
use crate::{Error, Result};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '-' | '.' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X is MAX and always opens; O is MIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A square on the board; the action type of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub const fn new(row: usize, col: usize) -> Self {
        Square { row, col }
    }

    /// Row-major index (0-8). Only meaningful for in-range squares.
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    pub fn from_index(index: usize) -> Self {
        Square {
            row: index / 3,
            col: index % 3,
        }
    }

    pub fn in_range(self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Complete board state.
///
/// The player to move is not stored: X opens, so it is X's turn whenever X
/// does not have more pieces than O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// The empty initial state
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from nine cell characters; whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 cells are given or a character is not a
    /// valid cell representation.
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Build a board from rows, mostly useful in tests.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (r, row) in rows.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                cells[r * 3 + c] = cell;
            }
        }
        Board { cells }
    }

    /// Get cell at a square
    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.index()]
    }

    fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        9 - self.count(Cell::Empty)
    }

    /// Player whose turn it is
    pub fn player(&self) -> Player {
        if self.count(Cell::X) > self.count(Cell::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// All empty squares in row-major order
    pub fn actions(&self) -> Vec<Square> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Square::from_index(i))
            .collect()
    }

    /// Place the mover's mark and return the new board
    #[must_use = "result returns a new board; the original is unchanged"]
    pub fn result(&self, square: Square) -> Result<Board> {
        if !square.in_range() {
            return Err(Error::SquareOutOfRange {
                row: square.row,
                col: square.col,
            });
        }

        if self.get(square) != Cell::Empty {
            return Err(Error::SquareOccupied {
                row: square.row,
                col: square.col,
            });
        }

        let mut next = *self;
        next.cells[square.index()] = self.player().to_cell();
        Ok(next)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::first_winner(&self.cells)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || !self.cells.contains(&Cell::Empty)
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winner().is_none()
    }

    /// Utility of a terminal state from `player`'s perspective:
    /// 1.0 for a win, 0.0 for a loss and 0.5 for a draw.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotTerminal`] when the game is still running.
    pub fn utility(&self, player: Player) -> Result<f64> {
        if !self.is_terminal() {
            return Err(Error::NotTerminal);
        }

        Ok(match self.winner() {
            Some(winner) if winner == player => 1.0,
            Some(_) => 0.0,
            None => 0.5,
        })
    }

    /// Get a string representation for use as a key
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// Apply a D4 transform to the board
    pub fn transform(&self, t: &D4Transform) -> Self {
        Board {
            cells: t.apply_to_cells(&self.cells),
        }
    }

    /// The lexicographically minimal board under the eight D4 symmetries.
    pub fn canonical(&self) -> Self {
        D4Transform::all()
            .into_iter()
            .map(|t| self.transform(&t))
            .min_by(|a, b| a.encode().cmp(&b.encode()))
            .unwrap_or(*self)
    }

    /// Board with row and column headers
    pub fn display_grid(&self) -> String {
        let mut out = String::from("\n  0   1   2\n");
        for row in 0..3 {
            out.push_str(&format!("{row} "));
            for col in 0..3 {
                out.push_str(&format!(" {} ", self.cells[row * 3 + col].to_char()));
                if col < 2 {
                    out.push('|');
                }
            }
            out.push('\n');
            if row < 2 {
                out.push_str("  -----------\n");
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.player(), Player::X);
        assert!(board.cells.iter().all(|&c| c == Cell::Empty));
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_players_alternate() {
        let board = Board::new().result(Square::new(0, 0)).unwrap();
        assert_eq!(board.player(), Player::O);
        let board = board.result(Square::new(0, 1)).unwrap();
        assert_eq!(board.player(), Player::X);
    }

    #[test]
    fn test_result_leaves_original_untouched() {
        let board = Board::new();
        let next = board.result(Square::new(1, 1)).unwrap();
        assert_eq!(next.get(Square::new(1, 1)), Cell::X);
        assert_eq!(board.get(Square::new(1, 1)), Cell::Empty);
    }

    #[test]
    fn test_result_rejects_occupied_and_out_of_range() {
        let board = Board::new().result(Square::new(1, 1)).unwrap();

        let err = board.result(Square::new(1, 1)).unwrap_err();
        assert!(err.to_string().contains("occupied"));

        let err = board.result(Square::new(3, 0)).unwrap_err();
        assert!(matches!(err, Error::SquareOutOfRange { row: 3, col: 0 }));
    }

    #[test]
    fn test_actions_exclude_occupied() {
        let board = Board::from_string("X...O....").unwrap();
        let actions = board.actions();
        assert_eq!(actions.len(), 7);
        assert!(!actions.contains(&Square::new(0, 0)));
        assert!(!actions.contains(&Square::new(1, 1)));
        assert_eq!(actions[0], Square::new(0, 1));
    }

    #[test]
    fn test_utility_requires_terminal() {
        assert!(matches!(
            Board::new().utility(Player::X),
            Err(Error::NotTerminal)
        ));
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX --- ...").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.player(), Player::O);

        assert!(Board::from_string("XO").is_err());
        assert!(Board::from_string("XOZ......").is_err());
    }

    #[test]
    fn test_canonical_form() {
        let corner = Board::new().result(Square::new(0, 0)).unwrap();
        let other_corner = Board::new().result(Square::new(2, 2)).unwrap();
        assert_eq!(corner.canonical(), other_corner.canonical());

        let edge = Board::new().result(Square::new(0, 1)).unwrap();
        assert_ne!(corner.canonical(), edge.canonical());
    }

    #[test]
    fn test_display_grid_headers() {
        let board = Board::from_string("X........").unwrap();
        let shown = board.display_grid();
        assert!(shown.starts_with("\n  0   1   2\n0  X | - | - \n"));
        assert_eq!(shown.matches("-----------").count(), 2);
    }
}
