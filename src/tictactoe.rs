//! Tic-Tac-Toe (Tateti) game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod session;
pub mod symmetry;

pub use board::{Board, Cell, Player, Square};
pub use game::{Game, GameOutcome, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use session::{GameMode, MatchSummary, Session, match_strategies, play_out};
pub use symmetry::D4Transform;
