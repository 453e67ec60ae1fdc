//! Interactive play session.
//!
//! Holds the game mode, the AI strategy and the running game, and decides whose
//! turn it is. Front ends only translate user input into [`Session::human_move`]
//! and call [`Session::ai_move`] until it returns `None`.

use std::fmt;

use clap::ValueEnum;
use log::info;
use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Player, Square},
    game::{Game, GameOutcome},
};
use crate::{Error, Result, strategy::Strategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    HumanVsHuman,
    #[default]
    HumanVsAi,
    AiVsAi,
}

impl GameMode {
    /// The human always plays X against the AI
    pub const HUMAN_PLAYER: Player = Player::X;

    pub fn is_ai_turn(self, player: Player) -> bool {
        match self {
            GameMode::HumanVsHuman => false,
            GameMode::HumanVsAi => player != Self::HUMAN_PLAYER,
            GameMode::AiVsAi => true,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsAi => "Human (X) vs AI (O)",
            GameMode::AiVsAi => "AI vs AI",
        };
        f.write_str(text)
    }
}

pub struct Session {
    mode: GameMode,
    strategy: Box<dyn Strategy>,
    game: Game,
}

impl Session {
    pub fn new(mode: GameMode, strategy: Box<dyn Strategy>) -> Self {
        Self {
            mode,
            strategy,
            game: Game::new(),
        }
    }

    /// Discard the running game and start from the empty board
    pub fn new_game(&mut self) {
        self.game = Game::new();
    }

    /// Switch mode; takes effect from the next move
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategy = strategy;
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub fn board(&self) -> &Board {
        self.game.current()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.game.outcome
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.mode.is_ai_turn(self.board().player())
    }

    /// Play a human move.
    ///
    /// # Errors
    ///
    /// Fails when the game is over, when it is the AI's turn, or when the
    /// square is not legal. The session is unchanged on error.
    pub fn human_move(&mut self, square: Square) -> Result<()> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        if self.is_ai_turn() {
            return Err(Error::WrongTurn {
                expected: "AI".to_string(),
            });
        }
        self.game.play(square)?;
        self.log_if_over();
        Ok(())
    }

    /// Let the AI move if it is its turn; returns the square played.
    pub fn ai_move(&mut self) -> Result<Option<Square>> {
        if !self.is_ai_turn() {
            return Ok(None);
        }
        let square = self.strategy.choose(self.game.current())?;
        self.game.play(square)?;
        self.log_if_over();
        Ok(Some(square))
    }

    /// One-line status for display
    pub fn status(&self) -> String {
        match self.outcome() {
            Some(GameOutcome::Win(player)) => format!("Winner: {player}!"),
            Some(GameOutcome::Draw) => "Draw!".to_string(),
            None => {
                let player = self.board().player();
                if self.mode == GameMode::HumanVsAi && self.is_ai_turn() {
                    format!("Turn: AI ({player})")
                } else {
                    format!("Turn: {player}")
                }
            }
        }
    }

    fn log_if_over(&self) {
        if let Some(outcome) = self.outcome() {
            info!(
                "game over after {} moves: {outcome:?}",
                self.game.moves.len()
            );
        }
    }
}

/// Win/draw/loss tallies of an AI-vs-AI series, from X's point of view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl MatchSummary {
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

/// Play one game between two strategies and return its outcome
pub fn play_out(x: &mut dyn Strategy, o: &mut dyn Strategy) -> Result<GameOutcome> {
    let mut game = Game::new();
    while !game.is_over() {
        let board = *game.current();
        let square = match board.player() {
            Player::X => x.choose(&board)?,
            Player::O => o.choose(&board)?,
        };
        game.play(square)?;
    }
    game.outcome.ok_or(Error::NoValidMoves)
}

/// Play `games` games between two strategies, calling `on_game` after each one
pub fn match_strategies(
    x: &mut dyn Strategy,
    o: &mut dyn Strategy,
    games: usize,
    mut on_game: impl FnMut(&MatchSummary),
) -> Result<MatchSummary> {
    let mut summary = MatchSummary::default();
    for _ in 0..games {
        summary.record(play_out(x, o)?);
        on_game(&summary);
    }
    info!(
        "{} vs {}: {} games, X won {}, O won {}, {} draws",
        x.name(),
        o.name(),
        summary.games,
        summary.x_wins,
        summary.o_wins,
        summary.draws
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        strategy::{MinimaxStrategy, RandomStrategy},
        tictactoe::board::Cell,
    };

    #[test]
    fn test_human_vs_ai_turns() {
        let mut session = Session::new(GameMode::HumanVsAi, Box::new(MinimaxStrategy::new()));
        assert_eq!(session.status(), "Turn: X");
        assert_eq!(session.ai_move().unwrap(), None);

        session.human_move(Square::new(1, 1)).unwrap();
        assert_eq!(session.status(), "Turn: AI (O)");
        assert!(matches!(
            session.human_move(Square::new(0, 0)),
            Err(Error::WrongTurn { .. })
        ));

        let played = session.ai_move().unwrap();
        assert!(played.is_some());
        assert_eq!(session.board().occupied_count(), 2);
    }

    #[test]
    fn test_switching_mode_mid_game_hands_o_to_the_ai() {
        let mut session = Session::new(GameMode::HumanVsHuman, Box::new(RandomStrategy::with_seed(7)));
        assert_eq!(session.strategy_name(), "Random");
        session.human_move(Square::new(1, 1)).unwrap();
        assert_eq!(session.status(), "Turn: O");
        assert!(!session.is_ai_turn());
        assert_eq!(session.ai_move().unwrap(), None);

        session.set_mode(GameMode::HumanVsAi);
        session.set_strategy(Box::new(MinimaxStrategy::with_alpha_beta()));
        assert_eq!(session.mode(), GameMode::HumanVsAi);
        assert_eq!(session.strategy_name(), "Minimax (alpha-beta)");
        assert_eq!(session.status(), "Turn: AI (O)");

        let square = session.ai_move().unwrap().unwrap();
        assert_eq!(session.board().get(square), Cell::O);
        assert_eq!(session.status(), "Turn: X");
        assert_eq!(session.ai_move().unwrap(), None);

        // back to two humans: O is no longer played automatically
        session.human_move(Square::new(0, 0)).unwrap();
        session.set_mode(GameMode::HumanVsHuman);
        assert_eq!(session.status(), "Turn: O");
        assert_eq!(session.ai_move().unwrap(), None);
    }

    #[test]
    fn test_illegal_human_move_is_rejected() {
        let mut session = Session::new(GameMode::HumanVsHuman, Box::new(RandomStrategy::with_seed(1)));
        session.human_move(Square::new(0, 0)).unwrap();
        assert!(session.human_move(Square::new(0, 0)).is_err());
        assert!(session.human_move(Square::new(0, 3)).is_err());
        assert_eq!(session.board().player(), Player::O);
    }

    #[test]
    fn test_ai_vs_ai_runs_to_completion() {
        let mut session = Session::new(GameMode::AiVsAi, Box::new(MinimaxStrategy::with_alpha_beta()));
        while session.ai_move().unwrap().is_some() {}
        assert!(session.is_over());
        assert_eq!(session.outcome(), Some(GameOutcome::Draw));
        assert_eq!(session.status(), "Draw!");

        session.new_game();
        assert!(!session.is_over());
        assert_eq!(session.board().occupied_count(), 0);
    }

    #[test]
    fn test_human_vs_human_win_status() {
        let mut session = Session::new(GameMode::HumanVsHuman, Box::new(RandomStrategy::with_seed(1)));
        for idx in [0, 3, 1, 4, 2] {
            session.human_move(Square::from_index(idx)).unwrap();
        }
        assert_eq!(session.status(), "Winner: X!");
        assert!(matches!(
            session.human_move(Square::new(2, 2)),
            Err(Error::GameOver)
        ));
    }

    #[test]
    fn test_minimax_never_loses_to_random() {
        let mut minimax = MinimaxStrategy::new();
        let mut random = RandomStrategy::with_seed(3);
        let summary = match_strategies(&mut minimax, &mut random, 20, |_| {}).unwrap();
        assert_eq!(summary.games, 20);
        assert_eq!(summary.o_wins, 0);
    }
}
