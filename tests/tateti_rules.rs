//! Test suite for the Tateti rules
//! Validates turn order, legal actions, terminal detection and utilities

use searchlab::{
    Error,
    strategy::{RandomStrategy, Strategy},
    tictactoe::{Board, Cell, Player, Square},
};

const X: Cell = Cell::X;
const O: Cell = Cell::O;
const E: Cell = Cell::Empty;

mod turns_and_actions {
    use super::*;

    #[test]
    fn test_initial_state_is_empty() {
        let board = Board::new();
        assert!(board.cells.iter().all(|&c| c == Cell::Empty));
        assert_eq!(board.player(), Player::X);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_players_alternate() {
        let after_max = Board::new().result(Square::new(0, 0)).unwrap();
        assert_eq!(after_max.player(), Player::O);

        let after_min = after_max.result(Square::new(0, 1)).unwrap();
        assert_eq!(after_min.player(), Player::X);
    }

    #[test]
    fn test_initial_actions_cover_every_square() {
        let expected: Vec<Square> = (0..3)
            .flat_map(|row| (0..3).map(move |col| Square::new(row, col)))
            .collect();
        assert_eq!(Board::new().actions(), expected);
    }

    #[test]
    fn test_partial_board_actions() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
        let actions = board.actions();
        assert!(!actions.contains(&Square::new(0, 0)));
        assert!(!actions.contains(&Square::new(1, 1)));
        assert_eq!(actions.len(), 7);
    }

    #[test]
    fn test_result_leaves_original_untouched() {
        let board = Board::new();
        let next = board.result(Square::new(1, 1)).unwrap();
        assert_eq!(next.get(Square::new(1, 1)), Cell::X);
        assert_eq!(board.get(Square::new(1, 1)), Cell::Empty);
    }

    #[test]
    fn test_result_rejects_illegal_squares() {
        let board = Board::new().result(Square::new(1, 1)).unwrap();
        assert!(matches!(
            board.result(Square::new(1, 1)),
            Err(Error::SquareOccupied { row: 1, col: 1 })
        ));
        assert!(matches!(
            board.result(Square::new(3, 0)),
            Err(Error::SquareOutOfRange { row: 3, col: 0 })
        ));
    }
}

mod terminal_states {
    use super::*;

    #[test]
    fn test_row_win() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert!(board.is_terminal());
        assert_eq!(board.utility(Player::X).unwrap(), 1.0);
    }

    #[test]
    fn test_column_win() {
        let board = Board::from_rows([[O, X, E], [O, X, E], [O, E, E]]);
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.utility(Player::X).unwrap(), 0.0);
    }

    #[test]
    fn test_diagonal_win() {
        let board = Board::from_rows([[X, O, E], [O, X, E], [E, E, X]]);
        assert!(board.is_terminal());
        assert_eq!(board.utility(Player::X).unwrap(), 1.0);
    }

    #[test]
    fn test_draw_is_half_for_both() {
        let board = Board::from_rows([[X, O, X], [O, O, X], [O, X, O]]);
        assert!(board.is_terminal());
        assert!(board.is_draw());
        assert_eq!(board.utility(Player::X).unwrap(), 0.5);
        assert_eq!(board.utility(Player::O).unwrap(), 0.5);
    }

    #[test]
    fn test_utility_from_min_perspective() {
        let max_wins = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(max_wins.utility(Player::X).unwrap(), 1.0);
        assert_eq!(max_wins.utility(Player::O).unwrap(), 0.0);

        let min_wins = Board::from_rows([[O, O, O], [X, X, E], [E, E, E]]);
        assert_eq!(min_wins.utility(Player::X).unwrap(), 0.0);
        assert_eq!(min_wins.utility(Player::O).unwrap(), 1.0);
    }

    #[test]
    fn test_utility_requires_terminal() {
        assert!(matches!(
            Board::new().utility(Player::X),
            Err(Error::NotTerminal)
        ));
    }
}

mod random_strategy {
    use super::*;

    #[test]
    fn test_random_picks_a_legal_square() {
        let board = Board::new();
        let mut strategy = RandomStrategy::with_seed(42);
        let square = strategy.choose(&board).unwrap();
        assert!(board.actions().contains(&square));
    }

    #[test]
    fn test_random_fails_without_actions() {
        let full = Board::from_rows([[X, O, X], [O, O, X], [O, X, O]]);
        let mut strategy = RandomStrategy::with_seed(42);
        assert!(matches!(strategy.choose(&full), Err(Error::NoValidMoves)));
    }
}
