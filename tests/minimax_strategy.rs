//! Minimax and alpha-beta agree on every reachable position and never lose

use std::collections::HashSet;

use searchlab::{
    strategy::{MinimaxStrategy, RandomStrategy, Strategy, StrategyKind},
    tictactoe::{Board, GameMode, GameOutcome, Player, Session, match_strategies, play_out},
};

fn reachable_positions() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    let mut positions = Vec::new();
    while let Some(board) = stack.pop() {
        if !seen.insert(board.encode()) {
            continue;
        }
        if board.is_terminal() {
            continue;
        }
        positions.push(board);
        for square in board.actions() {
            stack.push(board.result(square).unwrap());
        }
    }
    positions
}

#[test]
fn test_reachable_non_terminal_count() {
    // 5478 legal positions, 958 of them terminal
    assert_eq!(reachable_positions().len(), 4520);
}

#[test]
fn test_pruning_never_changes_the_choice() {
    let mut plain = MinimaxStrategy::new();
    let mut pruned = MinimaxStrategy::with_alpha_beta();
    for board in reachable_positions() {
        assert_eq!(
            plain.choose(&board).unwrap(),
            pruned.choose(&board).unwrap(),
            "boards disagree on\n{}",
            board.display_grid()
        );
    }
}

#[test]
fn test_perfect_play_is_a_draw() {
    let mut x = MinimaxStrategy::new();
    let mut o = MinimaxStrategy::with_alpha_beta();
    assert_eq!(play_out(&mut x, &mut o).unwrap(), GameOutcome::Draw);
}

#[test]
fn test_minimax_never_loses_to_random() {
    let mut minimax = StrategyKind::Minimax.build(None);
    let mut random = StrategyKind::Random.build(Some(7));
    let as_x = match_strategies(minimax.as_mut(), random.as_mut(), 30, |_| {}).unwrap();
    assert_eq!(as_x.games, 30);
    assert_eq!(as_x.o_wins, 0);

    let mut random = RandomStrategy::with_seed(8);
    let mut minimax = MinimaxStrategy::with_alpha_beta();
    let as_o = match_strategies(&mut random, &mut minimax, 30, |_| {}).unwrap();
    assert_eq!(as_o.x_wins, 0);
}

#[test]
fn test_ai_vs_ai_session_plays_to_the_end() {
    let mut session = Session::new(GameMode::AiVsAi, StrategyKind::AlphaBeta.build(None));
    let mut moves = 0;
    while session.ai_move().unwrap().is_some() {
        moves += 1;
    }
    assert_eq!(moves, 9);
    assert_eq!(session.outcome(), Some(GameOutcome::Draw));
    assert_eq!(session.status(), "Draw!");
    assert_eq!(session.board().utility(Player::X).unwrap(), 0.5);
}
