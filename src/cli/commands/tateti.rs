//! Tateti command - Play interactively, analyse positions, or run AI matches

use std::io::{BufRead, Write};

use anyhow::{Result, anyhow};
use clap::{Args, Subcommand, ValueEnum};

use crate::{
    cli::{
        config::AppConfig,
        output::{create_progress, print_kv, print_section},
    },
    strategy::{MinimaxStrategy, StrategyKind},
    tictactoe::{Board, GameMode, Session, Square, match_strategies},
};

#[derive(Args, Debug)]
#[command(about = "Tic-Tac-Toe against humans or minimax")]
pub struct TatetiArgs {
    #[command(subcommand)]
    pub command: TatetiCommand,
}

#[derive(Subcommand, Debug)]
pub enum TatetiCommand {
    /// Interactive game on the terminal
    Play {
        /// Who plays whom (defaults to the configured mode)
        #[arg(long, short = 'm', value_enum)]
        mode: Option<GameMode>,

        /// AI strategy (defaults to the configured one)
        #[arg(long, short = 's', value_enum)]
        strategy: Option<StrategyKind>,
    },

    /// Exact minimax values of every move in a position
    Best {
        /// Nine cells in row-major order, e.g. "X-O-X----"
        #[arg(long, short = 'b')]
        board: String,

        /// Use alpha-beta pruning
        #[arg(long)]
        alpha_beta: bool,
    },

    /// AI-vs-AI series
    Match {
        #[arg(long, short = 'x', value_enum, default_value_t = StrategyKind::Minimax)]
        x: StrategyKind,

        #[arg(long, short = 'o', value_enum, default_value_t = StrategyKind::Random)]
        o: StrategyKind,

        /// Number of games (defaults to the configured count)
        #[arg(long, short = 'g')]
        games: Option<usize>,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
    },
}

pub fn execute(args: TatetiArgs, config: &AppConfig) -> Result<()> {
    match args.command {
        TatetiCommand::Play { mode, strategy } => {
            let mode = mode.unwrap_or(config.tateti.mode);
            let strategy = strategy.unwrap_or(config.tateti.strategy);
            let mut session = Session::new(mode, strategy.build(config.common.seed));
            let stdin = std::io::stdin();
            run_session(&mut session, stdin.lock(), std::io::stdout(), config.common.seed)
        }
        TatetiCommand::Best { board, alpha_beta } => best(&board, alpha_beta),
        TatetiCommand::Match { x, o, games, seed } => {
            let games = games.unwrap_or(config.tateti.games);
            let seed = seed.or(config.common.seed);
            run_match(x, o, games, seed, config.common.progress)
        }
    }
}

const HELP: &str = "\
Commands:
  <row> <col>        play a square, e.g. `1 2`
  new                start a new game
  mode <mode>        human-vs-human | human-vs-ai | ai-vs-ai
  strategy <kind>    random | minimax | alpha-beta
  help               show this message
  quit               leave";

/// Drive `session` from line-oriented `input` until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut out: W,
    seed: Option<u64>,
) -> Result<()> {
    writeln!(out, "{} ({})", session.mode(), session.strategy_name())?;
    writeln!(out, "{HELP}")?;
    advance_ai(session, &mut out)?;
    show(session, &mut out)?;

    for line in input.lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            continue;
        };

        match first {
            "quit" | "q" | "exit" => break,
            "help" | "?" => writeln!(out, "{HELP}")?,
            "new" | "n" => session.new_game(),
            "mode" => match words.next().map(|w| GameMode::from_str(w, true)) {
                Some(Ok(mode)) => {
                    session.set_mode(mode);
                    writeln!(out, "Mode: {mode}")?;
                }
                _ => writeln!(out, "usage: mode <human-vs-human|human-vs-ai|ai-vs-ai>")?,
            },
            "strategy" => match words.next().map(|w| StrategyKind::from_str(w, true)) {
                Some(Ok(kind)) => {
                    session.set_strategy(kind.build(seed));
                    writeln!(out, "Strategy: {}", session.strategy_name())?;
                }
                _ => writeln!(out, "usage: strategy <random|minimax|alpha-beta>")?,
            },
            _ => match parse_square(&line) {
                Some(square) => {
                    if let Err(err) = session.human_move(square) {
                        writeln!(out, "{err}")?;
                        continue;
                    }
                }
                None => {
                    writeln!(out, "unrecognised input '{}', try `help`", line.trim())?;
                    continue;
                }
            },
        }

        advance_ai(session, &mut out)?;
        show(session, &mut out)?;
    }
    Ok(())
}

fn advance_ai<W: Write>(session: &mut Session, out: &mut W) -> Result<()> {
    while let Some(square) = session.ai_move()? {
        writeln!(out, "{} plays {square}", session.strategy_name())?;
    }
    Ok(())
}

fn show<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    write!(out, "{}", session.board().display_grid())?;
    writeln!(out, "{}", session.status())?;
    Ok(())
}

/// `1 2`, `1,2` or `12`, rows and columns from 0
fn parse_square(text: &str) -> Option<Square> {
    let digits: Vec<usize> = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| c.to_digit(10).map(|d| d as usize))
        .collect::<Option<_>>()?;
    match digits.as_slice() {
        &[row, col] => Some(Square::new(row, col)),
        _ => None,
    }
}

fn best(board: &str, alpha_beta: bool) -> Result<()> {
    let board = Board::from_string(board)?;
    if board.is_terminal() {
        return Err(anyhow!("position is already decided:\n{}", board.display_grid()));
    }

    let mut strategy = if alpha_beta {
        MinimaxStrategy::with_alpha_beta()
    } else {
        MinimaxStrategy::new()
    };

    print_section(&format!("Position ({} to move)", board.player()));
    print!("{}", board.display_grid());

    println!("\n  {:<8} {:>8}", "Square", "Value");
    for (square, value) in strategy.evaluate_actions(&board)? {
        println!("  {:<8} {:>8.1}", square.to_string(), value);
    }

    let choice = crate::strategy::Strategy::choose(&mut strategy, &board)?;
    println!();
    print_kv("Best move", &choice.to_string());
    print_kv("Nodes expanded", &strategy.nodes_expanded().to_string());
    Ok(())
}

fn run_match(
    x: StrategyKind,
    o: StrategyKind,
    games: usize,
    seed: Option<u64>,
    progress: bool,
) -> Result<()> {
    if games == 0 {
        return Err(anyhow!("--games must be at least 1"));
    }
    let mut x_player = x.build(seed);
    let mut o_player = o.build(seed.map(|s| s.wrapping_add(1)));

    let pb = create_progress(games as u64, "games", progress)?;
    let summary = match_strategies(x_player.as_mut(), o_player.as_mut(), games, |summary| {
        pb.set_position(summary.games as u64);
        pb.set_message(format!(
            "X {} / O {} / draw {}",
            summary.x_wins, summary.o_wins, summary.draws
        ));
    })?;
    pb.finish_and_clear();

    print_section(&format!("{} (X) vs {} (O)", x.label(), o.label()));
    let pct = |n: usize| format!("{n} ({:.1}%)", 100.0 * n as f64 / summary.games as f64);
    print_kv("Games", &summary.games.to_string());
    print_kv("X wins", &pct(summary.x_wins));
    print_kv("O wins", &pct(summary.o_wins));
    print_kv("Draws", &pct(summary.draws));
    Ok(())
}
