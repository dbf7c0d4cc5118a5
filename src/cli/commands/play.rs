//! Play command - Interactive game against the AI

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

use super::parse_player_token;
use crate::{
    Error,
    app::{App, SessionConfig},
    cli::output::{format_duration, format_number, render_board},
    export::TimelineCsvExporter,
    observers::{JsonlObserver, LogObserver},
    session::{MoveResult, Session},
    strategy::StrategyKind,
    tictactoe::{GameOutcome, Outcome},
};

#[derive(Parser, Debug)]
#[command(about = "Play noughts and crosses against the AI")]
pub struct PlayArgs {
    /// AI strategy (minimax, alpha-beta, random-blocking)
    #[arg(long, short = 's')]
    pub strategy: Option<StrategyKind>,

    /// Let the AI make the first move
    #[arg(long)]
    pub ai_first: bool,

    /// Symbol the AI plays (`x` or `o`)
    #[arg(long = "ai-player")]
    pub ai_player: Option<String>,

    /// Count the full game tree after every AI move (slow)
    #[arg(long)]
    pub count_nodes: bool,

    /// Load session settings from a JSON file; flags override it
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chance the random-blocking AI ignores threats
    #[arg(long)]
    pub random_probability: Option<f64>,

    /// Append one JSON record per AI move to this file
    #[arg(long)]
    pub jsonl: Option<PathBuf>,

    /// Write the decision timeline of each finished game as CSV
    #[arg(long)]
    pub timeline_csv: Option<PathBuf>,
}

/// Results across the games of one interactive run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameTally {
    pub games: usize,
    pub human_wins: usize,
    pub ai_wins: usize,
    pub draws: usize,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = build_config(&args)?;
    let mut session = App::new().create_session(config)?;
    session.add_observer(Box::new(LogObserver::new()));
    if let Some(path) = &args.jsonl {
        session.add_observer(Box::new(JsonlObserver::new(path)?));
    }

    println!(
        "You are {}, the AI ({}) plays {}.",
        session.human_player(),
        session.chooser_name(),
        session.ai_player()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let tally = run_loop(
        &mut session,
        stdin.lock(),
        &mut stdout,
        args.timeline_csv.as_deref(),
    )?;

    println!(
        "\n{} games: {} won, {} lost, {} drawn",
        tally.games, tally.human_wins, tally.ai_wins, tally.draws
    );
    Ok(())
}

/// Merge the config file, if any, with command-line overrides.
pub fn build_config(args: &PlayArgs) -> Result<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SessionConfig::default(),
    };

    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if let Some(token) = &args.ai_player {
        config.ai_player = parse_player_token(token, "--ai-player")?;
    }
    if args.ai_first {
        config.first_player = config.ai_player;
    }
    if args.count_nodes {
        config.count_nodes = true;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(p) = args.random_probability {
        config.random_move_probability = p;
    }

    config.validate()?;
    Ok(config)
}

/// Drive `session` from line-based input until `q` or end of input.
///
/// Each finished game is announced, its timeline exported when a path is
/// given, and the board reset for the next game.
pub fn run_loop<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    timeline_csv: Option<&Path>,
) -> Result<GameTally> {
    let mut tally = GameTally::default();
    let mut lines = input.lines();

    loop {
        if session.is_ai_turn() && ai_turn(session, out, timeline_csv, &mut tally)? {
            continue;
        }

        writeln!(out, "\n{}\n", render_board(session.board()))?;
        write!(out, "Your move (0-8, r = reset, q = quit): ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();

        match line {
            "q" | "quit" => break,
            "r" | "reset" => {
                session.reset()?;
                writeln!(out, "Board reset.")?;
                continue;
            }
            _ => {}
        }

        let Ok(index) = line.parse::<usize>() else {
            writeln!(out, "Enter a cell number between 0 and 8.")?;
            continue;
        };

        match session.submit_move(index) {
            Ok(Outcome::Finished(outcome)) => {
                finish_game(session, out, outcome, timeline_csv, &mut tally)?;
            }
            Ok(Outcome::InProgress { .. }) => {
                ai_turn(session, out, timeline_csv, &mut tally)?;
            }
            Err(e @ (Error::InvalidMove { .. } | Error::InvalidPosition { .. })) => {
                writeln!(out, "{e}")?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(tally)
}

/// Play the AI's reply. Returns true when the reply ended the game.
fn ai_turn<W: Write>(
    session: &mut Session,
    out: &mut W,
    timeline_csv: Option<&Path>,
    tally: &mut GameTally,
) -> Result<bool> {
    let (reply, diagnostics) = session.request_ai_move()?;
    let MoveResult::Played {
        position, outcome, ..
    } = reply
    else {
        writeln!(out, "No moves left.")?;
        return Ok(false);
    };

    writeln!(
        out,
        "AI ({}) plays {position} in {}",
        session.ai_player(),
        format_duration(diagnostics.elapsed)
    )?;
    if let Some(nodes) = diagnostics.full_tree_nodes {
        writeln!(out, "Full game tree below this move: {} nodes", format_number(nodes))?;
    }

    match outcome {
        Outcome::Finished(outcome) => {
            finish_game(session, out, outcome, timeline_csv, tally)?;
            Ok(true)
        }
        Outcome::InProgress { .. } => Ok(false),
    }
}

fn finish_game<W: Write>(
    session: &mut Session,
    out: &mut W,
    outcome: GameOutcome,
    timeline_csv: Option<&Path>,
    tally: &mut GameTally,
) -> Result<()> {
    writeln!(out, "\n{}\n", render_board(session.board()))?;
    tally.games += 1;
    match outcome {
        GameOutcome::Win(player) if player == session.human_player() => {
            tally.human_wins += 1;
            writeln!(out, "You win!")?;
        }
        GameOutcome::Win(player) => {
            tally.ai_wins += 1;
            writeln!(out, "{player} wins.")?;
        }
        GameOutcome::Draw => {
            tally.draws += 1;
            writeln!(out, "Draw.")?;
        }
    }

    if let Some(path) = timeline_csv {
        TimelineCsvExporter::export(session.timeline(), path)
            .with_context(|| format!("Failed to write timeline to {}", path.display()))?;
    }

    session.reset()?;
    writeln!(out, "New game.")?;
    Ok(())
}
