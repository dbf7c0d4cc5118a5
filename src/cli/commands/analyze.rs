//! Analyze command - Search a single position with both variants

use anyhow::{Context, Result};
use clap::Parser;

use super::parse_player_token;
use crate::{
    analysis::compare_variants,
    cli::output::{
        format_duration, format_number, print_kv, print_section, print_subsection, render_board,
    },
    instrumentation::{count_full_tree_nodes, instrumented_best_move, timed},
    search::{MoveSelector, SearchVariant, center_occupancy},
    strategy::blocking_move,
    tictactoe::{BoardState, GameOutcome, LineAnalyzer, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Analyze a position")]
pub struct AnalyzeArgs {
    /// Board as nine cells, row-major (`X`, `O`, `.`), e.g. `XX..O....`
    #[arg(default_value = ".........")]
    pub board: String,

    /// Player who opened the game (`x` or `o`)
    #[arg(long = "first-player", default_value = "x")]
    pub first_player: String,

    /// Side to move (`x` or `o`); skips the turn-balance check
    #[arg(long = "to-move")]
    pub to_move: Option<String>,

    /// Print the result as JSON instead of a report
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = BoardState::from_string(&args.board)
        .with_context(|| format!("Invalid board '{}'", args.board))?;
    let to_move = side_to_move(&board, &args)?;

    if args.json {
        let mut scratch = board;
        let report = compare_variants(&mut scratch, to_move);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section(&format!("Position {} ({to_move} to move)", board.encode()));
    println!("{}", render_board(&board));

    if let Some(outcome) = GameOutcome::from_board(&board) {
        println!("\nGame over: {outcome:?}");
        return Ok(());
    }

    print_subsection("Threats");
    let own = LineAnalyzer::winning_moves(board.cells(), to_move);
    print_kv(&format!("{to_move} wins at"), &format!("{own:?}"));
    print_kv(
        &format!("{to_move} must block"),
        &format!("{:?}", blocking_move(&board, to_move)),
    );

    for variant in [SearchVariant::Minimax, SearchVariant::AlphaBeta] {
        report_variant(board, to_move, variant);
    }

    print_subsection("Diagnostics");
    let mut scratch = board;
    let (nodes, elapsed) = timed(|| count_full_tree_nodes(&mut scratch, to_move));
    print_kv("Full tree nodes", &format_number(nodes));
    print_kv("Counting time", &format_duration(elapsed));
    print_kv(
        "Center heuristic",
        &format!(
            "{to_move}: {}, {}: {}",
            center_occupancy(&board, to_move),
            to_move.opponent(),
            center_occupancy(&board, to_move.opponent())
        ),
    );

    Ok(())
}

/// The explicit `--to-move` side, or the side implied by the piece counts.
fn side_to_move(board: &BoardState, args: &AnalyzeArgs) -> Result<Player> {
    if let Some(token) = &args.to_move {
        return parse_player_token(token, "--to-move");
    }
    let first = parse_player_token(&args.first_player, "--first-player")?;
    board
        .next_to_move(first)
        .with_context(|| format!("Pass --to-move to analyze '{}' anyway", board.encode()))
}

fn report_variant(board: BoardState, to_move: Player, variant: SearchVariant) {
    print_subsection(&variant.to_string());

    let mut scratch = board;
    let mut selector = MoveSelector::new(variant);
    let scores = selector.evaluate_moves(&mut scratch, to_move);
    for (pos, score) in scores {
        print_kv(&format!("cell {pos}"), &score.to_string());
    }

    let (result, diagnostics) = instrumented_best_move(&mut selector, &mut scratch, to_move, false);
    match result.best_move {
        Some(pos) => print_kv("Best move", &format!("{pos} (score {})", result.score)),
        None => print_kv("Best move", "none"),
    }
    print_kv("Nodes searched", &format_number(diagnostics.nodes_searched));
    print_kv("Cutoffs", &format_number(diagnostics.cutoffs));
    print_kv("Decision time", &format_duration(diagnostics.elapsed));
}
