//! Verify command - Check the search against the whole game

use anyhow::{Result, bail};
use clap::Parser;

use super::parse_player_token;
use crate::{
    analysis::{compare_variants, exhaustive_play, reachable_positions},
    cli::output::{create_progress, create_spinner, format_number, print_kv, print_section},
    search::SearchVariant,
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Verify the AI never loses and both variants agree")]
pub struct VerifyArgs {
    /// Player who opens each game (`x` or `o`)
    #[arg(long = "first-player", default_value = "x")]
    pub first_player: String,

    /// Skip the exhaustive minimax run, which is slow
    #[arg(long)]
    pub alpha_beta_only: bool,

    /// Skip the plain/alpha-beta agreement check
    #[arg(long)]
    pub skip_agreement: bool,
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let first = parse_player_token(&args.first_player, "--first-player")?;
    let variants: &[SearchVariant] = if args.alpha_beta_only {
        &[SearchVariant::AlphaBeta]
    } else {
        &[SearchVariant::Minimax, SearchVariant::AlphaBeta]
    };

    print_section("Exhaustive play");
    let mut failures = 0;
    for &variant in variants {
        for ai in [Player::X, Player::O] {
            let spinner = create_spinner(&format!("{variant} as {ai}..."));
            let report = exhaustive_play(variant, ai, first)?;
            spinner.finish_and_clear();

            print_kv(
                &format!("{variant} as {ai}"),
                &format!(
                    "{} games: {} won, {} drawn, {} lost",
                    format_number(report.games),
                    report.ai_wins,
                    report.draws,
                    report.ai_losses
                ),
            );
            if !report.never_loses() {
                failures += 1;
            }
        }
    }

    if !args.skip_agreement {
        print_section("Variant agreement");
        let positions = reachable_positions(first);
        let pb = create_progress(positions.len() as u64, "positions");

        let mut disagreements = 0;
        let (mut plain_nodes, mut pruned_nodes) = (0u64, 0u64);
        for position in &positions {
            let mut board = position.board;
            let cmp = compare_variants(&mut board, position.to_move);
            plain_nodes += cmp.minimax_nodes;
            pruned_nodes += cmp.alpha_beta_nodes;
            if !cmp.agree() {
                disagreements += 1;
                log::warn!(
                    "variants disagree on {}: {:?} vs {:?}",
                    position.board.encode(),
                    cmp.minimax,
                    cmp.alpha_beta
                );
            }
            pb.inc(1);
            pb.set_message(format!("{disagreements} disagreements"));
        }
        pb.finish_and_clear();

        print_kv("Positions", &format_number(positions.len() as u64));
        print_kv("Disagreements", &disagreements.to_string());
        print_kv("Minimax nodes", &format_number(plain_nodes));
        print_kv("Alpha-beta nodes", &format_number(pruned_nodes));
        if disagreements > 0 {
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("verification failed in {failures} check(s)");
    }
    println!("\nAll checks passed.");
    Ok(())
}
