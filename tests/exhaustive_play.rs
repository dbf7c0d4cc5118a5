//! The searching AI never loses, whoever opens and whichever seat it takes

use noughts::{
    analysis::exhaustive_play,
    search::SearchVariant,
    tictactoe::Player,
};

#[test]
fn test_minimax_never_loses() {
    for ai in [Player::X, Player::O] {
        let report = exhaustive_play(SearchVariant::Minimax, ai, Player::X).unwrap();
        assert!(report.never_loses(), "minimax as {ai}: {report:?}");
    }
}

#[test]
fn test_alpha_beta_never_loses_with_either_opener() {
    for first in [Player::X, Player::O] {
        for ai in [Player::X, Player::O] {
            let report = exhaustive_play(SearchVariant::AlphaBeta, ai, first).unwrap();
            assert!(report.never_loses(), "alpha-beta as {ai}, {first} first: {report:?}");
            assert_eq!(report.games, report.ai_wins + report.draws);
        }
    }
}

#[test]
fn test_variants_play_identical_games() {
    for ai in [Player::X, Player::O] {
        let plain = exhaustive_play(SearchVariant::Minimax, ai, Player::X).unwrap();
        let pruned = exhaustive_play(SearchVariant::AlphaBeta, ai, Player::X).unwrap();
        assert_eq!(plain, pruned);
    }
}
