//! End-to-end session play with observers and exports

use std::{
    fs,
    io::{BufRead, BufReader},
};

use noughts::{
    App, Error, MoveResult, Outcome, SessionConfig, StrategyKind,
    export::TimelineCsvExporter,
    observers::{DecisionRecord, JsonlObserver},
    tictactoe::{GameOutcome, Player},
};
use tempfile::TempDir;

#[test]
fn test_ai_first_game_exports_jsonl_and_csv() {
    let dir = TempDir::new().unwrap();
    let jsonl = dir.path().join("moves.jsonl");
    let csv_path = dir.path().join("timeline.csv");

    let config = SessionConfig::new(StrategyKind::AlphaBeta)
        .with_ai_player(Player::X)
        .with_first_player(Player::X)
        .with_count_nodes(true);
    let mut session = App::new()
        .create_session(config)
        .unwrap()
        .with_observer(Box::new(JsonlObserver::new(&jsonl).unwrap()));

    let mut ai_moves = 0;
    loop {
        let (reply, diagnostics) = session.request_ai_move().unwrap();
        let MoveResult::Played { outcome, .. } = reply else {
            panic!("AI should always have a move here");
        };
        ai_moves += 1;
        assert!(diagnostics.full_tree_nodes.is_some());
        if outcome.is_finished() {
            break;
        }

        // The human always takes the lowest free cell.
        let index = session.board().empty_positions()[0];
        if session.submit_move(index).unwrap().is_finished() {
            break;
        }
    }

    assert!(matches!(
        session.outcome(),
        Some(GameOutcome::Win(Player::X)) | Some(GameOutcome::Draw)
    ));
    assert_eq!(session.timeline().len(), ai_moves);

    let rows = TimelineCsvExporter::export(session.timeline(), &csv_path).unwrap();
    assert_eq!(rows, ai_moves);
    let csv_text = fs::read_to_string(&csv_path).unwrap();
    assert!(csv_text.starts_with("move,duration_s,cumulative_s\n"));
    assert_eq!(csv_text.lines().count(), ai_moves + 1);

    let records: Vec<DecisionRecord> = BufReader::new(fs::File::open(&jsonl).unwrap())
        .lines()
        .map(|line| serde_json::from_str(&line.unwrap()).unwrap())
        .collect();
    assert_eq!(records.len(), ai_moves);
    assert_eq!(records[0].position, 0);
    assert_eq!(records[0].move_number, 1);
    assert_eq!(records[0].full_tree_nodes, Some(549_946));
    let cumulative: Vec<f64> = records.iter().map(|r| r.cumulative_s).collect();
    assert!(cumulative.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_rejections_leave_state_untouched() {
    let mut session = App::new().create_session(SessionConfig::default()).unwrap();
    assert_eq!(
        session.submit_move(4).unwrap(),
        Outcome::InProgress { to_move: Player::O }
    );

    let before = *session.board();
    assert!(matches!(
        session.submit_move(0),
        Err(Error::NotPlayersTurn { player: Player::X })
    ));
    session.request_ai_move().unwrap();
    let after_ai = *session.board();
    assert_ne!(before, after_ai);

    assert!(matches!(
        session.submit_move(9),
        Err(Error::InvalidPosition { position: 9 })
    ));
    assert!(matches!(
        session.submit_move(4),
        Err(Error::InvalidMove { position: 4 })
    ));
    assert_eq!(*session.board(), after_ai);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_reset_starts_a_clean_game() {
    let mut session = App::new()
        .with_default_seed(17)
        .create_session(SessionConfig::new(StrategyKind::RandomBlocking))
        .unwrap();
    session.submit_move(0).unwrap();
    session.request_ai_move().unwrap();
    assert_eq!(session.timeline().len(), 1);

    session.reset().unwrap();
    assert!(session.board().empty_positions().len() == 9);
    assert!(session.history().is_empty());
    assert!(session.timeline().is_empty());
    assert_eq!(session.to_move(), Player::X);
    assert_eq!(session.outcome(), None);
}

#[test]
fn test_seeded_random_blocking_sessions_repeat() {
    let play = || {
        let mut session = App::new()
            .with_default_seed(5)
            .create_session(SessionConfig::new(StrategyKind::RandomBlocking))
            .unwrap();
        let mut replies = Vec::new();
        while session.outcome().is_none() {
            let index = session.board().empty_positions()[0];
            if session.submit_move(index).unwrap().is_finished() {
                break;
            }
            if let (MoveResult::Played { position, .. }, _) = session.request_ai_move().unwrap() {
                replies.push(position);
            }
        }
        replies
    };

    assert_eq!(play(), play());
}
