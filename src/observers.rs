//! Observer adapters
//!
//! Sinks that turn session events into log lines or JSONL records without
//! coupling the game logic to an output format.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::{Decision, Observer},
    tictactoe::{BoardState, GameOutcome, Move, Player},
};

/// Log observer - Reports every event through the `log` facade
#[derive(Debug, Default)]
pub struct LogObserver;

impl LogObserver {
    pub fn new() -> Self {
        Self
    }
}

impl Observer for LogObserver {
    fn on_human_move(&mut self, mv: &Move, board: &BoardState) -> Result<()> {
        log::info!("human {} -> {} ({})", mv.player, mv.position, board.encode());
        Ok(())
    }

    fn on_ai_move(
        &mut self,
        mv: &Move,
        board: &BoardState,
        decision: &Decision,
        cumulative: Duration,
    ) -> Result<()> {
        let diag = &decision.diagnostics;
        log::info!(
            "ai {} -> {} ({}) in {:.6}s, cumulative {:.6}s, {} nodes searched",
            mv.player,
            mv.position,
            board.encode(),
            diag.elapsed_secs(),
            cumulative.as_secs_f64(),
            diag.nodes_searched
        );
        if let Some(nodes) = diag.full_tree_nodes {
            log::info!("full tree below the decision: {nodes} nodes");
        }
        Ok(())
    }

    fn on_game_end(&mut self, outcome: GameOutcome) -> Result<()> {
        match outcome {
            GameOutcome::Win(player) => log::info!("game over: {player} wins"),
            GameOutcome::Draw => log::info!("game over: draw"),
        }
        Ok(())
    }

    fn on_reset(&mut self) -> Result<()> {
        log::info!("board reset");
        Ok(())
    }
}

/// One AI decision as written by [`JsonlObserver`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Game number within the session, starting at 1
    pub game: usize,
    /// Move number within the game, starting at 1
    pub move_number: usize,
    pub position: usize,
    pub player: Player,
    /// Board after the move
    pub board: String,
    pub score: Option<i32>,
    pub elapsed_s: f64,
    pub cumulative_s: f64,
    pub nodes_searched: u64,
    pub full_tree_nodes: Option<u64>,
}

/// JSONL observer - Writes one JSON object per AI move
pub struct JsonlObserver {
    writer: BufWriter<File>,
    game: usize,
    move_number: usize,
}

impl JsonlObserver {
    /// Create a new JSONL observer, truncating `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
            game: 1,
            move_number: 0,
        })
    }
}

impl Observer for JsonlObserver {
    fn on_human_move(&mut self, _mv: &Move, _board: &BoardState) -> Result<()> {
        self.move_number += 1;
        Ok(())
    }

    fn on_ai_move(
        &mut self,
        mv: &Move,
        board: &BoardState,
        decision: &Decision,
        cumulative: Duration,
    ) -> Result<()> {
        self.move_number += 1;
        let record = DecisionRecord {
            game: self.game,
            move_number: self.move_number,
            position: mv.position,
            player: mv.player,
            board: board.encode(),
            score: decision.score,
            elapsed_s: decision.diagnostics.elapsed_secs(),
            cumulative_s: cumulative.as_secs_f64(),
            nodes_searched: decision.diagnostics.nodes_searched,
            full_tree_nodes: decision.diagnostics.full_tree_nodes,
        };

        serde_json::to_writer(&mut self.writer, &record)?;
        writeln!(&mut self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    fn on_reset(&mut self) -> Result<()> {
        self.game += 1;
        self.move_number = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        io::{BufRead, BufReader},
    };

    use tempfile::TempDir;

    use super::*;
    use crate::instrumentation::Diagnostics;

    fn decision(position: usize, ms: u64) -> Decision {
        Decision {
            best_move: Some(position),
            score: Some(0),
            diagnostics: Diagnostics {
                nodes_searched: 10,
                ..Diagnostics::timed(Duration::from_millis(ms))
            },
        }
    }

    #[test]
    fn jsonl_writes_one_record_per_ai_move() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("moves.jsonl");
        let mut observer = JsonlObserver::new(&path).unwrap();

        let mut board = BoardState::new();
        board.place(0, Player::X).unwrap();
        observer
            .on_human_move(&Move { position: 0, player: Player::X }, &board)
            .unwrap();
        board.place(4, Player::O).unwrap();
        observer
            .on_ai_move(
                &Move { position: 4, player: Player::O },
                &board,
                &decision(4, 20),
                Duration::from_millis(20),
            )
            .unwrap();
        observer.on_reset().unwrap();
        observer
            .on_ai_move(
                &Move { position: 0, player: Player::O },
                &board,
                &decision(0, 5),
                Duration::from_millis(5),
            )
            .unwrap();

        let lines: Vec<DecisionRecord> = BufReader::new(fs::File::open(&path).unwrap())
            .lines()
            .map(|line| serde_json::from_str(&line.unwrap()).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].game, 1);
        assert_eq!(lines[0].move_number, 2);
        assert_eq!(lines[0].position, 4);
        assert_eq!(lines[0].board, "X...O....");
        assert!((lines[0].cumulative_s - 0.02).abs() < 1e-9);
        assert_eq!(lines[1].game, 2);
        assert_eq!(lines[1].move_number, 1);
    }

    #[test]
    fn log_observer_accepts_every_event() {
        let mut observer = LogObserver::new();
        let board = BoardState::new();
        let mv = Move { position: 0, player: Player::X };
        observer.on_human_move(&mv, &board).unwrap();
        observer
            .on_ai_move(&mv, &board, &decision(0, 1), Duration::from_millis(1))
            .unwrap();
        observer.on_game_end(GameOutcome::Draw).unwrap();
        observer.on_reset().unwrap();
    }
}
