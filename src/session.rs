//! One game between a human and the AI
//!
//! All mutable game state lives in [`Session`]: the board, whose turn it is,
//! the move history and the per-decision timeline. Front ends hold a
//! session and drive it through [`Session::submit_move`],
//! [`Session::request_ai_move`] and [`Session::reset`].

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    app::SessionConfig,
    instrumentation::{Diagnostics, Timeline},
    ports::{MoveChooser, Observer},
    strategy::StrategyKind,
    tictactoe::{BoardState, GameOutcome, Move, Outcome, Player},
};

/// Reply to an AI move request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The AI played `position`
    Played {
        position: usize,
        /// Search score of the move, for strategies that search
        score: Option<i32>,
        outcome: Outcome,
    },
    /// The board offered no legal move
    NoMove,
}

/// Game session state.
///
/// # Examples
///
/// ```
/// use noughts::app::{App, SessionConfig};
/// use noughts::session::MoveResult;
/// use noughts::tictactoe::Outcome;
///
/// let mut session = App::new().create_session(SessionConfig::default())?;
/// session.submit_move(0)?;
/// let (reply, _diagnostics) = session.request_ai_move()?;
/// assert!(matches!(reply, MoveResult::Played { position: 4, .. }));
/// assert!(session.outcome().is_none());
/// # Ok::<(), noughts::Error>(())
/// ```
pub struct Session {
    config: SessionConfig,
    board: BoardState,
    to_move: Player,
    chooser: Box<dyn MoveChooser>,
    history: Vec<Move>,
    outcome: Option<GameOutcome>,
    timeline: Timeline,
    observers: Vec<Box<dyn Observer>>,
}

impl Session {
    /// Start a game on an empty board.
    pub fn new(config: SessionConfig, chooser: Box<dyn MoveChooser>) -> Result<Self> {
        Self::from_position(config, chooser, BoardState::new())
    }

    /// Resume from an arbitrary position.
    ///
    /// The side to move is derived from the piece counts and the configured
    /// opening player.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPieceCounts`] if the position cannot arise
    /// from alternating play, or a configuration error.
    pub fn from_position(
        config: SessionConfig,
        chooser: Box<dyn MoveChooser>,
        board: BoardState,
    ) -> Result<Self> {
        config.validate()?;
        let to_move = board.next_to_move(config.first_player)?;
        log::info!(
            "new session: {} AI plays {}, {} to move",
            chooser.name(),
            config.ai_player,
            to_move
        );

        Ok(Self {
            board,
            to_move,
            chooser,
            history: Vec::new(),
            outcome: GameOutcome::from_board(&board),
            timeline: Timeline::new(),
            observers: Vec::new(),
            config,
        })
    }

    /// Attach an observer, builder style.
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn add_observer(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn ai_player(&self) -> Player {
        self.config.ai_player
    }

    pub fn human_player(&self) -> Player {
        self.config.human_player()
    }

    /// True while the game is running and the AI is due to move
    pub fn is_ai_turn(&self) -> bool {
        self.outcome.is_none() && self.to_move == self.config.ai_player
    }

    /// Moves applied this game, oldest first
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Final result once the game has ended
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Decision times of the AI this game
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn strategy(&self) -> StrategyKind {
        self.chooser.kind()
    }

    pub fn chooser_name(&self) -> &str {
        self.chooser.name()
    }

    /// Play the human's symbol at `index`.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] once the game has ended
    /// - [`Error::NotPlayersTurn`] while the AI is due to move
    /// - [`Error::InvalidPosition`] / [`Error::InvalidMove`] for an index
    ///   outside the board or an occupied cell
    ///
    /// A rejected move leaves the session untouched. An accepted move is
    /// committed, turn included, before observers run; if an observer fails
    /// its error is returned but the move stands.
    pub fn submit_move(&mut self, index: usize) -> Result<Outcome> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }
        let human = self.config.human_player();
        if self.to_move != human {
            return Err(Error::NotPlayersTurn { player: human });
        }

        if let Err(e) = self.board.place(index, human) {
            log::warn!("rejected move {index} for {human}: {e}");
            return Err(e);
        }

        let mv = Move {
            position: index,
            player: human,
        };
        log::info!("{human} plays {index}");
        self.history.push(mv);
        let outcome = self.advance();

        let board = self.board;
        let notified = broadcast(&mut self.observers, |o| o.on_human_move(&mv, &board));
        notified.and(self.notify_end(outcome))?;
        Ok(outcome)
    }

    /// Let the AI choose and play its move.
    ///
    /// A full board yields [`MoveResult::NoMove`]. The decision time is
    /// appended to the timeline.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] when the game ended with a win
    /// - [`Error::NotPlayersTurn`] while the human is due to move
    ///
    /// As with [`Session::submit_move`], observer errors are reported after
    /// the move has been committed.
    pub fn request_ai_move(&mut self) -> Result<(MoveResult, Diagnostics)> {
        if self.board.is_full() {
            log::debug!("AI move requested on a full board");
            return Ok((MoveResult::NoMove, Diagnostics::default()));
        }
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }
        let ai = self.config.ai_player;
        if self.to_move != ai {
            return Err(Error::NotPlayersTurn { player: ai });
        }

        let decision = self.chooser.choose_move(&mut self.board, ai)?;
        let Some(position) = decision.best_move else {
            return Ok((MoveResult::NoMove, decision.diagnostics));
        };

        self.board.place(position, ai)?;
        self.timeline.record(decision.diagnostics.elapsed);

        let mv = Move { position, player: ai };
        self.history.push(mv);
        match decision.diagnostics.full_tree_nodes {
            Some(nodes) => log::info!(
                "{ai} plays {position} after {:.6}s ({nodes} nodes in full tree)",
                decision.diagnostics.elapsed_secs()
            ),
            None => log::info!(
                "{ai} plays {position} after {:.6}s",
                decision.diagnostics.elapsed_secs()
            ),
        }

        let outcome = self.advance();

        let board = self.board;
        let cumulative = self.timeline.total();
        let notified = broadcast(&mut self.observers, |o| {
            o.on_ai_move(&mv, &board, &decision, cumulative)
        });
        notified.and(self.notify_end(outcome))?;
        Ok((
            MoveResult::Played {
                position,
                score: decision.score,
                outcome,
            },
            decision.diagnostics,
        ))
    }

    /// Start a new game with the same configuration and strategy.
    pub fn reset(&mut self) -> Result<()> {
        self.board = BoardState::new();
        self.to_move = self.config.first_player;
        self.history.clear();
        self.outcome = None;
        self.timeline.clear();
        log::info!("session reset, {} to move", self.to_move);

        broadcast(&mut self.observers, |o| o.on_reset())
    }

    /// Record the result of the move just applied, or pass the turn.
    fn advance(&mut self) -> Outcome {
        if let Some(outcome) = GameOutcome::from_board(&self.board) {
            self.outcome = Some(outcome);
            match outcome {
                GameOutcome::Win(player) => log::info!("{player} wins"),
                GameOutcome::Draw => log::info!("draw"),
            }
            return Outcome::Finished(outcome);
        }

        self.to_move = self.to_move.opponent();
        Outcome::InProgress {
            to_move: self.to_move,
        }
    }

    fn notify_end(&mut self, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Finished(result) => broadcast(&mut self.observers, |o| o.on_game_end(result)),
            Outcome::InProgress { .. } => Ok(()),
        }
    }
}

/// Deliver one event to every observer, returning the first failure.
fn broadcast(
    observers: &mut [Box<dyn Observer>],
    mut event: impl FnMut(&mut dyn Observer) -> Result<()>,
) -> Result<()> {
    let mut first_error = None;
    for observer in observers.iter_mut() {
        if let Err(e) = event(observer.as_mut()) {
            log::warn!("observer failed: {e}");
            first_error.get_or_insert(e);
        }
    }
    first_error.map_or(Ok(()), Err)
}
