//! Game engine for tic-tac-toe.
//!
//! [`GameEngine`] owns the authoritative board, the player to move and the
//! game status. Presentation layers read from it and never write to it
//! except through [`GameEngine::apply_move`] and [`GameEngine::reset`].

use super::error::{MoveError, MoveErrorKind};
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Single-threaded and synchronous; hosts that receive input concurrently
/// must serialize calls themselves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameEngine {
    board: Board,
    turn: Player,
    status: GameStatus,
    history: Vec<usize>,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move, in progress.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Moves after the game ended, out-of-range indices and occupied cells
    /// are ignored; the returned status is then the unchanged current one.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, index: usize) -> GameStatus {
        match self.try_apply_move(index) {
            Ok(status) => status,
            Err(e) => {
                debug!(error = %e.kind, "Move ignored");
                self.status
            }
        }
    }

    /// Like [`apply_move`](Self::apply_move) but reports why a move was
    /// rejected. State is untouched on `Err`.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn try_apply_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::new(MoveErrorKind::GameOver));
        }

        match self.board.get(index) {
            None => return Err(MoveError::new(MoveErrorKind::OutOfRange { index })),
            Some(Square::Occupied(_)) => {
                return Err(MoveError::new(MoveErrorKind::Occupied { index }));
            }
            Some(Square::Empty) => {}
        }

        let player = self.turn;
        self.board.set(index, Square::Occupied(player))?;
        self.history.push(index);
        debug!(index, %player, "Mark placed");

        self.update_status();
        Ok(self.status)
    }

    /// Updates status after a move; the turn only passes while in progress.
    fn update_status(&mut self) {
        if let Some((player, line)) = rules::find_winning_line(&self.board) {
            info!(%player, %line, "Game won");
            self.status = GameStatus::Won { player, line };
        } else if rules::is_full(&self.board) {
            info!("Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.turn = self.turn.opponent();
        }
    }

    /// Clears the board and starts a new game with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "Resetting game");
        *self = Self::default();
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or the winner once the game is won.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Indices played since the last reset, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }
}
