//! Application state hosting one game engine.

use super::input::Action;
use super::notifier::{Notice, notice_for};
use crate::config::GameConfig;
use crate::games::tictactoe::{Direction, GameEngine, GameStatus, Position};
use tracing::{debug, info, instrument};

/// Cosmetic signal for the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A mark was placed.
    Click,
    /// The move won the game.
    Win,
    /// The move filled the board without a winner.
    Draw,
    /// The board was cleared.
    Reset,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    popup: Option<Notice>,
    last_cue: Option<Cue>,
    config: GameConfig,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::default(),
            popup: None,
            last_cue: None,
            config,
        }
    }

    /// The hosted engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Visible popup, if any.
    pub fn popup(&self) -> Option<&Notice> {
        self.popup.as_ref()
    }

    /// Most recent cue emitted.
    pub fn last_cue(&self) -> Option<Cue> {
        self.last_cue
    }

    /// Front-end settings.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Dispatches an input action. `Quit` is left to the caller.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) -> Option<Cue> {
        match action {
            Action::MoveCursor(direction) => {
                self.move_cursor(direction);
                None
            }
            Action::SelectCursor => self.select_cursor(),
            Action::SelectCell(index) => self.select(index),
            Action::Reset => Some(self.reset()),
            Action::PlayAgain => {
                self.play_again();
                None
            }
            Action::ClosePopup => {
                self.close_popup();
                None
            }
            Action::Quit => None,
        }
    }

    /// Plays `index` for the side to move.
    ///
    /// Returns `None` when the engine ignored the move, so rejected input
    /// produces no sound and no popup.
    #[instrument(skip(self))]
    pub fn select(&mut self, index: usize) -> Option<Cue> {
        let before = self.engine.move_count();
        let status = self.engine.apply_move(index);
        if self.engine.move_count() == before {
            debug!(index, %status, "Selection ignored");
            return None;
        }

        let cue = match status {
            GameStatus::InProgress => Cue::Click,
            GameStatus::Won { .. } => Cue::Win,
            GameStatus::Draw => Cue::Draw,
        };
        if status.is_terminal() {
            info!(%status, "Game finished");
            self.popup = notice_for(status, &self.config);
        }
        self.last_cue = Some(cue);
        Some(cue)
    }

    /// Plays the cell under the cursor.
    pub fn select_cursor(&mut self) -> Option<Cue> {
        self.select(self.cursor.to_index())
    }

    /// Moves the cursor one cell, clamped to the board.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = self.cursor.step(direction);
    }

    /// Clears the board and hides the popup.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Cue {
        self.popup = None;
        self.engine.reset();
        self.last_cue = Some(Cue::Reset);
        Cue::Reset
    }

    /// Hides the popup without touching the game.
    pub fn close_popup(&mut self) {
        self.popup = None;
    }

    /// Hides the popup and starts a new game.
    #[instrument(skip(self))]
    pub fn play_again(&mut self) {
        self.popup = None;
        self.engine.reset();
        self.last_cue = None;
    }

    /// One-line summary for the status bar.
    pub fn status_line(&self) -> String {
        match self.engine.status() {
            GameStatus::InProgress => format!(
                "{} ({}) to move. Arrows + Enter or 1-9 to play, r to reset, q to quit.",
                self.config.name_of(self.engine.turn()),
                self.engine.turn()
            ),
            GameStatus::Won { player, line } => format!(
                "{} ({}) won on the {}. Press r or p to play again.",
                self.config.name_of(player),
                player,
                line
            ),
            GameStatus::Draw => "Draw. Press r or p to play again.".to_string(),
        }
    }
}
