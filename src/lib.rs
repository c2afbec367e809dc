//! Tic-tac-toe rule engine with a terminal front end.
//!
//! # Architecture
//!
//! - **Games**: [`GameEngine`] owns the board, the player to move and the
//!   game status, and runs win/draw detection after every move
//! - **TUI**: a ratatui presentation layer that hosts one engine and renders
//!   from it
//! - **Config**: TOML settings for the presentation layer
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Player, WinningLine};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 4, 1, 5] {
//!     engine.apply_move(index);
//! }
//! let status = engine.apply_move(2);
//! assert_eq!(
//!     status,
//!     GameStatus::Won { player: Player::X, line: WinningLine::TopRow }
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod games;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Direction, GameEngine, GameStatus, MoveError, MoveErrorKind, Orientation, Player,
    Position, Square, WinningLine,
};
