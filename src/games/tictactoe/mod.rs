//! Tic-tac-toe: board model, rules and the game engine.

mod engine;
mod error;
mod lines;
mod position;
pub mod rules;
mod types;

pub use engine::GameEngine;
pub use error::{MoveError, MoveErrorKind};
pub use lines::{Orientation, WinningLine};
pub use position::{Direction, Position};
pub use types::{Board, CELL_COUNT, GameStatus, Player, Square};
