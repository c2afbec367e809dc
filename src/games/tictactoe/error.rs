//! Move rejection errors.

use derive_more::{Display, Error};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveErrorKind {
    /// The game already reached a terminal state.
    #[display("Game is already over")]
    GameOver,
    /// The index is not a board cell.
    #[display("Position {} out of bounds (must be 0-8)", index)]
    OutOfRange {
        /// The rejected index.
        index: usize,
    },
    /// The cell already holds a mark.
    #[display("Square {} is already occupied", index)]
    Occupied {
        /// The rejected index.
        index: usize,
    },
}

/// Move error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Move error: {} at {}:{}", kind, file, line)]
pub struct MoveError {
    /// What went wrong.
    pub kind: MoveErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl MoveError {
    /// Creates a new move error with caller location tracking.
    #[track_caller]
    pub fn new(kind: MoveErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
