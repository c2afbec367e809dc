//! The eight fixed winning lines.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// One of the rows, columns or diagonals that wins the game.
///
/// Variants are declared in scan order: rows top-to-bottom, columns
/// left-to-right, then the two diagonals.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum WinningLine {
    /// Cells 0, 1, 2.
    #[display("top row")]
    TopRow,
    /// Cells 3, 4, 5.
    #[display("middle row")]
    MiddleRow,
    /// Cells 6, 7, 8.
    #[display("bottom row")]
    BottomRow,
    /// Cells 0, 3, 6.
    #[display("left column")]
    LeftColumn,
    /// Cells 1, 4, 7.
    #[display("center column")]
    CenterColumn,
    /// Cells 2, 5, 8.
    #[display("right column")]
    RightColumn,
    /// Cells 0, 4, 8.
    #[display("main diagonal")]
    MainDiagonal,
    /// Cells 2, 4, 6.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// Direction a winning line runs in, for renderers that stroke it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl WinningLine {
    /// All lines in scan order.
    pub const ALL: [WinningLine; 8] = [
        WinningLine::TopRow,
        WinningLine::MiddleRow,
        WinningLine::BottomRow,
        WinningLine::LeftColumn,
        WinningLine::CenterColumn,
        WinningLine::RightColumn,
        WinningLine::MainDiagonal,
        WinningLine::AntiDiagonal,
    ];

    /// Board indices covered by this line.
    pub const fn cells(self) -> [usize; 3] {
        match self {
            WinningLine::TopRow => [0, 1, 2],
            WinningLine::MiddleRow => [3, 4, 5],
            WinningLine::BottomRow => [6, 7, 8],
            WinningLine::LeftColumn => [0, 3, 6],
            WinningLine::CenterColumn => [1, 4, 7],
            WinningLine::RightColumn => [2, 5, 8],
            WinningLine::MainDiagonal => [0, 4, 8],
            WinningLine::AntiDiagonal => [2, 4, 6],
        }
    }

    /// Whether `index` lies on this line.
    pub fn contains(self, index: usize) -> bool {
        self.cells().contains(&index)
    }

    /// First and last cell of the line, the two ends a stroke is drawn between.
    pub fn endpoints(self) -> (Position, Position) {
        let [first, _, last] = self.cells();
        (Position::ALL[first], Position::ALL[last])
    }

    /// Direction of the line.
    pub fn orientation(self) -> Orientation {
        match self {
            WinningLine::TopRow | WinningLine::MiddleRow | WinningLine::BottomRow => {
                Orientation::Horizontal
            }
            WinningLine::LeftColumn | WinningLine::CenterColumn | WinningLine::RightColumn => {
                Orientation::Vertical
            }
            WinningLine::MainDiagonal => Orientation::Diagonal,
            WinningLine::AntiDiagonal => Orientation::AntiDiagonal,
        }
    }
}
