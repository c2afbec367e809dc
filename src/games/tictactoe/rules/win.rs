//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square, WinningLine};
use tracing::instrument;

/// Returns the player owning `line` if all three cells share one mark.
fn line_owner(board: &Board, line: WinningLine) -> Option<Player> {
    let [a, b, c] = line.cells().map(|i| board.get(i));
    match (a, b, c) {
        (Some(Square::Occupied(p1)), Some(Square::Occupied(p2)), Some(Square::Occupied(p3)))
            if p1 == p2 && p2 == p3 =>
        {
            Some(p1)
        }
        _ => None,
    }
}

/// Scans every winning line and reports the last one that matches.
///
/// All eight lines are checked even after a hit; when several lines are
/// complete at once the one latest in [`WinningLine::ALL`] order wins the
/// tie. Legal alternating play never completes two lines for different
/// players, but boards built by hand can.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<(Player, WinningLine)> {
    WinningLine::ALL
        .iter()
        .filter_map(|&line| line_owner(board, line).map(|player| (player, line)))
        .last()
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    find_winning_line(board).map(|(player, _)| player)
}
