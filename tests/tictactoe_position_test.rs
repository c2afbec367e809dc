//! Tests for tic-tac-toe positions and winning-line geometry.

use tictactoe_engine::{Board, Direction, Player, Position, Square, WinningLine};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 9); // All positions valid on empty board
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.set(0, Square::Occupied(Player::X)).unwrap();
    board.set(4, Square::Occupied(Player::O)).unwrap();

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7); // 2 occupied, 7 free
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_cursor_walks_the_grid() {
    let mut cursor = Position::TopLeft;
    for _ in 0..5 {
        cursor = cursor.step(Direction::Right);
    }
    assert_eq!(cursor, Position::TopRight);
    cursor = cursor.step(Direction::Down).step(Direction::Down);
    assert_eq!(cursor, Position::BottomRight);
}

#[test]
fn test_line_endpoints_span_the_line() {
    for line in WinningLine::ALL {
        let (start, end) = line.endpoints();
        let cells = line.cells();
        assert_eq!(start.to_index(), cells[0]);
        assert_eq!(end.to_index(), cells[2]);
    }
}
