//! Keyboard input mapping.

use crate::games::tictactoe::Direction;
use crossterm::event::KeyCode;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one cell.
    MoveCursor(Direction),
    /// Play the cell under the cursor.
    SelectCursor,
    /// Play a cell by index (0-8).
    SelectCell(usize),
    /// Start over.
    Reset,
    /// Hide the popup and start over.
    PlayAgain,
    /// Hide the popup.
    ClosePopup,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action. Digits 1-9 address cells 0-8.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Action::SelectCell(digit as usize - 1)),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('p') => Some(Action::PlayAgain),
        KeyCode::Esc | KeyCode::Char('c') => Some(Action::ClosePopup),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::SelectCell(0)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::SelectCell(8)));
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_arrows_move_cursor() {
        assert_eq!(
            action_for(KeyCode::Left),
            Some(Action::MoveCursor(Direction::Left))
        );
        assert_eq!(action_for(KeyCode::Enter), Some(Action::SelectCursor));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Char('r')), Some(Action::Reset));
        assert_eq!(action_for(KeyCode::Esc), Some(Action::ClosePopup));
        assert_eq!(action_for(KeyCode::Tab), None);
    }
}
