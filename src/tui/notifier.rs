//! Messages shown to the players: the end-of-game popup and turn indicators.

use crate::config::GameConfig;
use crate::games::tictactoe::{GameEngine, GameStatus, Player};

/// Popup contents for a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Headline, e.g. "Player 1 (X) Wins!".
    pub title: String,
    /// Second line under the headline.
    pub subtitle: String,
}

/// Builds the popup for `status`; `None` while the game is running.
pub fn notice_for(status: GameStatus, config: &GameConfig) -> Option<Notice> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won { player, .. } => {
            let who = format!("{} ({})", config.name_of(player), player);
            Some(Notice {
                title: format!("{} Wins!", who),
                subtitle: format!("Nice! {} played well.", who),
            })
        }
        GameStatus::Draw => Some(Notice {
            title: "It's a Draw!".to_string(),
            subtitle: "No winners this round. Try again.".to_string(),
        }),
    }
}

/// Text for `player`'s side panel.
pub fn turn_indicator(engine: &GameEngine, player: Player) -> String {
    match engine.status() {
        GameStatus::InProgress if engine.turn() == player => format!("{} Turn", player),
        GameStatus::InProgress => "Waiting...".to_string(),
        GameStatus::Won { player: winner, .. } if winner == player => "Winner!".to_string(),
        GameStatus::Won { .. } => "Game over".to_string(),
        GameStatus::Draw => "Draw".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::WinningLine;

    #[test]
    fn test_no_notice_in_progress() {
        assert_eq!(notice_for(GameStatus::InProgress, &GameConfig::default()), None);
    }

    #[test]
    fn test_win_notice_names_player() {
        let status = GameStatus::Won {
            player: Player::O,
            line: WinningLine::LeftColumn,
        };
        let notice = notice_for(status, &GameConfig::default()).unwrap();
        assert_eq!(notice.title, "Player 2 (O) Wins!");
        assert_eq!(notice.subtitle, "Nice! Player 2 (O) played well.");
    }

    #[test]
    fn test_draw_notice() {
        let notice = notice_for(GameStatus::Draw, &GameConfig::default()).unwrap();
        assert_eq!(notice.title, "It's a Draw!");
        assert_eq!(notice.subtitle, "No winners this round. Try again.");
    }

    #[test]
    fn test_turn_indicator_follows_turn() {
        let mut engine = GameEngine::new();
        assert_eq!(turn_indicator(&engine, Player::X), "X Turn");
        assert_eq!(turn_indicator(&engine, Player::O), "Waiting...");
        engine.apply_move(0);
        assert_eq!(turn_indicator(&engine, Player::X), "Waiting...");
        assert_eq!(turn_indicator(&engine, Player::O), "O Turn");
    }

    #[test]
    fn test_turn_indicator_after_win() {
        let mut engine = GameEngine::new();
        for index in [0, 4, 1, 5, 2] {
            engine.apply_move(index);
        }
        assert_eq!(turn_indicator(&engine, Player::X), "Winner!");
        assert_eq!(turn_indicator(&engine, Player::O), "Game over");
    }
}
