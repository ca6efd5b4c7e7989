//! Status line under the board

use crate::game::{Game, GameOverReason, GameState};

/// Text for the status area, derived only from game state
pub fn status_line(game: &Game) -> String {
    let status = match (game.state(), game.game_over_reason()) {
        (GameState::Running, _) => "Pause: [Space]   Restart: [R]".to_string(),
        (GameState::Paused, _) => "Paused".to_string(),
        (GameState::GameOver, Some(GameOverReason::BoardFilled)) => {
            "Board cleared! Press [R] to restart".to_string()
        }
        (GameState::GameOver, _) => "Game Over - press [R] to restart".to_string(),
    };
    format!("Score: {}   {}", game.score(), status)
}

/// Window title with live numbers
pub fn window_title(game: &Game) -> String {
    format!(
        "Grid Snake | score {} | {} ms/tick",
        game.score(),
        game.tick_interval().as_millis()
    )
}
