//! Keyboard translation

use winit::keyboard::KeyCode;

use crate::core::types::Direction;
use crate::game::Game;

/// Player intent, translated from a key press
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Move(Direction),
    TogglePause,
    Restart,
    Quit,
}

impl Action {
    /// Map a physical key to an action. Arrow keys steer, Space pauses,
    /// R restarts, Escape quits.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        let action = match key {
            KeyCode::ArrowUp => Action::Move(Direction::Up),
            KeyCode::ArrowDown => Action::Move(Direction::Down),
            KeyCode::ArrowLeft => Action::Move(Direction::Left),
            KeyCode::ArrowRight => Action::Move(Direction::Right),
            KeyCode::Space => Action::TogglePause,
            KeyCode::KeyR => Action::Restart,
            KeyCode::Escape => Action::Quit,
            _ => return None,
        };
        Some(action)
    }

    /// Apply to the game. Returns `true` when the visible state changed and
    /// a redraw is needed before the next tick.
    ///
    /// `Quit` is handled by the event loop and is a no-op here.
    pub fn apply(self, game: &mut Game) -> bool {
        match self {
            Action::Move(direction) => {
                // Only the buffer changes; nothing to redraw until the tick
                game.queue_direction(direction);
                false
            }
            Action::TogglePause => {
                game.toggle_pause();
                true
            }
            Action::Restart => {
                game.reset();
                tracing::info!("Game restarted");
                true
            }
            Action::Quit => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::game::GameState;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Action::from_key(KeyCode::ArrowUp), Some(Action::Move(Direction::Up)));
        assert_eq!(Action::from_key(KeyCode::ArrowLeft), Some(Action::Move(Direction::Left)));
        assert_eq!(Action::from_key(KeyCode::Space), Some(Action::TogglePause));
        assert_eq!(Action::from_key(KeyCode::KeyR), Some(Action::Restart));
        assert_eq!(Action::from_key(KeyCode::Escape), Some(Action::Quit));
        assert_eq!(Action::from_key(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut game = Game::with_seed(GameConfig::default(), 8).unwrap();
        game.set_food(None);
        while game.state() == GameState::Running {
            game.tick();
        }
        assert!(Action::Restart.apply(&mut game));
        assert_eq!(game.state(), GameState::Running);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_move_only_touches_pending_direction() {
        let mut game = Game::with_seed(GameConfig::default(), 8).unwrap();
        let before = game.snake().clone();
        assert!(!Action::Move(Direction::Down).apply(&mut game));
        assert_eq!(game.pending_direction(), Direction::Down);
        assert_eq!(game.snake(), &before);
    }
}
