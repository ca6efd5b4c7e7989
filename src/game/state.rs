//! Game phase and tick results

use std::fmt;

/// Lifecycle phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    Paused,
    /// Terminal until `reset()`
    GameOver,
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    HitWall,
    HitSelf,
    /// The snake covers every cell, nowhere left for food
    BoardFilled,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::HitWall => write!(f, "hit the wall"),
            GameOverReason::HitSelf => write!(f, "ran into itself"),
            GameOverReason::BoardFilled => write!(f, "filled the board"),
        }
    }
}

/// What a single `tick()` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running (paused or over), nothing changed
    Idle,
    /// Moved one cell, length unchanged
    Moved,
    /// Ate food and grew by one
    Ate { score: u32, sped_up: bool },
    /// Entered `GameState::GameOver`
    Ended(GameOverReason),
}

impl TickOutcome {
    pub fn changed_board(&self) -> bool {
        !matches!(self, TickOutcome::Idle)
    }
}
