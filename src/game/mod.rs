//! Snake simulation
//!
//! `Game` owns the whole mutable state of one session. Input handlers
//! only touch the pending direction, pause flag or reset; the snake itself
//! is only ever moved by `tick()`.

pub mod clock;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;

use std::collections::HashSet;
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::GameConfig;
use crate::core::error::{Result, SnakeError};
use crate::core::types::{Direction, GridPos, Tick};

pub use clock::TickClock;
pub use grid::Grid;
pub use snake::Snake;
pub use state::{GameOverReason, GameState, TickOutcome};

/// Length of the snake at the start of every game
pub const INITIAL_LENGTH: usize = 3;

/// One game session
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    direction: Direction,
    pending_direction: Direction,
    food: Option<GridPos>,
    score: u32,
    interval: Duration,
    state: GameState,
    game_over_reason: Option<GameOverReason>,
    ticks: Tick,
    rng: ChaCha8Rng,
}

impl Game {
    /// Start a game. Food placement is seeded from `config.seed` if set,
    /// otherwise from OS entropy.
    pub fn new(config: GameConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::build(config, rng)
    }

    /// Start a game with an explicit food-placement seed
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::build(config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Start a game from an explicit body (tail-to-head) and heading.
    ///
    /// The body must be non-empty, inside the board and free of duplicate
    /// cells. Food is placed among the remaining free cells. A later
    /// `reset()` returns to the standard starting layout.
    pub fn from_layout(
        config: GameConfig,
        body: impl IntoIterator<Item = GridPos>,
        direction: Direction,
        seed: u64,
    ) -> Result<Self> {
        let mut game = Self::with_seed(config, seed)?;

        let snake = Snake::from_cells(body)
            .ok_or_else(|| SnakeError::InvalidLayout("snake body is empty".into()))?;

        let mut seen = HashSet::with_capacity(snake.len());
        for cell in snake.cells() {
            if !game.grid.in_bounds(cell) {
                return Err(SnakeError::InvalidLayout(format!(
                    "cell ({}, {}) is outside the {}x{} board",
                    cell.x, cell.y, game.grid.width, game.grid.height
                )));
            }
            if !seen.insert(cell) {
                return Err(SnakeError::InvalidLayout(format!(
                    "cell ({}, {}) appears twice in the body",
                    cell.x, cell.y
                )));
            }
        }

        game.snake = snake;
        game.direction = direction;
        game.pending_direction = direction;
        game.food = food::place_food(&game.grid, &game.snake, &mut game.rng);
        Ok(game)
    }

    fn build(config: GameConfig, rng: ChaCha8Rng) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.grid_width, config.grid_height);
        let mut game = Self {
            grid,
            snake: Snake::horizontal(grid.center(), INITIAL_LENGTH),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food: None,
            score: 0,
            interval: config.start_interval(),
            state: GameState::Running,
            game_over_reason: None,
            ticks: 0,
            rng,
            config,
        };
        game.reset();
        Ok(game)
    }

    // === ACCESSORS ===

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<GridPos> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Current delay between ticks
    pub fn tick_interval(&self) -> Duration {
        self.interval
    }

    /// Ticks simulated since the last reset
    pub fn ticks(&self) -> Tick {
        self.ticks
    }

    // === INPUT ===

    /// Buffer the direction for the next tick.
    ///
    /// Returns `false` (and changes nothing) when `next` is the exact
    /// reverse of the direction the snake is currently moving in.
    pub fn queue_direction(&mut self, next: Direction) -> bool {
        if next.is_opposite(self.direction) {
            return false;
        }
        self.pending_direction = next;
        true
    }

    /// Flip between Running and Paused. No effect once the game is over.
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            GameState::Running => GameState::Paused,
            GameState::Paused => GameState::Running,
            GameState::GameOver => return,
        };
        tracing::info!(state = ?self.state, "Pause toggled");
    }

    /// Return to the starting layout with a fresh food position
    pub fn reset(&mut self) {
        self.snake = Snake::horizontal(self.grid.center(), INITIAL_LENGTH);
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.interval = self.config.start_interval();
        self.state = GameState::Running;
        self.game_over_reason = None;
        self.ticks = 0;
        self.food = food::place_food(&self.grid, &self.snake, &mut self.rng);
    }

    /// Place food on a specific cell, or clear it with `None`.
    ///
    /// Returns `false` if the cell is outside the board or under the snake.
    pub fn set_food(&mut self, cell: Option<GridPos>) -> bool {
        match cell {
            Some(pos) if !self.grid.in_bounds(pos) || self.snake.contains(pos) => false,
            _ => {
                self.food = cell;
                true
            }
        }
    }

    // === SIMULATION ===

    /// Advance one step if running
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != GameState::Running {
            return TickOutcome::Idle;
        }

        self.ticks += 1;
        self.direction = self.pending_direction;
        let new_head = self.snake.head().step(self.direction);

        if !self.grid.in_bounds(new_head) {
            return self.end(GameOverReason::HitWall);
        }

        // Checked before the tail moves, so the current tail cell counts too
        if self.snake.contains(new_head) {
            return self.end(GameOverReason::HitSelf);
        }

        self.snake.push_head(new_head);

        if self.food != Some(new_head) {
            self.snake.drop_tail();
            tracing::trace!(tick = self.ticks, x = new_head.x, y = new_head.y, "Moved");
            return TickOutcome::Moved;
        }

        self.score += 1;
        let sped_up = self.speed_up();
        self.food = food::place_food(&self.grid, &self.snake, &mut self.rng);
        tracing::debug!(
            score = self.score,
            length = self.snake.len(),
            interval_ms = self.interval.as_millis() as u64,
            "Ate food"
        );

        if self.food.is_none() {
            return self.end(GameOverReason::BoardFilled);
        }

        TickOutcome::Ate {
            score: self.score,
            sped_up,
        }
    }

    fn speed_up(&mut self) -> bool {
        let min = self.config.min_interval();
        if self.score % self.config.speed_up_every != 0 || self.interval <= min {
            return false;
        }
        let before = self.interval;
        self.interval = before.saturating_sub(self.config.speed_step()).max(min);
        self.interval < before
    }

    fn end(&mut self, reason: GameOverReason) -> TickOutcome {
        self.state = GameState::GameOver;
        self.game_over_reason = Some(reason);
        tracing::info!(
            score = self.score,
            length = self.snake.len(),
            ticks = self.ticks,
            "Game over: {}",
            reason
        );
        TickOutcome::Ended(reason)
    }
}
