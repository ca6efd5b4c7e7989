//! Game configuration with documented constants
//!
//! Every tuning number of the game lives here. Values can be overridden
//! from a TOML file and then from the command line.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::core::error::{Result, SnakeError};

/// Largest board accepted, in cells
///
/// Food placement enumerates every free cell, so this bounds that work.
pub const MAX_GRID_CELLS: u32 = 1 << 20;

/// Largest window side accepted, in logical pixels
pub const MAX_WINDOW_PX: u32 = 16_384;

/// Configuration for board geometry and pacing
///
/// Defaults reproduce the classic 20x20 board with a 120 ms tick that
/// speeds up by 10 ms every 5 points down to 60 ms.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === BOARD ===
    /// Number of columns on the board
    pub grid_width: i32,

    /// Number of rows on the board
    pub grid_height: i32,

    /// Side length of one cell in logical pixels
    ///
    /// The board canvas is `grid_width * cell_size` by
    /// `grid_height * cell_size`.
    pub cell_size: u32,

    /// Height of the status area under the board (logical pixels)
    pub hud_height: u32,

    // === PACING ===
    /// Tick interval at the start of every game (milliseconds)
    pub speed_start_ms: u64,

    /// Floor for the tick interval (milliseconds)
    ///
    /// Speed-ups never push the interval below this value.
    pub speed_min_ms: u64,

    /// How much the interval shrinks on each speed-up (milliseconds)
    pub speed_step_ms: u64,

    /// A speed-up happens whenever the score reaches a multiple of this
    pub speed_up_every: u32,

    // === RANDOMNESS ===
    /// Seed for food placement. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            cell_size: 20,
            hud_height: 40,

            speed_start_ms: 120,
            speed_min_ms: 60,
            speed_step_ms: 10,
            speed_up_every: 5,

            seed: None,
        }
    }
}

impl GameConfig {
    /// Load a config from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a config from a TOML string and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        // The starting snake occupies three cells left of the centre column
        if self.grid_width < 4 || self.grid_height < 2 {
            return Err(SnakeError::InvalidConfig(format!(
                "board must be at least 4x2 cells, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }

        let cells = (self.grid_width as u32).checked_mul(self.grid_height as u32);
        if !cells.is_some_and(|n| n <= MAX_GRID_CELLS) {
            return Err(SnakeError::InvalidConfig(format!(
                "board of {}x{} cells exceeds the maximum of {} cells",
                self.grid_width, self.grid_height, MAX_GRID_CELLS
            )));
        }

        if self.cell_size == 0 {
            return Err(SnakeError::InvalidConfig("cell_size must be positive".into()));
        }

        let fits = |cells: i32, extra: u32| {
            (cells as u32)
                .checked_mul(self.cell_size)
                .and_then(|px| px.checked_add(extra))
                .is_some_and(|px| px <= MAX_WINDOW_PX)
        };
        if !fits(self.grid_width, 0) || !fits(self.grid_height, self.hud_height) {
            return Err(SnakeError::InvalidConfig(format!(
                "window for {}x{} cells of {} px exceeds {} px per side",
                self.grid_width, self.grid_height, self.cell_size, MAX_WINDOW_PX
            )));
        }

        if self.speed_min_ms == 0 {
            return Err(SnakeError::InvalidConfig("speed_min_ms must be positive".into()));
        }

        if self.speed_min_ms > self.speed_start_ms {
            return Err(SnakeError::InvalidConfig(format!(
                "speed_min_ms ({}) should be <= speed_start_ms ({})",
                self.speed_min_ms, self.speed_start_ms
            )));
        }

        if self.speed_step_ms == 0 {
            return Err(SnakeError::InvalidConfig("speed_step_ms must be positive".into()));
        }

        if self.speed_up_every == 0 {
            return Err(SnakeError::InvalidConfig("speed_up_every must be positive".into()));
        }

        Ok(())
    }

    pub fn start_interval(&self) -> Duration {
        Duration::from_millis(self.speed_start_ms)
    }

    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.speed_min_ms)
    }

    pub fn speed_step(&self) -> Duration {
        Duration::from_millis(self.speed_step_ms)
    }

    /// Board canvas size in logical pixels. Only meaningful once `validate` passed.
    pub fn board_size_px(&self) -> (u32, u32) {
        (
            self.grid_width as u32 * self.cell_size,
            self.grid_height as u32 * self.cell_size,
        )
    }

    /// Window size in logical pixels (board plus status area)
    pub fn window_size_px(&self) -> (u32, u32) {
        let (w, h) = self.board_size_px();
        (w, h + self.hud_height)
    }
}
