//! Grid Snake - Entry Point
//!
//! Controls:
//!   Arrow keys: Steer
//!   Space: Pause/resume
//!   R: Restart (also after game over)
//!   Escape: Quit

use std::path::PathBuf;

use clap::Parser;

use grid_snake::core::config::GameConfig;
use grid_snake::core::error::Result;

/// Classic snake on a fixed grid
#[derive(Parser, Debug)]
#[command(name = "grid-snake")]
#[command(about = "Single-player snake with a timer-driven game loop")]
struct Args {
    /// TOML file with board and pacing settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in cells
    #[arg(long)]
    width: Option<i32>,

    /// Board height in cells
    #[arg(long)]
    height: Option<i32>,

    /// Cell size in pixels
    #[arg(long)]
    cell_size: Option<u32>,

    /// Random seed for reproducible food placement
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied
    fn into_config(self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = args.into_config()?;

    tracing::info!("Starting Grid Snake");

    grid_snake::app::run(config)
}
