//! Grid Snake - single-player snake on a fixed grid

pub mod app;
pub mod core;
pub mod game;
pub mod renderer;
pub mod ui;
