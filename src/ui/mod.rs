//! UI module - keyboard mapping, status text and egui board painting

pub mod board;
pub mod hud;
pub mod input;

pub use hud::{status_line, window_title};
pub use input::Action;
