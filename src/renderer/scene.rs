//! Board scene - a frozen, pixel-space description of one frame.
//!
//! Built purely from `Game` state; painting it never touches the
//! simulation.

use glam::Vec2;

use super::palette::{self, Color};
use crate::core::types::GridPos;
use crate::game::{Game, GameOverReason, GameState, Grid};

/// Inset of the food square inside its cell (pixels)
const FOOD_PAD: f32 = 2.0;
/// Inset of snake squares inside their cells (pixels)
const SNAKE_PAD: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Food,
    Body,
    Head,
}

/// A filled square covering one board cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellQuad {
    pub kind: PieceKind,
    pub min: Vec2,
    pub max: Vec2,
    pub color: Color,
}

/// Dimmed board with a centred message
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    pub title: &'static str,
    pub hint: &'static str,
    pub title_pos: Vec2,
    pub hint_pos: Vec2,
    pub color: Color,
}

#[derive(Clone, Debug)]
pub struct BoardScene<'a> {
    pub size: Vec2,
    pub grid_lines: &'a [Segment],
    /// Food first, then snake tail-to-head
    pub pieces: Vec<CellQuad>,
    pub overlay: Option<Overlay>,
}

/// Pixel geometry of the board. Grid lines are computed once here and
/// shared by every frame.
#[derive(Clone, Debug)]
pub struct BoardLayout {
    grid: Grid,
    cell_size: f32,
    grid_lines: Vec<Segment>,
}

impl BoardLayout {
    pub fn new(grid: Grid, cell_size: u32) -> Self {
        let cell = cell_size as f32;
        let width = grid.width as f32 * cell;
        let height = grid.height as f32 * cell;

        let mut grid_lines = Vec::with_capacity((grid.width + grid.height) as usize);
        for x in 0..grid.width {
            let px = x as f32 * cell;
            grid_lines.push(Segment {
                from: Vec2::new(px, 0.0),
                to: Vec2::new(px, height),
            });
        }
        for y in 0..grid.height {
            let py = y as f32 * cell;
            grid_lines.push(Segment {
                from: Vec2::new(0.0, py),
                to: Vec2::new(width, py),
            });
        }

        Self {
            grid,
            cell_size: cell,
            grid_lines,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(
            self.grid.width as f32 * self.cell_size,
            self.grid.height as f32 * self.cell_size,
        )
    }

    pub fn grid_lines(&self) -> &[Segment] {
        &self.grid_lines
    }

    /// Square for `pos`, shrunk by `pad` on every side
    pub fn cell_rect(&self, pos: GridPos, pad: f32) -> (Vec2, Vec2) {
        let min = Vec2::new(pos.x as f32, pos.y as f32) * self.cell_size;
        (
            min + Vec2::splat(pad),
            min + Vec2::splat(self.cell_size - pad),
        )
    }

    fn quad(&self, pos: GridPos, pad: f32, kind: PieceKind, color: Color) -> CellQuad {
        let (min, max) = self.cell_rect(pos, pad);
        CellQuad {
            kind,
            min,
            max,
            color,
        }
    }

    pub fn scene(&self, game: &Game) -> BoardScene<'_> {
        let snake = game.snake();
        let mut pieces = Vec::with_capacity(snake.len() + 1);

        if let Some(food) = game.food() {
            pieces.push(self.quad(food, FOOD_PAD, PieceKind::Food, palette::FOOD));
        }

        let head_index = snake.len() - 1;
        for (i, cell) in snake.cells().enumerate() {
            let (kind, color) = if i == head_index {
                (PieceKind::Head, palette::SNAKE_HEAD)
            } else {
                (PieceKind::Body, palette::SNAKE_BODY)
            };
            pieces.push(self.quad(cell, SNAKE_PAD, kind, color));
        }

        BoardScene {
            size: self.size(),
            grid_lines: &self.grid_lines,
            pieces,
            overlay: self.overlay(game),
        }
    }

    fn overlay(&self, game: &Game) -> Option<Overlay> {
        if game.state() != GameState::GameOver {
            return None;
        }
        let title = match game.game_over_reason() {
            Some(GameOverReason::BoardFilled) => "BOARD CLEARED",
            _ => "GAME OVER",
        };
        let center = self.size() / 2.0;
        Some(Overlay {
            title,
            hint: "Press R to start again",
            title_pos: center - Vec2::new(0.0, 10.0),
            hint_pos: center + Vec2::new(0.0, 20.0),
            color: palette::OVERLAY,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::types::Direction;

    fn layout() -> BoardLayout {
        BoardLayout::new(Grid::new(20, 20), 20)
    }

    #[test]
    fn test_grid_lines_cover_board() {
        let layout = layout();
        assert_eq!(layout.grid_lines().len(), 40);
        assert_eq!(layout.size(), Vec2::new(400.0, 400.0));
        let first_row = layout.grid_lines()[20];
        assert_eq!(first_row.to, Vec2::new(400.0, 0.0));
    }

    #[test]
    fn test_cell_rect_padding() {
        let (min, max) = layout().cell_rect(GridPos::new(2, 3), 2.0);
        assert_eq!(min, Vec2::new(42.0, 62.0));
        assert_eq!(max, Vec2::new(58.0, 78.0));
    }

    #[test]
    fn test_scene_marks_single_head() {
        let game = Game::with_seed(GameConfig::default(), 11).unwrap();
        let layout = layout();
        let scene = layout.scene(&game);

        let heads: Vec<_> = scene
            .pieces
            .iter()
            .filter(|p| p.kind == PieceKind::Head)
            .collect();
        assert_eq!(heads.len(), 1);
        assert_eq!(heads[0].color, palette::SNAKE_HEAD);
        let (min, _) = layout.cell_rect(game.snake().head(), 1.0);
        assert_eq!(heads[0].min, min);

        assert_eq!(scene.pieces[0].kind, PieceKind::Food);
        assert_eq!(scene.pieces.len(), game.snake().len() + 1);
        assert!(scene.overlay.is_none());
    }

    #[test]
    fn test_overlay_on_game_over() {
        let mut game = Game::from_layout(
            GameConfig::default(),
            [GridPos::new(0, 0)],
            Direction::Left,
            2,
        )
        .unwrap();
        game.tick();

        let layout = layout();
        let overlay = layout.scene(&game).overlay.unwrap();
        assert_eq!(overlay.title, "GAME OVER");
        assert_eq!(overlay.title_pos, Vec2::new(200.0, 190.0));
    }

    #[test]
    fn test_overlay_on_board_cleared() {
        let config = GameConfig {
            grid_width: 4,
            grid_height: 2,
            ..GameConfig::default()
        };
        let mut game = Game::from_layout(
            config,
            [
                GridPos::new(1, 0),
                GridPos::new(2, 0),
                GridPos::new(3, 0),
                GridPos::new(3, 1),
                GridPos::new(2, 1),
                GridPos::new(1, 1),
                GridPos::new(0, 1),
            ],
            Direction::Left,
            5,
        )
        .unwrap();
        game.queue_direction(Direction::Up);
        game.tick();
        let layout = BoardLayout::new(game.grid(), 20);
        let scene = layout.scene(&game);
        assert_eq!(scene.pieces.len(), 8);
        assert!(scene.pieces.iter().all(|p| p.kind != PieceKind::Food));
        let overlay = scene.overlay.unwrap();
        assert_eq!(overlay.title, "BOARD CLEARED");
        assert_eq!(overlay.hint, "Press R to start again");
    }
}
