//! egui painting of the board and status bar

use egui::{Align2, FontId, Pos2, Rect, RichText, Stroke};
use glam::Vec2;

use crate::renderer::palette;
use crate::renderer::BoardScene;

fn to_pos(origin: Pos2, v: Vec2) -> Pos2 {
    origin + egui::vec2(v.x, v.y)
}

/// Lay out one frame: status bar at the bottom, board filling the rest
pub fn draw(ctx: &egui::Context, scene: &BoardScene<'_>, status: &str, hud_height: f32) {
    egui::TopBottomPanel::bottom("status_bar")
        .exact_height(hud_height)
        .show_separator_line(false)
        .frame(
            egui::Frame::none()
                .fill(palette::BACKGROUND.to_egui())
                .inner_margin(egui::Margin::symmetric(8.0, 0.0)),
        )
        .show(ctx, |panel| {
            panel.centered_and_justified(|c| {
                c.label(
                    RichText::new(status)
                        .size(16.0)
                        .color(palette::TEXT.to_egui()),
                );
            });
        });

    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |panel| {
            let origin = panel.max_rect().min;
            paint_board(panel.painter(), origin, scene);
        });
}

/// Paint grid lines, food, snake and the game-over overlay
pub fn paint_board(painter: &egui::Painter, origin: Pos2, scene: &BoardScene<'_>) {
    let grid_stroke = Stroke::new(1.0, palette::GRID_LINE.to_egui());
    for line in scene.grid_lines {
        painter.line_segment([to_pos(origin, line.from), to_pos(origin, line.to)], grid_stroke);
    }

    for piece in &scene.pieces {
        let rect = Rect::from_min_max(to_pos(origin, piece.min), to_pos(origin, piece.max));
        painter.rect_filled(rect, 0.0, piece.color.to_egui());
    }

    if let Some(overlay) = &scene.overlay {
        let board = Rect::from_min_max(origin, to_pos(origin, scene.size));
        painter.rect_filled(board, 0.0, overlay.color.to_egui());
        painter.text(
            to_pos(origin, overlay.title_pos),
            Align2::CENTER_CENTER,
            overlay.title,
            FontId::proportional(24.0),
            palette::TEXT.to_egui(),
        );
        painter.text(
            to_pos(origin, overlay.hint_pos),
            Align2::CENTER_CENTER,
            overlay.hint,
            FontId::proportional(12.0),
            palette::TEXT_DIM.to_egui(),
        );
    }
}
