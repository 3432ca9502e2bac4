use common::games::tictactoe::{BOARD_SIZE, CELL_COUNT, CellView, GameView, Mark};
use eframe::egui;

use crate::config::BoardConfig;

const LINE_WIDTH: f32 = 2.0;
const MARK_WIDTH: f32 = 4.0;
const BOARD_PADDING: f32 = 20.0;

pub const X_COLOR: egui::Color32 = egui::Color32::from_rgb(0x31, 0x4f, 0x6d);
pub const O_COLOR: egui::Color32 = egui::Color32::from_rgb(0x5e, 0x1c, 0x1c);
pub const ACCENT_COLOR: egui::Color32 = egui::Color32::from_rgb(0xff, 0xeb, 0x3b);

pub fn mark_color(mark: Mark) -> egui::Color32 {
    match mark {
        Mark::O => O_COLOR,
        Mark::X | Mark::Empty => X_COLOR,
    }
}

pub struct BoardPainter {
    min_cell_size: f32,
    max_cell_size: f32,
    show_hover: bool,
}

impl BoardPainter {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            min_cell_size: config.min_cell_size,
            max_cell_size: config.max_cell_size,
            show_hover: config.show_hover,
        }
    }

    pub fn cell_size(&self, available: egui::Vec2) -> f32 {
        let side = available.x.min(available.y) - BOARD_PADDING * 2.0;
        (side / BOARD_SIZE as f32).clamp(self.min_cell_size, self.max_cell_size)
    }

    /// Draws the board and returns the index of the clicked cell, if any.
    pub fn show(&self, ui: &mut egui::Ui, view: &GameView) -> Option<usize> {
        let cell_size = self.cell_size(ui.available_size());
        let board_side = cell_size * BOARD_SIZE as f32;

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_side, board_side), egui::Sense::click());
        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(250, 250, 250));
        draw_grid(painter, rect, cell_size);

        if let Some(hovered) = response.hover_pos().and_then(|pos| cell_at(rect, cell_size, pos))
            && self.show_hover
            && is_playable(view, hovered)
        {
            painter.rect_filled(
                cell_rect(rect, cell_size, hovered),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
        }

        for cell in &view.cells {
            let bounds = cell_rect(rect, cell_size, cell.index);
            if cell.winning {
                painter.rect_filled(bounds.shrink(LINE_WIDTH), 0.0, ACCENT_COLOR);
            }
            draw_cell(painter, bounds, cell);
        }

        if let Some((start, end)) = winning_segment(view) {
            let from = cell_rect(rect, cell_size, start).center();
            let to = cell_rect(rect, cell_size, end).center();
            painter.line_segment(
                [from, to],
                egui::Stroke::new(6.0, egui::Color32::from_rgba_unmultiplied(50, 200, 50, 200)),
            );
        }

        if !response.clicked() {
            return None;
        }
        response
            .interact_pointer_pos()
            .and_then(|pos| cell_at(rect, cell_size, pos))
            .filter(|&index| is_playable(view, index))
    }
}

fn draw_grid(painter: &egui::Painter, rect: egui::Rect, cell_size: f32) {
    let stroke = egui::Stroke::new(LINE_WIDTH, egui::Color32::from_gray(60));
    for i in 1..BOARD_SIZE {
        let offset = i as f32 * cell_size;
        painter.line_segment(
            [
                egui::pos2(rect.left() + offset, rect.top()),
                egui::pos2(rect.left() + offset, rect.bottom()),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.left(), rect.top() + offset),
                egui::pos2(rect.right(), rect.top() + offset),
            ],
            stroke,
        );
    }
}

fn draw_cell(painter: &egui::Painter, rect: egui::Rect, cell: &CellView) {
    let padding = rect.width() * 0.2;
    match cell.mark {
        Some(Mark::X) => {
            let stroke = egui::Stroke::new(MARK_WIDTH, X_COLOR);
            painter.line_segment(
                [
                    egui::pos2(rect.left() + padding, rect.top() + padding),
                    egui::pos2(rect.right() - padding, rect.bottom() - padding),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(rect.right() - padding, rect.top() + padding),
                    egui::pos2(rect.left() + padding, rect.bottom() - padding),
                ],
                stroke,
            );
        }
        Some(Mark::O) => {
            let radius = rect.width() / 2.0 - padding;
            painter.circle_stroke(rect.center(), radius, egui::Stroke::new(MARK_WIDTH, O_COLOR));
        }
        Some(Mark::Empty) | None => {}
    }
}

fn is_playable(view: &GameView, index: usize) -> bool {
    view.cells.get(index).is_some_and(|cell| !cell.disabled)
}

fn winning_segment(view: &GameView) -> Option<(usize, usize)> {
    view.winning_line.map(|line| (line.start(), line.end()))
}

pub fn cell_rect(board: egui::Rect, cell_size: f32, index: usize) -> egui::Rect {
    let row = index / BOARD_SIZE;
    let col = index % BOARD_SIZE;
    egui::Rect::from_min_size(
        egui::pos2(
            board.left() + col as f32 * cell_size,
            board.top() + row as f32 * cell_size,
        ),
        egui::vec2(cell_size, cell_size),
    )
}

pub fn cell_at(board: egui::Rect, cell_size: f32, pos: egui::Pos2) -> Option<usize> {
    if !board.contains(pos) || cell_size <= 0.0 {
        return None;
    }
    let col = ((pos.x - board.left()) / cell_size) as usize;
    let row = ((pos.y - board.top()) / cell_size) as usize;
    if col >= BOARD_SIZE || row >= BOARD_SIZE {
        return None;
    }
    let index = row * BOARD_SIZE + col;
    (index < CELL_COUNT).then_some(index)
}
