use common::games::tictactoe::{GameEngine, GameView, Mark, MoveOutcome, StatusView};
use common::log;
use eframe::egui;

use super::board::{ACCENT_COLOR, BoardPainter, mark_color};
use crate::config::Config;

const INFO_PANEL_WIDTH: f32 = 200.0;

pub struct TicTacToeApp {
    engine: GameEngine,
    board: BoardPainter,
}

impl TicTacToeApp {
    pub fn new(config: &Config) -> Self {
        Self {
            engine: GameEngine::new(),
            board: BoardPainter::new(&config.board),
        }
    }

    fn click_cell(&mut self, index: usize) {
        match self.engine.apply_move(index) {
            MoveOutcome::Ignored(reason) => log!("Click on {} ignored ({:?})", index, reason),
            MoveOutcome::Placed { mark, next, .. } => {
                log!("{:?} placed at {}, {:?} to move", mark, index, next)
            }
            MoveOutcome::Won { line, .. } => {
                log!("{:?} wins on {:?}, scores {:?}", line.mark, line.cells, self.engine.scores())
            }
            MoveOutcome::Draw { .. } => log!("Round {} drawn", self.engine.round()),
        }
    }

    fn restart(&mut self) {
        self.engine.restart();
        log!(
            "Round {} started, {:?} moves first",
            self.engine.round(),
            self.engine.current_mark()
        );
    }

    fn render_info_panel(&mut self, ui: &mut egui::Ui, view: &GameView) {
        ui.heading("Tic Tac Toe");
        ui.separator();

        ui.horizontal(|ui| {
            score_label(ui, Mark::X, view.scores.x, view.active_mark == Some(Mark::X));
            ui.label(":");
            score_label(ui, Mark::O, view.scores.o, view.active_mark == Some(Mark::O));
        });

        ui.add_space(8.0);
        let status_color = match view.status {
            StatusView::Turn { mark } | StatusView::Won { mark } => mark_color(mark),
            StatusView::Draw => mark_color(Mark::O),
        };
        ui.colored_label(status_color, egui::RichText::new(&view.status_text).size(16.0));
        ui.label(format!("Round {}", view.round));

        ui.add_space(12.0);
        ui.separator();
        if ui.button("Restart Game").clicked() {
            self.restart();
        }
    }
}

fn score_label(ui: &mut egui::Ui, mark: Mark, score: u32, active: bool) {
    let symbol = mark.symbol().unwrap_or("?");
    let mut text = egui::RichText::new(format!("{} ({})", symbol, score))
        .size(18.0)
        .color(mark_color(mark));
    if active {
        text = text.strong().background_color(ACCENT_COLOR);
    }
    ui.label(text);
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = GameView::from_engine(&self.engine);

        egui::SidePanel::right("info_panel")
            .resizable(false)
            .exact_width(INFO_PANEL_WIDTH)
            .show(ctx, |ui| {
                self.render_info_panel(ui, &view);
            });

        let clicked = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| self.board.show(ui, &view)).inner
            })
            .inner;

        if let Some(index) = clicked {
            self.click_cell(index);
        }
    }
}
