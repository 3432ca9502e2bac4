use serde::{Deserialize, Serialize};

use super::game_state::GameEngine;
use super::score::Scoreboard;
use super::types::{Mark, WinningLine};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub index: usize,
    pub mark: Option<Mark>,
    pub disabled: bool,
    pub winning: bool,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusView {
    Turn { mark: Mark },
    Won { mark: Mark },
    Draw,
}

impl StatusView {
    pub fn text(&self) -> String {
        match self {
            StatusView::Turn { mark } => format!("Player {}'s turn", symbol(*mark)),
            StatusView::Won { mark } => format!("Player {} wins!", symbol(*mark)),
            StatusView::Draw => "It's a draw.".to_string(),
        }
    }
}

/// Everything a front end needs to draw one frame of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub cells: Vec<CellView>,
    pub status: StatusView,
    pub status_text: String,
    pub scores: Scoreboard,
    /// Mark to highlight on the scoreboard; `None` once the round is over.
    pub active_mark: Option<Mark>,
    pub round: u32,
    pub last_move: Option<usize>,
    pub winning_line: Option<WinningLine>,
}

impl GameView {
    pub fn from_engine(engine: &GameEngine) -> Self {
        let status = engine.status();
        let round_over = status.is_over();
        let winning_line = engine.winning_line();

        let cells = engine
            .board()
            .cells()
            .iter()
            .enumerate()
            .map(|(index, &cell)| {
                let mark = (!cell.is_empty()).then_some(cell);
                CellView {
                    index,
                    mark,
                    disabled: round_over || mark.is_some(),
                    winning: winning_line.is_some_and(|line| line.contains(index)),
                    label: cell_label(mark),
                }
            })
            .collect();

        let status = match status.winner() {
            Some(mark) => StatusView::Won { mark },
            None if round_over => StatusView::Draw,
            None => StatusView::Turn {
                mark: engine.current_mark(),
            },
        };

        Self {
            cells,
            status,
            status_text: status.text(),
            scores: engine.scores(),
            active_mark: (!round_over).then_some(engine.current_mark()),
            round: engine.round(),
            last_move: engine.last_move(),
            winning_line,
        }
    }
}

fn symbol(mark: Mark) -> &'static str {
    mark.symbol().unwrap_or("?")
}

fn cell_label(mark: Option<Mark>) -> String {
    match mark {
        Some(mark) => format!("cell {}", symbol(mark)),
        None => "empty cell".to_string(),
    }
}
