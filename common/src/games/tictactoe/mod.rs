mod board;
mod game_state;
mod score;
mod types;
mod view;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT};
pub use game_state::GameEngine;
pub use score::Scoreboard;
pub use types::{GameStatus, IgnoredReason, Mark, MoveOutcome, Position, WinningLine};
pub use view::{CellView, GameView, StatusView};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, is_draw};
