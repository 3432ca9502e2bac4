use super::board::{Board, CELL_COUNT};
use super::score::Scoreboard;
use super::types::{GameStatus, IgnoredReason, Mark, MoveOutcome, WinningLine};
use super::win_detector::check_win_with_line;

/// One hot-seat session: the current round plus the scores of every round so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_mark: Mark,
    round_starter: Mark,
    status: GameStatus,
    scores: Scoreboard,
    winning_line: Option<WinningLine>,
    last_move: Option<usize>,
    round: u32,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            round_starter: Mark::X,
            status: GameStatus::InProgress,
            scores: Scoreboard::default(),
            winning_line: None,
            last_move: None,
            round: 1,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn round_starter(&self) -> Mark {
        self.round_starter
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        if index >= CELL_COUNT {
            return MoveOutcome::Ignored(IgnoredReason::OutOfBounds);
        }

        if self.status.is_over() {
            return MoveOutcome::Ignored(IgnoredReason::RoundOver);
        }

        if !self.board.is_empty_at(index) {
            return MoveOutcome::Ignored(IgnoredReason::CellOccupied);
        }

        let mark = self.current_mark;
        self.board.set(index, mark);
        self.last_move = Some(index);

        if let Some(line) = check_win_with_line(&self.board)
            && let Some(status) = GameStatus::won_by(line.mark)
        {
            self.status = status;
            self.scores.record_win(line.mark);
            self.winning_line = Some(line);
            return MoveOutcome::Won { index, line };
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            return MoveOutcome::Draw { index, mark };
        }

        self.switch_turn();
        MoveOutcome::Placed {
            index,
            mark,
            next: self.current_mark,
        }
    }

    /// Starts a new round keeping the scores. Only a drawn round hands the first
    /// move to the other mark; after a win the winner moves first, and a round
    /// abandoned midway keeps whoever was about to move.
    pub fn restart(&mut self) {
        let next_starter = if self.status == GameStatus::Draw {
            self.round_starter.opponent().unwrap_or(Mark::X)
        } else {
            self.current_mark
        };

        self.board = Board::new();
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        self.last_move = None;
        self.current_mark = next_starter;
        self.round_starter = next_starter;
        self.round += 1;
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    #[cfg(test)]
    fn play(&mut self, moves: &[usize]) {
        for &index in moves {
            self.apply_move(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X_WINS_TOP_ROW: [usize; 5] = [0, 3, 1, 4, 2];
    const DRAW: [usize; 9] = [0, 4, 8, 1, 7, 6, 2, 5, 3];

    #[test]
    fn test_new_game_starts_with_x() {
        let game = GameEngine::new();
        assert_eq!(game.current_mark(), Mark::X);
        assert_eq!(game.round_starter(), Mark::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.scores(), Scoreboard::default());
        assert_eq!(game.round(), 1);
    }

    #[test]
    fn test_move_places_mark_and_flips_turn() {
        let mut game = GameEngine::new();
        let outcome = game.apply_move(4);
        assert_eq!(
            outcome,
            MoveOutcome::Placed { index: 4, mark: Mark::X, next: Mark::O }
        );
        assert_eq!(game.board().get(4), Some(Mark::X));
        assert_eq!(game.current_mark(), Mark::O);
        assert_eq!(game.last_move(), Some(4));
    }

    #[test]
    fn test_turn_is_opposite_of_last_placed_mark() {
        let mut game = GameEngine::new();
        for index in [0, 4, 8, 2] {
            let placed = game.current_mark();
            game.apply_move(index);
            assert_eq!(game.status(), GameStatus::InProgress);
            assert_eq!(Some(game.current_mark()), placed.opponent());
        }
    }

    #[test]
    fn test_move_on_occupied_cell_is_ignored() {
        let mut game = GameEngine::new();
        game.apply_move(0);
        let before = game.clone();
        let outcome = game.apply_move(0);
        assert_eq!(outcome, MoveOutcome::Ignored(IgnoredReason::CellOccupied));
        assert_eq!(game, before);
    }

    #[test]
    fn test_move_out_of_bounds_is_ignored() {
        let mut game = GameEngine::new();
        let before = game.clone();
        assert_eq!(
            game.apply_move(CELL_COUNT),
            MoveOutcome::Ignored(IgnoredReason::OutOfBounds)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_top_row_wins_for_x() {
        let mut game = GameEngine::new();
        game.play(&X_WINS_TOP_ROW[..4]);
        let outcome = game.apply_move(X_WINS_TOP_ROW[4]);
        assert_eq!(
            outcome,
            MoveOutcome::Won { index: 2, line: WinningLine::new(Mark::X, [0, 1, 2]) }
        );
        assert_eq!(game.status(), GameStatus::XWon);
        assert_eq!(game.scores().x, 1);
        assert_eq!(game.scores().o, 0);
        assert_eq!(game.current_mark(), Mark::X);
    }

    #[test]
    fn test_move_after_win_is_ignored() {
        let mut game = GameEngine::new();
        game.play(&X_WINS_TOP_ROW);
        let before = game.clone();
        assert_eq!(
            game.apply_move(8),
            MoveOutcome::Ignored(IgnoredReason::RoundOver)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_move_after_draw_is_ignored() {
        let mut game = GameEngine::new();
        game.play(&DRAW);
        assert_eq!(game.status(), GameStatus::Draw);
        let before = game.clone();
        for index in [0, 4, CELL_COUNT] {
            assert!(matches!(game.apply_move(index), MoveOutcome::Ignored(_)));
        }
        assert_eq!(
            game.apply_move(4),
            MoveOutcome::Ignored(IgnoredReason::RoundOver)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut game = GameEngine::new();
        game.play(&DRAW[..8]);
        assert_eq!(game.status(), GameStatus::InProgress);
        let outcome = game.apply_move(DRAW[8]);
        assert_eq!(outcome, MoveOutcome::Draw { index: 3, mark: Mark::X });
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.scores(), Scoreboard::default());
        assert_eq!(game.current_mark(), Mark::X);
    }

    #[test]
    fn test_row_major_fill_ends_on_anti_diagonal() {
        let mut game = GameEngine::new();
        game.play(&[0, 1, 2, 3, 4, 5]);
        let outcome = game.apply_move(6);
        assert_eq!(
            outcome,
            MoveOutcome::Won { index: 6, line: WinningLine::new(Mark::X, [2, 4, 6]) }
        );
        let before = game.clone();
        game.play(&[8, 7]);
        assert_eq!(game, before);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        let mut game = GameEngine::new();
        // X closes the 0-4-8 diagonal with the ninth mark.
        game.play(&[0, 1, 2, 3, 4, 5, 7, 6]);
        assert_eq!(game.status(), GameStatus::InProgress);
        let outcome = game.apply_move(8);
        assert!(matches!(outcome, MoveOutcome::Won { .. }));
        assert_eq!(game.status(), GameStatus::XWon);
        assert!(game.board().is_full());
    }

    #[test]
    fn test_restart_after_win_keeps_score_and_turn() {
        let mut game = GameEngine::new();
        game.play(&X_WINS_TOP_ROW);
        game.restart();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.winning_line(), None);
        assert_eq!(game.last_move(), None);
        assert_eq!(game.scores().x, 1);
        assert_eq!(game.current_mark(), Mark::X);
        assert_eq!(game.round(), 2);
    }

    #[test]
    fn test_restart_after_o_win_lets_o_start() {
        let mut game = GameEngine::new();
        game.play(&[0, 3, 1, 4, 8, 5]);
        assert_eq!(game.status(), GameStatus::OWon);
        game.restart();
        assert_eq!(game.current_mark(), Mark::O);
        assert_eq!(game.round_starter(), Mark::O);
        assert_eq!(game.scores().o, 1);
    }

    #[test]
    fn test_restart_after_draw_flips_starter() {
        let mut game = GameEngine::new();
        game.play(&DRAW);
        game.restart();
        assert_eq!(game.current_mark(), Mark::O);
        assert_eq!(game.round_starter(), Mark::O);

        game.play(&DRAW);
        assert_eq!(game.status(), GameStatus::Draw);
        game.restart();
        assert_eq!(game.current_mark(), Mark::X);
        assert_eq!(game.scores(), Scoreboard::default());
    }

    #[test]
    fn test_restart_mid_round_keeps_pending_turn() {
        let mut game = GameEngine::new();
        game.apply_move(0);
        game.restart();
        assert_eq!(game.current_mark(), Mark::O);
        assert_eq!(game.board().filled_count(), 0);
    }

    #[test]
    fn test_scores_accumulate_across_rounds() {
        let mut game = GameEngine::new();
        game.play(&X_WINS_TOP_ROW);
        game.restart();
        game.play(&X_WINS_TOP_ROW);
        game.restart();
        game.play(&DRAW);
        assert_eq!(game.scores().x, 2);
        assert_eq!(game.scores().o, 0);
        assert_eq!(game.round(), 3);
    }
}
