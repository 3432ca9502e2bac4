use std::sync::Arc;

use common::games::tictactoe::{GameEngine, GameView, MoveOutcome};
use common::log;
use tokio::sync::Mutex;

/// The single in-memory session shared by every request. Each interaction holds the
/// lock until its view is built, so requests are applied one at a time.
#[derive(Clone, Default)]
pub struct GameSession {
    engine: Arc<Mutex<GameEngine>>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn view(&self) -> GameView {
        let engine = self.engine.lock().await;
        GameView::from_engine(&engine)
    }

    pub async fn place_mark(&self, index: usize) -> GameView {
        let mut engine = self.engine.lock().await;
        let outcome = engine.apply_move(index);
        log_outcome(engine.round(), &outcome);
        GameView::from_engine(&engine)
    }

    pub async fn restart(&self) -> GameView {
        let mut engine = self.engine.lock().await;
        let previous = engine.status();
        engine.restart();
        log!(
            "Round {} started after {:?}, {:?} moves first",
            engine.round(),
            previous,
            engine.current_mark()
        );
        GameView::from_engine(&engine)
    }
}

fn log_outcome(round: u32, outcome: &MoveOutcome) {
    match outcome {
        MoveOutcome::Ignored(reason) => {
            log!("Round {}: move ignored ({:?})", round, reason);
        }
        MoveOutcome::Placed { index, mark, next } => {
            log!("Round {}: {:?} placed at {}, {:?} to move", round, mark, index, next);
        }
        MoveOutcome::Won { index, line } => {
            log!(
                "Round {}: {:?} wins with {} on line {:?}",
                round,
                line.mark,
                index,
                line.cells
            );
        }
        MoveOutcome::Draw { index, mark } => {
            log!("Round {}: {:?} filled {}, round drawn", round, mark, index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{Mark, StatusView};

    #[tokio::test]
    async fn test_clones_share_one_engine() {
        let session = GameSession::new();
        let other = session.clone();
        session.place_mark(0).await;
        let view = other.view().await;
        assert_eq!(view.cells[0].mark, Some(Mark::X));
        assert_eq!(view.status, StatusView::Turn { mark: Mark::O });
    }

    #[tokio::test]
    async fn test_win_then_restart_keeps_score() {
        let session = GameSession::new();
        for index in [0, 3, 1, 4, 2] {
            session.place_mark(index).await;
        }
        assert_eq!(session.view().await.status, StatusView::Won { mark: Mark::X });

        let view = session.restart().await;
        assert_eq!(view.scores.x, 1);
        assert_eq!(view.round, 2);
        assert!(view.cells.iter().all(|cell| cell.mark.is_none()));
        assert_eq!(view.status, StatusView::Turn { mark: Mark::X });
    }

    #[tokio::test]
    async fn test_concurrent_clicks_on_same_cell_place_one_mark() {
        let session = GameSession::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let session = session.clone();
                tokio::spawn(async move { session.place_mark(4).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }
        let view = session.view().await;
        assert_eq!(view.cells[4].mark, Some(Mark::X));
        assert_eq!(view.cells.iter().filter(|cell| cell.mark.is_some()).count(), 1);
        assert_eq!(view.status, StatusView::Turn { mark: Mark::O });
    }
}
