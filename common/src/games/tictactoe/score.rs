use serde::{Deserialize, Serialize};

use super::types::Mark;

/// Round wins per mark for the lifetime of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub x: u32,
    pub o: u32,
}

impl Scoreboard {
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
            Mark::Empty => 0,
        }
    }

    pub(crate) fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
            Mark::Empty => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_win_only_touches_winner() {
        let mut scores = Scoreboard::default();
        scores.record_win(Mark::O);
        scores.record_win(Mark::O);
        scores.record_win(Mark::X);
        assert_eq!(scores.get(Mark::X), 1);
        assert_eq!(scores.get(Mark::O), 2);
    }

    #[test]
    fn test_empty_mark_is_never_scored() {
        let mut scores = Scoreboard::default();
        scores.record_win(Mark::Empty);
        assert_eq!(scores, Scoreboard::default());
    }
}
