//! Outcome of a finished match.

use crate::game::Side;

/// Result of a match, with a winner and the final score.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameResult {
    pub score: [u32; 2],
    pub winner: Side,
}

impl GameResult {
    pub(super) fn new(score: [u32; 2], winner: Side) -> Self {
        Self { score, winner }
    }

    /// Whether the human, who always plays the right pad, won.
    pub fn human_won(&self) -> bool {
        self.winner == Side::Right
    }
}
