//! Scores of both sides and their display colors, with the highlight and winning thresholds.

use crate::game::constants::{HIGHLIGHT_SCORE, WINNING_SCORE};
use crate::game::Side;

/// Display hint for a score.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ScoreColor {
    #[default]
    Normal,
    /// The side is one point away from winning.
    Highlight,
}

impl ScoreColor {
    pub fn css(self) -> &'static str {
        match self {
            Self::Normal => "#fff",
            Self::Highlight => "red",
        }
    }
}

/// Scores of both sides, indexed by [`Side`], with their display colors.
#[derive(Clone, Debug, Default)]
pub struct Scoreboard {
    scores: [u32; 2],
    colors: [ScoreColor; 2],
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn score(&self, side: Side) -> u32 {
        self.scores[side]
    }

    pub fn colors(&self) -> [ScoreColor; 2] {
        self.colors
    }

    pub fn color(&self, side: Side) -> ScoreColor {
        self.colors[side]
    }

    pub(super) fn add_point(&mut self, side: Side) {
        self.scores[side] += 1;
    }

    /// Highlight the scores one point away from winning, and return the side that reached the winning score, if any.
    /// The left side is checked first.
    pub(super) fn check_thresholds(&mut self) -> Option<Side> {
        let mut winner = None;
        for side in [Side::Left, Side::Right] {
            match self.scores[side] {
                HIGHLIGHT_SCORE => self.colors[side] = ScoreColor::Highlight,
                WINNING_SCORE if winner.is_none() => winner = Some(side),
                _ => {}
            }
        }
        winner
    }

    #[cfg(test)]
    pub(crate) fn set_score_for_test(&mut self, side: Side, score: u32) {
        self.scores[side] = score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_at_nine() {
        let mut scoreboard = Scoreboard::new();
        scoreboard.set_score_for_test(Side::Right, 8);
        assert_eq!(scoreboard.check_thresholds(), None);
        assert_eq!(scoreboard.color(Side::Right), ScoreColor::Normal);

        scoreboard.add_point(Side::Right);
        assert_eq!(scoreboard.check_thresholds(), None);
        assert_eq!(scoreboard.color(Side::Right), ScoreColor::Highlight);
        assert_eq!(scoreboard.color(Side::Left), ScoreColor::Normal);
    }

    #[test]
    fn winner_at_ten() {
        let mut scoreboard = Scoreboard::new();
        scoreboard.set_score_for_test(Side::Left, 9);
        scoreboard.check_thresholds();
        scoreboard.add_point(Side::Left);
        assert_eq!(scoreboard.check_thresholds(), Some(Side::Left));
        // The highlight stays once set.
        assert_eq!(scoreboard.color(Side::Left), ScoreColor::Highlight);
        assert_eq!(scoreboard.scores(), [10, 0]);
    }

    #[test]
    fn css_colors() {
        assert_eq!(ScoreColor::Normal.css(), "#fff");
        assert_eq!(ScoreColor::Highlight.css(), "red");
    }
}
