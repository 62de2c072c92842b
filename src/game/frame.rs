//! Presentational snapshot of a [`MatchState`](crate::game::MatchState), handed to the renderer after each tick.

use crate::game::geometry::Rect;
use crate::game::state::{Phase, ScoreColor};

/// Text shown over the playfield.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Banner {
    /// Shown on the menu, while the pads play by themselves.
    Title,
    YouLose,
    YouWin,
}

impl Banner {
    pub fn text(self) -> &'static str {
        match self {
            Self::Title => "Paddle Battle",
            Self::YouLose => "YOU LOSE!",
            Self::YouWin => "YOU WIN!",
        }
    }

    pub fn sub_text(self) -> &'static str {
        "Click on the screen to start."
    }
}

/// Everything needed to draw one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    pub phase: Phase,
    pub banner: Option<Banner>,
    pub ball: Rect,
    pub pads: [Rect; 2],
    /// [`None`] on the menu, where scores are not displayed.
    pub scores: Option<[u32; 2]>,
    pub score_colors: [ScoreColor; 2],
}
