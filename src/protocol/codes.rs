//! Protocol-compliant serialization of the game's enumerations to [`u8`].

use crate::game::{Banner, Cue, Phase, ScoreColor};

impl From<Phase> for u8 {
    fn from(value: Phase) -> Self {
        match value {
            Phase::Menu => 0,
            Phase::Game => 1,
            Phase::Over => 2,
        }
    }
}

impl From<ScoreColor> for u8 {
    fn from(value: ScoreColor) -> Self {
        match value {
            ScoreColor::Normal => 0,
            ScoreColor::Highlight => 1,
        }
    }
}

impl From<Banner> for u8 {
    fn from(value: Banner) -> Self {
        match value {
            Banner::Title => 0,
            Banner::YouLose => 1,
            Banner::YouWin => 2,
        }
    }
}

impl From<Cue> for u8 {
    fn from(value: Cue) -> Self {
        match value {
            Cue::PaddleHit => 0,
            Cue::Win => 1,
            Cue::Lose => 2,
        }
    }
}
