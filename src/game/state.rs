//! Encapsulation of a match state, and computation of its evolution tick after tick.

use rand::Rng;

pub use done::GameResult;
pub use scoreboard::{ScoreColor, Scoreboard};

use super::ai;
use super::ball::Ball;
use super::engine::{
    bounce_off_pad, bounce_off_wall, pad_collision, wall_collision, PadHit, ServeContext, WallHit,
};
use super::frame::{Banner, Frame};
use super::paddle::Paddle;
use super::playfield::Playfield;
use super::{Cue, CuePlayer, Side};

mod done;
mod scoreboard;

/// Top-level mode of the match.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Initial phase : the pads play by themselves and no score is kept.
    Menu,
    /// A human plays the right pad against the AI.
    Game,
    /// A side reached the winning score. The pads play by themselves until a new match starts.
    Over,
}

/// Number of humans playing.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PlayerCount {
    /// Both pads are driven by the AI.
    Zero,
    /// The right pad follows the pointer, the left one is driven by the AI.
    One,
}

/// What happened during a tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub wall_hit: Option<WallHit>,
    pub pad_hit: Option<PadHit>,
    /// The side that scored a point.
    pub point: Option<Side>,
    /// Set only on the tick the match ends.
    pub finished: Option<GameResult>,
}

/// The whole state of a session : ball, pads, scores and phase. Nothing outside of it mutates them.
#[derive(Clone, Debug)]
pub struct MatchState {
    playfield: Playfield,
    ball: Ball,
    pads: [Paddle; 2],
    scoreboard: Scoreboard,
    phase: Phase,
    players: PlayerCount,
    winner: Option<Side>,
}

impl MatchState {
    /// Creates a [`MatchState`] on the menu, with both pads driven by the AI and the ball served.
    pub fn new<R: Rng + ?Sized>(playfield: Playfield, rng: &mut R) -> MatchState {
        MatchState {
            ball: Ball::new(&playfield, ServeContext::MatchStart, rng),
            pads: [
                Paddle::new(&playfield, Side::Left),
                Paddle::new(&playfield, Side::Right),
            ],
            scoreboard: Scoreboard::new(),
            phase: Phase::Menu,
            players: PlayerCount::Zero,
            winner: None,
            playfield,
        }
    }

    #[cfg(test)]
    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    #[cfg(test)]
    pub fn pad(&self, side: Side) -> &Paddle {
        &self.pads[side]
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn players(&self) -> PlayerCount {
        self.players
    }

    /// Start a new match if nobody is playing. Returns whether the request was honored.
    pub fn request_start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.players != PlayerCount::Zero {
            return false;
        }
        self.players = PlayerCount::One;
        self.ball = Ball::new(&self.playfield, ServeContext::MatchStart, rng);
        self.pads = [
            Paddle::new(&self.playfield, Side::Left),
            Paddle::new(&self.playfield, Side::Right),
        ];
        self.scoreboard = Scoreboard::new();
        self.winner = None;
        self.phase = Phase::Game;
        log::info!("Match started.");
        true
    }

    /// Move the human's pad under the pointer. Ignored while nobody is playing.
    pub fn place_human_pad(&mut self, pointer_y: f64) {
        if self.players == PlayerCount::One {
            self.pads[Side::Right].place_centered_at(pointer_y);
        }
    }

    /// Run one tick of simulation : move the ball, bounce it off walls and pads, score points, check the end of the
    /// match and move the AI-driven pads.
    pub fn step<R, C>(&mut self, rng: &mut R, cues: &mut C) -> TickReport
    where
        R: Rng + ?Sized,
        C: CuePlayer + ?Sized,
    {
        let mut report = TickReport::default();
        self.ball.advance();

        if let Some(wall) = wall_collision(&self.ball, &self.playfield) {
            bounce_off_wall(&mut self.ball, wall);
            if let WallHit::SideWall(out_side) = wall {
                report.point = self.score_against(out_side, rng);
            }
            report.wall_hit = Some(wall);
        }

        if let Some(hit) = pad_collision(&self.ball, &self.pads) {
            bounce_off_pad(&mut self.ball, hit.zone);
            log::trace!(
                "Ball hit the {:?} pad ({:?}), now at {}° after {} trips.",
                hit.side,
                hit.zone,
                self.ball.angle(),
                self.ball.trips()
            );
            play_cue(cues, Cue::PaddleHit);
            report.pad_hit = Some(hit);
        }

        report.finished = self.check_scores(cues);

        let ai_sides: &[Side] = match self.players {
            PlayerCount::Zero => &[Side::Left, Side::Right],
            PlayerCount::One => &[Side::Left],
        };
        for &side in ai_sides {
            ai::drive(&mut self.pads[side], side, &self.ball, &self.playfield);
        }

        report
    }

    /// The ball went out on `out_side` : the other side scores if a match is being played, and the ball is served
    /// toward `out_side` again.
    fn score_against<R: Rng + ?Sized>(&mut self, out_side: Side, rng: &mut R) -> Option<Side> {
        let scorer = !out_side;
        let point = if self.phase == Phase::Game {
            self.scoreboard.add_point(scorer);
            let [left, right] = self.scoreboard.scores();
            log::debug!("Point for the {scorer:?} side, score is {left}-{right}.");
            Some(scorer)
        } else {
            None
        };
        let context = match scorer {
            Side::Left => ServeContext::AfterPlayerOneScore,
            Side::Right => ServeContext::AfterPlayerTwoScore,
        };
        self.ball.serve(&self.playfield, context, rng);
        point
    }

    /// Update score colors and run the winning sequence if a side reached the winning score. The end cue is only
    /// played on the tick the match ends.
    fn check_scores<C: CuePlayer + ?Sized>(&mut self, cues: &mut C) -> Option<GameResult> {
        let winner = self.scoreboard.check_thresholds()?;
        let newly_over = self.phase != Phase::Over;
        self.players = PlayerCount::Zero;
        self.phase = Phase::Over;
        self.winner = Some(winner);
        if !newly_over {
            return None;
        }
        let result = GameResult::new(self.scoreboard.scores(), winner);
        play_cue(cues, if result.human_won() { Cue::Win } else { Cue::Lose });
        let [left, right] = result.score;
        log::info!("Match over, {winner:?} side won {left}-{right}.");
        Some(result)
    }

    pub fn banner(&self) -> Option<Banner> {
        match (self.phase, self.winner) {
            (Phase::Menu, _) if self.players == PlayerCount::Zero => Some(Banner::Title),
            (Phase::Over, Some(Side::Left)) => Some(Banner::YouLose),
            (Phase::Over, Some(Side::Right)) => Some(Banner::YouWin),
            _ => None,
        }
    }

    /// Snapshot the state for rendering.
    pub fn frame(&self) -> Frame {
        Frame {
            phase: self.phase,
            banner: self.banner(),
            ball: *self.ball.rect(),
            pads: [*self.pads[Side::Left].rect(), *self.pads[Side::Right].rect()],
            scores: (self.phase != Phase::Menu).then(|| self.scoreboard.scores()),
            score_colors: self.scoreboard.colors(),
        }
    }

    #[cfg(test)]
    pub(crate) fn ball_mut_for_test(&mut self) -> &mut Ball {
        &mut self.ball
    }

    #[cfg(test)]
    pub(crate) fn pad_mut_for_test(&mut self, side: Side) -> &mut Paddle {
        &mut self.pads[side]
    }

    #[cfg(test)]
    pub(crate) fn scoreboard_mut_for_test(&mut self) -> &mut Scoreboard {
        &mut self.scoreboard
    }
}

/// Play a cue, logging failures : they never affect the simulation.
fn play_cue<C: CuePlayer + ?Sized>(cues: &mut C, cue: Cue) {
    if let Err(e) = cues.play(cue) {
        log::warn!("Failed to play the {cue:?} cue : {e}.");
    }
}
