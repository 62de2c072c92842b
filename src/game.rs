//! Implementation of the logic of the Paddle Battle game.
//!
//! This mod exposes the [`Session`], which owns a [`MatchState`] together with its random number generator and its
//! collaborators : a [`Renderer`] receiving a [`Frame`] after each tick, and a [`CuePlayer`] receiving sound cues.
//! The host feeds it a [`TickInput`] per tick through [`Session::step`].

use std::io;

use rand::Rng;

#[cfg(test)]
pub use engine::PadHit;
pub use engine::WallHit;
pub use frame::{Banner, Frame};
pub use geometry::Rect;
#[cfg(test)]
pub use geometry::Zone;
pub use playfield::Playfield;
pub use side::Side;
pub use state::{GameResult, MatchState, Phase, ScoreColor, Scoreboard, TickReport};

mod ai;
mod ball;
pub mod constants;
mod engine;
mod frame;
mod geometry;
mod paddle;
mod playfield;
mod side;
mod state;

/// Sound cues emitted by the simulation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Cue {
    PaddleHit,
    Win,
    Lose,
}

/// Errors encountered while playing a [`Cue`]. They never stop the game.
#[derive(thiserror::Error, Debug)]
pub enum CueError {
    #[error("could not output the cue : {0}")]
    Io(#[from] io::Error),
}

/// Errors encountered while rendering a [`Frame`].
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("could not output the frame : {0}")]
    Io(#[from] io::Error),
}

/// Receives the presentational state of the match after each tick.
pub trait Renderer {
    fn render(&mut self, frame: &Frame) -> Result<(), RenderError>;
}

/// Plays sound cues.
pub trait CuePlayer {
    fn play(&mut self, cue: Cue) -> Result<(), CueError>;
}

/// Host input gathered between two ticks.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TickInput {
    /// The start gesture happened at least once.
    pub start_requested: bool,
    /// Last known vertical position of the pointer.
    pub pointer_y: Option<f64>,
}

/// A running game : the [`MatchState`] with everything needed to make it evolve.
pub struct Session<G, V, C> {
    state: MatchState,
    rng: G,
    renderer: V,
    cues: C,
}

impl<G, V, C> Session<G, V, C>
where
    G: Rng,
    V: Renderer,
    C: CuePlayer,
{
    /// Creates a [`Session`] on the menu.
    pub fn new(playfield: Playfield, mut rng: G, renderer: V, cues: C) -> Session<G, V, C> {
        Session {
            state: MatchState::new(playfield, &mut rng),
            rng,
            renderer,
            cues,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Apply the input, run one tick of simulation and render the result. Only rendering errors are returned.
    pub fn step(&mut self, input: TickInput) -> Result<TickReport, RenderError> {
        if input.start_requested {
            self.state.request_start(&mut self.rng);
        }
        if let Some(pointer_y) = input.pointer_y {
            self.state.place_human_pad(pointer_y);
        }
        let report = self.state.step(&mut self.rng, &mut self.cues);
        self.renderer.render(&self.state.frame())?;
        Ok(report)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Records every cue played.
    #[derive(Default)]
    pub struct RecordingCues(pub Vec<Cue>);

    impl CuePlayer for RecordingCues {
        fn play(&mut self, cue: Cue) -> Result<(), CueError> {
            self.0.push(cue);
            Ok(())
        }
    }

    /// Fails to play anything.
    pub struct FailingCues;

    impl CuePlayer for FailingCues {
        fn play(&mut self, _cue: Cue) -> Result<(), CueError> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "no audio device").into())
        }
    }

    /// Records every frame rendered.
    #[derive(Default)]
    pub struct RecordingRenderer(pub Vec<Frame>);

    impl Renderer for RecordingRenderer {
        fn render(&mut self, frame: &Frame) -> Result<(), RenderError> {
            self.0.push(*frame);
            Ok(())
        }
    }

    /// Fails to render anything.
    pub struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn render(&mut self, _frame: &Frame) -> Result<(), RenderError> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed").into())
        }
    }
}
