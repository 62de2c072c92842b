//! Glue between the session and the process' standard streams.

use std::io::Write;
use std::mem;
use std::ops::ControlFlow;

use crate::game::{
    Cue, CueError, CuePlayer, Frame, GameResult, Playfield, RenderError, Renderer, Scoreboard, Side, TickInput,
    TickReport, WallHit,
};
use crate::protocol::{CueMessage, FrameMessage, HostCommand, PlayfieldMessage};

/// Renderer streaming frames as CBOR [`FrameMessage`]s, or dropping them.
pub enum FrameSink<W> {
    Discard,
    Cbor(W),
}

impl<W: Write> FrameSink<W> {
    /// Send the static description of the playfield, ahead of the first frame.
    pub fn describe_playfield(&mut self, playfield: &Playfield) -> Result<(), RenderError> {
        if let FrameSink::Cbor(out) = self {
            out.write_all(&Vec::from(PlayfieldMessage::new(playfield)))?;
            out.flush()?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for FrameSink<W> {
    fn render(&mut self, frame: &Frame) -> Result<(), RenderError> {
        if let FrameSink::Cbor(out) = self {
            out.write_all(&Vec::from(FrameMessage::new(frame)))?;
            out.flush()?;
        }
        Ok(())
    }
}

/// Cue player logging cues, and streaming them as CBOR [`CueMessage`]s when given an output.
pub struct CueSink<W> {
    out: Option<W>,
}

impl<W> CueSink<W> {
    pub fn new(out: Option<W>) -> CueSink<W> {
        CueSink { out }
    }
}

impl<W: Write> CuePlayer for CueSink<W> {
    fn play(&mut self, cue: Cue) -> Result<(), CueError> {
        log::debug!("Cue : {cue:?}.");
        if let Some(out) = &mut self.out {
            out.write_all(&Vec::from(CueMessage::new(cue)))?;
            out.flush()?;
        }
        Ok(())
    }
}

/// Gathers host commands between two ticks.
#[derive(Default)]
pub struct InputBuffer {
    pending: TickInput,
}

impl InputBuffer {
    /// Record a command for the next tick. Breaks on [`HostCommand::Quit`].
    pub fn push(&mut self, command: HostCommand) -> ControlFlow<()> {
        match command {
            HostCommand::Start => self.pending.start_requested = true,
            HostCommand::Pointer(y) => self.pending.pointer_y = Some(y),
            HostCommand::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Hand over everything gathered since the last call.
    pub fn take(&mut self) -> TickInput {
        mem::take(&mut self.pending)
    }
}

/// Running totals of a session, fed with the report of every tick.
#[derive(Default)]
pub struct SessionTally {
    pad_hits: [u64; 2],
    wall_bounces: u64,
    points: [u32; 2],
    results: Vec<GameResult>,
}

impl SessionTally {
    /// Account for a tick, logging points with the current score and finished matches.
    pub fn record(&mut self, report: &TickReport, scoreboard: &Scoreboard) {
        if let Some(hit) = report.pad_hit {
            self.pad_hits[hit.side] += 1;
        }
        if let Some(WallHit::HorizontalWall) = report.wall_hit {
            self.wall_bounces += 1;
        }
        if let Some(scorer) = report.point {
            self.points[scorer] += 1;
            let [left, right] = [Side::Left, Side::Right].map(|side| {
                let color = scoreboard.color(side).css();
                format!("{} ({color})", scoreboard.score(side))
            });
            log::info!("Point for the {scorer:?} side : {left} - {right}.");
        }
        if let Some(result) = &report.finished {
            let [left, right] = result.score;
            let outcome = if result.human_won() { "won" } else { "lost" };
            log::info!("The player {outcome} the match, {left}-{right}.");
            self.results.push(result.clone());
        }
    }

    pub fn log_summary(&self) {
        let wins = self.results.iter().filter(|r| r.human_won()).count();
        log::info!(
            "Session totals : {} matches ({wins} won), {}-{} points, {}/{} pad hits, {} wall bounces.",
            self.results.len(),
            self.points[Side::Left],
            self.points[Side::Right],
            self.pad_hits[Side::Left],
            self.pad_hits[Side::Right],
            self.wall_bounces
        );
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::game::{PadHit, Phase, Rect, ScoreColor, Zone};

    /// Writer whose every write fails.
    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn frame() -> Frame {
        Frame {
            phase: Phase::Menu,
            banner: None,
            ball: Rect::new(0.0, 0.0, 1.0, 1.0),
            pads: [Rect::new(0.0, 0.0, 1.0, 1.0); 2],
            scores: None,
            score_colors: [ScoreColor::Normal; 2],
        }
    }

    #[test]
    fn input_is_taken_once() {
        let mut buffer = InputBuffer::default();
        assert_eq!(buffer.push(HostCommand::Pointer(10.0)), ControlFlow::Continue(()));
        assert_eq!(buffer.push(HostCommand::Start), ControlFlow::Continue(()));
        assert_eq!(buffer.push(HostCommand::Pointer(30.0)), ControlFlow::Continue(()));
        assert_eq!(
            buffer.take(),
            TickInput {
                start_requested: true,
                pointer_y: Some(30.0)
            }
        );
        assert_eq!(buffer.take(), TickInput::default());
        assert_eq!(buffer.push(HostCommand::Quit), ControlFlow::Break(()));
    }

    #[test]
    fn frames_are_streamed() {
        let mut sink = FrameSink::Cbor(Vec::new());
        sink.render(&frame()).unwrap();
        sink.render(&frame()).unwrap();
        let FrameSink::Cbor(bytes) = sink else {
            unreachable!()
        };
        assert_eq!(bytes.len(), 2 * Vec::from(FrameMessage::new(&frame())).len());
    }

    #[test]
    fn playfield_comes_first() {
        let playfield = Playfield::new(1280.0, 720.0).unwrap();
        let mut sink = FrameSink::Cbor(Vec::new());
        sink.describe_playfield(&playfield).unwrap();
        sink.render(&frame()).unwrap();
        let FrameSink::Cbor(bytes) = sink else {
            unreachable!()
        };
        let description = Vec::from(PlayfieldMessage::new(&playfield));
        assert!(bytes.starts_with(&description));
        assert_eq!(&bytes[description.len()..], Vec::from(FrameMessage::new(&frame())));
    }

    #[test]
    fn discarding_never_fails() {
        let mut sink = FrameSink::<Closed>::Discard;
        assert!(sink.render(&frame()).is_ok());
        assert!(FrameSink::Cbor(Closed).render(&frame()).is_err());
    }

    #[test]
    fn cues_are_streamed() {
        let mut sink = CueSink::new(Some(Vec::new()));
        sink.play(Cue::Win).unwrap();
        assert_eq!(sink.out, Some(Vec::from(CueMessage::new(Cue::Win))));
        assert!(CueSink::new(Some(Closed)).play(Cue::Lose).is_err());
        assert!(CueSink::<Closed>::new(None).play(Cue::Lose).is_ok());
    }

    #[test]
    fn tally_accounts_for_reports() {
        let scoreboard = Scoreboard::new();
        let mut tally = SessionTally::default();
        tally.record(
            &TickReport {
                wall_hit: Some(WallHit::HorizontalWall),
                pad_hit: Some(PadHit {
                    side: Side::Right,
                    zone: Zone::Face,
                }),
                ..TickReport::default()
            },
            &scoreboard,
        );
        tally.record(
            &TickReport {
                wall_hit: Some(WallHit::SideWall(Side::Right)),
                point: Some(Side::Left),
                ..TickReport::default()
            },
            &scoreboard,
        );
        tally.record(&TickReport::default(), &scoreboard);
        assert_eq!(tally.pad_hits, [0, 1]);
        assert_eq!(tally.wall_bounces, 1);
        assert_eq!(tally.points, [1, 0]);
        assert!(tally.results.is_empty());
    }

    #[test]
    fn tally_keeps_finished_matches() {
        let mut tally = SessionTally::default();
        let result = GameResult {
            score: [7, 10],
            winner: Side::Right,
        };
        tally.record(
            &TickReport {
                point: Some(Side::Right),
                finished: Some(result.clone()),
                ..TickReport::default()
            },
            &Scoreboard::new(),
        );
        assert_eq!(tally.results, vec![result]);
        assert_eq!(tally.points, [0, 1]);
        tally.log_summary();
    }
}
