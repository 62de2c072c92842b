//! Rule-based opponent driving a pad.
//!
//! The pad tracks the ball while it approaches, and drifts back toward the playfield's vertical middle while it
//! recedes. A dead zone around the middle keeps a recentering pad from oscillating.

use crate::game::ball::Ball;
use crate::game::constants::RECENTER_DEAD_ZONE;
use crate::game::paddle::Paddle;
use crate::game::playfield::Playfield;
use crate::game::side::Side;

/// The movement chosen for a pad on a tick.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PadMove {
    Up,
    Down,
    Stay,
}

/// Choose the movement of the pad of the given side.
pub fn decide(pad: &Paddle, side: Side, ball: &Ball, playfield: &Playfield) -> PadMove {
    match ball.heading() {
        Some(heading) if heading == side => track(pad, ball),
        Some(_) => recenter(pad, playfield),
        None => PadMove::Stay,
    }
}

/// Follow the ball : move toward it when it is entirely above or below the pad's center.
fn track(pad: &Paddle, ball: &Ball) -> PadMove {
    let center_y = pad.center_y();
    if ball.rect().y2 < center_y {
        PadMove::Up
    } else if ball.rect().y1 > center_y {
        PadMove::Down
    } else {
        PadMove::Stay
    }
}

/// Move back toward the middle, unless the pad's center is within [`RECENTER_DEAD_ZONE`] of it.
fn recenter(pad: &Paddle, playfield: &Playfield) -> PadMove {
    let dy = pad.center_y() - playfield.mid_y();
    if dy > RECENTER_DEAD_ZONE {
        PadMove::Up
    } else if dy < -RECENTER_DEAD_ZONE {
        PadMove::Down
    } else {
        PadMove::Stay
    }
}

/// Apply the movement chosen by [`decide`].
pub fn drive(pad: &mut Paddle, side: Side, ball: &Ball, playfield: &Playfield) {
    match decide(pad, side, ball, playfield) {
        PadMove::Up => pad.move_up(),
        PadMove::Down => pad.move_down(),
        PadMove::Stay => {}
    }
}
