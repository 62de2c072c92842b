//! Implementation of the randomness, collisions and reflections needed to run a game.
//!
//! Collisions are classified by pure functions ([`wall_collision`], [`pad_collision`]), and the resulting bounces are
//! applied to the ball by [`bounce_off_wall`] and [`bounce_off_pad`]. Scoring, serving and cues are left to the caller.

use rand::Rng;

use crate::game::ball::Ball;
use crate::game::geometry::{collision_zone, Zone};
use crate::game::paddle::Paddle;
use crate::game::playfield::Playfield;
use crate::game::side::Side;

/// Situations in which the ball is served, each allowing its own set of angles.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ServeContext {
    /// Any of the four diagonals.
    MatchStart,
    /// The left player scored : the ball leaves rightward.
    AfterPlayerOneScore,
    /// The right player scored : the ball leaves leftward.
    AfterPlayerTwoScore,
}

impl ServeContext {
    pub fn candidate_angles(self) -> &'static [f64] {
        match self {
            Self::MatchStart => &[45.0, 315.0, 135.0, 225.0],
            Self::AfterPlayerOneScore => &[45.0, 315.0],
            Self::AfterPlayerTwoScore => &[135.0, 225.0],
        }
    }

    /// Uniformly pick one of the candidate angles using the given random number generator.
    pub fn pick_angle<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        let candidates = self.candidate_angles();
        candidates[rng.gen_range(0..candidates.len())]
    }
}

/// Bring an angle in degrees back into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let angle = angle.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if angle >= 360.0 {
        0.0
    } else {
        angle
    }
}

/// A wall the ball went through.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WallHit {
    /// The wall behind the pad of the given side : the opposite side scores.
    SideWall(Side),
    /// The top or bottom wall.
    HorizontalWall,
}

/// Computes whether the ball went through one of the walls. Side walls take priority over horizontal ones, and the
/// right wall over the left one.
pub fn wall_collision(ball: &Ball, playfield: &Playfield) -> Option<WallHit> {
    let rect = ball.rect();
    if rect.x2 > playfield.width() {
        Some(WallHit::SideWall(Side::Right))
    } else if rect.x1 < 0.0 {
        Some(WallHit::SideWall(Side::Left))
    } else if rect.y2 > playfield.height() || rect.y1 < 0.0 {
        Some(WallHit::HorizontalWall)
    } else {
        None
    }
}

/// A hit of the ball on a pad.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PadHit {
    pub side: Side,
    pub zone: Zone,
}

/// Computes whether the ball hits the pad it is heading toward. The other pad is ignored, so that a ball bouncing off
/// a pad's face cannot hit it again on the next tick.
pub fn pad_collision(ball: &Ball, pads: &[Paddle; 2]) -> Option<PadHit> {
    let side = ball.heading()?;
    collision_zone(ball.rect(), pads[side].rect()).map(|zone| PadHit { side, zone })
}

/// Reflect the ball's angle off the given wall.
pub fn bounce_off_wall(ball: &mut Ball, wall: WallHit) {
    let angle = match wall {
        WallHit::SideWall(_) => 180.0 - ball.angle(),
        WallHit::HorizontalWall => 360.0 - ball.angle(),
    };
    ball.set_angle(angle);
}

/// Deflect the ball off the given pad zone, counting one more trip.
pub fn bounce_off_pad(ball: &mut Ball, zone: Zone) {
    let angle = match zone {
        Zone::Top => 90.0 + ball.angle(),
        Zone::Bottom => ball.angle() - 90.0,
        Zone::Face => 180.0 - ball.angle(),
    };
    ball.set_angle(angle);
    ball.add_trip();
}
