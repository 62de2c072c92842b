//! Definition of the [`Ball`] entity.

use rand::Rng;

use crate::game::constants::{
    BALL_DEFAULT_SPEED, BALL_SPEED_LIMIT, BALL_WIDTH_RATIO, SERVE_MARGIN_IN_BALL_WIDTHS,
};
use crate::game::engine::{normalize_degrees, ServeContext};
use crate::game::geometry::Rect;
use crate::game::playfield::Playfield;
use crate::game::side::Side;

/// The square ball, its direction in degrees and its speed in pixels per tick.
///
/// `trips` counts pad hits since the last serve, starting at 1. Whenever it is even the ball speeds up by one, which
/// makes the count odd again : the ball gets faster every other pad hit, up to [`BALL_SPEED_LIMIT`].
#[derive(Clone, Debug)]
pub struct Ball {
    rect: Rect,
    width: f64,
    angle: f64,
    speed: f64,
    trips: u32,
    velocity: (f64, f64),
}

impl Ball {
    /// Creates a [`Ball`] sized after the playfield and served according to `context`.
    pub fn new<R: Rng + ?Sized>(playfield: &Playfield, context: ServeContext, rng: &mut R) -> Ball {
        let width = playfield.width() * BALL_WIDTH_RATIO;
        let mut ball = Ball {
            rect: Rect::new(0.0, 0.0, width, width),
            width,
            angle: 0.0,
            speed: BALL_DEFAULT_SPEED,
            trips: 1,
            velocity: (0.0, 0.0),
        };
        ball.serve(playfield, context, rng);
        ball
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    #[cfg(test)]
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[cfg(test)]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn trips(&self) -> u32 {
        self.trips
    }

    /// The side the ball moved toward during the last [`Ball::advance`].
    pub fn heading(&self) -> Option<Side> {
        Side::from_direction(self.velocity.0)
    }

    /// Move the ball by one tick's worth of velocity, speeding it up beforehand for the next tick if needed.
    pub fn advance(&mut self) {
        let radians = self.angle.to_radians();
        self.velocity = (radians.cos() * self.speed, radians.sin() * self.speed);

        if self.trips % 2 == 0 && self.speed < BALL_SPEED_LIMIT {
            self.trips += 1;
            self.speed = f64::min(self.speed + 1.0, BALL_SPEED_LIMIT);
        }
        debug_assert!((BALL_DEFAULT_SPEED..=BALL_SPEED_LIMIT).contains(&self.speed));

        self.move_to(self.rect.x1 + self.velocity.0, self.rect.y1 + self.velocity.1);
    }

    fn move_to(&mut self, x1: f64, y1: f64) {
        self.rect = Rect::new(x1, y1, self.width, self.width);
    }

    pub(super) fn set_angle(&mut self, angle: f64) {
        self.angle = normalize_degrees(angle);
    }

    pub(super) fn add_trip(&mut self) {
        self.trips += 1;
    }

    /// Pick a new direction among the angles allowed by `context`, and slow the ball down to its default speed.
    pub fn reset_angle<R: Rng + ?Sized>(&mut self, context: ServeContext, rng: &mut R) {
        self.trips = 1;
        self.speed = BALL_DEFAULT_SPEED;
        self.angle = context.pick_angle(rng);
    }

    /// Place the ball on the vertical middle line, at a random height keeping it away from the horizontal walls.
    pub fn reset_position<R: Rng + ?Sized>(&mut self, playfield: &Playfield, rng: &mut R) {
        let margin = SERVE_MARGIN_IN_BALL_WIDTHS * self.width;
        let y1 = rng.gen_range(margin..=playfield.height() - margin);
        self.move_to((playfield.width() - self.width) / 2.0, y1);
    }

    pub fn serve<R: Rng + ?Sized>(
        &mut self,
        playfield: &Playfield,
        context: ServeContext,
        rng: &mut R,
    ) {
        self.reset_angle(context, rng);
        self.reset_position(playfield, rng);
        log::debug!(
            "Served the ball ({context:?}) at y = {:.1} with an angle of {}°.",
            self.rect.y1,
            self.angle
        );
    }

    #[cfg(test)]
    pub(crate) fn place_for_test(&mut self, x1: f64, y1: f64, angle: f64, speed: f64) {
        self.move_to(x1, y1);
        self.angle = angle;
        self.speed = speed;
    }

    #[cfg(test)]
    pub(crate) fn set_trips_for_test(&mut self, trips: u32) {
        self.trips = trips;
    }
}
