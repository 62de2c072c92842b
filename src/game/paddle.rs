//! Definition of the [`Paddle`] entity.

use crate::game::constants::{
    LEFT_PAD_X_RATIO, PAD_HEIGHT_RATIO, PAD_SPEED, PAD_WIDTH_RATIO, RIGHT_PAD_X2_RATIO,
};
use crate::game::geometry::Rect;
use crate::game::playfield::Playfield;
use crate::game::side::Side;

/// A vertical pad moving at a fixed speed. Every mutation clamps it so it never leaves the playfield.
#[derive(Clone, Debug)]
pub struct Paddle {
    rect: Rect,
    height: f64,
    speed: f64,
    max_y1: f64,
}

impl Paddle {
    /// Creates the [`Paddle`] of the given side, vertically centered.
    pub fn new(playfield: &Playfield, side: Side) -> Paddle {
        let width = playfield.width() * PAD_WIDTH_RATIO;
        let height = playfield.height() * PAD_HEIGHT_RATIO;
        let x1 = match side {
            Side::Left => playfield.width() * LEFT_PAD_X_RATIO,
            Side::Right => playfield.width() * RIGHT_PAD_X2_RATIO - width,
        };
        Paddle {
            rect: Rect::new(x1, (playfield.height() - height) / 2.0, width, height),
            height,
            speed: PAD_SPEED,
            max_y1: playfield.height() - height,
        }
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center_y(&self) -> f64 {
        self.rect.center_y()
    }

    pub fn move_up(&mut self) {
        self.set_y1(self.rect.y1 - self.speed);
    }

    pub fn move_down(&mut self) {
        self.set_y1(self.rect.y1 + self.speed);
    }

    /// Center the pad on the pointer's vertical position. Non-finite positions are ignored.
    pub fn place_centered_at(&mut self, pointer_y: f64) {
        if pointer_y.is_finite() {
            self.set_y1(pointer_y - self.height() / 2.0);
        }
    }

    fn set_y1(&mut self, y1: f64) {
        let y1 = y1.clamp(0.0, self.max_y1);
        self.rect = Rect::new(self.rect.x1, y1, self.rect.width(), self.height);
        debug_assert!(self.rect.y1 >= 0.0 && self.rect.y1 <= self.max_y1);
    }

    #[cfg(test)]
    pub(crate) fn place_for_test(&mut self, y1: f64, speed: f64) {
        self.speed = speed;
        self.set_y1(y1);
    }
}
