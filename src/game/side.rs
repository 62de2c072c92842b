//! Definition of the [`Side`] structure.

use std::ops::{Index, IndexMut, Not};

/// Enumeration symbolizing sides of the playfield : left or right.
///
/// The left side belongs to paddle one, which is always driven by the AI. The right side belongs to paddle two, driven
/// by the human during a match and by the AI otherwise.
///
/// The [`Not`] trait is implemented to support inversion using `!s` syntax, and `[T; 2]` can be indexed by a [`Side`].
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The side the ball travels toward when its horizontal velocity is `dx`, if it travels horizontally at all.
    pub fn from_direction(dx: f64) -> Option<Side> {
        if dx < 0.0 {
            Some(Side::Left)
        } else if dx > 0.0 {
            Some(Side::Right)
        } else {
            None
        }
    }
}

impl Not for Side {
    type Output = Side;
    fn not(self) -> Self::Output {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl<T> Index<Side> for [T; 2] {
    type Output = T;
    fn index(&self, side: Side) -> &T {
        match side {
            Side::Left => &self[0],
            Side::Right => &self[1],
        }
    }
}

impl<T> IndexMut<Side> for [T; 2] {
    fn index_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Left => &mut self[0],
            Side::Right => &mut self[1],
        }
    }
}
