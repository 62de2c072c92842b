//! Dimensions of the area the game is played on.

use crate::game::constants::{
    BALL_WIDTH_RATIO, DIVIDER_DASH_HEIGHT, DIVIDER_DASH_STEP, DIVIDER_DASH_WIDTH, DIVIDER_X_OFFSET,
    SERVE_MARGIN_IN_BALL_WIDTHS,
};
use crate::game::geometry::Rect;

/// Errors encountered when validating playfield dimensions.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PlayfieldError {
    #[error("playfield dimensions must be finite and positive - got {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    /// Serves place the ball at least 5 ball widths away from both horizontal walls, which needs some room.
    #[error("playfield height {height} leaves no room to serve a ball of width {ball_width}")]
    NoServeRoom { height: f64, ball_width: f64 },
}

/// Immutable dimensions of the playfield, in pixels. Origin is the top-left corner, y grows downward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Playfield {
    width: f64,
    height: f64,
}

impl Playfield {
    /// Create a new [`Playfield`], checking that the game can be played on it.
    pub fn new(width: f64, height: f64) -> Result<Playfield, PlayfieldError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(PlayfieldError::InvalidDimensions { width, height });
        }
        let ball_width = width * BALL_WIDTH_RATIO;
        if height < 2.0 * SERVE_MARGIN_IN_BALL_WIDTHS * ball_width {
            return Err(PlayfieldError::NoServeRoom { height, ball_width });
        }
        Ok(Playfield { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn mid_y(&self) -> f64 {
        self.height / 2.0
    }

    /// The dashes of the center divider, top to bottom.
    pub fn divider_dashes(&self) -> impl Iterator<Item = Rect> + '_ {
        let x1 = (self.width - DIVIDER_X_OFFSET) / 2.0;
        std::iter::successors(Some(0.0), |y| Some(y + DIVIDER_DASH_STEP))
            .take_while(move |&y| y < self.height + DIVIDER_DASH_HEIGHT)
            .map(move |y1| Rect::new(x1, y1, DIVIDER_DASH_WIDTH, DIVIDER_DASH_HEIGHT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_dimensions() {
        let playfield = Playfield::new(1280.0, 720.0).unwrap();
        assert_eq!(playfield.width(), 1280.0);
        assert_eq!(playfield.height(), 720.0);
        assert_eq!(playfield.mid_y(), 360.0);
    }

    #[test]
    fn invalid_dimensions() {
        assert!(matches!(
            Playfield::new(0.0, 720.0),
            Err(PlayfieldError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Playfield::new(1280.0, f64::NAN),
            Err(PlayfieldError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Playfield::new(-5.0, 720.0),
            Err(PlayfieldError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn too_flat_to_serve() {
        // Ball is 12 px wide, serves need 120 px of height.
        assert!(matches!(
            Playfield::new(1000.0, 100.0),
            Err(PlayfieldError::NoServeRoom { .. })
        ));
        assert!(Playfield::new(1000.0, 120.0).is_ok());
    }

    #[test]
    fn divider_covers_height() {
        let playfield = Playfield::new(1000.0, 200.0).unwrap();
        let dashes: Vec<Rect> = playfield.divider_dashes().collect();
        assert_eq!(dashes.len(), 5);
        assert_eq!(dashes[0].x1, 497.5);
        assert_eq!(dashes[4].y1, 200.0);
        assert!(dashes.iter().all(|d| d.width() == 10.0 && d.height() == 20.0));
    }
}
