//! Axis-aligned rectangles and the overlap predicates used to detect ball-pad collisions.
//!
//! A pad's bounding box is split in three zones, tested in this order :
//! * the top zone, hit when the ball's vertical center is above the pad's top edge plus half a ball width,
//! * the bottom zone, hit when the ball's vertical center is below the pad's bottom edge minus half a ball width,
//! * the face, which is every other overlapping position.
//!
//! The zones are narrow bands around the pad's corners, and every overlapping position belongs to exactly one of them.

/// An axis-aligned rectangle given by its top-left `(x1, y1)` and bottom-right `(x2, y2)` corners.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    pub fn new(x1: f64, y1: f64, width: f64, height: f64) -> Rect {
        Rect {
            x1,
            y1,
            x2: x1 + width,
            y2: y1 + height,
        }
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn center_y(&self) -> f64 {
        (self.y1 + self.y2) / 2.0
    }

    /// Compute whether both rectangles overlap. Touching edges count as an overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }
}

/// The zone of a pad hit by the ball.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Zone {
    Top,
    Bottom,
    Face,
}

/// Half-height of the corner bands, which depends on the size of the (square) ball.
fn corner_band(ball: &Rect) -> f64 {
    ball.width() / 2.0
}

pub fn is_colliding_top(ball: &Rect, pad: &Rect) -> bool {
    ball.overlaps(pad) && ball.center_y() < pad.y1 + corner_band(ball)
}

pub fn is_colliding_bottom(ball: &Rect, pad: &Rect) -> bool {
    ball.overlaps(pad) && ball.center_y() > pad.y2 - corner_band(ball)
}

pub fn is_colliding_face(ball: &Rect, pad: &Rect) -> bool {
    ball.overlaps(pad) && !is_colliding_top(ball, pad) && !is_colliding_bottom(ball, pad)
}

/// Classify the collision of the ball with the pad, biasing corner overlaps toward the top and bottom zones.
pub fn collision_zone(ball: &Rect, pad: &Rect) -> Option<Zone> {
    if is_colliding_top(ball, pad) {
        Some(Zone::Top)
    } else if is_colliding_bottom(ball, pad) {
        Some(Zone::Bottom)
    } else if is_colliding_face(ball, pad) {
        Some(Zone::Face)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAD: Rect = Rect {
        x1: 100.0,
        y1: 200.0,
        x2: 118.0,
        y2: 272.0,
    };

    fn ball_at(x1: f64, y1: f64) -> Rect {
        Rect::new(x1, y1, 16.0, 16.0)
    }

    #[test]
    fn rect_accessors() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!((rect.x2, rect.y2), (40.0, 60.0));
        assert_eq!((rect.width(), rect.height()), (30.0, 40.0));
        assert_eq!(rect.center_y(), 40.0);
    }

    #[test]
    fn overlap() {
        assert!(ball_at(110.0, 230.0).overlaps(&PAD));
        assert!(ball_at(118.0, 230.0).overlaps(&PAD));
        assert!(!ball_at(118.5, 230.0).overlaps(&PAD));
        assert!(!ball_at(110.0, 180.0).overlaps(&PAD));
    }

    #[test]
    fn zones() {
        assert_eq!(collision_zone(&ball_at(110.0, 190.0), &PAD), Some(Zone::Top));
        assert_eq!(collision_zone(&ball_at(110.0, 262.0), &PAD), Some(Zone::Bottom));
        assert_eq!(collision_zone(&ball_at(110.0, 230.0), &PAD), Some(Zone::Face));
        assert_eq!(collision_zone(&ball_at(50.0, 230.0), &PAD), None);
    }

    #[test]
    fn zones_partition_every_overlap() {
        let mut y1 = PAD.y1 - 16.0;
        while y1 <= PAD.y2 {
            let ball = ball_at(110.0, y1);
            let hits = [
                is_colliding_top(&ball, &PAD),
                is_colliding_bottom(&ball, &PAD),
                is_colliding_face(&ball, &PAD),
            ];
            assert_eq!(hits.iter().filter(|&&h| h).count(), 1, "at y1 = {y1}");
            y1 += 0.25;
        }
    }

    #[test]
    fn corner_bands_are_narrow() {
        // Ball center 1 px inside the pad's top edge plus band : face.
        assert_eq!(collision_zone(&ball_at(110.0, 201.0), &PAD), Some(Zone::Face));
        // Ball center exactly on the band limit belongs to the face.
        assert_eq!(collision_zone(&ball_at(110.0, 200.0), &PAD), Some(Zone::Face));
        assert_eq!(collision_zone(&ball_at(110.0, 199.5), &PAD), Some(Zone::Top));
    }
}
