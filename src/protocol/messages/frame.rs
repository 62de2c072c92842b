//! Protocol-compliant serializable structure describing a rendered tick.

use crate::game::{Frame, Rect};

/// Structure representing the Frame Message, sent after every tick.
///
/// Rectangles are serialized as `[x1, y1, x2, y2]`, the pads ordered left then right. Scores are `null` on the menu.
#[derive(Copy, Clone)]
pub struct FrameMessage {
    msg_id: u8,
    phase: u8,
    banner: Option<u8>,
    ball: [f64; 4],
    pads: [[f64; 4]; 2],
    scores: Option<[u32; 2]>,
    score_colors: [u8; 2],
}

impl FrameMessage {
    pub fn new(frame: &Frame) -> FrameMessage {
        FrameMessage {
            msg_id: 0,
            phase: frame.phase.into(),
            banner: frame.banner.map(u8::from),
            ball: corners(&frame.ball),
            pads: frame.pads.each_ref().map(corners),
            scores: frame.scores,
            score_colors: frame.score_colors.map(u8::from),
        }
    }
}

fn corners(rect: &Rect) -> [f64; 4] {
    [rect.x1, rect.y1, rect.x2, rect.y2]
}

impl From<FrameMessage> for Vec<u8> {
    fn from(value: FrameMessage) -> Self {
        let mut bytes = Vec::new();
        ciborium::into_writer(
            &(
                value.msg_id,
                value.phase,
                value.banner,
                value.ball,
                value.pads,
                value.scores,
                value.score_colors,
            ),
            &mut bytes,
        )
        .expect("Could not serialize a FrameMessage instance.");
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Banner, Phase, ScoreColor};

    type Decoded = (
        u8,
        u8,
        Option<u8>,
        [f64; 4],
        [[f64; 4]; 2],
        Option<[u32; 2]>,
        [u8; 2],
    );

    fn frame() -> Frame {
        Frame {
            phase: Phase::Game,
            banner: None,
            ball: Rect::new(10.0, 20.0, 12.0, 12.0),
            pads: [
                Rect::new(100.0, 0.0, 14.0, 80.0),
                Rect::new(886.0, 720.0, 14.0, 80.0),
            ],
            scores: Some([9, 3]),
            score_colors: [ScoreColor::Highlight, ScoreColor::Normal],
        }
    }

    #[test]
    fn frame_layout() {
        let bytes = Vec::from(FrameMessage::new(&frame()));
        let decoded: Decoded = ciborium::from_reader(bytes.as_slice()).unwrap();
        assert_eq!(
            decoded,
            (
                0,
                1,
                None,
                [10.0, 20.0, 22.0, 32.0],
                [[100.0, 0.0, 114.0, 80.0], [886.0, 720.0, 900.0, 800.0]],
                Some([9, 3]),
                [1, 0],
            )
        );
    }

    #[test]
    fn menu_frame_has_a_banner_and_no_scores() {
        let frame = Frame {
            phase: Phase::Menu,
            banner: Some(Banner::Title),
            scores: None,
            score_colors: [ScoreColor::Normal; 2],
            ..frame()
        };
        let bytes = Vec::from(FrameMessage::new(&frame));
        let decoded: Decoded = ciborium::from_reader(bytes.as_slice()).unwrap();
        assert_eq!(decoded.1, 0);
        assert_eq!(decoded.2, Some(0));
        assert_eq!(decoded.5, None);
    }
}
