//! Protocol-compliant serializable structure describing the static parts of the playfield.

use crate::game::Playfield;

/// Structure representing the Playfield Message, sent once before the first frame. Divider dashes are serialized as
/// `[x1, y1, x2, y2]`, top to bottom.
#[derive(Clone)]
pub struct PlayfieldMessage {
    msg_id: u8,
    width: f64,
    height: f64,
    divider: Vec<[f64; 4]>,
}

impl PlayfieldMessage {
    pub fn new(playfield: &Playfield) -> PlayfieldMessage {
        PlayfieldMessage {
            msg_id: 2,
            width: playfield.width(),
            height: playfield.height(),
            divider: playfield
                .divider_dashes()
                .map(|dash| [dash.x1, dash.y1, dash.x2, dash.y2])
                .collect(),
        }
    }
}

impl From<PlayfieldMessage> for Vec<u8> {
    fn from(value: PlayfieldMessage) -> Self {
        let mut bytes = Vec::new();
        ciborium::into_writer(
            &(value.msg_id, value.width, value.height, value.divider),
            &mut bytes,
        )
        .expect("Could not serialize a PlayfieldMessage instance.");
        bytes
    }
}
