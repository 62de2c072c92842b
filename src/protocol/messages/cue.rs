//! Protocol-compliant serializable structure for sound cues.

use crate::game::Cue;

/// Structure representing the Cue Message, sent each time a sound cue is played.
#[derive(Copy, Clone)]
pub struct CueMessage {
    msg_id: u8,
    cue: u8,
}

impl CueMessage {
    pub fn new(cue: Cue) -> CueMessage {
        CueMessage {
            msg_id: 1,
            cue: cue.into(),
        }
    }
}

impl From<CueMessage> for Vec<u8> {
    fn from(value: CueMessage) -> Self {
        let mut bytes = Vec::new();
        ciborium::into_writer(&(value.msg_id, value.cue), &mut bytes)
            .expect("Could not serialize a CueMessage instance.");
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_layout() {
        let bytes = Vec::from(CueMessage::new(Cue::Lose));
        let decoded: (u8, u8) = ciborium::from_reader(bytes.as_slice()).unwrap();
        assert_eq!(decoded, (1, 2));
    }
}
