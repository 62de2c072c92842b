//! Implementation of the host communication protocol
//!
//! The host drives a session through text commands on standard input, parsed into [`HostCommand`]s. When asked to, the
//! session streams its output on standard output as CBOR messages : a [`PlayfieldMessage`] once, a [`FrameMessage`]
//! after each tick, and a [`CueMessage`] for each sound cue.
//!
//! The numeric codes used for enumerations in messages are all defined in the `codes` sub-mod.

pub use messages::command::HostCommand;
pub use messages::cue::CueMessage;
pub use messages::frame::FrameMessage;
pub use messages::playfield::PlayfieldMessage;

mod codes;
mod messages;
