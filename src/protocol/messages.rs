pub mod command;
pub mod cue;
pub mod frame;
pub mod playfield;
