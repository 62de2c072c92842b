//! Parsing of the text commands sent by the host on standard input.

use std::num::ParseFloatError;
use std::str::FromStr;

/// Errors encountered while parsing a host command line.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Empty command line")]
    Empty,

    #[error("Unknown command `{0}`")]
    UnknownCommand(String),

    /// This error happens when `pointer` is not followed by a position.
    #[error("Missing argument for `{0}`")]
    MissingArgument(&'static str),

    #[error("Trailing input after the command : `{0}`")]
    TrailingInput(String),

    #[error("Invalid number : {0}")]
    InvalidNumber(#[from] ParseFloatError),

    #[error("The pointer position must be finite")]
    NonFinite,
}

/// A command sent by the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HostCommand {
    /// The start gesture : a click on the playfield.
    Start,
    /// The pointer moved to the given vertical position, in playfield coordinates.
    Pointer(f64),
    /// Stop the session.
    Quit,
}

impl FromStr for HostCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = match words.next() {
            None => return Err(CommandError::Empty),
            Some("start") => HostCommand::Start,
            Some("quit") => HostCommand::Quit,
            Some("pointer") => {
                let y: f64 = words
                    .next()
                    .ok_or(CommandError::MissingArgument("pointer"))?
                    .parse()?;
                if !y.is_finite() {
                    return Err(CommandError::NonFinite);
                }
                HostCommand::Pointer(y)
            }
            Some(other) => return Err(CommandError::UnknownCommand(String::from(other))),
        };
        match words.next() {
            Some(extra) => Err(CommandError::TrailingInput(String::from(extra))),
            None => Ok(command),
        }
    }
}
