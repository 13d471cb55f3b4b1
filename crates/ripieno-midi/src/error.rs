//! Error types for the MIDI intake subsystem.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("MIDI parse error: {0}")]
    MidiParse(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl From<midi_msg::ParseError> for Error {
    fn from(e: midi_msg::ParseError) -> Self {
        Error::MidiParse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
