//! Centralized error type for the ripieno umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] ripieno_core::Error),

    #[cfg(feature = "midi")]
    #[error("MIDI: {0}")]
    Midi(#[from] ripieno_midi::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
