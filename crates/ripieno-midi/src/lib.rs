//! MIDI intake for Ripieno.
//!
//! Turns raw MIDI bytes into keying events and routes them onto a solenoid
//! rank:
//!
//! - **[`NoteEvent`]** - Keying events distilled from channel voice and
//!   channel mode messages
//! - **[`Compass`]** - The window of notes a rank sounds, with octave folding
//! - **[`NoteDispatcher`]** - Channel filtering and rank dispatch
//!
//! # Example
//!
//! ```ignore
//! use ripieno_midi::{Compass, NoteDispatcher};
//!
//! let dispatcher = NoteDispatcher::new(Compass::new(60, 49)?, None);
//! dispatcher.apply_bytes(&[0x90, 60, 100], &mut rank)?;
//! ```

// Error types
pub mod error;
pub use error::{Error, Result};

mod event;
pub use event::{NoteEvent, NoteKind};

mod dispatch;
pub use dispatch::{Compass, DispatchResult, NoteDispatcher};

// Re-export essential upstream types (users shouldn't need to import midi-msg directly)
pub use midi_msg::{Channel, ChannelModeMsg, ChannelVoiceMsg, MidiMsg};
