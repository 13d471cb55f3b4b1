//! # Ripieno - Solenoid Pipe Organ Control
//!
//! Complete control stack for a rank of solenoid-actuated organ pipes.
//!
//! ## Architecture
//!
//! Ripieno is an umbrella crate that coordinates:
//! - **ripieno-core** - Rank scheduling (drive states, strike timing, PWM duties)
//! - **ripieno-midi** - MIDI intake (keying events, compass folding, dispatch)
//!
//! A [`Console`] ties one rank to one event intake. Keying can arrive at any
//! time; drive states move only on [`Console::tick`], so the electrical
//! behavior is the same whether events come from a hardware UART callback or
//! a test feeding bytes by hand.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ripieno::prelude::*;
//!
//! let mut console = Console::builder()
//!     .solenoids(49)
//!     .strike_ms(50)
//!     .build()?;
//!
//! // MIDI receive path
//! console.handle_midi(&[0x90, 60, 100])?;
//!
//! // Scheduling loop, every few milliseconds
//! console.tick();
//! let mut duties = [0u8; 49];
//! console.write_duties(&mut duties);
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - Rank control keyed over MIDI
//! - `midi` - MIDI intake (disable for a bare index-keyed rank)

/// Re-export of ripieno-core for direct access
pub use ripieno_core as core;

// Core types
pub use ripieno_core::{
    // Rank scheduling
    DriveState,
    DutyTable,
    IntervalTimer,
    Millis,
    NoteEdge,
    Rank,
    RankConfig,
    Solenoid,

    // Duty constants
    DEFAULT_HOLD_DUTY,
    MAX_DUTY,
    OFF_DUTY,
};

// MIDI subsystem
#[cfg(feature = "midi")]
pub use ripieno_midi as midi;

#[cfg(feature = "midi")]
pub use ripieno_midi::{Compass, DispatchResult, NoteDispatcher, NoteEvent, NoteKind};

mod error;
pub use error::{Error, Result};

mod builder;
mod engine;

pub use builder::ConsoleBuilder;
pub use engine::Console;

/// Convenience prelude for common imports
pub mod prelude {
    // Main console
    pub use crate::{Console, ConsoleBuilder};

    // Essential types
    pub use crate::core::{DriveState, NoteEdge, Rank, RankConfig};

    // MIDI
    #[cfg(feature = "midi")]
    pub use crate::midi::{Compass, DispatchResult, NoteEvent, NoteKind};
}
