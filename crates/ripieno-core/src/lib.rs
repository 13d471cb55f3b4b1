//! Solenoid rank control for Ripieno.
//!
//! Tracks the drive state of the electromechanical valves behind a rank of
//! organ pipes:
//!
//! - **[`Rank`]** - A bank of solenoids serviced by one scheduling loop
//! - **[`Solenoid`]** - Per-actuator state machine (off / strike / hold)
//! - **[`DutyTable`]** - Drive-state to PWM duty mapping
//! - **[`IntervalTimer`]** - Strike pulse timing against a caller-supplied clock
//! - **[`RankConfig`]** - Validated rank construction parameters
//!
//! Everything here is synchronous and allocation-free after construction;
//! time enters only as the `now` argument the caller passes in, so the same
//! code runs under a hardware timer interrupt or a test harness.
//!
//! # Quick Start
//!
//! ```ignore
//! use ripieno_core::{Rank, RankConfig};
//!
//! let mut rank = Rank::new(&RankConfig::default())?;
//!
//! rank.note_on(24);       // intake, from the event source
//! rank.service(now_ms);   // once per scheduling tick
//!
//! let mut duties = [0u8; 49];
//! rank.write_duties(&mut duties);
//! ```

pub mod error;
pub use error::{Error, Result};

mod config;
pub use config::{RankConfig, DEFAULT_SOLENOIDS, DEFAULT_STRIKE_MS};

mod duty;
pub use duty::{DutyTable, DEFAULT_HOLD_DUTY, MAX_DUTY, OFF_DUTY};

mod rank;
pub use rank::Rank;

mod solenoid;
pub use solenoid::{DriveState, NoteEdge, Solenoid};

mod timer;
pub use timer::{IntervalTimer, Millis};
