//! Console that coordinates the rank and its event intake.

use std::time::Instant;

use crate::core::{DriveState, Millis, NoteEdge, Rank};

#[cfg(feature = "midi")]
use crate::midi::{DispatchResult, NoteDispatcher, NoteEvent};

#[cfg(feature = "midi")]
use crate::Result;

/// Main controller for one rank of solenoid-actuated pipes.
///
/// Console owns the rank and, with the `midi` feature, the dispatcher that
/// keys it. Intake ([`handle_midi`](Self::handle_midi), [`note_on`](Self::note_on))
/// can happen at any time; drive states only move on [`tick`](Self::tick),
/// which the owner calls from its scheduling loop. After each tick,
/// [`write_duties`](Self::write_duties) snapshots the rank into the PWM
/// register image the driver hardware consumes.
///
/// # Example
///
/// ```ignore
/// use ripieno::prelude::*;
///
/// let mut console = Console::builder()
///     .solenoids(49)
///     .strike_ms(50)
///     .build()?;
///
/// // MIDI receive path
/// console.handle_midi(&[0x90, 60, 100])?;
///
/// // Scheduling loop
/// console.tick();
/// let mut duties = [0u8; 49];
/// console.write_duties(&mut duties);
/// ```
pub struct Console {
    /// The rank (always present)
    rank: Rank,

    /// Wall-clock origin for [`tick`](Self::tick)
    epoch: Instant,

    /// MIDI intake (feature-gated)
    #[cfg(feature = "midi")]
    dispatcher: NoteDispatcher,
}

impl Console {
    /// Create a new console builder
    pub fn builder() -> crate::ConsoleBuilder {
        crate::ConsoleBuilder::default()
    }

    pub(crate) fn from_parts(
        rank: Rank,
        #[cfg(feature = "midi")] dispatcher: NoteDispatcher,
    ) -> Self {
        Self {
            rank,
            epoch: Instant::now(),
            #[cfg(feature = "midi")]
            dispatcher,
        }
    }

    /// Milliseconds since the console was built.
    pub fn now_ms(&self) -> Millis {
        self.epoch.elapsed().as_millis() as Millis
    }

    /// Run one scheduling tick against the wall clock.
    pub fn tick(&mut self) {
        let now = self.now_ms();
        self.rank.service(now);
    }

    /// Run one scheduling tick at an explicit time.
    ///
    /// For callers that keep their own clock (a timer interrupt counter, a
    /// test harness). Mixing `tick_at` with [`tick`](Self::tick) only makes
    /// sense if the caller's clock shares the console's epoch.
    pub fn tick_at(&mut self, now_ms: Millis) {
        self.rank.service(now_ms);
    }

    /// Feed raw MIDI bytes from the receive path.
    ///
    /// Non-keying messages are ignored; only malformed bytes are an error.
    #[cfg(feature = "midi")]
    pub fn handle_midi(&mut self, bytes: &[u8]) -> Result<DispatchResult> {
        Ok(self.dispatcher.apply_bytes(bytes, &mut self.rank)?)
    }

    /// Feed an already-decoded keying event.
    #[cfg(feature = "midi")]
    pub fn handle_event(&mut self, event: &NoteEvent) -> DispatchResult {
        self.dispatcher.apply(event, &mut self.rank)
    }

    /// Key the solenoid at `index` directly, bypassing MIDI.
    pub fn note_on(&mut self, index: usize) -> NoteEdge {
        self.rank.note_on(index)
    }

    /// Release the solenoid at `index` directly, bypassing MIDI.
    pub fn note_off(&mut self, index: usize) -> NoteEdge {
        self.rank.note_off(index)
    }

    /// Snapshot per-solenoid duties into `out`; true if anything is driven.
    pub fn write_duties(&self, out: &mut [u8]) -> bool {
        self.rank.write_duties(out)
    }

    /// Release every solenoid immediately and clear all counts.
    ///
    /// The panic path: stuck notes, shutdown, power loss on the driver rail.
    pub fn all_off(&mut self) {
        self.rank.all_off();
    }

    /// Drive state of the solenoid at `index`, if in range.
    pub fn state(&self, index: usize) -> Option<DriveState> {
        self.rank.state(index)
    }

    /// Overlap count of the solenoid at `index`, if in range.
    pub fn active_count(&self, index: usize) -> Option<u8> {
        self.rank.active_count(index)
    }

    /// Number of solenoids in the rank.
    pub fn len(&self) -> usize {
        self.rank.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rank.is_empty()
    }

    /// Access the rank directly
    pub fn rank(&self) -> &Rank {
        &self.rank
    }

    /// Mutable access to the rank
    pub fn rank_mut(&mut self) -> &mut Rank {
        &mut self.rank
    }

    /// The configured MIDI dispatcher
    #[cfg(feature = "midi")]
    pub fn dispatcher(&self) -> &NoteDispatcher {
        &self.dispatcher
    }
}
