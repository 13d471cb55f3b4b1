//! Rank scheduling: the per-tick service loop over a bank of solenoids.

use tracing::debug;

use crate::config::RankConfig;
use crate::duty::{DutyTable, OFF_DUTY};
use crate::error::Result;
use crate::solenoid::{DriveState, NoteEdge, Solenoid};
use crate::timer::Millis;

/// A bank of solenoid actuators serviced as one unit.
///
/// Intake ([`note_on`](Self::note_on) / [`note_off`](Self::note_off)) only
/// moves counts; drive states change inside [`service`](Self::service), which
/// the owner calls once per scheduling tick. [`write_duties`](Self::write_duties)
/// then snapshots the rank into a PWM register image.
#[derive(Debug, Clone)]
pub struct Rank {
    solenoids: Vec<Solenoid>,
    duty: DutyTable,
}

impl Rank {
    /// Build a rank from a validated configuration.
    pub fn new(config: &RankConfig) -> Result<Self> {
        config.validate()?;
        let solenoids = (0..config.solenoids)
            .map(|id| Solenoid::new(id, config.strike_ms))
            .collect();
        Ok(Self {
            solenoids,
            duty: DutyTable::new(config.hold_duty),
        })
    }

    /// Number of actuators in the rank.
    pub fn len(&self) -> usize {
        self.solenoids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solenoids.is_empty()
    }

    /// Register a note-on for the actuator at `index`.
    ///
    /// An out-of-range index is dropped and reported as no change.
    pub fn note_on(&mut self, index: usize) -> NoteEdge {
        match self.solenoids.get_mut(index) {
            Some(s) => s.note_on(),
            None => {
                debug!(
                    "note on for solenoid {} out of range (rank size {}), dropping",
                    index,
                    self.solenoids.len()
                );
                NoteEdge::NoChange
            }
        }
    }

    /// Register a note-off for the actuator at `index`.
    ///
    /// An out-of-range index is dropped and reported as no change.
    pub fn note_off(&mut self, index: usize) -> NoteEdge {
        match self.solenoids.get_mut(index) {
            Some(s) => s.note_off(),
            None => {
                debug!(
                    "note off for solenoid {} out of range (rank size {}), dropping",
                    index,
                    self.solenoids.len()
                );
                NoteEdge::NoChange
            }
        }
    }

    /// Apply every due transition across the rank, once.
    ///
    /// Per solenoid the checks run in priority order: strike (new
    /// activation), then off (last release), then hold (strike interval
    /// elapsed). At most one transition fires per solenoid per call, so a
    /// release that lands in the same tick as a strike-timer expiry releases
    /// instead of dropping to hold.
    ///
    /// Apply the tick's intake (`note_on` / `note_off`) before calling this,
    /// so the transitions reflect that input.
    pub fn service(&mut self, now: Millis) {
        for s in &mut self.solenoids {
            if s.should_enter_strike() {
                s.enter_strike(now);
            } else if s.should_enter_off() {
                s.enter_off();
            } else if s.should_enter_hold(now) {
                s.enter_hold();
            }
        }
    }

    /// Snapshot per-solenoid duties into `out` and report whether any
    /// actuator is currently driven.
    ///
    /// `out[i]` receives solenoid `i`'s duty; slots past the rank size are
    /// zeroed. A buffer shorter than the rank receives the prefix, but the
    /// returned flag always covers the whole rank.
    pub fn write_duties(&self, out: &mut [u8]) -> bool {
        let mut driven = false;
        for (i, s) in self.solenoids.iter().enumerate() {
            let duty = self.duty.resolve(s.state());
            if let Some(slot) = out.get_mut(i) {
                *slot = duty;
            }
            if duty != OFF_DUTY {
                driven = true;
            }
        }
        for slot in out.iter_mut().skip(self.solenoids.len()) {
            *slot = OFF_DUTY;
        }
        driven
    }

    /// Force every actuator to the released state and clear all counts.
    ///
    /// This is the panic path (power cut, shutdown, stuck-note recovery), so
    /// it bypasses the count bookkeeping entirely.
    pub fn all_off(&mut self) {
        debug!("releasing all {} solenoids", self.solenoids.len());
        for s in &mut self.solenoids {
            s.reset();
        }
    }

    /// Drive state of the actuator at `index`, if in range.
    pub fn state(&self, index: usize) -> Option<DriveState> {
        self.solenoids.get(index).map(|s| s.state())
    }

    /// Overlap count of the actuator at `index`, if in range.
    pub fn active_count(&self, index: usize) -> Option<u8> {
        self.solenoids.get(index).map(|s| s.active_count())
    }

    pub fn solenoid(&self, index: usize) -> Option<&Solenoid> {
        self.solenoids.get(index)
    }

    pub fn solenoid_mut(&mut self, index: usize) -> Option<&mut Solenoid> {
        self.solenoids.get_mut(index)
    }

    pub fn duty_table(&self) -> &DutyTable {
        &self.duty
    }
}
