//! Per-actuator drive state machine.
//!
//! One [`Solenoid`] tracks a single physical actuator (one pipe valve):
//! - Three-phase drive: off / full-power strike / reduced-power hold
//! - Overlap counting: concurrent note-ons mapped onto the same actuator
//!   (octave folding makes this routine, not exotic)
//! - Strike timing: a fixed interval after which the drive drops to hold
//!
//! The count exists instead of a boolean because several live notes can
//! resolve to one actuator at once; the pipe must keep sounding until the
//! last of them releases.
//!
//! All methods are RT-safe (no allocations, no locks, no syscalls).

use crate::timer::{IntervalTimer, Millis};

/// Drive phase of one solenoid actuator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriveState {
    /// Released; zero duty.
    #[default]
    Off,
    /// Initial full-power pulse that gets the armature moving.
    Strike,
    /// Reduced sustaining duty once the armature has seated.
    Hold,
}

/// Result of a note-count update, reported on the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteEdge {
    /// The count moved (or an underflow was absorbed) without changing
    /// whether the actuator is active.
    NoChange,
    /// The count went 0 -> 1: first overlapping activation.
    BecameActive,
    /// The count went 1 -> 0: last overlapping activation ended.
    BecameInactive,
}

/// State tracker for one solenoid actuator.
///
/// The tracker only records state; it never touches hardware. The scheduling
/// loop polls the `should_enter_*` predicates once per tick (intake first,
/// predicates after), applies the matching `enter_*` transition, then reads
/// [`state`](Self::state) to drive the duty output.
#[derive(Debug, Clone, Copy)]
pub struct Solenoid {
    id: usize,
    state: DriveState,
    count: u8,
    timer: IntervalTimer,
}

impl Solenoid {
    /// Create a tracker for actuator `id` with the given strike interval.
    ///
    /// Starts released: state Off, count zero.
    pub fn new(id: usize, strike_ms: Millis) -> Self {
        Self {
            id,
            state: DriveState::Off,
            count: 0,
            timer: IntervalTimer::new(strike_ms),
        }
    }

    /// Return to the released state: Off, count zero. The configured strike
    /// interval is kept.
    pub fn reset(&mut self) {
        self.state = DriveState::Off;
        self.count = 0;
    }

    /// Actuator index. Informational only; never consulted by the logic.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Current drive state.
    #[inline]
    pub fn state(&self) -> DriveState {
        self.state
    }

    /// Number of concurrently-active note-ons mapped onto this actuator.
    #[inline]
    pub fn active_count(&self) -> u8 {
        self.count
    }

    /// Force the drive state without touching the count or timer.
    ///
    /// No validation is performed; pairing this with the right counting side
    /// effects is the caller's job. Normal control flow goes through the
    /// `enter_*` transitions instead.
    pub fn set_state(&mut self, state: DriveState) {
        self.state = state;
    }

    /// Register one overlapping note-on.
    ///
    /// Returns [`NoteEdge::BecameActive`] exactly when the count moves from
    /// zero to one; every further overlapping on is [`NoteEdge::NoChange`].
    /// The count saturates at `u8::MAX` rather than wrapping, so a runaway
    /// stream of ons can never silently re-arm a sounding pipe.
    pub fn note_on(&mut self) -> NoteEdge {
        let was = self.count;
        self.count = self.count.saturating_add(1);
        if was == 0 {
            NoteEdge::BecameActive
        } else {
            NoteEdge::NoChange
        }
    }

    /// Register one overlapping note-off.
    ///
    /// Returns [`NoteEdge::BecameInactive`] exactly when the count moves from
    /// one to zero. A note-off at zero is absorbed (already at rest) and a
    /// note-off that leaves the count above zero both report
    /// [`NoteEdge::NoChange`].
    pub fn note_off(&mut self) -> NoteEdge {
        match self.count {
            0 => NoteEdge::NoChange,
            1 => {
                self.count = 0;
                NoteEdge::BecameInactive
            }
            _ => {
                self.count -= 1;
                NoteEdge::NoChange
            }
        }
    }

    /// True iff a fresh activation has not yet been reflected in the drive
    /// state: count above zero while still Off.
    ///
    /// Pure predicate; the caller follows up with
    /// [`enter_strike`](Self::enter_strike).
    #[inline]
    pub fn should_enter_strike(&self) -> bool {
        self.count > 0 && self.state == DriveState::Off
    }

    /// True iff the last activation has ended but the drive is still on:
    /// count zero while Strike or Hold.
    #[inline]
    pub fn should_enter_off(&self) -> bool {
        self.count == 0 && self.state != DriveState::Off
    }

    /// True iff the strike interval has run out while still in Strike.
    ///
    /// Outside Strike this is always false; the timer's value is stale there
    /// and is disregarded.
    #[inline]
    pub fn should_enter_hold(&self, now: Millis) -> bool {
        self.state == DriveState::Strike && self.timer.has_elapsed(now)
    }

    /// Begin the strike phase and restart strike timing from `now`.
    ///
    /// Only the Off -> non-Off edge arms the timer; re-triggering an already
    /// sounding actuator does not re-strike it.
    pub fn enter_strike(&mut self, now: Millis) {
        self.state = DriveState::Strike;
        self.timer.reset(now);
    }

    /// Release the drive.
    pub fn enter_off(&mut self) {
        self.state = DriveState::Off;
    }

    /// Drop from strike to the sustaining hold drive.
    pub fn enter_hold(&mut self) {
        self.state = DriveState::Hold;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_released() {
        let s = Solenoid::new(3, 50);
        assert_eq!(s.id(), 3);
        assert_eq!(s.state(), DriveState::Off);
        assert_eq!(s.active_count(), 0);
    }

    #[test]
    fn test_note_on_edge_only_from_zero() {
        let mut s = Solenoid::new(0, 50);

        assert_eq!(s.note_on(), NoteEdge::BecameActive);
        assert_eq!(s.note_on(), NoteEdge::NoChange);
        assert_eq!(s.note_on(), NoteEdge::NoChange);
        assert_eq!(s.active_count(), 3);
    }

    #[test]
    fn test_note_off_edge_only_to_zero() {
        let mut s = Solenoid::new(0, 50);
        s.note_on();
        s.note_on();

        assert_eq!(s.note_off(), NoteEdge::NoChange);
        assert_eq!(s.active_count(), 1);
        assert_eq!(s.note_off(), NoteEdge::BecameInactive);
        assert_eq!(s.active_count(), 0);
    }

    #[test]
    fn test_note_off_at_zero_is_absorbed() {
        let mut s = Solenoid::new(0, 50);

        // Repeated offs at rest always no-op; count never goes negative.
        assert_eq!(s.note_off(), NoteEdge::NoChange);
        assert_eq!(s.note_off(), NoteEdge::NoChange);
        assert_eq!(s.active_count(), 0);
        assert_eq!(s.state(), DriveState::Off);
    }

    #[test]
    fn test_count_matches_on_minus_off_clamped() {
        let mut s = Solenoid::new(0, 50);

        s.note_off(); // clamped at 0
        s.note_on();
        s.note_on();
        s.note_off();
        s.note_on();
        assert_eq!(s.active_count(), 2);

        s.note_off();
        s.note_off();
        s.note_off(); // clamped at 0
        assert_eq!(s.active_count(), 0);
    }

    #[test]
    fn test_count_saturates_at_max() {
        let mut s = Solenoid::new(0, 50);
        for _ in 0..300 {
            s.note_on();
        }
        assert_eq!(s.active_count(), u8::MAX);

        // Still active, and offs drain normally from the pin.
        assert_eq!(s.note_off(), NoteEdge::NoChange);
        assert_eq!(s.active_count(), u8::MAX - 1);
    }

    #[test]
    fn test_first_activation_requests_strike() {
        let mut s = Solenoid::new(0, 50);
        s.note_on();

        assert!(s.should_enter_strike());
        s.enter_strike(0);
        assert_eq!(s.state(), DriveState::Strike);

        // Second overlapping on: already reflected in the drive state.
        s.note_on();
        assert!(!s.should_enter_strike());
        assert_eq!(s.active_count(), 2);
    }

    #[test]
    fn test_hold_after_strike_interval() {
        let mut s = Solenoid::new(0, 50);
        s.note_on();
        s.enter_strike(1000);

        assert!(!s.should_enter_hold(1000));
        assert!(!s.should_enter_hold(1049));
        assert!(s.should_enter_hold(1050));

        s.enter_hold();
        assert_eq!(s.state(), DriveState::Hold);

        // Timer state is disregarded outside Strike.
        assert!(!s.should_enter_hold(9999));
    }

    #[test]
    fn test_release_only_after_last_off() {
        let mut s = Solenoid::new(0, 50);
        s.note_on();
        s.note_on();
        s.enter_strike(0);

        s.note_off();
        assert_eq!(s.active_count(), 1);
        assert!(!s.should_enter_off());

        s.note_off();
        assert!(s.should_enter_off());
        s.enter_off();
        assert_eq!(s.state(), DriveState::Off);
    }

    #[test]
    fn test_release_valid_from_hold() {
        let mut s = Solenoid::new(0, 50);
        s.note_on();
        s.enter_strike(0);
        s.enter_hold();

        s.note_off();
        assert!(s.should_enter_off());
        s.enter_off();
        assert_eq!(s.state(), DriveState::Off);
    }

    #[test]
    fn test_enter_off_is_idempotent() {
        let mut s = Solenoid::new(0, 50);
        s.enter_off();
        assert_eq!(s.state(), DriveState::Off);
        s.enter_off();
        assert_eq!(s.state(), DriveState::Off);
    }

    #[test]
    fn test_no_restrike_while_sounding() {
        let mut s = Solenoid::new(0, 50);
        s.note_on();
        s.enter_strike(0);
        s.enter_hold();

        // A fresh overlapping activation during Hold neither re-strikes nor
        // changes the drive state.
        s.note_on();
        assert!(!s.should_enter_strike());
        assert!(!s.should_enter_hold(10_000));
        assert_eq!(s.state(), DriveState::Hold);
    }

    #[test]
    fn test_restrike_timing_after_full_release() {
        let mut s = Solenoid::new(0, 50);
        s.note_on();
        s.enter_strike(0);
        s.enter_hold();
        s.note_off();
        s.enter_off();

        // A new cycle re-arms strike timing from its own origin.
        s.note_on();
        s.enter_strike(200);
        assert!(!s.should_enter_hold(249));
        assert!(s.should_enter_hold(250));
    }

    #[test]
    fn test_set_state_is_unchecked() {
        let mut s = Solenoid::new(0, 50);
        s.set_state(DriveState::Hold);
        assert_eq!(s.state(), DriveState::Hold);
        assert_eq!(s.active_count(), 0);

        // Forcing state leaves the count alone, so the off predicate now
        // fires; that pairing is the caller's responsibility.
        assert!(s.should_enter_off());
    }

    #[test]
    fn test_reset_clears_state_and_count() {
        let mut s = Solenoid::new(7, 50);
        s.note_on();
        s.note_on();
        s.enter_strike(0);

        s.reset();
        assert_eq!(s.state(), DriveState::Off);
        assert_eq!(s.active_count(), 0);
        assert_eq!(s.id(), 7);
    }
}
