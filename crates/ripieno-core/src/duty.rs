//! Drive-state to PWM duty mapping.

use crate::solenoid::DriveState;

/// Full-scale duty, used for the strike pulse.
pub const MAX_DUTY: u8 = 128;

/// Zero duty, used when released.
pub const OFF_DUTY: u8 = 0;

/// Default sustaining duty once the armature has seated.
pub const DEFAULT_HOLD_DUTY: u8 = 64;

/// Lookup from [`DriveState`] to output duty.
///
/// Off and Strike are fixed at [`OFF_DUTY`] and [`MAX_DUTY`]; only the hold
/// level is tunable. The hold value is taken as given here; range checking
/// happens in [`RankConfig::validate`](crate::config::RankConfig::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyTable {
    hold: u8,
}

impl DutyTable {
    /// Table with the given hold duty.
    pub fn new(hold: u8) -> Self {
        Self { hold }
    }

    /// Duty for a drive state.
    #[inline]
    pub fn resolve(&self, state: DriveState) -> u8 {
        match state {
            DriveState::Off => OFF_DUTY,
            DriveState::Strike => MAX_DUTY,
            DriveState::Hold => self.hold,
        }
    }

    /// Configured hold duty.
    pub fn hold(&self) -> u8 {
        self.hold
    }
}

impl Default for DutyTable {
    fn default() -> Self {
        Self {
            hold: DEFAULT_HOLD_DUTY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_per_state() {
        let table = DutyTable::new(40);
        assert_eq!(table.resolve(DriveState::Off), OFF_DUTY);
        assert_eq!(table.resolve(DriveState::Strike), MAX_DUTY);
        assert_eq!(table.resolve(DriveState::Hold), 40);
    }

    #[test]
    fn test_default_hold_below_strike() {
        let table = DutyTable::default();
        assert_eq!(table.hold(), DEFAULT_HOLD_DUTY);
        assert!(table.resolve(DriveState::Hold) < table.resolve(DriveState::Strike));
        assert!(table.resolve(DriveState::Hold) > table.resolve(DriveState::Off));
    }
}
