//! Rank configuration.

use serde::{Deserialize, Serialize};

use crate::duty::{DEFAULT_HOLD_DUTY, MAX_DUTY};
use crate::error::{Error, Result};
use crate::timer::Millis;

/// Default strike interval in milliseconds.
pub const DEFAULT_STRIKE_MS: Millis = 50;

/// Default rank size: four octaves plus the top note.
pub const DEFAULT_SOLENOIDS: usize = 49;

/// Configuration for a solenoid rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Number of actuators in the rank.
    pub solenoids: usize,
    /// Strike pulse length in milliseconds before dropping to hold.
    pub strike_ms: Millis,
    /// Sustaining duty, strictly between [`OFF_DUTY`](crate::duty::OFF_DUTY)
    /// and [`MAX_DUTY`].
    pub hold_duty: u8,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            solenoids: DEFAULT_SOLENOIDS,
            strike_ms: DEFAULT_STRIKE_MS,
            hold_duty: DEFAULT_HOLD_DUTY,
        }
    }
}

impl RankConfig {
    pub fn validate(&self) -> Result<()> {
        if self.solenoids == 0 {
            return Err(Error::InvalidConfig(
                "solenoids must be at least 1".to_string(),
            ));
        }
        if self.strike_ms == 0 {
            return Err(Error::InvalidConfig("strike_ms must be positive".to_string()));
        }
        if self.hold_duty == 0 || self.hold_duty >= MAX_DUTY {
            return Err(Error::InvalidConfig(format!(
                "hold_duty {} out of range (1-{})",
                self.hold_duty,
                MAX_DUTY - 1
            )));
        }
        Ok(())
    }
}
