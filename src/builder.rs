//! Builder for configuring and constructing a `Console`.

use crate::core::{Millis, Rank, RankConfig};
use crate::{Console, Result};

#[cfg(feature = "midi")]
use crate::midi::{Compass, NoteDispatcher};

/// Rank parameters are validated once, at [`build`](Self::build); the running
/// console never re-checks them.
///
/// With the `midi` feature the builder also lays the rank under a compass:
/// solenoid `i` sounds MIDI note `base_note + i`, and out-of-window notes fold
/// in by octaves.
///
/// # Example
///
/// ```ignore
/// use ripieno::prelude::*;
///
/// let console = Console::builder()
///     .solenoids(61)
///     .strike_ms(40)
///     .hold_duty(56)
///     .base_note(36)
///     .channel(0)
///     .build()?;
/// ```
pub struct ConsoleBuilder {
    config: RankConfig,

    #[cfg(feature = "midi")]
    base_note: u8,

    #[cfg(feature = "midi")]
    channel: Option<u8>,
}

impl Default for ConsoleBuilder {
    fn default() -> Self {
        Self {
            config: RankConfig::default(),

            // Middle C
            #[cfg(feature = "midi")]
            base_note: 60,

            #[cfg(feature = "midi")]
            channel: None,
        }
    }
}

impl ConsoleBuilder {
    /// Default: 49
    pub fn solenoids(mut self, count: usize) -> Self {
        self.config.solenoids = count;
        self
    }

    /// Default: 50
    pub fn strike_ms(mut self, ms: Millis) -> Self {
        self.config.strike_ms = ms;
        self
    }

    /// Default: 64
    pub fn hold_duty(mut self, duty: u8) -> Self {
        self.config.hold_duty = duty;
        self
    }

    /// MIDI note sounded by solenoid 0. Default: 60
    #[cfg(feature = "midi")]
    pub fn base_note(mut self, note: u8) -> Self {
        self.base_note = note;
        self
    }

    /// Listen to a single MIDI channel instead of omni.
    #[cfg(feature = "midi")]
    pub fn channel(mut self, channel: u8) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn build(self) -> Result<Console> {
        let rank = Rank::new(&self.config)?;

        // The compass spans the whole rank, one semitone per solenoid.
        #[cfg(feature = "midi")]
        let dispatcher = {
            let span = u8::try_from(self.config.solenoids).map_err(|_| {
                ripieno_midi::Error::InvalidConfig(format!(
                    "rank of {} solenoids cannot be keyed over MIDI",
                    self.config.solenoids
                ))
            })?;
            NoteDispatcher::new(Compass::new(self.base_note, span)?, self.channel)
        };

        Ok(Console::from_parts(
            rank,
            #[cfg(feature = "midi")]
            dispatcher,
        ))
    }
}
