//! Routing from keying events onto a solenoid rank.
//!
//! A rank covers a few octaves while the keyboard can address all 128 MIDI
//! notes, so notes are folded into the rank's compass by whole octaves before
//! keying. Out-of-range playing still sounds, displaced to the octave the
//! rank actually has.

use ripieno_core::{NoteEdge, Rank};
use tracing::debug;

use crate::error::{Error, Result};
use crate::event::{NoteEvent, NoteKind};

/// The contiguous window of MIDI notes a rank sounds directly.
///
/// Solenoid `i` sounds note `base_note + i` for `i` in `0..span`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compass {
    base_note: u8,
    span: u8,
}

impl Compass {
    /// Window of `span` semitones starting at `base_note`.
    pub fn new(base_note: u8, span: u8) -> Result<Self> {
        if span == 0 {
            return Err(Error::InvalidConfig("span must be at least 1".to_string()));
        }
        if u16::from(base_note) + u16::from(span) > 128 {
            return Err(Error::InvalidConfig(format!(
                "base_note {} + span {} exceeds the MIDI note range",
                base_note, span
            )));
        }
        Ok(Self { base_note, span })
    }

    #[inline]
    pub fn base_note(&self) -> u8 {
        self.base_note
    }

    #[inline]
    pub fn span(&self) -> u8 {
        self.span
    }

    /// Fold `note` into the window by whole octaves and return its rank
    /// index.
    ///
    /// Notes below the window come up, notes at or above its top come down.
    /// With a span narrower than an octave the folded note can step straight
    /// over the window; those notes have no index.
    pub fn fold(&self, note: u8) -> Option<usize> {
        let base = i32::from(self.base_note);
        let top = base + i32::from(self.span);
        let mut n = i32::from(note);
        while n < base {
            n += 12;
        }
        while n >= top {
            n -= 12;
        }
        (n >= base).then(|| (n - base) as usize)
    }
}

/// Outcome of dispatching one keying event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// The event keyed or released one solenoid.
    Keyed { index: usize, edge: NoteEdge },
    /// All Notes Off released the whole rank.
    ReleasedAll,
    /// The event was filtered out or could not be mapped onto the rank.
    Ignored,
}

/// Applies keying events to a [`Rank`] through a [`Compass`].
///
/// A dispatcher bound to a channel ignores traffic for other channels; an
/// unbound one listens omni.
#[derive(Debug, Clone, Copy)]
pub struct NoteDispatcher {
    compass: Compass,
    channel: Option<u8>,
}

impl NoteDispatcher {
    pub fn new(compass: Compass, channel: Option<u8>) -> Self {
        Self { compass, channel }
    }

    #[inline]
    pub fn compass(&self) -> &Compass {
        &self.compass
    }

    #[inline]
    pub fn channel(&self) -> Option<u8> {
        self.channel
    }

    /// Apply one keying event to `rank`.
    pub fn apply(&self, event: &NoteEvent, rank: &mut Rank) -> DispatchResult {
        if let Some(bound) = self.channel {
            if event.channel_num() != bound {
                return DispatchResult::Ignored;
            }
        }
        match event.kind {
            NoteKind::On { note } => match self.compass.fold(note) {
                Some(index) => DispatchResult::Keyed {
                    index,
                    edge: rank.note_on(index),
                },
                None => self.unmappable(note),
            },
            NoteKind::Off { note } => match self.compass.fold(note) {
                Some(index) => DispatchResult::Keyed {
                    index,
                    edge: rank.note_off(index),
                },
                None => self.unmappable(note),
            },
            NoteKind::AllNotesOff => {
                rank.all_off();
                DispatchResult::ReleasedAll
            }
        }
    }

    /// Parse raw bytes and apply the resulting event, if any.
    ///
    /// Non-keying messages come back as [`DispatchResult::Ignored`]; only
    /// malformed bytes are an error.
    pub fn apply_bytes(&self, bytes: &[u8], rank: &mut Rank) -> Result<DispatchResult> {
        match NoteEvent::from_bytes(bytes)? {
            Some(event) => Ok(self.apply(&event, rank)),
            None => Ok(DispatchResult::Ignored),
        }
    }

    fn unmappable(&self, note: u8) -> DispatchResult {
        debug!(
            "note {} cannot be folded into compass [{}, {}), dropping",
            note,
            self.compass.base_note(),
            u16::from(self.compass.base_note()) + u16::from(self.compass.span())
        );
        DispatchResult::Ignored
    }
}
