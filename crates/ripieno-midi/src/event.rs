//! Keying events distilled from raw MIDI.

use midi_msg::{Channel, ChannelModeMsg, ChannelVoiceMsg, MidiMsg};

/// What a MIDI message asks the console to do with its keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteKind {
    /// Key down.
    On { note: u8 },
    /// Key up.
    Off { note: u8 },
    /// Release every key (All Notes Off / All Sound Off channel mode).
    AllNotesOff,
}

/// A keying event on one MIDI channel.
///
/// Velocity is not carried: the valves are binary, so a note-on either keys
/// the pipe or, at velocity zero, releases it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteEvent {
    pub channel: Channel,
    pub kind: NoteKind,
}

impl NoteEvent {
    #[inline]
    pub fn note_on(channel: u8, note: u8) -> Self {
        Self {
            channel: Channel::from_u8(channel),
            kind: NoteKind::On { note },
        }
    }

    #[inline]
    pub fn note_off(channel: u8, note: u8) -> Self {
        Self {
            channel: Channel::from_u8(channel),
            kind: NoteKind::Off { note },
        }
    }

    #[inline]
    pub fn all_notes_off(channel: u8) -> Self {
        Self {
            channel: Channel::from_u8(channel),
            kind: NoteKind::AllNotesOff,
        }
    }

    #[inline]
    pub fn channel_num(&self) -> u8 {
        self.channel as u8
    }

    #[inline]
    pub fn is_note_on(&self) -> bool {
        matches!(self.kind, NoteKind::On { .. })
    }

    #[inline]
    pub fn is_note_off(&self) -> bool {
        matches!(self.kind, NoteKind::Off { .. })
    }

    /// Note number, if the event concerns a single key.
    #[inline]
    pub fn note(&self) -> Option<u8> {
        match self.kind {
            NoteKind::On { note } | NoteKind::Off { note } => Some(note),
            NoteKind::AllNotesOff => None,
        }
    }

    /// Distill a parsed MIDI message into a keying event.
    ///
    /// Returns `None` for messages with no keying effect (controllers, pitch
    /// bend, program changes, system messages). A note-on at velocity zero is
    /// a release.
    pub fn from_midi_msg(msg: &MidiMsg) -> Option<Self> {
        match msg {
            MidiMsg::ChannelVoice { channel, msg } => match msg {
                ChannelVoiceMsg::NoteOn { note, velocity: 0 }
                | ChannelVoiceMsg::NoteOff { note, .. } => Some(Self {
                    channel: *channel,
                    kind: NoteKind::Off { note: *note },
                }),
                ChannelVoiceMsg::NoteOn { note, .. } => Some(Self {
                    channel: *channel,
                    kind: NoteKind::On { note: *note },
                }),
                ChannelVoiceMsg::HighResNoteOn { note, velocity: 0 }
                | ChannelVoiceMsg::HighResNoteOff { note, .. } => Some(Self {
                    channel: *channel,
                    kind: NoteKind::Off { note: *note },
                }),
                ChannelVoiceMsg::HighResNoteOn { note, .. } => Some(Self {
                    channel: *channel,
                    kind: NoteKind::On { note: *note },
                }),
                _ => None,
            },
            MidiMsg::ChannelMode { channel, msg } => match msg {
                ChannelModeMsg::AllNotesOff | ChannelModeMsg::AllSoundOff => Some(Self {
                    channel: *channel,
                    kind: NoteKind::AllNotesOff,
                }),
                _ => None,
            },
            _ => None,
        }
    }

    /// Parse one message from raw bytes and distill it.
    ///
    /// `Ok(None)` means the bytes were valid MIDI with no keying effect.
    pub fn from_bytes(bytes: &[u8]) -> Result<Option<Self>, midi_msg::ParseError> {
        let (msg, _len) = MidiMsg::from_midi(bytes)?;
        Ok(Self::from_midi_msg(&msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_on() {
        let event = NoteEvent::note_on(3, 64);
        assert!(event.is_note_on());
        assert!(!event.is_note_off());
        assert_eq!(event.note(), Some(64));
        assert_eq!(event.channel_num(), 3);
    }

    #[test]
    fn test_all_notes_off_has_no_note() {
        let event = NoteEvent::all_notes_off(0);
        assert_eq!(event.note(), None);
        assert!(!event.is_note_on());
        assert!(!event.is_note_off());
    }

    #[test]
    fn test_note_on_from_bytes() {
        let event = NoteEvent::from_bytes(&[0x91, 60, 100]).unwrap().unwrap();
        assert_eq!(event.kind, NoteKind::On { note: 60 });
        assert_eq!(event.channel_num(), 1);
    }

    #[test]
    fn test_note_off_from_bytes() {
        let event = NoteEvent::from_bytes(&[0x80, 60, 40]).unwrap().unwrap();
        assert_eq!(event.kind, NoteKind::Off { note: 60 });
        assert_eq!(event.channel_num(), 0);
    }

    #[test]
    fn test_zero_velocity_note_on_is_release() {
        let event = NoteEvent::from_bytes(&[0x90, 60, 0]).unwrap().unwrap();
        assert_eq!(event.kind, NoteKind::Off { note: 60 });
    }

    #[test]
    fn test_channel_mode_all_notes_off() {
        let event = NoteEvent::from_bytes(&[0xB2, 123, 0]).unwrap().unwrap();
        assert_eq!(event.kind, NoteKind::AllNotesOff);
        assert_eq!(event.channel_num(), 2);

        let event = NoteEvent::from_bytes(&[0xB0, 120, 0]).unwrap().unwrap();
        assert_eq!(event.kind, NoteKind::AllNotesOff);
    }

    #[test]
    fn test_non_keying_messages_distill_to_none() {
        // Volume CC, pitch bend, program change.
        assert_eq!(NoteEvent::from_bytes(&[0xB0, 7, 100]).unwrap(), None);
        assert_eq!(NoteEvent::from_bytes(&[0xE0, 0, 64]).unwrap(), None);
        assert_eq!(NoteEvent::from_bytes(&[0xC0, 5]).unwrap(), None);
    }

    #[test]
    fn test_truncated_bytes_are_an_error() {
        assert!(NoteEvent::from_bytes(&[0x90]).is_err());
        assert!(NoteEvent::from_bytes(&[]).is_err());
    }
}
