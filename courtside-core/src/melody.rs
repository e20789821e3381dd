//! Victory fanfare playback
//!
//! Two playback paths share one note table: the sequencer, which the
//! console advances from its tick loop without blocking, and the
//! synchronous chime, which holds the whole console for the length of the
//! tune. A note window is how long the playhead rests on a note; windows
//! after the first include the inter-note gap.

use crate::timing::millis_since;
use crate::traits::{Buzzer, Delay};

/// One note of a tune.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    /// Square wave frequency.
    pub hz: u16,
    /// Sounding time in milliseconds.
    pub ms: u16,
}

const fn note(hz: u16, ms: u16) -> Note {
    Note { hz, ms }
}

/// The victory fanfare: a rising C-major arpeggio with a held top note.
pub const VICTORY_FANFARE: [Note; 6] = [
    note(523, 120),  // C5
    note(659, 120),  // E5
    note(784, 120),  // G5
    note(1047, 200), // C6
    note(784, 120),  // G5
    note(1047, 400), // C6
];

/// Articulation gap between notes.
pub const NOTE_GAP_MS: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum PlayState {
    Stopped,
    Playing {
        /// Note the playhead rests on.
        index: usize,
        /// When this note's window opened.
        since_ms: u32,
        /// Window length; gap included except on the first note.
        window_ms: u32,
    },
}

/// Non-blocking tune playback, advanced by the console tick.
#[derive(Debug)]
pub struct MelodyPlayer {
    notes: &'static [Note],
    state: PlayState,
}

impl MelodyPlayer {
    /// Create a stopped player over a fixed tune.
    pub fn new(notes: &'static [Note]) -> Self {
        Self {
            notes,
            state: PlayState::Stopped,
        }
    }

    /// Start the tune from its first note, restarting if already playing.
    pub fn start<B: Buzzer>(&mut self, now_ms: u32, buzzer: &mut B) {
        match self.notes.first() {
            Some(first) => {
                buzzer.tone(first.hz);
                self.state = PlayState::Playing {
                    index: 0,
                    since_ms: now_ms,
                    window_ms: u32::from(first.ms),
                };
            }
            None => self.state = PlayState::Stopped,
        }
    }

    /// Advance playback: at most one note boundary per call.
    ///
    /// No-op while stopped or inside the current note's window.
    pub fn tick<B: Buzzer>(&mut self, now_ms: u32, buzzer: &mut B) {
        if let PlayState::Playing {
            index,
            since_ms,
            window_ms,
        } = self.state
        {
            if millis_since(now_ms, since_ms) < window_ms {
                return;
            }

            let next = index + 1;
            match self.notes.get(next) {
                Some(note) => {
                    buzzer.tone(note.hz);
                    self.state = PlayState::Playing {
                        index: next,
                        since_ms: now_ms,
                        window_ms: NOTE_GAP_MS + u32::from(note.ms),
                    };
                }
                None => {
                    buzzer.stop();
                    self.state = PlayState::Stopped;
                }
            }
        }
    }

    /// True while a tune is underway.
    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlayState::Playing { .. })
    }
}

/// Play `notes` start to finish, returning only when the tune is over.
///
/// Link bytes keep accumulating in the UART buffers meanwhile; the console
/// catches up on its next tick.
pub fn play_blocking<B: Buzzer, D: Delay>(notes: &[Note], buzzer: &mut B, delay: &mut D) {
    for note in notes {
        buzzer.tone(note.hz);
        delay.delay_ms(u32::from(note.ms));
        buzzer.stop();
        delay.delay_ms(NOTE_GAP_MS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{BuzzerEvent, MockBuzzer, TraceDelay};

    #[test]
    fn test_start_sounds_first_note() {
        let mut buzzer = MockBuzzer::new();
        let mut player = MelodyPlayer::new(&VICTORY_FANFARE);

        player.start(1000, &mut buzzer);

        assert!(player.is_playing());
        assert_eq!(buzzer.last_tone(), Some(VICTORY_FANFARE[0].hz));
    }

    #[test]
    fn test_no_advance_inside_first_window() {
        let mut buzzer = MockBuzzer::new();
        let mut player = MelodyPlayer::new(&VICTORY_FANFARE);

        player.start(1000, &mut buzzer);
        player.tick(1000 + u32::from(VICTORY_FANFARE[0].ms) - 1, &mut buzzer);

        assert_eq!(buzzer.tone_count(), 1);
    }

    #[test]
    fn test_first_window_has_no_gap() {
        let mut buzzer = MockBuzzer::new();
        let mut player = MelodyPlayer::new(&VICTORY_FANFARE);

        player.start(1000, &mut buzzer);
        player.tick(1000 + u32::from(VICTORY_FANFARE[0].ms), &mut buzzer);

        assert_eq!(buzzer.last_tone(), Some(VICTORY_FANFARE[1].hz));
    }

    #[test]
    fn test_later_windows_include_the_gap() {
        let mut buzzer = MockBuzzer::new();
        let mut player = MelodyPlayer::new(&VICTORY_FANFARE);

        player.start(0, &mut buzzer);
        let second_start = u32::from(VICTORY_FANFARE[0].ms);
        player.tick(second_start, &mut buzzer);

        // One below the gapped window: still on note 1.
        let window = NOTE_GAP_MS + u32::from(VICTORY_FANFARE[1].ms);
        player.tick(second_start + window - 1, &mut buzzer);
        assert_eq!(buzzer.last_tone(), Some(VICTORY_FANFARE[1].hz));

        player.tick(second_start + window, &mut buzzer);
        assert_eq!(buzzer.last_tone(), Some(VICTORY_FANFARE[2].hz));
    }

    #[test]
    fn test_runs_to_completion_one_boundary_per_tick() {
        let mut buzzer = MockBuzzer::new();
        let mut player = MelodyPlayer::new(&VICTORY_FANFARE);
        let mut now = 0u32;

        player.start(now, &mut buzzer);
        for (i, note) in VICTORY_FANFARE.iter().enumerate() {
            let gap = if i == 0 { 0 } else { NOTE_GAP_MS };
            now += gap + u32::from(note.ms);
            player.tick(now, &mut buzzer);
            assert_eq!(player.is_playing(), i + 1 < VICTORY_FANFARE.len());
        }

        assert!(buzzer.is_silent());
        assert_eq!(buzzer.tone_count(), VICTORY_FANFARE.len());
    }

    #[test]
    fn test_ticks_after_completion_do_nothing() {
        let mut buzzer = MockBuzzer::new();
        let mut player = MelodyPlayer::new(&VICTORY_FANFARE);

        player.tick(0, &mut buzzer);
        player.tick(100_000, &mut buzzer);

        assert_eq!(buzzer.events(), &[]);
    }

    #[test]
    fn test_restart_rewinds_to_first_note() {
        let mut buzzer = MockBuzzer::new();
        let mut player = MelodyPlayer::new(&VICTORY_FANFARE);

        player.start(0, &mut buzzer);
        player.tick(u32::from(VICTORY_FANFARE[0].ms), &mut buzzer);
        assert_eq!(buzzer.last_tone(), Some(VICTORY_FANFARE[1].hz));

        player.start(500, &mut buzzer);
        assert_eq!(buzzer.last_tone(), Some(VICTORY_FANFARE[0].hz));
        assert!(player.is_playing());
    }

    #[test]
    fn test_empty_tune_never_plays() {
        let mut buzzer = MockBuzzer::new();
        let mut player = MelodyPlayer::new(&[]);

        player.start(0, &mut buzzer);

        assert!(!player.is_playing());
        assert_eq!(buzzer.events(), &[]);
    }

    #[test]
    fn test_blocking_chime_paces_every_note() {
        let mut buzzer = MockBuzzer::new();
        let mut delay = TraceDelay::new();

        play_blocking(&VICTORY_FANFARE, &mut buzzer, &mut delay);

        // tone/stop pairs in tune order
        let mut expected_events = heapless::Vec::<BuzzerEvent, 16>::new();
        let mut expected_delays = heapless::Vec::<u32, 16>::new();
        for note in &VICTORY_FANFARE {
            let _ = expected_events.push(BuzzerEvent::Tone(note.hz));
            let _ = expected_events.push(BuzzerEvent::Stop);
            let _ = expected_delays.push(u32::from(note.ms));
            let _ = expected_delays.push(NOTE_GAP_MS);
        }
        assert_eq!(buzzer.events(), expected_events.as_slice());
        assert_eq!(delay.delays(), expected_delays.as_slice());
    }
}
