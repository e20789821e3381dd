//! Hit beep with cooldown
//!
//! The host beeps on every paddle hit, and a fast rally can request beeps
//! quicker than they can decay. Requests inside the cooldown window are
//! dropped, not queued. The buzzer is one voice: a beep sounded during
//! the fanfare clips the current note until the next note boundary.

use crate::timing::{millis_since, Throttle};
use crate::traits::Buzzer;

/// Beep pitch.
pub const BEEP_HZ: u16 = 880;

/// How long a beep sounds.
pub const BEEP_MS: u32 = 30;

/// Cooldown-gated hit beep.
#[derive(Debug)]
pub struct Beeper {
    gate: Throttle,
    sounding_since: Option<u32>,
}

impl Beeper {
    /// Create a beeper honouring at most one request per `cooldown_ms`.
    pub fn new(cooldown_ms: u32) -> Self {
        Self {
            gate: Throttle::new(cooldown_ms),
            sounding_since: None,
        }
    }

    /// Request a beep. Returns whether the cooldown let it sound.
    pub fn request<B: Buzzer>(&mut self, now_ms: u32, buzzer: &mut B) -> bool {
        if self.gate.ready(now_ms) {
            buzzer.tone(BEEP_HZ);
            self.sounding_since = Some(now_ms);
            true
        } else {
            false
        }
    }

    /// Silence a beep whose time is up.
    pub fn tick<B: Buzzer>(&mut self, now_ms: u32, buzzer: &mut B) {
        if let Some(since) = self.sounding_since {
            if millis_since(now_ms, since) >= BEEP_MS {
                buzzer.stop();
                self.sounding_since = None;
            }
        }
    }
}
