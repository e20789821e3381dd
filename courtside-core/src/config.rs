//! Console configuration
//!
//! Timing knobs for the control loop. The defaults match the shipped
//! console; hosts with slow serial stacks can stretch the settle window
//! without touching the core.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunable timings for the console loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConsoleConfig {
    /// How long a victory request waits for trailing score updates
    /// before the winner is read (ms).
    pub settle_delay_ms: u32,
    /// How long the victory banner stays up (ms).
    pub banner_ms: u32,
    /// Minimum spacing between hit beeps (ms). Requests inside the
    /// window are dropped, not queued.
    pub beep_cooldown_ms: u32,
    /// Spacing between panel telemetry reports (ms).
    pub telemetry_period_ms: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 500,
            banner_ms: 4000,
            beep_cooldown_ms: 100,
            telemetry_period_ms: 50,
        }
    }
}
