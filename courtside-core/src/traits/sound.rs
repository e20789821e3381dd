//! Buzzer and blocking delay traits

/// Trait for the piezo buzzer
///
/// One output channel: a new tone replaces whatever is sounding. Timing
/// (note lengths, beep duration) is the caller's job.
pub trait Buzzer {
    /// Start sounding a square wave at `hz`.
    fn tone(&mut self, hz: u16);

    /// Silence the buzzer.
    fn stop(&mut self);
}

/// Trait for a blocking millisecond delay
///
/// The console uses this only for the synchronous chime, the one place
/// where it deliberately stops servicing the link.
pub trait Delay {
    /// Busy-wait for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}
