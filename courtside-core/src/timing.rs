//! Deadline and throttle helpers for the cooperative tick loop
//!
//! All waiting in the console is a non-blocking "has enough time passed"
//! check against caller-supplied u32 millisecond timestamps. Elapsed time
//! uses wrapping subtraction so every deadline keeps working across the
//! counter rollover (roughly every 49.7 days).

/// Milliseconds elapsed from `then_ms` to `now_ms`.
pub fn millis_since(now_ms: u32, then_ms: u32) -> u32 {
    now_ms.wrapping_sub(then_ms)
}

/// Minimum-spacing gate for repeated actions.
///
/// Used for the hit-beep cooldown and the telemetry period. The first
/// request after construction always passes; a passing request starts the
/// next period. Blocked requests are dropped, not queued.
#[derive(Debug, Clone)]
pub struct Throttle {
    period_ms: u32,
    last_ms: Option<u32>,
}

impl Throttle {
    /// Create a gate that passes at most once per `period_ms`.
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            last_ms: None,
        }
    }

    /// True if the action may run now; a `true` result arms the next period.
    pub fn ready(&mut self, now_ms: u32) -> bool {
        let pass = match self.last_ms {
            None => true,
            Some(last) => millis_since(now_ms, last) >= self.period_ms,
        };
        if pass {
            self.last_ms = Some(now_ms);
        }
        pass
    }
}
