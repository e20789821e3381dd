//! Victory timer: settle, decide, banner
//!
//! A `W` from the host opens a settle window instead of deciding on the
//! spot: the score update for the final point is often still in flight
//! when the host calls the match. The winner is read from the scores at
//! the moment the window closes, and the banner then holds the screen for
//! a fixed time before live rendering resumes.

use crate::timing::millis_since;

/// Outcome of the winner decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Winner {
    /// Scores were equal when the settle window closed.
    Undecided,
    Left,
    Right,
}

impl Winner {
    /// Decide from a `(left, right)` score pair.
    pub fn from_scores(scores: (u16, u16)) -> Self {
        use core::cmp::Ordering;
        match scores.0.cmp(&scores.1) {
            Ordering::Greater => Winner::Left,
            Ordering::Less => Winner::Right,
            Ordering::Equal => Winner::Undecided,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Phase {
    /// No victory pending.
    Idle,
    /// Settle window open, winner not yet decided.
    Deciding { since_ms: u32 },
    /// Banner on screen.
    Showing { winner: Winner, since_ms: u32 },
}

/// The settle/decide/banner state machine. Exactly one phase at a time.
#[derive(Debug)]
pub struct VictoryTimer {
    phase: Phase,
    settle_ms: u32,
    banner_ms: u32,
}

impl VictoryTimer {
    /// Create an idle timer with the given settle and banner durations.
    pub fn new(settle_ms: u32, banner_ms: u32) -> Self {
        Self {
            phase: Phase::Idle,
            settle_ms,
            banner_ms,
        }
    }

    /// Open the settle window. A fresh trigger always restarts it, from
    /// any phase.
    pub fn trigger(&mut self, now_ms: u32) {
        self.phase = Phase::Deciding { since_ms: now_ms };
    }

    /// Advance the timer against the current score.
    pub fn tick(&mut self, now_ms: u32, scores: (u16, u16)) {
        match self.phase {
            Phase::Idle => {}
            Phase::Deciding { since_ms } => {
                if millis_since(now_ms, since_ms) >= self.settle_ms {
                    self.phase = Phase::Showing {
                        winner: Winner::from_scores(scores),
                        since_ms: now_ms,
                    };
                }
            }
            Phase::Showing { since_ms, .. } => {
                if millis_since(now_ms, since_ms) >= self.banner_ms {
                    self.phase = Phase::Idle;
                }
            }
        }
    }

    /// The winner to banner, while the banner phase lasts.
    pub fn banner(&self) -> Option<Winner> {
        match self.phase {
            Phase::Showing { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// True when nothing is pending or showing.
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }
}
