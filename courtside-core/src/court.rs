//! Court render state and geometry
//!
//! The single source of truth for what the renderer draws. The host sends
//! raw positions; this module owns clamping them into the panel so a
//! buggy or malicious host can never push sprites off into the weeds.

use courtside_protocol::CourtUpdate;

/// Court width in pixels.
pub const COURT_WIDTH: i32 = 128;

/// Court height in pixels.
pub const COURT_HEIGHT: i32 = 64;

/// Paddle sprite size.
pub const PADDLE_WIDTH: u32 = 3;
pub const PADDLE_HEIGHT: u32 = 12;

/// Horizontal gap between a paddle and its side of the court.
pub const PADDLE_INSET: i32 = 2;

/// Ball radius, both axes.
pub const BALL_RADIUS: u32 = 2;

/// Highest y a paddle top edge may take.
const PADDLE_Y_MAX: i32 = COURT_HEIGHT - PADDLE_HEIGHT as i32;

/// Everything the renderer needs to draw one frame of the match.
///
/// Written only by [`apply`](CourtState::apply), read by the renderer in
/// the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CourtState {
    /// Left paddle top edge.
    pub paddle_left: i32,
    /// Right paddle top edge.
    pub paddle_right: i32,
    /// Ball centre.
    pub ball_x: i32,
    pub ball_y: i32,
    /// Match score. Not bounded by the display: the renderer prints
    /// whatever the host reports.
    pub score_left: u16,
    pub score_right: u16,
}

impl Default for CourtState {
    fn default() -> Self {
        Self {
            paddle_left: PADDLE_Y_MAX / 2,
            paddle_right: PADDLE_Y_MAX / 2,
            ball_x: COURT_WIDTH / 2,
            ball_y: COURT_HEIGHT / 2,
            score_left: 0,
            score_right: 0,
        }
    }
}

impl CourtState {
    /// Apply a host update, clamping positions into the court.
    ///
    /// Scores only change when the update carried them.
    pub fn apply(&mut self, update: &CourtUpdate) {
        self.paddle_left = update.paddle_left.clamp(0, PADDLE_Y_MAX);
        self.paddle_right = update.paddle_right.clamp(0, PADDLE_Y_MAX);
        self.ball_x = update.ball_x.clamp(0, COURT_WIDTH - 1);
        self.ball_y = update.ball_y.clamp(0, COURT_HEIGHT - 1);

        if let Some((left, right)) = update.scores {
            self.score_left = left.clamp(0, i32::from(u16::MAX)) as u16;
            self.score_right = right.clamp(0, i32::from(u16::MAX)) as u16;
        }
    }

    /// Current score as `(left, right)`.
    pub fn scores(&self) -> (u16, u16) {
        (self.score_left, self.score_right)
    }
}
