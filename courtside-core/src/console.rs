//! Console control loop
//!
//! [`Console`] owns the court state, the protocol reader and all four
//! peripheral handles, and advances everything in one `tick` call. The
//! firmware task only ferries bytes in and telemetry out; every decision
//! is made here, against the caller's clock, so the whole loop runs on
//! the host under test.
//!
//! Each tick runs in a fixed order: panel telemetry, host input, beep
//! deadline, melody advance, victory timer, frame render. Host input is
//! drained before the victory timer fires, so a score update racing a
//! victory request still lands before the winner is read.

use courtside_protocol::{Command, LineReader, PanelReport};

use crate::beep::Beeper;
use crate::config::ConsoleConfig;
use crate::court::CourtState;
use crate::melody::{self, MelodyPlayer, VICTORY_FANFARE};
use crate::render;
use crate::timing::Throttle;
use crate::traits::{Buzzer, ControlPanel, Delay, DrawError, DrawSurface};
use crate::victory::VictoryTimer;

/// The whole console behind one `tick`.
pub struct Console<D, B, P, L> {
    surface: D,
    buzzer: B,
    panel: P,
    delay: L,
    reader: LineReader,
    court: CourtState,
    melody: MelodyPlayer,
    victory: VictoryTimer,
    beeper: Beeper,
    telemetry: Throttle,
    link_seen: bool,
}

impl<D, B, P, L> Console<D, B, P, L>
where
    D: DrawSurface,
    B: Buzzer,
    P: ControlPanel,
    L: Delay,
{
    pub fn new(config: ConsoleConfig, surface: D, buzzer: B, panel: P, delay: L) -> Self {
        Self {
            surface,
            buzzer,
            panel,
            delay,
            reader: LineReader::new(),
            court: CourtState::default(),
            melody: MelodyPlayer::new(&VICTORY_FANFARE),
            victory: VictoryTimer::new(config.settle_delay_ms, config.banner_ms),
            beeper: Beeper::new(config.beep_cooldown_ms),
            telemetry: Throttle::new(config.telemetry_period_ms),
            link_seen: false,
        }
    }

    /// Advance the console by one step.
    ///
    /// `input` is whatever the link received since the last tick; it may
    /// be empty. Returns the telemetry report due this tick, if any, for
    /// the caller to transmit, paired with the frame outcome. The report
    /// is gated only by its own throttle: a draw error aborts the frame,
    /// never the report, and state has already advanced when it is
    /// returned.
    pub fn tick(
        &mut self,
        now_ms: u32,
        input: &[u8],
    ) -> (Option<PanelReport>, Result<(), DrawError>) {
        let report = self.sample_panel(now_ms);

        for &byte in input {
            if let Some(line) = self.reader.feed(byte) {
                self.link_seen = true;
                if let Some(command) = Command::from_line(&line) {
                    self.apply(now_ms, command);
                }
            }
        }

        self.beeper.tick(now_ms, &mut self.buzzer);
        self.melody.tick(now_ms, &mut self.buzzer);
        self.victory.tick(now_ms, self.court.scores());

        (report, self.draw())
    }

    /// Current court state.
    pub fn court(&self) -> &CourtState {
        &self.court
    }

    fn draw(&mut self) -> Result<(), DrawError> {
        if let Some(winner) = self.victory.banner() {
            render::draw_banner(&mut self.surface, &self.court, winner)
        } else if !self.link_seen {
            render::draw_splash(&mut self.surface)
        } else {
            render::draw_match(&mut self.surface, &self.court)
        }
    }

    fn sample_panel(&mut self, now_ms: u32) -> Option<PanelReport> {
        if !self.telemetry.ready(now_ms) {
            return None;
        }
        let report = PanelReport {
            paddle_left: self.panel.left_paddle(),
            paddle_right: self.panel.right_paddle(),
            button_left: self.panel.left_button(),
            button_right: self.panel.right_button(),
        };
        self.panel.toggle_indicator();
        Some(report)
    }

    fn apply(&mut self, now_ms: u32, command: Command) {
        match command {
            Command::Beep => {
                self.beeper.request(now_ms, &mut self.buzzer);
            }
            Command::Victory => {
                self.victory.trigger(now_ms);
                self.melody.start(now_ms, &mut self.buzzer);
            }
            Command::Chime => {
                melody::play_blocking(&VICTORY_FANFARE, &mut self.buzzer, &mut self.delay);
            }
            Command::Court(update) => {
                self.court.apply(&update);
            }
        }
    }
}
