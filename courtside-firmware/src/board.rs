//! Board peripheral wrappers
//!
//! Adapts RP2040 peripherals to the traits the console core expects:
//! ADC paddles and buttons behind `ControlPanel`, a PWM slice behind
//! `Buzzer`, and a busy-wait `Delay` for blocking melodies.

use defmt::*;
use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::{Input, Output};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::{block_for, Duration};

use courtside_core::traits::{Buzzer, ControlPanel, Delay};

/// I2C bus the OLED panel hangs off
pub type OledI2c = I2c<'static, i2c::Blocking>;

/// PWM counter rate after the divider, in Hz
const PWM_TICK_HZ: u32 = 1_000_000;

/// Paddle knobs, buttons and the activity indicator as one panel.
pub struct AdcPanel {
    adc: Adc<'static, Blocking>,
    left: Channel<'static>,
    right: Channel<'static>,
    left_button: Input<'static>,
    right_button: Input<'static>,
    indicator: Output<'static>,
    last_left: u16,
    last_right: u16,
}

impl AdcPanel {
    pub fn new(
        adc: Adc<'static, Blocking>,
        left: Channel<'static>,
        right: Channel<'static>,
        left_button: Input<'static>,
        right_button: Input<'static>,
        indicator: Output<'static>,
    ) -> Self {
        Self {
            adc,
            left,
            right,
            left_button,
            right_button,
            indicator,
            last_left: 0,
            last_right: 0,
        }
    }

    fn read_left(&mut self) -> u16 {
        match self.adc.blocking_read(&mut self.left) {
            Ok(raw) => {
                self.last_left = raw;
                raw
            }
            Err(e) => {
                warn!("Left paddle read failed: {:?}", e);
                self.last_left
            }
        }
    }

    fn read_right(&mut self) -> u16 {
        match self.adc.blocking_read(&mut self.right) {
            Ok(raw) => {
                self.last_right = raw;
                raw
            }
            Err(e) => {
                warn!("Right paddle read failed: {:?}", e);
                self.last_right
            }
        }
    }
}

impl ControlPanel for AdcPanel {
    fn left_paddle(&mut self) -> u16 {
        self.read_left()
    }

    fn right_paddle(&mut self) -> u16 {
        self.read_right()
    }

    fn left_button(&mut self) -> bool {
        // Buttons are wired to ground with pull-ups
        self.left_button.is_low()
    }

    fn right_button(&mut self) -> bool {
        self.right_button.is_low()
    }

    fn toggle_indicator(&mut self) {
        self.indicator.toggle();
    }
}

/// Piezo buzzer on a PWM output pin.
pub struct PwmBuzzer {
    pwm: Pwm<'static>,
    config: PwmConfig,
}

impl PwmBuzzer {
    pub fn new(pwm: Pwm<'static>) -> Self {
        let mut config = PwmConfig::default();
        // 125 MHz system clock / 125 = 1 MHz counter tick
        config.divider = 125u8.into();
        config.compare_b = 0;
        let mut buzzer = Self { pwm, config };
        buzzer.pwm.set_config(&buzzer.config);
        buzzer
    }
}

impl Buzzer for PwmBuzzer {
    fn tone(&mut self, hz: u16) {
        if hz == 0 {
            self.stop();
            return;
        }
        let top = (PWM_TICK_HZ / u32::from(hz) - 1).min(u16::MAX as u32) as u16;
        self.config.top = top;
        // 50% duty square wave
        self.config.compare_b = top / 2;
        self.pwm.set_config(&self.config);
    }

    fn stop(&mut self) {
        self.config.compare_b = 0;
        self.pwm.set_config(&self.config);
    }
}

/// Busy-wait delay for the blocking chime path.
pub struct BusyDelay;

impl Delay for BusyDelay {
    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}
