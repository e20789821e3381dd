//! Console tick task
//!
//! Drives the console model at a fixed rate: drains host bytes from the
//! link pipe, runs one tick, and forwards any telemetry report to the
//! TX task.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use courtside_core::console::Console;

use crate::board::{AdcPanel, BusyDelay, OledI2c, PwmBuzzer};
use crate::channels::{LINK_RX, TELEMETRY_CHANNEL};
use crate::display::OledSurface;

/// Tick interval in milliseconds
///
/// Each tick pushes a full frame over I2C (~26 ms at 400 kHz), so the
/// interval leaves headroom for sampling and parsing.
pub const TICK_INTERVAL_MS: u32 = 40;

/// Console wired to the board peripherals
pub type BoardConsole = Console<OledSurface<OledI2c>, PwmBuzzer, AdcPanel, BusyDelay>;

/// Console task - runs the game console state machine
#[embassy_executor::task]
pub async fn console_task(mut console: BoardConsole) {
    info!("Console task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));
    let start = Instant::now();
    let mut input = [0u8; 256];

    loop {
        ticker.next().await;

        let now_ms = start.elapsed().as_millis() as u32;

        // Drain everything the RX task buffered since the last tick
        let mut filled = 0;
        while filled < input.len() {
            match LINK_RX.try_read(&mut input[filled..]) {
                Ok(n) => filled += n,
                Err(_) => break,
            }
        }

        let (report, drawn) = console.tick(now_ms, &input[..filled]);
        if let Some(report) = report {
            if TELEMETRY_CHANNEL.try_send(report).is_err() {
                warn!("Telemetry channel full, dropping report");
            }
        }
        if let Err(e) = drawn {
            warn!("Frame dropped: {:?}", e);
        }
    }
}
