//! Courtside - Serial Pong Console Firmware
//!
//! Main firmware binary for RP2040-based pong consoles. A host machine
//! drives the match over a UART text protocol; this firmware renders
//! the court on an OLED, sounds the buzzer and streams the control
//! panel state back.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use courtside_core::config::ConsoleConfig;
use courtside_core::console::Console;

use crate::board::{AdcPanel, BusyDelay, PwmBuzzer};
use crate::display::{OledSurface, Sh1106};

mod board;
mod channels;
mod display;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Courtside firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup UART for the host link
    let uart_config = UartConfig::default(); // 115200 baud default

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized for host link");

    // Setup I2C for the OLED (GPIO3=SCL, GPIO2=SDA)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let bus = I2c::new_blocking(p.I2C1, p.PIN_3, p.PIN_2, i2c_config);

    let mut surface = OledSurface::new(Sh1106::new(bus));
    if let Err(e) = surface.init() {
        error!("Failed to initialize display: {:?}", e);
    } else {
        info!("OLED initialized");
    }

    // Paddle pots on ADC0/ADC1, player buttons, activity LED
    let adc = Adc::new_blocking(p.ADC, embassy_rp::adc::Config::default());
    let panel = AdcPanel::new(
        adc,
        Channel::new_pin(p.PIN_26, Pull::None),
        Channel::new_pin(p.PIN_27, Pull::None),
        Input::new(p.PIN_12, Pull::Up),
        Input::new(p.PIN_13, Pull::Up),
        Output::new(p.PIN_25, Level::Low),
    );

    // Buzzer on PWM slice 7 output B (GPIO15)
    let buzzer = PwmBuzzer::new(Pwm::new_output_b(p.PWM_SLICE7, p.PIN_15, PwmConfig::default()));

    let console = Console::new(ConsoleConfig::default(), surface, buzzer, panel, BusyDelay);

    // Spawn tasks
    spawner.spawn(tasks::link_rx_task(rx)).unwrap();
    spawner.spawn(tasks::link_tx_task(tx)).unwrap();
    spawner.spawn(tasks::console_task(console)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
