//! Host link UART tasks
//!
//! The RX task moves raw bytes from the UART into the link pipe; line
//! framing and command parsing happen in the console task. The TX task
//! drains telemetry reports and writes them out as text lines.

use defmt::*;
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embedded_io_async::{Read, Write};

use crate::channels::{LINK_RX, TELEMETRY_CHANNEL};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Link RX task - forwards host bytes into the link pipe
#[embassy_executor::task]
pub async fn link_rx_task(mut rx: BufferedUartRx) {
    info!("Link RX task started");

    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);
                match LINK_RX.try_write(&buf[..n]) {
                    Ok(written) if written < n => {
                        warn!("Link pipe full, dropped {} bytes", n - written);
                    }
                    Ok(_) => {}
                    Err(_) => {
                        warn!("Link pipe full, dropped {} bytes", n);
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

/// Link TX task - writes telemetry lines to the host
#[embassy_executor::task]
pub async fn link_tx_task(mut tx: BufferedUartTx) {
    info!("Link TX task started");

    loop {
        let report = TELEMETRY_CHANNEL.receive().await;
        let line = report.to_line();
        if let Err(e) = tx.write_all(line.as_bytes()).await {
            warn!("Failed to send telemetry: {:?}", e);
        }
    }
}
