//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::pipe::Pipe;

use courtside_protocol::PanelReport;

/// Capacity of the raw host link receive buffer
const LINK_RX_SIZE: usize = 256;

/// Channel capacity for outbound telemetry reports
const TELEMETRY_CHANNEL_SIZE: usize = 4;

/// Raw bytes from the host link, drained by the console task each tick
pub static LINK_RX: Pipe<CriticalSectionRawMutex, LINK_RX_SIZE> = Pipe::new();

/// Panel reports from the console task, transmitted by the link TX task
pub static TELEMETRY_CHANNEL: Channel<
    CriticalSectionRawMutex,
    PanelReport,
    TELEMETRY_CHANNEL_SIZE,
> = Channel::new();
