//! Outbound panel telemetry.

use core::fmt::Write;
use heapless::String;

/// Capacity of an encoded telemetry line; the worst case
/// (`65535,65535,1,1\r\n`) is 17 bytes.
pub const REPORT_LINE_CAP: usize = 24;

/// One sample of the operator panel, reported periodically to the host.
///
/// Paddle values are raw ADC readings; scaling them into paddle motion is
/// the host's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelReport {
    pub paddle_left: u16,
    pub paddle_right: u16,
    pub button_left: bool,
    pub button_right: bool,
}

impl PanelReport {
    /// Encode as a `pl,pr,bl,br` line, buttons as 0/1, `println` style
    /// line ending.
    pub fn to_line(&self) -> String<REPORT_LINE_CAP> {
        let mut line = String::new();
        // Cannot fail: REPORT_LINE_CAP covers the widest encoding.
        let _ = write!(
            line,
            "{},{},{},{}\r\n",
            self.paddle_left,
            self.paddle_right,
            self.button_left as u8,
            self.button_right as u8
        );
        line
    }
}
