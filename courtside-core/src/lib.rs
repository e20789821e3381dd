//! Board-agnostic control core for the Courtside pong console
//!
//! This crate contains all console logic that does not depend on specific
//! hardware implementations:
//!
//! - Hardware abstraction traits (draw surface, buzzer, control panel)
//! - Court render state with display-bound clamping
//! - Victory fanfare sequencer and hit beeper
//! - Victory timer (settle, decide, banner)
//! - Frame renderer
//! - The console itself: a single-threaded cooperative tick loop
//!
//! Everything here is driven by caller-supplied millisecond timestamps, so
//! the whole crate tests on the host with synthetic time.

#![no_std]
#![deny(unsafe_code)]

pub mod beep;
pub mod config;
pub mod console;
pub mod court;
pub mod melody;
pub mod render;
pub mod timing;
pub mod traits;
pub mod victory;

#[cfg(test)]
mod testing;
