//! Host Link Protocol
//!
//! This crate defines the UART protocol between the host (which runs the
//! actual Pong match) and the Courtside console (which renders it). The
//! protocol is newline-delimited ASCII, chosen so a human with a serial
//! terminal can drive the console by hand.
//!
//! # Inbound (host to console)
//!
//! One command per line:
//!
//! ```text
//! ┌────────────────────┬──────────────────────────────────────────────┐
//! │ B                  │ hit beep (rate limited)                      │
//! │ W                  │ victory: start fanfare, decide winner        │
//! │ V                  │ chime: play the fanfare synchronously        │
//! │ pl,pr,bx,by[,sl,sr]│ court update: paddles, ball, optional scores │
//! └────────────────────┴──────────────────────────────────────────────┘
//! ```
//!
//! Letters are case-insensitive. Carriage returns are ignored, so both
//! `\n` and `\r\n` line endings work. Anything unparseable is a no-op;
//! the console never answers a command.
//!
//! # Outbound (console to host)
//!
//! A periodic telemetry line `pl,pr,bl,br` with the raw paddle wheel
//! readings and button states.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod line;
pub mod telemetry;

pub use command::{Command, CourtUpdate};
pub use line::{Line, LineReader, MAX_LINE_LEN};
pub use telemetry::PanelReport;
