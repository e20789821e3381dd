//! Hardware abstraction traits
//!
//! These traits define the interface between the console logic and
//! hardware-specific implementations.

pub mod display;
pub mod panel;
pub mod sound;

pub use display::{DrawError, DrawSurface};
pub use panel::ControlPanel;
pub use sound::{Buzzer, Delay};
