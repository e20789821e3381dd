//! OLED display driver and draw surface

pub mod sh1106;
pub mod surface;

pub use sh1106::Sh1106;
pub use surface::OledSurface;
