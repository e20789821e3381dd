//! Draw surface backed by the SH1106 frame buffer
//!
//! Implements the console's `DrawSurface` with embedded-graphics
//! primitives drawn into the SH1106 RAM buffer. Drawing is infallible;
//! only `present` touches the I2C bus.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Ellipse, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use courtside_core::traits::{DrawError, DrawSurface};

use crate::display::Sh1106;

/// [`DrawSurface`] over an SH1106 panel.
pub struct OledSurface<I2C> {
    panel: Sh1106<I2C>,
    invert: bool,
}

impl<I2C> OledSurface<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(panel: Sh1106<I2C>) -> Self {
        Self {
            panel,
            invert: false,
        }
    }

    /// Run the panel init sequence.
    pub fn init(&mut self) -> Result<(), DrawError> {
        self.panel.init().map_err(|_| DrawError::Bus)
    }

    fn ink(&self) -> BinaryColor {
        if self.invert {
            BinaryColor::Off
        } else {
            BinaryColor::On
        }
    }
}

impl<I2C> DrawSurface for OledSurface<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) -> Result<(), DrawError> {
        self.panel.clear_buffer();
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), DrawError> {
        let _ = Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_fill(self.ink()))
            .draw(&mut self.panel);
        Ok(())
    }

    fn fill_ellipse(&mut self, cx: i32, cy: i32, rx: u32, ry: u32) -> Result<(), DrawError> {
        let _ = Ellipse::with_center(Point::new(cx, cy), Size::new(rx * 2 + 1, ry * 2 + 1))
            .into_styled(PrimitiveStyle::with_fill(self.ink()))
            .draw(&mut self.panel);
        Ok(())
    }

    fn vline(&mut self, x: i32, y: i32, len: u32) -> Result<(), DrawError> {
        self.fill_rect(x, y, 1, len)
    }

    fn text(&mut self, x: i32, y: i32, text: &str) -> Result<(), DrawError> {
        let style = MonoTextStyle::new(&FONT_6X10, self.ink());
        let _ = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut self.panel);
        Ok(())
    }

    fn text_width(&self, text: &str) -> u32 {
        text.len() as u32 * FONT_6X10.character_size.width
    }

    fn set_invert(&mut self, on: bool) {
        self.invert = on;
    }

    fn present(&mut self) -> Result<(), DrawError> {
        self.panel.flush().map_err(|_| DrawError::Bus)
    }
}
