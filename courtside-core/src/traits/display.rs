//! Draw surface trait for the court display

/// Errors that can occur while driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawError {
    /// Transfer to the display panel failed
    Bus,
}

/// Trait for the surface the court is drawn on
///
/// Implementations draw into a framebuffer and push it to the panel on
/// [`present`](DrawSurface::present). Coordinates are pixels with the
/// origin top-left; drawing outside the panel clips silently, which lets
/// the renderer draw the ball flush against an edge.
pub trait DrawSurface {
    /// Blank the framebuffer to the background.
    fn clear(&mut self) -> Result<(), DrawError>;

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), DrawError>;

    /// Fill an ellipse centred on (`cx`, `cy`) with the given radii.
    fn fill_ellipse(&mut self, cx: i32, cy: i32, rx: u32, ry: u32) -> Result<(), DrawError>;

    /// Draw a 1-pixel vertical line downwards from (`x`, `y`).
    fn vline(&mut self, x: i32, y: i32, len: u32) -> Result<(), DrawError>;

    /// Draw text with its top-left corner at (`x`, `y`).
    fn text(&mut self, x: i32, y: i32, text: &str) -> Result<(), DrawError>;

    /// Width in pixels `text` would occupy, for centring.
    fn text_width(&self, text: &str) -> u32;

    /// Swap foreground and background for subsequent draws.
    ///
    /// Used to punch banner text out of a filled band.
    fn set_invert(&mut self, on: bool);

    /// Push the framebuffer to the panel.
    fn present(&mut self) -> Result<(), DrawError>;
}
