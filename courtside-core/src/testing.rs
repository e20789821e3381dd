//! Test doubles shared by the unit tests.

use heapless::{String, Vec};

use crate::traits::{Buzzer, ControlPanel, Delay, DrawError, DrawSurface};

/// A recorded buzzer call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzerEvent {
    Tone(u16),
    Stop,
}

/// Buzzer that records every call.
pub struct MockBuzzer {
    events: Vec<BuzzerEvent, 64>,
}

impl MockBuzzer {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn events(&self) -> &[BuzzerEvent] {
        &self.events
    }

    /// Frequency of the most recent tone, if any tone was ever sounded.
    pub fn last_tone(&self) -> Option<u16> {
        self.events.iter().rev().find_map(|e| match e {
            BuzzerEvent::Tone(hz) => Some(*hz),
            BuzzerEvent::Stop => None,
        })
    }

    pub fn tone_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, BuzzerEvent::Tone(_)))
            .count()
    }

    /// True if nothing is sounding: no calls yet, or the last was a stop.
    pub fn is_silent(&self) -> bool {
        matches!(self.events.last(), None | Some(BuzzerEvent::Stop))
    }
}

impl Buzzer for MockBuzzer {
    fn tone(&mut self, hz: u16) {
        let _ = self.events.push(BuzzerEvent::Tone(hz));
    }

    fn stop(&mut self) {
        let _ = self.events.push(BuzzerEvent::Stop);
    }
}

/// Delay that records requested durations instead of waiting.
pub struct TraceDelay {
    delays: Vec<u32, 64>,
}

impl TraceDelay {
    pub fn new() -> Self {
        Self { delays: Vec::new() }
    }

    pub fn delays(&self) -> &[u32] {
        &self.delays
    }
}

impl Delay for TraceDelay {
    fn delay_ms(&mut self, ms: u32) {
        let _ = self.delays.push(ms);
    }
}

/// Panel with scriptable readings and a toggle counter.
pub struct MockPanel {
    pub left: u16,
    pub right: u16,
    pub left_pressed: bool,
    pub right_pressed: bool,
    pub toggles: usize,
}

impl MockPanel {
    pub fn new(left: u16, right: u16) -> Self {
        Self {
            left,
            right,
            left_pressed: false,
            right_pressed: false,
            toggles: 0,
        }
    }
}

impl ControlPanel for MockPanel {
    fn left_paddle(&mut self) -> u16 {
        self.left
    }

    fn right_paddle(&mut self) -> u16 {
        self.right
    }

    fn left_button(&mut self) -> bool {
        self.left_pressed
    }

    fn right_button(&mut self) -> bool {
        self.right_pressed
    }

    fn toggle_indicator(&mut self) {
        self.toggles += 1;
    }
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Clear,
    Rect { x: i32, y: i32, w: u32, h: u32 },
    Ellipse { cx: i32, cy: i32, rx: u32, ry: u32 },
    VLine { x: i32, y: i32, len: u32 },
    Text { x: i32, y: i32, text: String<32> },
    Invert(bool),
    Present,
}

/// Surface that records draw calls; glyphs are a fixed 6 pixels wide.
pub struct MockSurface {
    ops: Vec<DrawOp, 256>,
    /// When set, `present` reports a bus error after logging the call.
    pub fail_present: bool,
}

pub const MOCK_GLYPH_WIDTH: u32 = 6;

impl MockSurface {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            fail_present: false,
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear_log(&mut self) {
        self.ops.clear();
    }

    pub fn text_ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { .. }))
    }

    fn log(&mut self, op: DrawOp) {
        let _ = self.ops.push(op);
    }
}

impl DrawSurface for MockSurface {
    fn clear(&mut self) -> Result<(), DrawError> {
        self.log(DrawOp::Clear);
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), DrawError> {
        self.log(DrawOp::Rect {
            x,
            y,
            w: width,
            h: height,
        });
        Ok(())
    }

    fn fill_ellipse(&mut self, cx: i32, cy: i32, rx: u32, ry: u32) -> Result<(), DrawError> {
        self.log(DrawOp::Ellipse { cx, cy, rx, ry });
        Ok(())
    }

    fn vline(&mut self, x: i32, y: i32, len: u32) -> Result<(), DrawError> {
        self.log(DrawOp::VLine { x, y, len });
        Ok(())
    }

    fn text(&mut self, x: i32, y: i32, text: &str) -> Result<(), DrawError> {
        let mut stored = String::new();
        for ch in text.chars() {
            let _ = stored.push(ch);
        }
        self.log(DrawOp::Text { x, y, text: stored });
        Ok(())
    }

    fn text_width(&self, text: &str) -> u32 {
        MOCK_GLYPH_WIDTH * text.len() as u32
    }

    fn set_invert(&mut self, on: bool) {
        self.log(DrawOp::Invert(on));
    }

    fn present(&mut self) -> Result<(), DrawError> {
        self.log(DrawOp::Present);
        if self.fail_present {
            Err(DrawError::Bus)
        } else {
            Ok(())
        }
    }
}
