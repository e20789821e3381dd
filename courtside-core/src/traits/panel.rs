//! Operator panel trait

/// Trait for the court-side operator panel
///
/// Two paddle wheels (potentiometers), two buttons and an indicator lamp.
/// Readings are raw: the host scales paddle counts into paddle motion.
pub trait ControlPanel {
    /// Raw ADC reading of the left paddle wheel.
    fn left_paddle(&mut self) -> u16;

    /// Raw ADC reading of the right paddle wheel.
    fn right_paddle(&mut self) -> u16;

    /// True while the left button is held.
    fn left_button(&mut self) -> bool;

    /// True while the right button is held.
    fn right_button(&mut self) -> bool;

    /// Flip the indicator lamp. The console toggles it on every telemetry
    /// report as a visible link heartbeat.
    fn toggle_indicator(&mut self);
}
