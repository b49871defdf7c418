//! Core traits for the UI abstraction layer

use super::types::{FieldEvent, RenderPhase, TextStyle};
use std::time::Instant;

/// Immediate-mode rendering backend consumed by the browser
///
/// This trait abstracts away the concrete widget toolkit. The browser only
/// needs a handful of primitives: labels, buttons, toggles, two kinds of
/// editable field, horizontal/vertical grouping, the width that is left in
/// the current layout, the wall clock and the current render phase.
///
/// Every widget is redrawn every pass. Interactive widgets report what the
/// user did to them during that pass through their return value.
pub trait Frontend {
    /// Current phase of the render cycle
    ///
    /// Hosts without distinct passes can keep the default, in which case
    /// [`Frontend::frame`] alone gates recomputation.
    fn phase(&self) -> RenderPhase {
        RenderPhase::Measure
    }

    /// Monotonic generation counter, bumped once per frame by the host
    fn frame(&self) -> u64;

    /// Current wall-clock time
    fn now(&self) -> Instant;

    /// Horizontal space left in the current layout group
    fn available_width(&self) -> f32;

    /// Open a horizontal layout group
    fn begin_horizontal(&mut self);

    /// Close the innermost horizontal layout group
    fn end_horizontal(&mut self);

    /// Open a vertical layout group
    fn begin_vertical(&mut self);

    /// Close the innermost vertical layout group
    fn end_vertical(&mut self);

    /// Insert blank space
    fn space(&mut self, width: f32);

    /// Draw a horizontal separator starting at `indent`
    fn divider(&mut self, indent: f32);

    /// Draw a non-interactive label
    fn label(&mut self, text: &str, style: TextStyle, width: Option<f32>);

    /// Draw a button, returning true when it was pressed
    fn button(&mut self, label: &str) -> bool;

    /// Draw a checkbox-style toggle bound to `value`
    ///
    /// Returns true when the user flipped it during this pass.
    fn toggle(&mut self, label: &str, style: TextStyle, value: &mut bool) -> bool;

    /// Draw an expand/collapse control bound to `open`
    ///
    /// Returns true when the user flipped it during this pass.
    fn disclosure(&mut self, label: &str, style: TextStyle, open: &mut bool, width: f32) -> bool;

    /// Draw a single-line text field bound to `text`
    fn text_field(&mut self, id: &str, text: &mut String, width: f32) -> FieldEvent;

    /// Draw a numeric field bound to `value`
    fn int_field(&mut self, id: &str, value: &mut i64, width: f32) -> FieldEvent;
}

/// Run `body` inside a horizontal group, closing the group afterwards
pub fn horizontal<F, R>(ui: &mut F, body: impl FnOnce(&mut F) -> R) -> R
where
    F: Frontend + ?Sized,
{
    ui.begin_horizontal();
    let result = body(ui);
    ui.end_horizontal();
    result
}

/// Run `body` inside a vertical group, closing the group afterwards
pub fn vertical<F, R>(ui: &mut F, body: impl FnOnce(&mut F) -> R) -> R
where
    F: Frontend + ?Sized,
{
    ui.begin_vertical();
    let result = body(ui);
    ui.end_vertical();
    result
}
