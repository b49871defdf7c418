//! Headless frontend that records draw calls
//!
//! `HeadlessFrontend` implements [`Frontend`] without a window. Every widget
//! call is appended to a list of [`DrawOp`]s and user interaction is scripted
//! ahead of time with [`HeadlessFrontend::click`], [`HeadlessFrontend::type_text`]
//! and friends. Useful for driving a browser from tests or from a host that
//! renders the recorded operations itself.
//!
//! ```
//! use browsekit::ui::{Frontend, HeadlessFrontend};
//!
//! let mut ui = HeadlessFrontend::new();
//! ui.click("Search");
//! ui.run_frame(|ui| {
//!     let _pressed = ui.button("Search");
//! });
//! assert!(ui.buttons().contains(&"Search"));
//! ```

use super::traits::Frontend;
use super::types::{FieldEvent, RenderPhase, TextStyle};
use std::time::{Duration, Instant};

const DEFAULT_WIDTH: f32 = 1200.0;

/// One recorded widget call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Horizontal group opened
    BeginHorizontal,
    /// Horizontal group closed
    EndHorizontal,
    /// Vertical group opened
    BeginVertical,
    /// Vertical group closed
    EndVertical,
    /// Blank space
    Space(f32),
    /// Separator at the given indent
    Divider(f32),
    /// Plain label
    Label { text: String, style: TextStyle },
    /// Button
    Button { label: String },
    /// Toggle and its value after the pass
    Toggle { label: String, value: bool },
    /// Disclosure control, its state after the pass and its title width
    Disclosure {
        label: String,
        style: TextStyle,
        open: bool,
        width: f32,
    },
    /// Text field and its content after the pass
    TextField { id: String, text: String },
    /// Numeric field and its value after the pass
    IntField { id: String, value: i64 },
}

/// Interaction queued for the next widget that matches it
#[derive(Debug, Clone, PartialEq, Eq)]
enum ScriptedInput {
    Click(String),
    Type { id: String, text: String },
    Commit(String),
    SetInt { id: String, value: i64 },
}

/// Frontend that records instead of drawing
#[derive(Debug, Clone)]
pub struct HeadlessFrontend {
    phase: RenderPhase,
    frame: u64,
    now: Instant,
    width: f32,
    ops: Vec<DrawOp>,
    inputs: Vec<ScriptedInput>,
}

impl HeadlessFrontend {
    /// Create a frontend with the clock set to the current instant
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a frontend whose clock starts at `now`
    #[must_use]
    pub fn starting_at(now: Instant) -> Self {
        Self {
            phase: RenderPhase::Measure,
            frame: 0,
            now,
            width: DEFAULT_WIDTH,
            ops: Vec::new(),
            inputs: Vec::new(),
        }
    }

    /// Set the width reported by [`Frontend::available_width`]
    #[must_use]
    pub const fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Advance the clock
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Start a new frame in the measurement phase, discarding recorded ops
    pub fn begin_frame(&mut self) {
        self.frame += 1;
        self.phase = RenderPhase::Measure;
        self.ops.clear();
    }

    /// Switch the phase of the current frame, discarding recorded ops
    pub fn set_phase(&mut self, phase: RenderPhase) {
        self.phase = phase;
        self.ops.clear();
    }

    /// Run one full frame: a measurement pass followed by a repaint pass
    ///
    /// Recorded ops afterwards are those of the repaint pass.
    pub fn run_frame(&mut self, mut pass: impl FnMut(&mut Self)) {
        self.begin_frame();
        pass(self);
        self.set_phase(RenderPhase::Repaint);
        pass(self);
    }

    /// Press the next button, toggle or disclosure labelled `label`
    pub fn click(&mut self, label: impl Into<String>) {
        self.inputs.push(ScriptedInput::Click(label.into()));
    }

    /// Replace the content of the next text field with id `id`
    pub fn type_text(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.inputs.push(ScriptedInput::Type {
            id: id.into(),
            text: text.into(),
        });
    }

    /// Submit the next text or numeric field with id `id`
    pub fn commit(&mut self, id: impl Into<String>) {
        self.inputs.push(ScriptedInput::Commit(id.into()));
    }

    /// Replace the value of the next numeric field with id `id`
    pub fn set_int(&mut self, id: impl Into<String>, value: i64) {
        self.inputs.push(ScriptedInput::SetInt {
            id: id.into(),
            value,
        });
    }

    /// Number of scripted inputs not consumed yet
    #[must_use]
    pub fn pending_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Ops recorded since the last frame or phase switch
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Text of every label, in draw order
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Label of every button, in draw order
    #[must_use]
    pub fn buttons(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Button { label } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Title width of every disclosure control, in draw order
    #[must_use]
    pub fn disclosure_widths(&self) -> Vec<f32> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Disclosure { width, .. } => Some(*width),
                _ => None,
            })
            .collect()
    }

    /// Every disclosure control as `(label, open)`, in draw order
    #[must_use]
    pub fn disclosures(&self) -> Vec<(&str, bool)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Disclosure { label, open, .. } => Some((label.as_str(), *open)),
                _ => None,
            })
            .collect()
    }

    /// True when a label with exactly this text was drawn
    #[must_use]
    pub fn has_label(&self, text: &str) -> bool {
        self.labels().contains(&text)
    }

    fn take_input(&mut self, matches: impl Fn(&ScriptedInput) -> bool) -> Option<ScriptedInput> {
        let index = self.inputs.iter().position(matches)?;
        Some(self.inputs.remove(index))
    }

    fn take_click(&mut self, label: &str) -> bool {
        self.take_input(|input| matches!(input, ScriptedInput::Click(l) if l == label))
            .is_some()
    }
}

impl Default for HeadlessFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for HeadlessFrontend {
    fn phase(&self) -> RenderPhase {
        self.phase
    }

    fn frame(&self) -> u64 {
        self.frame
    }

    fn now(&self) -> Instant {
        self.now
    }

    fn available_width(&self) -> f32 {
        self.width
    }

    fn begin_horizontal(&mut self) {
        self.ops.push(DrawOp::BeginHorizontal);
    }

    fn end_horizontal(&mut self) {
        self.ops.push(DrawOp::EndHorizontal);
    }

    fn begin_vertical(&mut self) {
        self.ops.push(DrawOp::BeginVertical);
    }

    fn end_vertical(&mut self) {
        self.ops.push(DrawOp::EndVertical);
    }

    fn space(&mut self, width: f32) {
        self.ops.push(DrawOp::Space(width));
    }

    fn divider(&mut self, indent: f32) {
        self.ops.push(DrawOp::Divider(indent));
    }

    fn label(&mut self, text: &str, style: TextStyle, _width: Option<f32>) {
        self.ops.push(DrawOp::Label {
            text: text.to_string(),
            style,
        });
    }

    fn button(&mut self, label: &str) -> bool {
        self.ops.push(DrawOp::Button {
            label: label.to_string(),
        });
        self.take_click(label)
    }

    fn toggle(&mut self, label: &str, _style: TextStyle, value: &mut bool) -> bool {
        let flipped = self.take_click(label);
        if flipped {
            *value = !*value;
        }
        self.ops.push(DrawOp::Toggle {
            label: label.to_string(),
            value: *value,
        });
        flipped
    }

    fn disclosure(&mut self, label: &str, style: TextStyle, open: &mut bool, width: f32) -> bool {
        let flipped = self.take_click(label);
        if flipped {
            *open = !*open;
        }
        self.ops.push(DrawOp::Disclosure {
            label: label.to_string(),
            style,
            open: *open,
            width,
        });
        flipped
    }

    fn text_field(&mut self, id: &str, text: &mut String, _width: f32) -> FieldEvent {
        let event = match self.take_input(|input| match input {
            ScriptedInput::Type { id: i, .. } | ScriptedInput::Commit(i) => i == id,
            _ => false,
        }) {
            Some(ScriptedInput::Type { text: typed, .. }) => {
                *text = typed;
                FieldEvent::Changed
            }
            Some(ScriptedInput::Commit(_)) => FieldEvent::Committed,
            _ => FieldEvent::Unchanged,
        };
        self.ops.push(DrawOp::TextField {
            id: id.to_string(),
            text: text.clone(),
        });
        event
    }

    fn int_field(&mut self, id: &str, value: &mut i64, _width: f32) -> FieldEvent {
        let event = match self.take_input(|input| match input {
            ScriptedInput::SetInt { id: i, .. } | ScriptedInput::Commit(i) => i == id,
            _ => false,
        }) {
            Some(ScriptedInput::SetInt { value: typed, .. }) => {
                *value = typed;
                FieldEvent::Changed
            }
            Some(ScriptedInput::Commit(_)) => FieldEvent::Committed,
            _ => FieldEvent::Unchanged,
        };
        self.ops.push(DrawOp::IntField {
            id: id.to_string(),
            value: *value,
        });
        event
    }
}
