//! Common types for the UI abstraction layer

use std::fmt;

/// Phase of the host's render cycle
///
/// Immediate-mode hosts walk the widget tree more than once per frame.
/// State mutation is only allowed during [`RenderPhase::Measure`], which the
/// host guarantees runs exactly once before any drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPhase {
    /// Layout/measurement pass - the single pass per frame where the
    /// browser may recompute its results
    #[default]
    Measure,
    /// Drawing pass
    Repaint,
    /// Input dispatch pass
    Input,
}

impl RenderPhase {
    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Measure => "measure",
            Self::Repaint => "repaint",
            Self::Input => "input",
        }
    }
}

impl fmt::Display for RenderPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Semantic style of a piece of text
///
/// Frontends map these to their own colors and weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    /// Regular text
    #[default]
    Plain,
    /// Title of a definition the caller currently owns an instance of
    Owned,
    /// Section captions such as "Limit"
    Caption,
    /// Counters and readouts (match count, page label)
    Readout,
    /// Emphasized toggles such as "Show All"
    Emphasis,
}

/// What happened to an editable field during this pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldEvent {
    /// Field was drawn but not touched
    #[default]
    Unchanged,
    /// Content was edited (one keystroke or paste)
    Changed,
    /// User submitted the field (enter / focus lost)
    Committed,
}

impl FieldEvent {
    /// True for both edits and commits
    #[must_use]
    pub const fn is_touched(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phase_is_measure() {
        assert_eq!(RenderPhase::default(), RenderPhase::Measure);
        assert_eq!(RenderPhase::Repaint.to_string(), "repaint");
    }

    #[test]
    fn test_field_event_touched() {
        assert!(!FieldEvent::Unchanged.is_touched());
        assert!(FieldEvent::Changed.is_touched());
        assert!(FieldEvent::Committed.is_touched());
    }
}
