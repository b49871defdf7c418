//! Plain-text rendering of recorded draw operations
//!
//! Turns the [`DrawOp`]s captured by a [`HeadlessFrontend`](super::HeadlessFrontend)
//! into terminal text, one line per horizontal group, colored with
//! `colored` the way a CLI would print them.

use super::headless::DrawOp;
use super::types::TextStyle;
use colored::{ColoredString, Colorize};

/// Render recorded ops as terminal lines
#[must_use]
pub fn transcript(ops: &[DrawOp]) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut depth = 0usize;

    for op in ops {
        match op {
            DrawOp::BeginHorizontal => depth += 1,
            DrawOp::EndHorizontal => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    flush(&mut lines, &mut line);
                }
            }
            DrawOp::BeginVertical | DrawOp::EndVertical => flush(&mut lines, &mut line),
            DrawOp::Space(width) => line.push_str(&" ".repeat(columns(*width))),
            DrawOp::Divider(indent) => {
                flush(&mut lines, &mut line);
                lines.push(format!("{}{}", " ".repeat(columns(*indent)), "-".repeat(40).dimmed()));
            }
            DrawOp::Label { text, style } => push(&mut line, &styled(text, *style).to_string()),
            DrawOp::Button { label } => push(&mut line, &format!("[{label}]")),
            DrawOp::Toggle { label, value } => {
                let mark = if *value { "x" } else { " " };
                push(&mut line, &format!("[{mark}] {}", styled(label, TextStyle::Emphasis)));
            }
            DrawOp::Disclosure { label, style, open, .. } => {
                let arrow = if *open { "v" } else { ">" };
                push(&mut line, &format!("{arrow} {}", styled(label, *style)));
            }
            DrawOp::TextField { text, .. } => push(&mut line, &format!("<{text}>")),
            DrawOp::IntField { value, .. } => push(&mut line, &format!("<{value}>")),
        }
        if depth == 0 && !matches!(op, DrawOp::EndHorizontal | DrawOp::BeginHorizontal) {
            flush(&mut lines, &mut line);
        }
    }
    flush(&mut lines, &mut line);
    lines.join("\n")
}

fn styled(text: &str, style: TextStyle) -> ColoredString {
    match style {
        TextStyle::Plain => text.normal(),
        TextStyle::Owned => text.cyan().bold(),
        TextStyle::Caption => text.dimmed(),
        TextStyle::Readout => text.green().bold(),
        TextStyle::Emphasis => text.yellow().bold(),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn columns(width: f32) -> usize {
    (width.max(0.0) / 10.0).round() as usize
}

fn push(line: &mut String, text: &str) {
    if !line.is_empty() && !line.ends_with(' ') {
        line.push(' ');
    }
    line.push_str(text);
}

fn flush(lines: &mut Vec<String>, line: &mut String) {
    let trimmed = line.trim_end();
    if !trimmed.is_empty() {
        lines.push(trimmed.to_string());
    }
    line.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_horizontal_group_is_one_line() {
        plain();
        let ops = vec![
            DrawOp::BeginHorizontal,
            DrawOp::Label {
                text: "Longsword".to_string(),
                style: TextStyle::Owned,
            },
            DrawOp::Button {
                label: "Remove".to_string(),
            },
            DrawOp::EndHorizontal,
            DrawOp::Label {
                text: "detail".to_string(),
                style: TextStyle::Plain,
            },
        ];
        assert_eq!(transcript(&ops), "Longsword [Remove]\ndetail");
    }

    #[test]
    fn test_nested_groups_stay_on_one_line() {
        plain();
        let ops = vec![
            DrawOp::BeginHorizontal,
            DrawOp::Space(50.0),
            DrawOp::BeginHorizontal,
            DrawOp::Disclosure {
                label: "Cue".to_string(),
                style: TextStyle::Plain,
                open: true,
                width: 200.0,
            },
            DrawOp::EndHorizontal,
            DrawOp::Toggle {
                label: "Show All".to_string(),
                value: false,
            },
            DrawOp::EndHorizontal,
        ];
        assert_eq!(transcript(&ops), "     v Cue [ ] Show All");
    }

    #[test]
    fn test_empty_ops_render_nothing() {
        assert_eq!(transcript(&[]), "");
    }
}
