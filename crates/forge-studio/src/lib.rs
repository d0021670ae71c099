//! Terminal presentation for the Forge studio.
//!
//! Everything here is a pure mapping from `SessionState` to rendered lines;
//! the binary in `main.rs` owns the interactive loop. Renderers are split so
//! tests can assert each panel by substring.

use forge_review::{FeedbackEntry, Severity};
use forge_session::{SessionState, Tab};

mod commands;

pub use commands::{parse_command, StudioCommand};

const PANEL_RULE: &str = "-";

/// Rendering knobs shared by the binary and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: usize,
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 72,
            color: true,
        }
    }
}

fn severity_glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "+",
        Severity::Warning => "!",
        Severity::Error => "x",
        Severity::Info => "i",
    }
}

fn severity_ansi(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "\x1b[32m",
        Severity::Warning => "\x1b[33m",
        Severity::Error => "\x1b[31m",
        Severity::Info => "\x1b[36m",
    }
}

fn paint_severity(severity: Severity, text: &str, color: bool) -> String {
    if color {
        format!("{}{}\x1b[0m", severity_ansi(severity), text)
    } else {
        text.to_string()
    }
}

fn badge(label: &str, done: bool) -> String {
    let mark = if done { 'x' } else { ' ' };
    format!("[{mark}] {label}")
}

/// Renders the derived workflow indicator row plus any busy notices.
pub fn render_workflow(state: &SessionState) -> Vec<String> {
    let indicators = state.workflow_indicators();
    let mut lines = vec![format!(
        "{}  {}  {}",
        badge("Code Generated", indicators.code_generated),
        badge("Validation Complete", indicators.validation_complete),
        badge("Ready to Deploy", indicators.ready_to_deploy),
    )];
    if state.is_generating {
        lines.push("generating...".to_string());
    }
    if state.is_validating {
        lines.push("validating...".to_string());
    }
    lines
}

/// Renders the tab bar with the active tab bracketed.
pub fn render_tab_bar(state: &SessionState) -> String {
    let tab = |candidate: Tab| {
        if state.active_tab == candidate {
            format!("[{}]", candidate.as_str())
        } else {
            format!(" {} ", candidate.as_str())
        }
    };
    format!("tabs: {} {}", tab(Tab::Code), tab(Tab::Docs))
}

/// Renders the panel behind the active tab: the snippet or the docs blob.
pub fn render_active_panel(state: &SessionState) -> Vec<String> {
    match state.active_tab {
        Tab::Code if state.generated_code.is_empty() => {
            vec!["(nothing generated yet)".to_string()]
        }
        Tab::Code => state
            .generated_code
            .lines()
            .map(|line| line.to_string())
            .collect(),
        Tab::Docs if state.documentation.is_empty() => {
            vec!["(no documentation yet; validate a snippet first)".to_string()]
        }
        Tab::Docs => state
            .documentation
            .lines()
            .map(|line| line.to_string())
            .collect(),
    }
}

fn render_feedback_entry(entry: &FeedbackEntry, options: &RenderOptions) -> String {
    let line = format!(
        "{} [{}] {}",
        severity_glyph(entry.severity),
        entry.kind.as_str(),
        entry.message
    );
    paint_severity(entry.severity, &line, options.color)
}

/// Renders the feedback list from the most recent review, if any.
pub fn render_feedback(state: &SessionState, options: &RenderOptions) -> Vec<String> {
    if state.feedback.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![format!(
        "feedback (status: {}):",
        state.validation_status.as_str()
    )];
    lines.extend(
        state
            .feedback
            .iter()
            .map(|entry| render_feedback_entry(entry, options)),
    );
    lines
}

/// Renders the bounded history, newest first, numbered for `/history <n>`.
pub fn render_history(state: &SessionState) -> Vec<String> {
    if state.history.is_empty() {
        return Vec::new();
    }
    let mut lines = vec!["history (newest first):".to_string()];
    lines.extend(state.history.iter().enumerate().map(|(index, entry)| {
        format!(
            "{:>2}. [{}] {}",
            index + 1,
            entry.timestamp_ms,
            entry.prompt
        )
    }));
    lines
}

/// Renders the whole session view.
pub fn render_session(state: &SessionState, options: &RenderOptions) -> Vec<String> {
    let rule = PANEL_RULE.repeat(options.width);
    let mut lines = Vec::new();
    lines.extend(render_workflow(state));
    lines.push(rule.clone());
    lines.push(render_tab_bar(state));
    lines.extend(render_active_panel(state));
    let feedback = render_feedback(state, options);
    if !feedback.is_empty() {
        lines.push(rule.clone());
        lines.extend(feedback);
    }
    let history = render_history(state);
    if !history.is_empty() {
        lines.push(rule);
        lines.extend(history);
    }
    lines
}
